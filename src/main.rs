// Copyright 2026 Prospektor Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use prospektor::crawler::{CrawlRequest, Crawler};
use prospektor::renderer::chromium::ChromiumRenderer;
use prospektor::renderer::Renderer;
use prospektor::writer;

/// Site the scraper targets by default.
const BASE_URL: &str = "https://www.prospektmaschine.de";

#[derive(Parser)]
#[command(
    name = "prospektor",
    about = "Prospektor — scrape promotional flyer metadata from prospektmaschine.de",
    version
)]
struct Cli {
    /// Shop category to crawl, e.g. "/hypermarkte/"
    #[arg(long, default_value = "/hypermarkte/")]
    category: String,

    /// Output JSON file name
    #[arg(long, default_value = "parsed_flyers.json")]
    output: PathBuf,

    /// Base URL of the flyer site
    #[arg(long, default_value = BASE_URL)]
    base_url: String,

    /// Gallery readiness budget per shop in milliseconds
    #[arg(long, default_value_t = 10_000)]
    wait_timeout: u64,

    /// Static fetch budget for the listing page in milliseconds
    #[arg(long, default_value_t = 30_000)]
    fetch_timeout: u64,

    /// Enable verbose/debug logging
    #[arg(long, short)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = run(&cli).await;

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        eprintln!("  Error: {e:#}");
        std::process::exit(1);
    }
    result
}

async fn run(cli: &Cli) -> Result<()> {
    let renderer = ChromiumRenderer::new()
        .await
        .context("failed to start browser")?;
    let renderer: Arc<dyn Renderer> = Arc::new(renderer);

    let request = CrawlRequest {
        base_url: cli.base_url.clone(),
        category: cli.category.clone(),
        wait_ms: cli.wait_timeout,
        fetch_timeout_ms: cli.fetch_timeout,
    };

    let records = Crawler::new(renderer).crawl(&request).await?;
    writer::write_records(&records, &cli.output)?;

    info!(
        "done, {} flyers written to {}",
        records.len(),
        cli.output.display()
    );
    Ok(())
}

fn init_tracing(verbose: bool, quiet: bool) {
    let directive = if quiet {
        "prospektor=warn"
    } else if verbose {
        "prospektor=debug"
    } else {
        "prospektor=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().expect("log directive is valid")),
        )
        .init();
}
