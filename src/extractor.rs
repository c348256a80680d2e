//! Flyer extractor: drives the render context to a shop's flyer page and
//! parses the rendered gallery.
//!
//! The gallery is injected client-side into a `shop-*-brochures-prepend`
//! container, so the page has to go through the renderer and a bounded
//! readiness wait before the HTML is worth parsing. The wait targets the
//! container, not the cards: a shop whose container renders with zero
//! cards is an empty gallery, not a timeout.

use crate::dates;
use crate::error::ScrapeError;
use crate::model::{FlyerRecord, ShopRef};
use crate::renderer::RenderContext;
use chrono::Utc;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

/// Container the site injects rendered galleries into.
pub const GALLERY_READY_SELECTOR: &str = "div[id^='shop-'][id$='-brochures-prepend']";

/// One flyer card within the gallery container.
pub const FLYER_CARD_SELECTOR: &str = "div[id^='shop-'][id$='-brochures-prepend'] figure";

/// Extract all flyers for one shop through the shared render context.
///
/// `Navigation` and `RenderTimeout` failures are the caller's signal to skip
/// this shop and move on; neither is fatal to the run.
pub async fn extract_flyers(
    ctx: &mut dyn RenderContext,
    base: &Url,
    shop: &ShopRef,
    wait_ms: u64,
) -> Result<Vec<FlyerRecord>, ScrapeError> {
    debug!("navigating to {}", shop.detail_url);
    ctx.navigate(&shop.detail_url, wait_ms)
        .await
        .map_err(|e| ScrapeError::Navigation {
            url: shop.detail_url.clone(),
            reason: format!("{e:#}"),
        })?;

    let ready = ctx
        .wait_for(GALLERY_READY_SELECTOR, wait_ms)
        .await
        .map_err(|e| ScrapeError::Session(format!("{e:#}")))?;
    if !ready {
        return Err(ScrapeError::RenderTimeout {
            url: shop.detail_url.clone(),
            waited_ms: wait_ms,
        });
    }

    let html = ctx
        .html()
        .await
        .map_err(|e| ScrapeError::Session(format!("{e:#}")))?;

    let records = parse_gallery(&html, base, &shop.name);
    info!("parsed {} flyers for {}", records.len(), shop.name);
    Ok(records)
}

/// Parse the flyer cards out of rendered gallery HTML.
///
/// Per card: `h2` text is the title, `img` `src` (falling back to `data-src`
/// for lazy-loaded thumbnails) is the thumbnail, and the `span` text is the
/// validity period. A card missing its `h2` or `img` element entirely is
/// dropped; empty or unparseable content is kept as-is, with the validity
/// fields left absent.
pub fn parse_gallery(html: &str, base: &Url, shop_name: &str) -> Vec<FlyerRecord> {
    let document = Html::parse_document(html);
    let card_sel = Selector::parse(FLYER_CARD_SELECTOR).expect("flyer card selector is valid");
    let title_sel = Selector::parse("h2").expect("title selector is valid");
    let img_sel = Selector::parse("img").expect("thumbnail selector is valid");
    let span_sel = Selector::parse("span").expect("validity selector is valid");

    let mut records = Vec::new();
    for card in document.select(&card_sel) {
        let Some(title_el) = card.select(&title_sel).next() else {
            warn!("flyer card without <h2> in {shop_name}, skipping");
            continue;
        };
        let Some(img) = card.select(&img_sel).next() else {
            warn!("flyer card without <img> in {shop_name}, skipping");
            continue;
        };

        let src = img
            .value()
            .attr("src")
            .filter(|s| !s.is_empty())
            .or_else(|| img.value().attr("data-src"))
            .unwrap_or("");
        let thumbnail_url = if src.is_empty() {
            String::new()
        } else {
            base.join(src)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| src.to_string())
        };

        let validity = card
            .select(&span_sel)
            .next()
            .map(|s| s.text().collect::<String>())
            .unwrap_or_default();
        let (valid_from, valid_to) = dates::parse_validity(&validity);

        records.push(FlyerRecord {
            title: title_el.text().collect::<String>().trim().to_string(),
            thumbnail_url,
            shop_name: shop_name.to_string(),
            valid_from,
            valid_to,
            parsed_at: Utc::now(),
        });
    }

    records
}
