//! Category navigator: fetch the static listing page and extract the shops
//! of one category.
//!
//! The listing page carries a sidebar of category links; the anchor whose
//! `href` equals the requested category path is followed by a `<ul>` holding
//! one `li > a` entry per shop. That sibling structure is the extraction
//! contract: if the site reshuffles its sidebar, this module breaks by
//! finding zero shops, not by miscategorizing them.

use crate::error::ScrapeError;
use crate::http::HttpClient;
use crate::model::ShopRef;
use scraper::{ElementRef, Html, Selector};
use tracing::info;
use url::Url;

/// Parse the shop list for `category` out of listing page HTML.
///
/// Returns shops in document order, no sorting, no dedup. Relative hrefs
/// are resolved against `base`.
pub fn parse_shop_list(html: &str, category: &str, base: &Url) -> Vec<ShopRef> {
    let document = Html::parse_document(html);
    let anchor_sel = Selector::parse("a[href]").expect("anchor selector is valid");
    let link_sel = Selector::parse("li > a[href]").expect("shop link selector is valid");

    let Some(category_anchor) = document
        .select(&anchor_sel)
        .find(|a| a.value().attr("href") == Some(category))
    else {
        return Vec::new();
    };

    // The shop dropdown is the anchor's next element sibling.
    let Some(dropdown) = category_anchor.next_siblings().find_map(ElementRef::wrap) else {
        return Vec::new();
    };

    dropdown
        .select(&link_sel)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let name = a.text().collect::<String>().trim().to_string();
            let detail_url = base.join(href).ok()?.to_string();
            Some(ShopRef { name, detail_url })
        })
        .collect()
}

/// Fetch the category listing page and discover its shops.
///
/// One fetch attempt; transport failures and non-success statuses are fatal.
/// Zero shops is the soft `NoShopsFound`; callers decide whether to abort.
pub async fn discover_shops(
    client: &HttpClient,
    base: &Url,
    category: &str,
) -> Result<Vec<ShopRef>, ScrapeError> {
    let listing_url = base.join(category).map_err(|source| ScrapeError::InvalidUrl {
        url: format!("{base}{category}"),
        source,
    })?;

    let resp = client.get(listing_url.as_str()).await?;
    if !(200..300).contains(&resp.status) {
        return Err(ScrapeError::HttpStatus {
            url: listing_url.to_string(),
            status: resp.status,
        });
    }

    let shops = parse_shop_list(&resp.body, category, base);
    if shops.is_empty() {
        return Err(ScrapeError::NoShopsFound {
            category: category.to_string(),
        });
    }

    info!("discovered {} shops in {category}", shops.len());
    Ok(shops)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.prospektmaschine.de").unwrap()
    }

    const SIDEBAR: &str = r#"
        <html><body><div id="sidebar"><ul>
          <li><a href="/drogerien/">Drogerien</a>
            <ul><li><a href="/rossmann/">Rossmann</a></li></ul>
          </li>
          <li><a href="/hypermarkte/">Hypermärkte</a>
            <ul>
              <li><a href="/lidl/">Lidl</a></li>
              <li><a href="/kaufland/">Kaufland</a></li>
              <li><a href="https://www.prospektmaschine.de/edeka/">Edeka</a></li>
            </ul>
          </li>
        </ul></div></body></html>"#;

    #[test]
    fn shops_come_back_in_document_order() {
        let shops = parse_shop_list(SIDEBAR, "/hypermarkte/", &base());
        let names: Vec<&str> = shops.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Lidl", "Kaufland", "Edeka"]);
    }

    #[test]
    fn relative_hrefs_resolve_to_absolute() {
        let shops = parse_shop_list(SIDEBAR, "/hypermarkte/", &base());
        assert_eq!(shops[0].detail_url, "https://www.prospektmaschine.de/lidl/");
        // Already-absolute hrefs pass through unchanged.
        assert_eq!(shops[2].detail_url, "https://www.prospektmaschine.de/edeka/");
    }

    #[test]
    fn only_the_requested_category_is_read() {
        let shops = parse_shop_list(SIDEBAR, "/drogerien/", &base());
        let names: Vec<&str> = shops.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Rossmann"]);
    }

    #[test]
    fn unknown_category_yields_no_shops() {
        assert!(parse_shop_list(SIDEBAR, "/baumarkte/", &base()).is_empty());
    }

    #[test]
    fn category_without_dropdown_yields_no_shops() {
        let html = r#"<ul><li><a href="/hypermarkte/">Hypermärkte</a></li></ul>"#;
        assert!(parse_shop_list(html, "/hypermarkte/", &base()).is_empty());
    }
}
