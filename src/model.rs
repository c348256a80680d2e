//! Record model for discovered shops and extracted flyers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One shop discovered in a category listing.
///
/// Created by the category navigator, consumed once by the flyer extractor.
/// Not persisted on its own; only the `name` survives into the output, as
/// the `shop_name` tag on every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopRef {
    /// Display name as it appears in the category sidebar.
    pub name: String,
    /// Absolute URL of the shop's flyer page.
    pub detail_url: String,
}

/// One flyer extracted from a shop's rendered gallery.
///
/// `shop_name` and `parsed_at` are always present. The validity fields are
/// omitted from the JSON when the source page carries no parseable date text;
/// they are never serialized as empty placeholders. `title` and the thumbnail
/// URL are structurally required in the card markup but their content is not
/// validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyerRecord {
    pub title: String,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
    pub shop_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub valid_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub valid_to: Option<NaiveDate>,
    #[serde(rename = "parsed_time")]
    pub parsed_at: DateTime<Utc>,
}
