use serde::Serialize;
use url::Url;

use crate::constants::BASE_URL;

/// Roster and stats page URLs for one academic year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearUrls {
    pub year: String,
    pub roster_url: String,
    pub stats_url: String,
}

/// Build the roster and stats URLs for a given academic year. The year string
/// is spliced in as-is; callers are responsible for its shape.
pub fn build_year_urls(year: &str) -> YearUrls {
    YearUrls {
        year: year.to_string(),
        roster_url: format!("{}/roster/{}", BASE_URL, year),
        stats_url: format!("{}/stats/{}", BASE_URL, year),
    }
}

/// True when the input parses as an absolute URL. Malformed input yields
/// false, never an error.
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}
