//! Regex-based helpers for the site's roster/stats tables. There is no DOM
//! model here: the workflow host hands over row fragments, and the fixed
//! markup of the tables makes pattern heuristics sufficient.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static TD_WRAPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?td[^>]*>").unwrap());
static ANCHOR_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r">([^<]+)<").unwrap());
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static TD_CELL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<td[^>]*>.*?</td>").unwrap());

/// Reduce a raw table-cell fragment to its visible text: drop the `<td>`
/// wrapper, keep only an anchor's label when one is present, strip remaining
/// tags, decode the handful of entities the site emits, and normalize
/// whitespace. Unknown entities pass through undecoded.
pub fn clean_cell_content(cell: &str) -> String {
    if cell.is_empty() {
        return String::new();
    }

    let mut content = TD_WRAPPER.replace_all(cell, "").into_owned();

    // Player cells wrap the name in a profile link; the visible label is the
    // text between the anchor's first '>' and the next '<'.
    if content.contains("<a") {
        if let Some(caps) = ANCHOR_LABEL.captures(&content) {
            content = caps[1].to_string();
        }
    }

    let content = ANY_TAG.replace_all(&content, "");
    let content = content
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"");

    WHITESPACE_RUN.replace_all(&content, " ").trim().to_string()
}

/// Heuristic header-row check: a `<th>` cell or any column-title word marks
/// the row as a header. Data rows containing these words as values will be
/// misclassified; callers accept that.
pub fn is_header_row(row: &str) -> bool {
    let lower = row.to_lowercase();
    lower.contains("<th>")
        || lower.contains("player")
        || lower.contains("name")
        || lower.contains("position")
        || lower.contains("games")
}

/// Split a row fragment into cleaned cell texts, left to right. Rows without
/// `<td>` segments produce an empty vec.
pub fn extract_table_cells(row: &str) -> Vec<String> {
    let cells: Vec<String> = TD_CELL
        .find_iter(row)
        .map(|m| clean_cell_content(m.as_str()))
        .collect();
    if cells.is_empty() {
        debug!("no <td> segments in row fragment");
    }
    cells
}
