use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::constants::INVALID_NAME_TERMS;

/// Shapes that show up in roster/stats cells but are never names: dates,
/// scores, game results, season records, clock times, all-caps headers.
static INVALID_NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^\d{2}/\d{2}/\d{4}$",
        r"^[A-Z\s]+$",
        r"^\d+-\d+$",
        r"^[LWT]$",
        r"^\(\d+-\d+-\d+",
        r"^\d+:\d+$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Plausibility filter for player names pulled out of table cells. Each check
/// independently rejects; a value passes only when none of them fire.
pub fn is_valid_player_name(name: &str) -> bool {
    let trimmed = name.trim();
    if trimmed.len() < 2 || trimmed.parse::<f64>().is_ok() {
        return false;
    }

    if INVALID_NAME_TERMS.contains(&trimmed.to_lowercase().as_str()) {
        debug!("rejected denylisted cell value: {}", trimmed);
        return false;
    }

    if INVALID_NAME_PATTERNS.iter().any(|p| p.is_match(trimmed)) {
        return false;
    }

    // Roster names carry at least one letter and a first/last split.
    trimmed.chars().any(|c| c.is_ascii_alphabetic()) && trimmed.chars().any(char::is_whitespace)
}

/// Coerce a stat cell to a numeric string. Anything that does not start with
/// an integer (after trimming) becomes "0"; fractional parts and trailing
/// junk are ignored, matching how the tables mix "7", "7.0" and "7*".
pub fn validate_numeric_field(value: &str) -> String {
    match parse_leading_int(value) {
        Some(n) => n.to_string(),
        None => "0".to_string(),
    }
}

/// Coerce a jersey-number cell to a canonical numeric string, or empty when
/// it is not an integer in [0, 99].
pub fn validate_jersey_number(number: &str) -> String {
    match parse_leading_int(number) {
        Some(n) if (0..=99).contains(&n) => n.to_string(),
        _ => String::new(),
    }
}

/// Parse the leading integer portion of a trimmed string: optional sign, then
/// decimal digits, ignoring whatever follows. None when no digits lead.
fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let len = digits.chars().take_while(|c| c.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }
    digits[..len].parse::<i64>().ok().map(|n| sign * n)
}
