use chrono::{Datelike, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"20\d{2}-\d{2}").unwrap());

/// Extract academic year labels (e.g. "2024-25") from page text.
/// Duplicates are dropped; first-occurrence order is preserved.
pub fn extract_year_patterns(text: &str) -> Vec<String> {
    let mut years: Vec<String> = Vec::new();
    for m in YEAR_PATTERN.find_iter(text) {
        if !years.iter().any(|y| y == m.as_str()) {
            years.push(m.as_str().to_string());
        }
    }
    if years.is_empty() {
        warn!("no academic year labels found - the page structure may have changed");
    }
    years
}

/// Current and previous academic year, derived from the system clock.
pub fn generate_fallback_years() -> Vec<String> {
    fallback_years_for(Utc::now().date_naive())
}

/// Explicit-date variant of [`generate_fallback_years`] so tests can fix "now".
pub fn fallback_years_for(today: NaiveDate) -> Vec<String> {
    let year = today.year();
    vec![
        format!("{}-{:02}", year, (year + 1) % 100),
        format!("{}-{:02}", year - 1, year % 100),
    ]
}

/// Sort academic year labels newest-first, in place. Labels are fixed-width
/// and zero-padded, so lexicographic order is chronological order.
pub fn sort_years_descending(years: &mut [String]) {
    years.sort_by(|a, b| b.cmp(a));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_year_patterns_dedupes_in_order() {
        let text = "Roster 2024-25 | Archive: 2023-24, 2024-25, 2022-23";
        assert_eq!(
            extract_year_patterns(text),
            vec!["2024-25", "2023-24", "2022-23"]
        );
    }

    #[test]
    fn test_extract_year_patterns_ignores_non_matching_text() {
        assert!(extract_year_patterns("Schedule | Tickets | News").is_empty());
        // Pattern requires the century prefix
        assert!(extract_year_patterns("1999-00 season").is_empty());
    }

    #[test]
    fn test_extracted_years_match_grammar() {
        let grammar = Regex::new(r"^20\d{2}-\d{2}$").unwrap();
        for year in extract_year_patterns("2024-25 2019-20 2021-22 junk 2021-22") {
            assert!(grammar.is_match(&year), "bad label: {}", year);
        }
    }

    #[test]
    fn test_fallback_years_for_fixed_date() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(fallback_years_for(today), vec!["2024-25", "2023-24"]);
    }

    #[test]
    fn test_fallback_years_zero_pads_decade_rollover() {
        let today = NaiveDate::from_ymd_opt(2099, 1, 15).unwrap();
        assert_eq!(fallback_years_for(today), vec!["2099-00", "2098-99"]);
    }

    #[test]
    fn test_sort_years_descending() {
        let mut years = vec![
            "2022-23".to_string(),
            "2024-25".to_string(),
            "2023-24".to_string(),
        ];
        sort_years_descending(&mut years);
        assert_eq!(years, vec!["2024-25", "2023-24", "2022-23"]);
    }
}
