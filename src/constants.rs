/// Shared literals used across the extraction helpers.

/// Base URL for the men's soccer section of the Harding Sports site.
pub const BASE_URL: &str = "https://hardingsports.com/sports/mens-soccer";

/// Default base delay for exponential backoff, in milliseconds.
pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;

/// Cell values that are never player names (compared lowercase, exact match).
/// Mostly stat-table footer labels and site boilerplate.
pub const INVALID_NAME_TERMS: &[&str] = &[
    "total",
    "totals",
    "-",
    "n/a",
    "tbd",
    "team",
    "coach",
    "assistant",
    "shots",
    "penalties",
    "miscellaneous",
    "points",
    "goals",
    "assists",
    "shots on goal",
    "saves",
    "fouls",
    "corner kicks",
    "opponent",
    "tm",
    "harding",
    "university",
];
