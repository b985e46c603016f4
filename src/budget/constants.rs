use std::time::Duration;

/// Utilization ratio above which the budget status becomes HighUtilization.
pub const HIGH_UTILIZATION_RATIO: f64 = 0.8;

/// Remaining-to-total ratio below which the budget status becomes LowRemaining.
pub const LOW_REMAINING_RATIO: f64 = 0.2;

/// Debounce window for catalog search keystrokes.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Minimum Jaro-Winkler score for a fuzzy catalog match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy candidates offered for one query.
pub const MAX_FUZZY_CANDIDATES: usize = 5;
