use std::time::{Duration, Instant};

use strsim::jaro_winkler;

use crate::budget::constants::{FUZZY_MATCH_THRESHOLD, MAX_FUZZY_CANDIDATES, SEARCH_DEBOUNCE};
use crate::catalog::Catalog;
use crate::models::MenuItem;

/// Search the catalog for a query string.
///
/// An exact case-insensitive name match returns just that item; otherwise
/// candidates are ranked by Jaro-Winkler similarity, best first, capped at
/// MAX_FUZZY_CANDIDATES.
pub fn fuzzy_search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a MenuItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    if let Some(exact) = catalog.get_by_name(&query) {
        return vec![exact];
    }

    let mut candidates: Vec<(&MenuItem, f64)> = catalog
        .all()
        .into_iter()
        .map(|item| (item, jaro_winkler(&item.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    candidates
        .into_iter()
        .take(MAX_FUZZY_CANDIDATES)
        .map(|(item, _)| item)
        .collect()
}

/// Fixed-window keystroke debouncer. Each keystroke restarts the deadline;
/// the query fires only once the window has elapsed with no further input.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_window(SEARCH_DEBOUNCE)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Record a keystroke at `now`, restarting the window.
    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// True once the window has elapsed since the last keystroke.
    pub fn ready(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(d) if now >= d)
    }

    /// Consume a ready deadline. Returns true exactly once per quiet window.
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.ready(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

/// Latest-wins gate for in-flight query results.
///
/// Each new query takes a fresh generation token; a result is accepted only
/// if its token is still the current generation, so a superseded request's
/// late result is dropped instead of overwriting newer state.
#[derive(Debug, Default)]
pub struct QueryGate {
    generation: u64,
}

impl QueryGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new query, superseding any in-flight one.
    pub fn next_query(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// True if a result carrying `token` is still the latest query.
    pub fn accepts(&self, token: u64) -> bool {
        token == self.generation
    }
}
