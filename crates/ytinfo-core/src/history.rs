//! Per-query record of completed searches

use std::collections::HashMap;

use crate::types::ResultSet;

/// Result sets recorded per query text
///
/// Searching the same text again appends another result set instead of
/// replacing the previous one. Entries are never evicted.
#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    results: HashMap<String, Vec<ResultSet>>,
    // First-searched order of the keys in `results`
    queries: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed result set under `query`
    pub fn record(&mut self, query: &str, results: ResultSet) {
        match self.results.get_mut(query) {
            Some(sets) => sets.push(results),
            None => {
                self.queries.push(query.to_string());
                self.results.insert(query.to_string(), vec![results]);
            }
        }
    }

    /// Every query text searched so far, in first-searched order
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    /// All result sets recorded for `query`, oldest first
    ///
    /// Returns an empty slice for a query that was never searched.
    pub fn results(&self, query: &str) -> &[ResultSet] {
        self.results.get(query).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}
