//! Shared search-results state using Dioxus signals
//!
//! Written by the search widget when a hospital search completes, read by
//! the results listing. Provided at the app root so the two never need a
//! direct reference to each other.

use dioxus::prelude::*;

use crate::application::SearchResults;

#[derive(Clone, Copy)]
pub struct FoundHospitalsState {
    /// Most recent completed search, if any.
    pub results: Signal<Option<SearchResults>>,
}

impl FoundHospitalsState {
    pub fn new() -> Self {
        Self {
            results: Signal::new(None),
        }
    }

    /// Publish a completed search, replacing any previous results.
    pub fn publish(&mut self, results: SearchResults) {
        self.results.set(Some(results));
    }

    /// Snapshot of the current results.
    pub fn get(&self) -> Option<SearchResults> {
        self.results.read().clone()
    }
}

impl Default for FoundHospitalsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the shared results state from context
pub fn use_found_hospitals() -> FoundHospitalsState {
    use_context::<FoundHospitalsState>()
}
