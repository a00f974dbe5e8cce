//! The three-bucket suggestion result.

use omnibar_model::Suggestion;
use serde::{Deserialize, Serialize};

/// Final output of the ranking pipeline: three ordered buckets, displayed
/// top to bottom in the order they appear here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    /// Highest-priority navigational suggestions, shown first.
    pub top_hits: Vec<Suggestion>,
    /// Remote search-phrase suggestions.
    pub search_suggestions: Vec<Suggestion>,
    /// Remaining bookmark and history suggestions.
    pub history_and_bookmarks: Vec<Suggestion>,
}

impl SuggestionResult {
    /// Total number of suggestions across all buckets.
    pub fn len(&self) -> usize {
        self.top_hits.len() + self.search_suggestions.len() + self.history_and_bookmarks.len()
    }

    /// Returns true when every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates all suggestions in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Suggestion> {
        self.top_hits
            .iter()
            .chain(self.search_suggestions.iter())
            .chain(self.history_and_bookmarks.iter())
    }
}
