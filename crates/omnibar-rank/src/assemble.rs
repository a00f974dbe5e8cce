//! Bucket allocation for the final suggestion result.
//!
//! The assembler splits the merged navigational list into "top hits" and
//! "history and bookmarks", then spends a fixed total budget across the
//! three buckets. Allocation order matters: top hits claim their slots
//! first, the local group is guaranteed a reservation, and remote search
//! suggestions absorb whatever is left.

use omnibar_model::Suggestion;

use crate::result::SuggestionResult;

/// Default total suggestion budget across all three buckets.
pub const DEFAULT_MAXIMUM_SUGGESTIONS: usize = 12;
/// Default cap on the top-hits bucket.
pub const DEFAULT_MAXIMUM_TOP_HITS: usize = 2;
/// Default number of slots reserved for the history-and-bookmarks bucket.
pub const DEFAULT_RESERVED_LOCAL_SLOTS: usize = 5;
/// Default minimum query length (in characters) before bookmarks are
/// considered at all.
pub const DEFAULT_MIN_BOOKMARK_QUERY_LEN: usize = 2;

/// Tunable constants for the ranking pipeline, injected rather than read
/// from globals so tests and embedders can vary them.
#[derive(Debug, Clone)]
pub struct RankingParams {
    /// Total suggestion budget. Default: 12.
    pub maximum_suggestions: usize,
    /// Cap on the top-hits bucket. Default: 2.
    pub maximum_top_hits: usize,
    /// Slots reserved for history and bookmarks before remote suggestions
    /// are considered. Default: 5.
    pub reserved_local_slots: usize,
    /// Minimum query length in characters for bookmark matching. Default: 2.
    pub min_bookmark_query_len: usize,
}

impl Default for RankingParams {
    fn default() -> Self {
        Self {
            maximum_suggestions: DEFAULT_MAXIMUM_SUGGESTIONS,
            maximum_top_hits: DEFAULT_MAXIMUM_TOP_HITS,
            reserved_local_slots: DEFAULT_RESERVED_LOCAL_SLOTS,
            min_bookmark_query_len: DEFAULT_MIN_BOOKMARK_QUERY_LEN,
        }
    }
}

impl RankingParams {
    /// Sets the total suggestion budget.
    pub fn with_maximum_suggestions(mut self, value: usize) -> Self {
        self.maximum_suggestions = value;
        self
    }

    /// Sets the top-hits cap.
    pub fn with_maximum_top_hits(mut self, value: usize) -> Self {
        self.maximum_top_hits = value;
        self
    }

    /// Sets the history-and-bookmarks reservation.
    pub fn with_reserved_local_slots(mut self, value: usize) -> Self {
        self.reserved_local_slots = value;
        self
    }

    /// How many navigational candidates may enter the merge stage for a
    /// query of `query_chars` characters.
    ///
    /// Short queries are unspecific, so they earn proportionally fewer
    /// navigational slots: one more than the query length, capped at the
    /// budget left after the local reservation.
    pub fn maximum_navigational_suggestions(&self, query_chars: usize) -> usize {
        self.maximum_suggestions
            .saturating_sub(self.reserved_local_slots)
            .min(query_chars + 1)
    }
}

/// Splits merged navigational candidates and remote suggestions into the
/// final three buckets.
///
/// `merged` must already be deduplicated and in descending relevance order.
/// The total output length never exceeds `params.maximum_suggestions`, and
/// the history-and-bookmarks bucket is maximized subject to its
/// reservation.
pub fn assemble(
    mut merged: Vec<Suggestion>,
    mut search_suggestions: Vec<Suggestion>,
    params: &RankingParams,
) -> SuggestionResult {
    let split = top_hits_prefix(&merged, params.maximum_top_hits);
    let rest = merged.split_off(split);
    let top_hits = merged;

    let local_budget = params
        .maximum_suggestions
        .saturating_sub(top_hits.len() + params.reserved_local_slots);
    let history_and_bookmarks: Vec<Suggestion> = rest
        .into_iter()
        .filter(|s| {
            matches!(
                s,
                Suggestion::Bookmark { .. } | Suggestion::HistoryEntry { .. }
            )
        })
        .take(local_budget)
        .collect();

    let remote_budget = params
        .maximum_suggestions
        .saturating_sub(top_hits.len() + history_and_bookmarks.len());
    search_suggestions.truncate(remote_budget);

    SuggestionResult {
        top_hits,
        search_suggestions,
        history_and_bookmarks,
    }
}

/// Length of the top-hits prefix: candidates are taken from the front only
/// while every one so far is eligible, up to `maximum` of them.
///
/// This is a prefix take-while, not a filter. One ineligible candidate in
/// the first `maximum` positions truncates the prefix at that point, even
/// when eligible candidates follow it.
fn top_hits_prefix(merged: &[Suggestion], maximum: usize) -> usize {
    merged
        .iter()
        .take(maximum)
        .take_while(|s| s.allowed_in_top_hits())
        .count()
}
