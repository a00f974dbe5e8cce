//! The full ranking pipeline, from raw inputs to the three-bucket result.
//!
//! This is the pure, single-threaded heart of suggestion ranking. It takes
//! already-collected inputs (bookmark list, history list, parsed remote
//! suggestions) and needs no I/O, so it cannot fail: callers own fetching
//! and error handling.

use omnibar_model::{Bookmark, HistoryEntry, Suggestion, naked};

use crate::assemble::{RankingParams, assemble};
use crate::collect::collect_candidates;
use crate::merge::merge_duplicates;
use crate::result::SuggestionResult;
use crate::tokenize::tokenize;

/// Runs the complete pipeline for one query.
///
/// Stages, in order:
/// 1. lowercase and tokenize the query;
/// 2. score and sort bookmark/history candidates;
/// 3. extract domain-shaped remote phrases as website candidates;
/// 4. cap the navigational list by query length and merge duplicates;
/// 5. allocate the three display buckets.
///
/// A query with no tokens (empty or all whitespace) yields an empty result
/// without touching the inputs.
pub fn process(
    query: &str,
    bookmarks: &[Bookmark],
    history: &[HistoryEntry],
    remote: &[Suggestion],
    params: &RankingParams,
) -> SuggestionResult {
    let query = query.to_lowercase();
    let tokens = tokenize(&query);
    if tokens.is_empty() {
        return SuggestionResult::default();
    }

    let local = collect_candidates(
        bookmarks,
        history,
        &query,
        &tokens,
        params.min_bookmark_query_len,
    );

    let search_suggestions: Vec<Suggestion> = remote
        .iter()
        .filter(|s| matches!(s, Suggestion::Phrase { .. }))
        .cloned()
        .collect();

    let mut navigational = local;
    navigational.extend(remote.iter().filter_map(|s| match s {
        Suggestion::Phrase { phrase } => website_suggestion(phrase),
        _ => None,
    }));

    let cap = params.maximum_navigational_suggestions(query.chars().count());
    let merged = merge_duplicates(&navigational, Some(cap));

    assemble(merged, search_suggestions, params)
}

/// Offers a domain-shaped phrase as a navigational website suggestion.
///
/// A phrase qualifies when it has no whitespace, contains an interior dot,
/// and forms a parseable URL once given an `https` scheme. The phrase
/// itself still appears in the search-suggestion bucket; this is an extra
/// candidate for the navigational merge.
fn website_suggestion(phrase: &str) -> Option<Suggestion> {
    if phrase.contains(char::is_whitespace)
        || !phrase.contains('.')
        || phrase.starts_with('.')
        || phrase.ends_with('.')
    {
        return None;
    }
    let url = format!("https://{phrase}");
    naked::domain(&url).map(|_| Suggestion::website(url))
}
