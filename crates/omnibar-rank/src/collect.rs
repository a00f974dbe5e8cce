//! Candidate collection: score, filter, and sort local records.

use omnibar_model::{Bookmark, HistoryEntry, Suggestion};

use crate::score::{Score, score_candidate};

/// A suggestion paired with the score that ranked it.
///
/// Scores are ephemeral. They exist only to order candidates within a
/// single query and are dropped before results leave the pipeline.
#[derive(Debug, Clone)]
struct Scored {
    /// The typed candidate.
    suggestion: Suggestion,
    /// Relevance against the current query.
    score: Score,
}

/// Scores every bookmark and history entry against the query and returns
/// the matches as suggestions in descending relevance order.
///
/// `query` and `tokens` must already be lowercased. Bookmarks are only
/// considered when the query has at least `min_bookmark_query_len`
/// characters; history has no such floor. Zero-score candidates are
/// dropped. The sort is stable, so candidates with equal scores keep their
/// encounter order (bookmarks before history, each in input order).
pub fn collect_candidates(
    bookmarks: &[Bookmark],
    history: &[HistoryEntry],
    query: &str,
    tokens: &[String],
    min_bookmark_query_len: usize,
) -> Vec<Suggestion> {
    let mut scored: Vec<Scored> = Vec::new();

    if query.chars().count() >= min_bookmark_query_len {
        scored.extend(score_bookmarks(bookmarks, query, tokens));
    }

    for entry in history {
        let score = score_candidate(
            entry.title.as_deref(),
            &entry.url,
            entry.number_of_visits,
            query,
            tokens,
        );
        if score > 0 {
            scored.push(Scored {
                suggestion: Suggestion::from_history(entry),
                score,
            });
        }
    }

    sort_descending(&mut scored);
    scored.into_iter().map(|s| s.suggestion).collect()
}

/// Returns the best-scoring bookmarks for the query, at most `limit`, in
/// descending relevance order.
///
/// This is the shortlist the loader shows inline while the user is still
/// typing; it bypasses the merge pipeline entirely.
pub fn top_bookmarks(
    bookmarks: &[Bookmark],
    query: &str,
    tokens: &[String],
    limit: usize,
) -> Vec<Suggestion> {
    let mut scored = score_bookmarks(bookmarks, query, tokens);
    sort_descending(&mut scored);
    scored.truncate(limit);
    scored.into_iter().map(|s| s.suggestion).collect()
}

/// Scores bookmarks against the query, keeping only matches.
fn score_bookmarks(bookmarks: &[Bookmark], query: &str, tokens: &[String]) -> Vec<Scored> {
    bookmarks
        .iter()
        .filter_map(|bookmark| {
            let score = score_candidate(Some(&bookmark.title), &bookmark.url, 0, query, tokens);
            (score > 0).then(|| Scored {
                suggestion: Suggestion::from_bookmark(bookmark),
                score,
            })
        })
        .collect()
}

/// Stable descending sort by score. Ties keep encounter order.
fn sort_descending(scored: &mut [Scored]) {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tokenize::tokenize;

    /// Default bookmark floor used throughout the pipeline.
    const MIN_BOOKMARK_QUERY_LEN: usize = 2;

    fn collect(bookmarks: &[Bookmark], history: &[HistoryEntry], query: &str) -> Vec<Suggestion> {
        let query = query.to_lowercase();
        let tokens = tokenize(&query);
        collect_candidates(bookmarks, history, &query, &tokens, MIN_BOOKMARK_QUERY_LEN)
    }

    #[test]
    fn non_matches_are_dropped() {
        let bookmarks = [Bookmark::new("Example", "https://example.com", false)];
        let history = [HistoryEntry::new(
            Some("Totally unrelated".to_string()),
            "https://other.org/deep",
            10,
            false,
        )];

        let out = collect(&bookmarks, &history, "exam");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title(), Some("Example"));
    }

    #[test]
    fn sorted_by_descending_relevance() {
        // Root domain match (230000+) must outrank a plain title prefix (20000).
        let bookmarks = [Bookmark::new("Github tips", "https://blog.org/github", false)];
        let history = [HistoryEntry::new(None, "https://github.com", 1, false)];

        let out = collect(&bookmarks, &history, "github");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].url(), Some("https://github.com"));
    }

    #[test]
    fn ties_keep_encounter_order() {
        // Two bookmarks with identical titles and non-matching hosts score
        // identically; the stable sort keeps input order.
        let bookmarks = [
            Bookmark::new("Example", "https://first.org/a", false),
            Bookmark::new("Example", "https://second.org/a", false),
        ];

        let out = collect(&bookmarks, &[], "exam");
        assert_eq!(out[0].url(), Some("https://first.org/a"));
        assert_eq!(out[1].url(), Some("https://second.org/a"));
    }

    #[test]
    fn single_char_query_skips_bookmarks_but_not_history() {
        let bookmarks = [Bookmark::new("G", "https://g.co", false)];
        let history = [HistoryEntry::new(None, "https://g.co", 5, false)];

        let out = collect(&bookmarks, &history, "g");
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0], Suggestion::HistoryEntry { .. }));
    }

    #[test]
    fn top_bookmarks_shortlist_is_capped() {
        let bookmarks = [
            Bookmark::new("Example one", "https://a.org/x", false),
            Bookmark::new("Example two", "https://b.org/x", false),
            Bookmark::new("Example three", "https://c.org/x", false),
        ];
        let tokens = tokenize("example");

        let out = top_bookmarks(&bookmarks, "example", &tokens, 2);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title(), Some("Example one"));
        assert_eq!(out[1].title(), Some("Example two"));
    }

    #[test]
    fn top_bookmarks_excludes_non_matches() {
        let bookmarks = [Bookmark::new("Unrelated", "https://a.org/x", false)];
        let tokens = tokenize("example");

        assert!(top_bookmarks(&bookmarks, "example", &tokens, 2).is_empty());
    }
}
