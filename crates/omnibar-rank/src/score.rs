//! Relevance scoring for navigational candidates.
//!
//! Scoring is integer point accumulation against a fixed bonus schedule.
//! The schedule is deliberately lopsided: a root URL whose domain matches a
//! single-token query collects 230_000 points and outranks nearly anything,
//! because a user typing `git` almost certainly wants `github.com` itself
//! rather than a deep page mentioning git.
//!
//! A score of zero means "not a match" and callers drop the candidate.

use omnibar_model::naked;

/// A non-negative relevance score. Higher is more relevant; zero means the
/// candidate does not match the query at all.
pub type Score = u64;

/// Bonus for a title that starts with the whole query.
const TITLE_PREFIX_BONUS: Score = 20_000;
/// Bonus for a title containing the query at a word boundary.
const TITLE_WORD_BONUS: Score = 10_000;
/// Bonus for matching every token of a multi-token query.
const ALL_TOKENS_BONUS: Score = 1_000;
/// Bonus when the first (or only) token is a prefix of the domain.
const DOMAIN_PREFIX_BONUS: Score = 30_000;
/// Bonus when the first token of a multi-token query is a title prefix.
const FIRST_TOKEN_TITLE_BONUS: Score = 5_000;
/// Bonus for a single token found anywhere in the domain.
const DOMAIN_CONTAINS_BONUS: Score = 15_000;
/// Bonus stacked on top of a single-token domain match when the URL is a
/// root. Dominates every other bonus.
const ROOT_URL_BONUS: Score = 200_000;

/// Scores a candidate against a query.
///
/// `query` and `tokens` must already be lowercased; `tokens` is the
/// [`tokenize`](crate::tokenize::tokenize) output for `query`, precomputed
/// once per query so that scoring a large candidate set does not retokenize.
///
/// An absent title or an unparseable URL degrades to empty-string matching
/// and simply contributes no bonus. `visit_count` acts as a tie-break,
/// added only when some bonus already matched: a zero score must stay zero.
pub fn score_candidate(
    title: Option<&str>,
    url: &str,
    visit_count: u64,
    query: &str,
    tokens: &[String],
) -> Score {
    let mut score: Score = 0;
    let title = title.map(str::to_lowercase).unwrap_or_default();
    let query_chars = query.chars().count();

    if query_chars > 1 && title.starts_with(query) {
        score += TITLE_PREFIX_BONUS;
    } else if query_chars > 2 && title.contains(&format!(" {query}")) {
        score += TITLE_WORD_BONUS;
    }

    let domain = naked::domain(url).unwrap_or_default();

    if tokens.len() > 1 {
        score += multi_token_bonus(&title, &domain, tokens);
    } else if let Some(token) = tokens.first() {
        score += single_token_bonus(&domain, url, token);
    }

    // Visits only break ties between candidates that already matched.
    if score > 0 {
        score += visit_count;
    }
    score
}

/// Bonus for multi-token queries.
///
/// Every token must land somewhere (title prefix, title word boundary, or
/// domain prefix) for the candidate to count as a match at all; the first
/// token then decides whether this looks like a domain lookup or a title
/// lookup.
fn multi_token_bonus(title: &str, domain: &str, tokens: &[String]) -> Score {
    let matches_all = tokens.iter().all(|token| {
        title.starts_with(token.as_str())
            || title.contains(&format!(" {token}"))
            || domain.starts_with(token.as_str())
    });
    if !matches_all {
        return 0;
    }

    let mut bonus = ALL_TOKENS_BONUS;
    let first = tokens[0].as_str();
    if domain.starts_with(first) {
        bonus += DOMAIN_PREFIX_BONUS;
    } else if title.starts_with(first) {
        bonus += FIRST_TOKEN_TITLE_BONUS;
    }
    bonus
}

/// Bonus for single-token queries.
///
/// Root URLs stack [`ROOT_URL_BONUS`] on top of either domain match, which
/// pushes matching homepages above everything else.
fn single_token_bonus(domain: &str, url: &str, token: &str) -> Score {
    if domain.starts_with(token) {
        let mut bonus = DOMAIN_PREFIX_BONUS;
        if naked::is_root(url) {
            bonus += ROOT_URL_BONUS;
        }
        bonus
    } else if token.chars().count() > 2 && domain.contains(token) {
        let mut bonus = DOMAIN_CONTAINS_BONUS;
        if naked::is_root(url) {
            bonus += ROOT_URL_BONUS;
        }
        bonus
    } else {
        0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tokenize::tokenize;

    fn score(title: Option<&str>, url: &str, visits: u64, query: &str) -> Score {
        let query = query.to_lowercase();
        let tokens = tokenize(&query);
        score_candidate(title, url, visits, &query, &tokens)
    }

    #[test]
    fn title_prefix_dominates() {
        let s = score(Some("Example"), "https://unrelated.org/page", 0, "exam");
        assert!(s >= 20_000, "title prefix should add 20000, got {s}");
    }

    #[test]
    fn title_prefix_is_case_insensitive() {
        let s = score(Some("Example"), "https://unrelated.org/page", 0, "Exam");
        assert!(s >= 20_000);
    }

    #[test]
    fn word_boundary_match_scores_lower_than_prefix() {
        let prefix = score(Some("rust book"), "https://unrelated.org/a", 0, "rust");
        let word = score(Some("the rust book"), "https://unrelated.org/a", 0, "rust");
        assert!(word >= 10_000);
        assert!(prefix > word);
    }

    #[test]
    fn short_query_gets_no_title_bonus() {
        // Single-char queries never match titles; "e" also misses the domain.
        assert_eq!(score(Some("Example"), "https://unrelated.org/page", 0, "e"), 0);
    }

    #[test]
    fn single_token_root_domain_stacks_bonuses() {
        let s = score(None, "https://github.com/", 0, "git");
        assert!(s >= 230_000, "domain prefix + root bonus expected, got {s}");
    }

    #[test]
    fn single_token_non_root_gets_no_root_bonus() {
        let s = score(None, "https://github.com/rust-lang/rust", 0, "git");
        assert_eq!(s, 30_000);
    }

    #[test]
    fn www_prefix_is_ignored_for_domain_matching() {
        let s = score(None, "https://www.github.com/", 0, "git");
        assert!(s >= 230_000);
    }

    #[test]
    fn domain_contains_requires_three_chars() {
        assert_eq!(score(None, "https://github.com/x", 0, "it"), 0);
        assert_eq!(score(None, "https://github.com/x", 0, "ithu"), 15_000);
    }

    #[test]
    fn multi_token_all_must_match() {
        let s = score(
            Some("the rust programming language"),
            "https://rust-lang.org/page",
            0,
            "rust language",
        );
        assert!(s >= 1_000);

        let miss = score(
            Some("the rust programming language"),
            "https://rust-lang.org/page",
            0,
            "rust zebra",
        );
        assert_eq!(miss, 0);
    }

    #[test]
    fn multi_token_first_token_domain_beats_title() {
        let domain_first = score(
            Some("unrelated words here"),
            "https://rust-lang.org/x",
            0,
            "rust words",
        );
        let title_first = score(
            Some("rust words here"),
            "https://unrelated.org/x",
            0,
            "rust words",
        );
        assert!(domain_first > title_first);
        assert!(title_first >= 1_000 + 5_000);
    }

    #[test]
    fn multi_token_has_no_root_bonus() {
        // Asymmetric with the single-token branch on purpose.
        let s = score(None, "https://rust-lang.org/", 0, "rust lang");
        assert!(s < 200_000);
    }

    #[test]
    fn visits_break_ties_but_never_create_matches() {
        let matched = score(None, "https://github.com/x", 7, "git");
        assert_eq!(matched, 30_000 + 7);

        let unmatched = score(None, "https://example.com/x", 1_000_000, "zzz");
        assert_eq!(unmatched, 0);
    }

    #[test]
    fn absent_title_and_bad_url_degrade_gracefully() {
        assert_eq!(score(None, "not a url", 5, "anything"), 0);
    }
}
