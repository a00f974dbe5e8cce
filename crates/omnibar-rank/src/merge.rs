//! Duplicate merging across navigational candidates.
//!
//! Bookmarks, history entries, and website suggestions for the same site
//! must collapse into a single representative. "Same site" means equal
//! naked URLs (see [`omnibar_model::naked`]), so scheme and `www.` variants
//! of one address count as duplicates.
//!
//! The surviving representative combines the best signal from both stores:
//! the bookmark contributes its title and favorite flag, while the history
//! entry's recency signal decides top-hit eligibility. The walk preserves
//! the input's relative order, so upstream ranking is never disturbed.

use std::collections::HashSet;

use omnibar_model::Suggestion;

/// Collapses duplicate sites in `candidates`, keeping at most `maximum`
/// results when given.
///
/// `candidates` must already be in descending relevance order. The output
/// preserves the relative order of retained items and never grows.
///
/// For each first occurrence of a site:
/// - a history entry is upgraded to bookmark form when any bookmark in the
///   list shares its site, keeping the history entry's own top-hit
///   eligibility;
/// - a bookmark adopts top-hit eligibility from a duplicate history entry
///   that is itself eligible;
/// - otherwise a title-less candidate is replaced wholesale by the first
///   duplicate that does carry a title.
///
/// Candidates without a URL are skipped entirely.
pub fn merge_duplicates(candidates: &[Suggestion], maximum: Option<usize>) -> Vec<Suggestion> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<Suggestion> = Vec::new();

    for (index, candidate) in candidates.iter().enumerate() {
        if maximum.is_some_and(|max| merged.len() >= max) {
            break;
        }
        let Some(naked_url) = candidate.naked_url() else {
            continue;
        };
        if seen.contains(&naked_url) {
            continue;
        }

        let substituted = substitute(candidate, candidates, &naked_url);
        let chosen = match substituted {
            Some(suggestion) => suggestion,
            None if candidate.title().is_none() => {
                titled_duplicate(candidates, index, &naked_url)
                    .cloned()
                    .unwrap_or_else(|| candidate.clone())
            }
            None => candidate.clone(),
        };

        seen.insert(naked_url);
        merged.push(chosen);
    }

    merged
}

/// Applies the bookmark/history cross-substitution for `candidate`, or
/// returns `None` when no duplicate warrants one.
fn substitute(
    candidate: &Suggestion,
    candidates: &[Suggestion],
    naked_url: &str,
) -> Option<Suggestion> {
    match candidate {
        Suggestion::HistoryEntry {
            allowed_in_top_hits,
            ..
        } => {
            // Display the site as its bookmark, but let the history entry's
            // quality signal decide top-hit eligibility.
            let (title, url, is_favorite) = find_bookmark(candidates, naked_url)?;
            Some(Suggestion::Bookmark {
                title: title.to_string(),
                url: url.to_string(),
                is_favorite,
                allowed_in_top_hits: *allowed_in_top_hits,
            })
        }
        Suggestion::Bookmark {
            title,
            url,
            is_favorite,
            ..
        } => {
            find_eligible_history(candidates, naked_url)?;
            Some(Suggestion::Bookmark {
                title: title.clone(),
                url: url.clone(),
                is_favorite: *is_favorite,
                allowed_in_top_hits: true,
            })
        }
        _ => None,
    }
}

/// Finds the first bookmark in the full list sharing `naked_url`.
fn find_bookmark<'a>(
    candidates: &'a [Suggestion],
    naked_url: &str,
) -> Option<(&'a str, &'a str, bool)> {
    candidates.iter().find_map(|other| match other {
        Suggestion::Bookmark {
            title,
            url,
            is_favorite,
            ..
        } if other.naked_url().as_deref() == Some(naked_url) => {
            Some((title.as_str(), url.as_str(), *is_favorite))
        }
        _ => None,
    })
}

/// Finds the first top-hit-eligible history entry sharing `naked_url`.
fn find_eligible_history<'a>(
    candidates: &'a [Suggestion],
    naked_url: &str,
) -> Option<&'a Suggestion> {
    candidates.iter().find(|other| {
        matches!(
            other,
            Suggestion::HistoryEntry {
                allowed_in_top_hits: true,
                ..
            }
        ) && other.naked_url().as_deref() == Some(naked_url)
    })
}

/// Finds the first *other* suggestion sharing `naked_url` that carries a
/// title. First match wins even when later duplicates rank higher.
fn titled_duplicate<'a>(
    candidates: &'a [Suggestion],
    current: usize,
    naked_url: &str,
) -> Option<&'a Suggestion> {
    candidates.iter().enumerate().find_map(|(index, other)| {
        (index != current
            && other.title().is_some()
            && other.naked_url().as_deref() == Some(naked_url))
        .then_some(other)
    })
}
