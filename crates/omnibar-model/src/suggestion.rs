//! The `Suggestion` sum type and its derivation rules.
//!
//! Every candidate flowing through the ranking pipeline is one of five
//! closed variants. Which fields a variant exposes is part of the contract:
//! only `Website`, `Bookmark`, and `HistoryEntry` carry a URL; only
//! `Bookmark` and `HistoryEntry` carry a title. Top-hit eligibility is a
//! derived, read-only property fixed at construction time.

use serde::{Deserialize, Serialize};

use crate::naked;
use crate::source::{Bookmark, HistoryEntry};

/// Minimum visit count for a history entry to be eligible for the top-hits
/// bucket. Pages visited fewer times qualify only when their URL is a root.
pub const TOP_HIT_MIN_VISITS: u64 = 4;

/// A single ranked suggestion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    /// A search phrase from the remote suggestion endpoint.
    Phrase {
        /// The suggested search phrase.
        phrase: String,
    },
    /// A directly-typed or domain-derived URL suggestion.
    Website {
        /// Absolute URL string.
        url: String,
    },
    /// A suggestion derived from a saved bookmark.
    Bookmark {
        /// Bookmark title.
        title: String,
        /// Absolute URL string.
        url: String,
        /// Whether the bookmark is a favorite.
        is_favorite: bool,
        /// Whether this suggestion may appear in the top-hits bucket.
        allowed_in_top_hits: bool,
    },
    /// A suggestion derived from a browsing-history visit.
    HistoryEntry {
        /// Page title, when the history store captured one.
        title: Option<String>,
        /// Absolute URL string.
        url: String,
        /// Whether this suggestion may appear in the top-hits bucket.
        allowed_in_top_hits: bool,
    },
    /// A remote payload entry under a key the parser does not recognize.
    Unknown {
        /// The raw value from the payload.
        value: String,
    },
}

impl Suggestion {
    /// Creates a phrase suggestion.
    pub fn phrase(phrase: impl Into<String>) -> Self {
        Self::Phrase {
            phrase: phrase.into(),
        }
    }

    /// Creates a website suggestion.
    pub fn website(url: impl Into<String>) -> Self {
        Self::Website { url: url.into() }
    }

    /// Creates an unknown-payload suggestion.
    pub fn unknown(value: impl Into<String>) -> Self {
        Self::Unknown {
            value: value.into(),
        }
    }

    /// Builds a bookmark suggestion.
    ///
    /// Top-hit eligibility defaults to the favorite flag: favorited
    /// bookmarks are prominent enough to surface first.
    pub fn from_bookmark(bookmark: &Bookmark) -> Self {
        Self::Bookmark {
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
            is_favorite: bookmark.is_favorite,
            allowed_in_top_hits: bookmark.is_favorite,
        }
    }

    /// Builds a history suggestion.
    ///
    /// A visit is top-hit eligible only when the page loaded and is either
    /// visited at least [`TOP_HIT_MIN_VISITS`] times or a root URL. Rarely
    /// visited deep links make poor top hits.
    pub fn from_history(entry: &HistoryEntry) -> Self {
        let allowed_in_top_hits = !entry.failed_to_load
            && (entry.number_of_visits >= TOP_HIT_MIN_VISITS || naked::is_root(&entry.url));
        Self::HistoryEntry {
            title: entry.title.clone(),
            url: entry.url.clone(),
            allowed_in_top_hits,
        }
    }

    /// Returns the URL for navigational variants, `None` otherwise.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Website { url }
            | Self::Bookmark { url, .. }
            | Self::HistoryEntry { url, .. } => Some(url),
            Self::Phrase { .. } | Self::Unknown { .. } => None,
        }
    }

    /// Returns the title for bookmark and history variants, `None` otherwise.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Bookmark { title, .. } => Some(title),
            Self::HistoryEntry { title, .. } => title.as_deref(),
            Self::Phrase { .. } | Self::Website { .. } | Self::Unknown { .. } => None,
        }
    }

    /// Returns whether this suggestion may enter the top-hits bucket.
    ///
    /// Constant `true` for websites, constant `false` for phrases and
    /// unknown entries; derived at construction for bookmarks and history.
    pub fn allowed_in_top_hits(&self) -> bool {
        match self {
            Self::Website { .. } => true,
            Self::Bookmark {
                allowed_in_top_hits,
                ..
            }
            | Self::HistoryEntry {
                allowed_in_top_hits,
                ..
            } => *allowed_in_top_hits,
            Self::Phrase { .. } | Self::Unknown { .. } => false,
        }
    }

    /// Returns true for variants that navigate directly to a URL.
    pub fn is_navigational(&self) -> bool {
        self.url().is_some()
    }

    /// Returns the naked form of this suggestion's URL, if it has one.
    pub fn naked_url(&self) -> Option<String> {
        self.url().and_then(naked::naked)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bookmark_top_hit_eligibility_follows_favorite() {
        let favorite = Suggestion::from_bookmark(&Bookmark::new("A", "https://a.com", true));
        let plain = Suggestion::from_bookmark(&Bookmark::new("B", "https://b.com", false));

        assert!(favorite.allowed_in_top_hits());
        assert!(!plain.allowed_in_top_hits());
    }

    #[test]
    fn failed_history_entry_is_never_a_top_hit() {
        let entry = HistoryEntry::new(None, "https://example.com", 100, true);
        assert!(!Suggestion::from_history(&entry).allowed_in_top_hits());
    }

    #[test]
    fn rarely_visited_deep_link_is_not_a_top_hit() {
        let entry = HistoryEntry::new(None, "https://example.com/deep/page", 1, false);
        assert!(!Suggestion::from_history(&entry).allowed_in_top_hits());
    }

    #[test]
    fn rarely_visited_root_is_a_top_hit() {
        let entry = HistoryEntry::new(None, "https://example.com", 1, false);
        assert!(Suggestion::from_history(&entry).allowed_in_top_hits());
    }

    #[test]
    fn frequently_visited_deep_link_is_a_top_hit() {
        let entry = HistoryEntry::new(None, "https://example.com/deep", TOP_HIT_MIN_VISITS, false);
        assert!(Suggestion::from_history(&entry).allowed_in_top_hits());
    }

    #[test]
    fn url_exposure_per_variant() {
        assert_eq!(Suggestion::phrase("rust").url(), None);
        assert_eq!(Suggestion::unknown("x").url(), None);
        assert_eq!(
            Suggestion::website("https://rust-lang.org").url(),
            Some("https://rust-lang.org")
        );
    }

    #[test]
    fn title_exposure_per_variant() {
        let bookmark = Suggestion::from_bookmark(&Bookmark::new("Docs", "https://d.com", false));
        assert_eq!(bookmark.title(), Some("Docs"));

        let untitled = Suggestion::from_history(&HistoryEntry::new(
            None,
            "https://example.com",
            1,
            false,
        ));
        assert_eq!(untitled.title(), None);

        assert_eq!(Suggestion::website("https://a.com").title(), None);
    }

    #[test]
    fn website_is_always_top_hit_eligible() {
        assert!(Suggestion::website("https://example.com").allowed_in_top_hits());
    }

    #[test]
    fn navigational_variants() {
        assert!(Suggestion::website("https://a.com").is_navigational());
        assert!(!Suggestion::phrase("query").is_navigational());
        assert!(!Suggestion::unknown("x").is_navigational());
    }
}
