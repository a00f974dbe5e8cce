//! Read-only input records from the bookmark and history stores.

use serde::{Deserialize, Serialize};

/// A saved bookmark, as provided by the bookmark store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// User-visible bookmark title.
    pub title: String,
    /// Absolute URL string of the bookmarked page.
    pub url: String,
    /// Whether the user marked this bookmark as a favorite.
    pub is_favorite: bool,
}

impl Bookmark {
    /// Creates a bookmark record.
    pub fn new(title: impl Into<String>, url: impl Into<String>, is_favorite: bool) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            is_favorite,
        }
    }
}

/// A visited page, as provided by the browsing-history store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Page title, when one was captured at visit time.
    pub title: Option<String>,
    /// Absolute URL string of the visited page.
    pub url: String,
    /// How many times the page was visited.
    pub number_of_visits: u64,
    /// Whether the most recent visit failed to load.
    pub failed_to_load: bool,
}

impl HistoryEntry {
    /// Creates a history record.
    pub fn new(
        title: Option<String>,
        url: impl Into<String>,
        number_of_visits: u64,
        failed_to_load: bool,
    ) -> Self {
        Self {
            title,
            url: url.into(),
            number_of_visits,
            failed_to_load,
        }
    }
}
