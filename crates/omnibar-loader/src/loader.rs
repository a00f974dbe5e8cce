//! The suggestion orchestrator.
//!
//! [`SuggestionLoader`] fans out to two independent branches, one scoring
//! local collections on a blocking worker and one fetching the remote
//! endpoint, then joins them. Neither branch writes shared state; each
//! returns its own value and the join point combines them, so the ranking
//! logic itself needs no synchronization.
//!
//! Failure policy: a failed remote branch degrades to zero remote
//! suggestions and still yields a partial, ranked result when anything
//! local matched. Only a failed remote branch combined with an empty local
//! branch fails the call.

use std::sync::Arc;

use omnibar_model::{Bookmark, HistoryEntry, Suggestion};
use omnibar_rank::{RankingParams, SuggestionResult, process, tokenize, top_bookmarks};
use tracing::debug;

use crate::error::{RemoteError, SuggestionError};
use crate::remote::{RemoteSuggestionSource, parse_remote_payload};

/// How many bookmarks the inline-completion path surfaces.
const INLINE_BOOKMARK_LIMIT: usize = 2;

/// Provides the full bookmark list for a query.
///
/// Called on a blocking worker; implementations may read from storage.
pub trait BookmarkSource: Send + Sync {
    /// Returns all bookmarks.
    fn bookmarks(&self) -> Vec<Bookmark>;
}

/// Provides the full browsing-history list for a query.
///
/// Called on a blocking worker; implementations may read from storage.
pub trait HistorySource: Send + Sync {
    /// Returns all history entries.
    fn history(&self) -> Vec<HistoryEntry>;
}

/// Coordinates concurrent local scoring and remote fetching.
///
/// Every configured source is optional, but constructing a loader with no
/// source at all is a misconfiguration reported per call as
/// [`SuggestionError::NoDataSource`].
pub struct SuggestionLoader<R> {
    /// Bookmark store, when configured.
    bookmarks: Option<Arc<dyn BookmarkSource>>,
    /// History store, when configured.
    history: Option<Arc<dyn HistorySource>>,
    /// Remote suggestion endpoint, when configured.
    remote: Option<R>,
    /// Injected ranking constants.
    params: RankingParams,
}

impl<R: RemoteSuggestionSource> SuggestionLoader<R> {
    /// Creates a loader over the given sources.
    pub fn new(
        bookmarks: Option<Arc<dyn BookmarkSource>>,
        history: Option<Arc<dyn HistorySource>>,
        remote: Option<R>,
        params: RankingParams,
    ) -> Self {
        Self {
            bookmarks,
            history,
            remote,
            params,
        }
    }

    /// Returns up to `maximum` inline-completion suggestions for `query`:
    /// the top bookmark matches first, then remote suggestions.
    ///
    /// This lightweight path skips the merge pipeline entirely. An empty
    /// query succeeds immediately with no scoring and no network call.
    pub async fn get_suggestions(
        &self,
        query: &str,
        maximum: usize,
    ) -> Result<Vec<Suggestion>, SuggestionError> {
        self.ensure_configured()?;
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let (local, remote) = tokio::join!(self.bookmark_shortlist(query), self.fetch_remote(query));

        let remote_failed = remote.is_err();
        let mut suggestions = local;
        suggestions.extend(remote.unwrap_or_default());

        if remote_failed && suggestions.is_empty() {
            return Err(SuggestionError::FailedToObtainData);
        }
        suggestions.truncate(maximum);
        debug!(count = suggestions.len(), "inline suggestions ready");
        Ok(suggestions)
    }

    /// Runs the full ranking pipeline for `query` with the same concurrent
    /// fan-out: local collections and the remote fetch are joined, then
    /// ranked, merged, and bucketed.
    pub async fn get_ranked_suggestions(
        &self,
        query: &str,
    ) -> Result<SuggestionResult, SuggestionError> {
        self.ensure_configured()?;
        if query.is_empty() {
            return Ok(SuggestionResult::default());
        }

        let (local, remote) = tokio::join!(self.local_records(), self.fetch_remote(query));
        let (bookmarks, history) = local;

        let remote_failed = remote.is_err();
        let remote = remote.unwrap_or_default();

        let result = process(query, &bookmarks, &history, &remote, &self.params);
        if remote_failed && result.is_empty() {
            return Err(SuggestionError::FailedToObtainData);
        }
        debug!(
            top_hits = result.top_hits.len(),
            search = result.search_suggestions.len(),
            local = result.history_and_bookmarks.len(),
            "ranked suggestions ready"
        );
        Ok(result)
    }

    /// Fails when no source at all is configured.
    fn ensure_configured(&self) -> Result<(), SuggestionError> {
        if self.bookmarks.is_none() && self.history.is_none() && self.remote.is_none() {
            return Err(SuggestionError::NoDataSource);
        }
        Ok(())
    }

    /// Scores bookmarks on a blocking worker and returns the shortlist.
    async fn bookmark_shortlist(&self, query: &str) -> Vec<Suggestion> {
        let Some(source) = self.bookmarks.clone() else {
            return Vec::new();
        };
        let query = query.to_lowercase();
        if query.chars().count() < self.params.min_bookmark_query_len {
            return Vec::new();
        }

        tokio::task::spawn_blocking(move || {
            let tokens = tokenize(&query);
            top_bookmarks(&source.bookmarks(), &query, &tokens, INLINE_BOOKMARK_LIMIT)
        })
        .await
        .unwrap_or_default()
    }

    /// Reads both local collections on a blocking worker.
    async fn local_records(&self) -> (Vec<Bookmark>, Vec<HistoryEntry>) {
        let bookmarks = self.bookmarks.clone();
        let history = self.history.clone();

        tokio::task::spawn_blocking(move || {
            let bookmarks = bookmarks.map(|s| s.bookmarks()).unwrap_or_default();
            let history = history.map(|s| s.history()).unwrap_or_default();
            (bookmarks, history)
        })
        .await
        .unwrap_or_default()
    }

    /// Fetches and decodes remote suggestions.
    ///
    /// A missing remote source is zero suggestions, not a failure.
    async fn fetch_remote(&self, query: &str) -> Result<Vec<Suggestion>, RemoteError> {
        let Some(source) = &self.remote else {
            return Ok(Vec::new());
        };
        let bytes = source.fetch(query).await.inspect_err(|error| {
            debug!(%error, "remote suggestion fetch failed");
        })?;
        parse_remote_payload(&bytes)
    }
}
