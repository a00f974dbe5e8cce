//! Concurrent suggestion loading for the omnibar.
//!
//! This crate owns everything that can fail: the HTTP suggestion endpoint,
//! payload decoding, and the fan-out/fan-in coordination between local
//! scoring and the remote fetch. The ranking logic itself lives in
//! `omnibar-rank` and is pure.
//!
//! Entry point is [`SuggestionLoader`] with two paths:
//!
//! - [`SuggestionLoader::get_suggestions`]: the lightweight inline
//!   completion list (top bookmarks, then remote phrases).
//! - [`SuggestionLoader::get_ranked_suggestions`]: the full merge and
//!   bucket pipeline.

#![warn(missing_docs)]

mod error;
mod loader;
mod remote;

pub use error::{RemoteError, SuggestionError};
pub use loader::{BookmarkSource, HistorySource, SuggestionLoader};
pub use remote::{HttpSuggestionSource, RemoteSuggestionSource, parse_remote_payload};
