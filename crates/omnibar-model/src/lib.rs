//! Data model for omnibar suggestion ranking.
//!
//! This crate defines the inputs the ranking pipeline consumes and the
//! suggestion type it produces:
//!
//! - [`Bookmark`] and [`HistoryEntry`]: read-only records from the bookmark
//!   and history stores.
//! - [`Suggestion`]: the closed sum type every candidate becomes before it
//!   enters scoring, merging, or assembly.
//! - [`naked`]: canonical "naked" URL forms used for duplicate detection
//!   and the root-path predicate used by scoring.
//!
//! All values here are transient. They are constructed fresh for a single
//! query and never persisted.

#![warn(missing_docs)]

pub mod naked;
mod source;
mod suggestion;

pub use source::{Bookmark, HistoryEntry};
pub use suggestion::{Suggestion, TOP_HIT_MIN_VISITS};
