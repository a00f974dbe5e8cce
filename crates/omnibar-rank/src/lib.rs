//! Ranking, merging, and bucket assembly for omnibar suggestions.
//!
//! The pipeline turns three heterogeneous sources (bookmarks, browsing
//! history, remote search phrases) into a bounded three-bucket result:
//!
//! 1. **Scoring** ([`score_candidate`]): integer point accumulation per
//!    candidate against the query tokens.
//! 2. **Collection** ([`collect_candidates`]): score, drop non-matches,
//!    stable-sort descending.
//! 3. **Merging** ([`merge_duplicates`]): collapse bookmark/history/website
//!    duplicates of one site into a single best-signal representative.
//! 4. **Assembly** ([`assemble`]): prefix-take top hits, then allocate the
//!    fixed suggestion budget across the buckets.
//!
//! [`process`] wires the stages together; every stage is pure and usable on
//! its own. Concurrency and I/O live in `omnibar-loader`, not here.

#![warn(missing_docs)]

mod assemble;
mod collect;
mod merge;
mod pipeline;
mod result;
mod score;
mod tokenize;

pub use assemble::{
    DEFAULT_MAXIMUM_SUGGESTIONS, DEFAULT_MAXIMUM_TOP_HITS, DEFAULT_MIN_BOOKMARK_QUERY_LEN,
    DEFAULT_RESERVED_LOCAL_SLOTS, RankingParams, assemble,
};
pub use collect::{collect_candidates, top_bookmarks};
pub use merge::merge_duplicates;
pub use pipeline::process;
pub use result::SuggestionResult;
pub use score::{Score, score_candidate};
pub use tokenize::tokenize;
