//! Error types for suggestion loading.

use thiserror::Error;

/// Errors surfaced to the caller of a suggestion request.
///
/// These are the only two failure modes the orchestrator exposes. Remote
/// transport and decode problems degrade to zero remote suggestions and
/// never surface on their own; see [`RemoteError`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuggestionError {
    /// The loader was constructed without any data source. A
    /// misconfiguration, fatal to the call and not retried.
    #[error("no suggestion data source is configured")]
    NoDataSource,

    /// The remote fetch failed and the local sources produced nothing, so
    /// there is no partial result to return.
    #[error("no suggestions could be obtained from any source")]
    FailedToObtainData,
}

/// Errors internal to the remote suggestion branch.
///
/// The orchestrator swallows these: a failed or undecodable remote
/// response counts as zero remote suggestions unless the local branch is
/// also empty.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The HTTP request failed or returned an error status.
    #[error("suggestion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the expected JSON array of objects.
    #[error("failed to decode suggestion payload: {0}")]
    Decode(#[from] serde_json::Error),
}
