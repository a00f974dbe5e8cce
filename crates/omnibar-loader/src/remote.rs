//! Remote suggestion payloads: the source trait, the HTTP implementation,
//! and the payload parser.
//!
//! The endpoint returns a JSON array of objects with a heterogeneous
//! schema; the only key the parser recognizes is `"phrase"`. Values may be
//! strings or integers. The parser flattens all objects to `(key, value)`
//! pairs in source order, which is why `serde_json` runs with
//! `preserve_order`.

use std::future::Future;

use omnibar_model::Suggestion;
use serde_json::{Map, Value};
use url::Url;

use crate::error::RemoteError;

/// The JSON key carrying a search-phrase suggestion.
const PHRASE_KEY: &str = "phrase";

/// A source of raw remote suggestion payloads.
///
/// Implementations own transport concerns, including timeouts. The
/// orchestrator only distinguishes "bytes arrived" from "branch failed".
pub trait RemoteSuggestionSource: Send + Sync {
    /// Fetches the raw payload for `query`.
    fn fetch(&self, query: &str) -> impl Future<Output = Result<Vec<u8>, RemoteError>> + Send;
}

/// Fetches suggestions from an HTTP endpoint with a `q` query parameter.
#[derive(Debug, Clone)]
pub struct HttpSuggestionSource {
    /// Shared connection pool.
    client: reqwest::Client,
    /// Endpoint base URL; the query string is appended per request.
    endpoint: Url,
}

impl HttpSuggestionSource {
    /// Creates a source for `endpoint` with a default client.
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Creates a source using a caller-provided client, so embedders can
    /// configure proxies and timeouts.
    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Builds the request URL for `query`.
    fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }
}

impl RemoteSuggestionSource for HttpSuggestionSource {
    async fn fetch(&self, query: &str) -> Result<Vec<u8>, RemoteError> {
        let response = self
            .client
            .get(self.request_url(query))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Decodes a remote payload into suggestions.
///
/// The payload must be a JSON array of objects. Each object's entries are
/// flattened to `(key, value)` pairs in source order; a `"phrase"` key
/// yields [`Suggestion::Phrase`], any other key yields
/// [`Suggestion::Unknown`]. Integer values are stringified; entries whose
/// value is neither a string nor a number are dropped.
///
/// Malformed payloads return [`RemoteError::Decode`]. Callers treat that
/// as "no remote suggestions", not as a fatal error.
pub fn parse_remote_payload(bytes: &[u8]) -> Result<Vec<Suggestion>, RemoteError> {
    let objects: Vec<Map<String, Value>> = serde_json::from_slice(bytes)?;

    let suggestions = objects
        .iter()
        .flat_map(Map::iter)
        .filter_map(|(key, value)| {
            let value = stringify(value)?;
            if key == PHRASE_KEY {
                Some(Suggestion::phrase(value))
            } else {
                Some(Suggestion::unknown(value))
            }
        })
        .collect();
    Ok(suggestions)
}

/// Renders a payload value as text, accepting strings and numbers only.
fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
