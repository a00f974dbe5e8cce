//! Canonical "naked" URL forms for duplicate detection.
//!
//! A bookmark for `https://www.example.com/` and a history entry for
//! `http://example.com` are the same site from the user's perspective. The
//! naked form strips the scheme and any leading `www.`, and normalizes the
//! trailing slash, so that both reduce to `example.com` and compare equal.

use url::Url;

/// Returns the lowercased host of `url` with any leading `www.` removed.
///
/// Returns `None` when the string does not parse as an absolute URL or has
/// no host component. Callers treat a missing domain as the empty string,
/// which matches nothing.
pub fn domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    Some(host.to_lowercase())
}

/// Returns the naked form of `url`: host without `www.`, followed by the
/// path with its trailing slash trimmed, followed by the query if present.
///
/// The scheme is dropped entirely, so `http` and `https` variants of the
/// same address produce identical naked forms.
pub fn naked(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    let mut result = host.to_lowercase();
    let path = parsed.path().trim_end_matches('/');
    result.push_str(path);
    if let Some(query) = parsed.query() {
        result.push('?');
        result.push_str(query);
    }
    Some(result)
}

/// Returns true when `url` points at the root of its host: an empty or `/`
/// path with no query and no fragment.
///
/// Unparseable URLs are not roots.
pub fn is_root(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let path = parsed.path();
    (path.is_empty() || path == "/") && parsed.query().is_none() && parsed.fragment().is_none()
}

/// Returns true when the two URLs share the same naked form.
///
/// Either side failing to canonicalize means the pair is not a duplicate.
pub fn same_site(a: &str, b: &str) -> bool {
    match (naked(a), naked(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
