//! Query tokenization.

/// Splits a query into lowercase tokens on Unicode whitespace.
///
/// Empty fragments are dropped, so consecutive whitespace and leading or
/// trailing whitespace contribute nothing. Tokenizing already-tokenized
/// input is a no-op.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokenize("rust async book"), vec!["rust", "async", "book"]);
    }

    #[test]
    fn lowercases_tokens() {
        assert_eq!(tokenize("Rust ASYNC"), vec!["rust", "async"]);
    }

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(tokenize("  rust\t\nasync  "), vec!["rust", "async"]);
    }

    #[test]
    fn empty_query_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn idempotent_on_single_token() {
        let once = tokenize("example.com");
        assert_eq!(once, vec!["example.com"]);
        assert_eq!(tokenize(&once[0]), once);
    }
}
