//! Error types for the cite-search crate.
//!
//! All errors carry stable string messages suitable for display to users
//! and programmatic handling. Failures are all-or-nothing: a single failed
//! page request fails the whole search, with no partial results.

/// Errors that can occur during a paginated search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A page request failed: connection error, timeout, non-success HTTP
    /// status, or proxy failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// Failed to parse a results page body as HTML.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for cite-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
