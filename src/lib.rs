//! # cite-search
//!
//! A thin paginated scraper for a web search engine's HTML results page.
//!
//! Each search fans out one HTTP GET per page of results, extracts the text
//! of the `cite` elements the engine wraps displayed result URLs in, and
//! flattens the per-page lists into one ordered sequence. It is deliberately
//! minimal glue: no retries, no rate limiting, no caching, and no partial
//! results — if any page fails, the whole search fails.
//!
//! ## Design
//!
//! - One GET per page offset (`start` stepping by 10), issued concurrently
//! - Redirect following disabled to avoid tracking/honeypot redirects
//! - Fixed `cite` CSS selector extraction via `scraper`
//! - Optional proxy routing, passed through to the HTTP client unvalidated
//! - User-Agent rotation for reliability
//!
//! ## Security
//!
//! - No API keys or secrets to leak
//! - No network listeners — this is a library, not a server
//! - Search terms are logged only at trace level

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod parse;

pub use client::SearchClient;
pub use config::{ClientConfig, ClientOptions};
pub use error::{Result, SearchError};

/// Perform a paginated search with an explicit configuration.
///
/// Convenience wrapper that builds a throwaway [`SearchClient`] around
/// `config` and searches up to `config.limit` results.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid, or propagates
/// the first page failure as [`SearchError::Transport`] /
/// [`SearchError::Parse`]; no partial results are returned.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> cite_search::Result<()> {
/// let config = cite_search::ClientConfig::default();
/// let links = cite_search::search("rust programming", &config).await?;
/// for link in &links {
///     println!("{link}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(term: &str, config: &ClientConfig) -> Result<Vec<String>> {
    let client = SearchClient::from_config(config.clone())?;
    client.search(term, None).await
}

/// Perform a paginated search with the stock Google configuration.
///
/// # Errors
///
/// Same as [`search`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> cite_search::Result<()> {
/// let links = cite_search::search_default("weather today").await?;
/// println!("{} links", links.len());
/// # Ok(())
/// # }
/// ```
pub async fn search_default(term: &str) -> Result<Vec<String>> {
    search(term, &ClientConfig::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_validates_config_proxied_without_proxy() {
        let config = ClientConfig {
            proxied: true,
            proxy: None,
            ..Default::default()
        };
        let result = search("test", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("proxy"));
    }

    #[tokio::test]
    async fn search_validates_config_zero_timeout() {
        let config = ClientConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let result = search("test", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[tokio::test]
    async fn search_validates_config_empty_host() {
        let config = ClientConfig {
            host: String::new(),
            ..Default::default()
        };
        let result = search("test", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("host"));
    }

    #[tokio::test]
    async fn search_with_zero_limit_config_is_empty() {
        let config = ClientConfig {
            limit: 0,
            host: "http://127.0.0.1:1".into(),
            ..Default::default()
        };
        let links = search("test", &config).await.expect("no pages to fetch");
        assert!(links.is_empty());
    }
}
