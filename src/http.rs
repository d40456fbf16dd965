//! HTTP transport: client construction and single-page fetches.
//!
//! Provides a configured [`reqwest::Client`] with redirect following
//! disabled, optional proxy routing, cookie support, and rotating
//! User-Agent strings to avoid bot detection.

use crate::config::ClientConfig;
use crate::error::SearchError;
use rand::seq::SliceRandom;
use std::time::Duration;
use url::Url;

/// Realistic browser User-Agent strings, rotated per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Build a [`reqwest::Client`] configured for results-page scraping.
///
/// The client has:
/// - Redirect following disabled (tracking/honeypot redirects are never taken)
/// - Cookie store enabled (for Google consent pages, etc.)
/// - Timeout from config
/// - Random User-Agent from the built-in rotation list (or custom if configured)
/// - Proxy routing when `config.proxied` is set
///
/// # Errors
///
/// Returns [`SearchError::Transport`] if the client cannot be constructed,
/// including when a configured proxy URL turns out to be malformed. Proxy
/// URLs are deliberately not checked at configuration time.
pub fn build_client(config: &ClientConfig) -> Result<reqwest::Client, SearchError> {
    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    };

    let mut builder = reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::none());

    if config.proxied {
        let proxy_url = config.proxy.as_deref().unwrap_or_default();
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| SearchError::Transport(format!("invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| SearchError::Transport(format!("failed to build HTTP client: {e}")))
}

/// Fetch a single results page as HTML text.
///
/// Issues one GET to `target` with query parameters `q` (the search term)
/// and `start` (the page offset). Any non-success status, including a
/// redirect that would otherwise have been followed, fails the fetch.
///
/// # Errors
///
/// Returns [`SearchError::Transport`] on connection failure, timeout, or a
/// non-2xx response.
pub async fn fetch_page(
    client: &reqwest::Client,
    target: Url,
    term: &str,
    offset: usize,
) -> Result<String, SearchError> {
    tracing::trace!(offset, "fetching results page");

    let start = offset.to_string();
    let response = client
        .get(target)
        .query(&[("q", term), ("start", start.as_str())])
        .header("Accept", "text/html,application/xhtml+xml")
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| SearchError::Transport(format!("page request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::Transport(format!(
            "page at offset {offset} returned {status}"
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| SearchError::Transport(format!("page body read failed: {e}")))?;

    tracing::trace!(offset, bytes = body.len(), "results page received");
    Ok(body)
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // SAFETY: USER_AGENTS is a non-empty const array, choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}
