//! The search client: page offsets, concurrent fan-out, all-or-nothing join.
//!
//! One `search` call computes the page offsets for the requested limit,
//! issues one GET per offset concurrently, extracts citations from each
//! page, and flattens the per-page lists in ascending offset order.

use crate::config::{ClientConfig, ClientOptions};
use crate::error::SearchError;
use crate::{http, parse};
use url::Url;

/// Results per page on the engine's HTML interface.
const PAGE_SIZE: usize = 10;

/// A paginated search client for a web search engine's HTML results page.
///
/// Configured once at construction and immutable afterwards; a client can be
/// shared freely across concurrent `search` calls. Holds no state between
/// calls.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> cite_search::Result<()> {
/// use cite_search::{ClientOptions, SearchClient};
///
/// let client = SearchClient::new(ClientOptions::default())?;
/// let links = client.search("rust programming", Some(20)).await?;
/// for link in &links {
///     println!("{link}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SearchClient {
    config: ClientConfig,
}

impl SearchClient {
    /// Build a client by merging `options` over the documented defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the merged configuration is
    /// invalid, notably when `proxied` is set without a proxy URL.
    pub fn new(options: ClientOptions) -> Result<Self, SearchError> {
        let config = ClientConfig::merge(options);
        config.validate()?;
        Ok(Self { config })
    }

    /// Build a client from an already-resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` fails validation.
    pub fn from_config(config: ClientConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build a client with the stock Google configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// The resolved configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform a paginated search and return the flattened citation texts.
    ///
    /// Issues one request per page offset (`0, 10, 20, …` while below the
    /// effective limit), all initiated concurrently, then waits for every
    /// page. Per-page lists are concatenated in ascending offset order; the
    /// order within a page follows the document. The term is sent as-is and
    /// is not validated for emptiness. Duplicates across pages are kept.
    ///
    /// # Errors
    ///
    /// All-or-nothing: if any single page request fails (connection error,
    /// timeout, non-success status) the whole call fails with
    /// [`SearchError::Transport`] and no partial results are returned.
    /// [`SearchError::Parse`] is returned if a page body cannot be processed.
    pub async fn search(
        &self,
        term: &str,
        limit: Option<usize>,
    ) -> Result<Vec<String>, SearchError> {
        let size = limit.unwrap_or(self.config.limit);
        let offsets = page_offsets(size);

        tracing::trace!(pages = offsets.len(), limit = size, "starting search");

        if offsets.is_empty() {
            return Ok(Vec::new());
        }

        // Proxy and client construction failures surface here, per call,
        // rather than at configuration time.
        let client = http::build_client(&self.config)?;
        let target = self.request_target()?;

        let pages = offsets.into_iter().map(|offset| {
            let client = client.clone();
            let target = target.clone();
            let term = term.to_string();
            async move {
                let body = http::fetch_page(&client, target, &term, offset).await?;
                parse::extract_citations(&body)
            }
        });

        // try_join_all fails fast on the first page error and otherwise
        // yields results in the order the futures were supplied, so the
        // flattened output is deterministic regardless of completion order.
        let per_page = futures::future::try_join_all(pages).await?;

        let links: Vec<String> = per_page.into_iter().flatten().collect();
        tracing::debug!(count = links.len(), "search complete");
        Ok(links)
    }

    /// Resolve the request target from the configured host and path.
    fn request_target(&self) -> Result<Url, SearchError> {
        let base = Url::parse(&self.config.host)
            .map_err(|e| SearchError::Transport(format!("invalid host URL: {e}")))?;
        base.join(&self.config.path)
            .map_err(|e| SearchError::Transport(format!("invalid search path: {e}")))
    }
}

/// Compute the page offsets for a result limit: `0, 10, 20, …` while the
/// offset stays below `limit`. A limit of 0 yields no offsets. Arithmetic
/// stays in `usize`, so no limit value can overflow the offset step.
fn page_offsets(limit: usize) -> Vec<usize> {
    (0..limit).step_by(PAGE_SIZE).collect()
}
