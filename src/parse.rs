//! Citation extraction from results-page HTML.
//!
//! Google wraps each displayed result URL in a `cite` element; that tag is
//! the sole extraction target. Matches are collected eagerly, in document
//! order, into a per-page list.

use crate::error::SearchError;
use scraper::{Html, Selector};

/// The HTML tag the engine uses to wrap displayed result URLs.
const CITATION_SELECTOR: &str = "cite";

/// Extract the text of every citation element in a results page.
///
/// Returns one string per `cite` element, in document order, with
/// surrounding whitespace trimmed. Empty elements are kept so the list
/// length always equals the match count. An empty list means the page had
/// no citations, which is not an error.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if the citation selector fails to compile.
pub fn extract_citations(html: &str) -> Result<Vec<String>, SearchError> {
    let document = Html::parse_document(html);

    let cite_sel = Selector::parse(CITATION_SELECTOR)
        .map_err(|e| SearchError::Parse(format!("invalid citation selector: {e:?}")))?;

    let links: Vec<String> = document
        .select(&cite_sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect();

    tracing::debug!(count = links.len(), "citations extracted");
    Ok(links)
}
