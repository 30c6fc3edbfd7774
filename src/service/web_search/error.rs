//! Error types for web-search-grounded generation

use crate::provider::ProviderError;

/// Suggestion attached to web-search failures
pub const WEB_SEARCH_FAILURE_SUGGESTION: &str =
    "Web search unavailable. Consider using file-based RAG if you have uploaded documents.";

/// Error type for the web-search endpoints
///
/// No fallback to plain generation: substituting ungrounded content for
/// a caller who asked for sourced content would break attribution.
#[derive(Debug, thiserror::Error)]
pub enum WebSearchError {
    #[error("Web search overview failed: {0}")]
    Overview(#[source] ProviderError),

    #[error("Web search detailed lookup failed: {0}")]
    Detailed(#[source] ProviderError),
}
