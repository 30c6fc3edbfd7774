//! Error types for file-grounded generation

use crate::provider::ProviderError;

/// Error type for the file-RAG endpoints
///
/// These modes never fall back to plain generation: the caller asked
/// for sourced content, so a provider failure is surfaced directly.
#[derive(Debug, thiserror::Error)]
pub enum FileRagError {
    #[error("File RAG overview generation failed: {0}")]
    Overview(#[source] ProviderError),

    #[error("File RAG detailed generation failed: {0}")]
    Detailed(#[source] ProviderError),
}
