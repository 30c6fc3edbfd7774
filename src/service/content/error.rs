//! Error types for legacy content generation

use crate::provider::ProviderError;

/// Error type for the legacy content endpoint
///
/// Raised only when plain generation fails; a grounded failure alone is
/// absorbed by the fallback.
#[derive(Debug, thiserror::Error)]
pub enum ContentServiceError {
    #[error("Content generation failed: {0}")]
    Generation(#[source] ProviderError),
}
