//! Normalized citation records extracted from provider grounding metadata

use serde::Serialize;
use utoipa::ToSchema;

/// Citation pointing at an uploaded file in a file-search store
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FileCitation {
    /// Always "file"
    pub source_type: String,
    pub file_name: String,
    pub file_uri: String,
    pub page: Option<i64>,
    pub section: Option<String>,
    /// Snippet of the grounded passage, truncated to 500 characters
    pub content_snippet: String,
    /// Provider confidence, clamped to [0, 1]
    pub confidence: f64,
}

/// Citation pointing at a web page found during search grounding
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WebCitation {
    /// Always "web"
    pub source_type: String,
    pub url: String,
    pub domain: String,
    pub title: String,
    pub published_date: Option<String>,
    pub content_snippet: String,
    pub confidence: f64,
}

/// One grounded passage within a legacy citation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LegacyCitationChunk {
    pub content: String,
    pub page: Option<i64>,
    pub confidence: Option<f64>,
}

/// Citation shape used by the legacy content endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LegacyCitation {
    pub file_name: String,
    pub file_uri: String,
    pub chunks: Vec<LegacyCitationChunk>,
}

/// Grounding bookkeeping attached to legacy content responses
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GroundingSummary {
    pub used_files: bool,
    pub file_count: i64,
    pub citations: Vec<LegacyCitation>,
}
