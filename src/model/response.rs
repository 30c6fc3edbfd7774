//! Response envelopes returned by the generation endpoints
//!
//! Envelopes are constructed once by the service layer and never
//! persisted. Every envelope carries a UTC timestamp, the fixed model
//! identifier and a label naming the generation path that produced it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::citation::{FileCitation, GroundingSummary, WebCitation};
use crate::model::content::{
    ContentChunk, ContentTheme, DataPointSummary, DocumentStructure, WebFact, WebSource, WebTheme,
};

/// Model identifier stamped into every response
pub const MODEL_ID: &str = "gemini-2.0-flash";

/// Which generation path produced a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMethod {
    /// Legacy endpoint, grounded against a file-search store
    Rag,
    /// Legacy endpoint, plain generation (no grounding, or fallback)
    StandardLlm,
    FileOverview,
    FileDetailed,
    WebOverview,
    WebDetailed,
}

/// Legacy content generation response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContentGenerationResponse {
    /// Parsed slide content, or the `{"raw_text": ...}` sentinel
    pub content: Value,
    pub grounding: GroundingSummary,
    pub generated_at: DateTime<Utc>,
    pub model_used: String,
    pub generation_method: GenerationMethod,
}

/// File-RAG overview response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FileRagOverviewResponse {
    pub success: bool,
    pub themes: Vec<ContentTheme>,
    pub data_points: Vec<DataPointSummary>,
    pub document_structures: Vec<DocumentStructure>,
    pub total_files_analyzed: usize,
    pub relevance_summary: String,
    pub citations: Vec<FileCitation>,
    pub generated_at: DateTime<Utc>,
    pub model_used: String,
    pub generation_method: GenerationMethod,
}

/// File-RAG detailed response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FileRagDetailedResponse {
    pub success: bool,
    pub content_chunks: Vec<ContentChunk>,
    pub synthesized_content: String,
    pub citations: Vec<FileCitation>,
    pub query_interpretation: String,
    pub total_chunks_found: usize,
    pub chunks_returned: usize,
    pub generated_at: DateTime<Utc>,
    pub model_used: String,
    pub generation_method: GenerationMethod,
}

/// Web-search overview response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WebSearchOverviewResponse {
    pub success: bool,
    pub summary: String,
    pub key_themes: Vec<WebTheme>,
    pub top_sources: Vec<WebSource>,
    pub suggested_angles: Vec<String>,
    pub coverage_assessment: String,
    pub citations: Vec<WebCitation>,
    pub search_results_found: usize,
    pub results_analyzed: usize,
    pub generated_at: DateTime<Utc>,
    pub model_used: String,
    pub generation_method: GenerationMethod,
}

/// Web-search detailed response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WebSearchDetailedResponse {
    pub success: bool,
    pub facts: Vec<WebFact>,
    pub synthesized_content: String,
    pub citations: Vec<WebCitation>,
    pub data_recency: String,
    pub source_diversity: String,
    pub search_results_found: usize,
    pub facts_extracted: usize,
    pub generated_at: DateTime<Utc>,
    pub model_used: String,
    pub generation_method: GenerationMethod,
}
