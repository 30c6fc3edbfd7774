//! Typed content items mapped out of parsed model replies
//!
//! Each record is flat and defensively defaulted: strings fall back to
//! empty, lists to empty, scores to a per-kind constant. The mappers in
//! the service layer drop individual malformed entries rather than
//! failing the batch.

use serde::Serialize;
use utoipa::ToSchema;

/// Default relevance/confidence applied when the model omits a score
pub const DEFAULT_SCORE: f64 = 0.8;

/// Default confidence for extracted web facts
pub const DEFAULT_FACT_CONFIDENCE: f64 = 0.7;

/// A theme identified across the uploaded documents
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContentTheme {
    pub theme_name: String,
    pub description: String,
    pub relevance_score: f64,
    pub source_files: Vec<String>,
    pub key_points: Vec<String>,
}

/// Summary of data available for a category (metrics, time periods)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DataPointSummary {
    pub category: String,
    pub available_metrics: Vec<String>,
    pub time_periods: Option<Vec<String>>,
    pub source_file: String,
}

/// Structural summary of one uploaded document
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DocumentStructure {
    pub file_name: String,
    pub document_type: String,
    pub sections: Vec<String>,
    pub page_count: Option<i64>,
    pub has_tables: bool,
    pub has_charts: bool,
}

/// A specific piece of content pulled from the documents for a query
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContentChunk {
    pub content: String,
    pub content_type: String,
    pub source_file: String,
    pub source_uri: String,
    pub page_reference: Option<i64>,
    pub section_reference: Option<String>,
    pub confidence_score: f64,
    pub relevance_to_query: f64,
}

/// A theme identified from web research
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WebTheme {
    pub theme_name: String,
    pub description: String,
    /// "mainstream" | "emerging" | "contrarian"
    pub perspective: String,
    pub supporting_sources: Vec<String>,
}

/// A web source the model judged reliable and relevant
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WebSource {
    pub title: String,
    pub url: String,
    pub domain: String,
    pub source_type: String,
    pub published_date: Option<String>,
    pub reliability_indicator: String,
    pub key_insight: String,
}

/// A single fact, statistic or quote found on the web
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WebFact {
    pub fact_type: String,
    pub content: String,
    pub source_url: String,
    pub source_domain: String,
    pub source_title: String,
    pub published_date: Option<String>,
    pub verification_status: String,
    pub confidence_score: f64,
}
