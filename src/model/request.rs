//! Request DTOs for the generation endpoints
//!
//! Bounds are validated here, before any provider call is made.

use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

pub const DEFAULT_MAX_THEMES: u32 = 5;
pub const DEFAULT_MAX_CHUNKS: u32 = 10;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.7;

const MAX_THEMES_LIMIT: u32 = 10;
const MAX_CHUNKS_LIMIT: u32 = 20;

/// A request field was outside its documented bounds
#[derive(Debug, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct RequestValidationError {
    pub field: &'static str,
    pub reason: String,
}

fn out_of_range(field: &'static str, reason: String) -> RequestValidationError {
    RequestValidationError { field, reason }
}

/// Grounding configuration for the legacy content endpoint
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RagConfig {
    /// File-search store to ground against; absent means plain generation
    pub store_name: Option<String>,
}

/// Legacy content generation request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContentGenerationRequest {
    /// Optional, carried only for logging
    pub session_id: Option<String>,
    /// Optional, carried only for logging
    pub user_id: Option<String>,
    pub prompt: String,
    pub slide_type: String,
    #[serde(default)]
    pub context: Map<String, Value>,
    pub rag_config: Option<RagConfig>,
}

impl ContentGenerationRequest {
    /// Store name to ground against, if one was supplied
    pub fn store_name(&self) -> Option<&str> {
        self.rag_config.as_ref()?.store_name.as_deref()
    }
}

/// File-RAG overview request (Director Agent use case)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FileRagOverviewRequest {
    pub store_name: String,
    pub topic: String,
    #[serde(default)]
    pub context: Map<String, Value>,
    #[serde(default = "default_max_themes")]
    pub max_themes: u32,
}

impl FileRagOverviewRequest {
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        if self.max_themes < 1 || self.max_themes > MAX_THEMES_LIMIT {
            return Err(out_of_range(
                "max_themes",
                format!("must be between 1 and {MAX_THEMES_LIMIT}"),
            ));
        }
        Ok(())
    }
}

/// File-RAG detailed request (Text Service use case)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FileRagDetailedRequest {
    pub store_name: String,
    pub query: String,
    #[serde(default)]
    pub context: Map<String, Value>,
    #[serde(default = "default_max_chunks")]
    pub max_chunks: u32,
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
}

impl FileRagDetailedRequest {
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        if self.max_chunks < 1 || self.max_chunks > MAX_CHUNKS_LIMIT {
            return Err(out_of_range(
                "max_chunks",
                format!("must be between 1 and {MAX_CHUNKS_LIMIT}"),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(out_of_range(
                "min_confidence",
                "must be between 0.0 and 1.0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Web-search overview request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct WebSearchOverviewRequest {
    pub topic: String,
    #[serde(default)]
    pub context: Map<String, Value>,
    pub industry_focus: Option<String>,
    #[serde(default = "default_recency_preference")]
    pub recency_preference: String,
}

/// Web-search detailed request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct WebSearchDetailedRequest {
    pub query: String,
    #[serde(default)]
    pub context: Map<String, Value>,
    pub data_types_needed: Option<Vec<String>>,
    #[serde(default = "default_recency_required")]
    pub recency_required: bool,
}

impl WebSearchDetailedRequest {
    /// Data types to ask for, falling back to the standard set
    pub fn data_types(&self) -> Vec<String> {
        self.data_types_needed.clone().unwrap_or_else(|| {
            vec![
                "facts".to_string(),
                "statistics".to_string(),
                "quotes".to_string(),
            ]
        })
    }
}

fn default_max_themes() -> u32 {
    DEFAULT_MAX_THEMES
}

fn default_max_chunks() -> u32 {
    DEFAULT_MAX_CHUNKS
}

fn default_min_confidence() -> f64 {
    DEFAULT_MIN_CONFIDENCE
}

fn default_recency_preference() -> String {
    "recent".to_string()
}

fn default_recency_required() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_bounds() {
        let mut request = FileRagOverviewRequest {
            store_name: "fileSearchStores/test".to_string(),
            topic: "Q4 sales".to_string(),
            context: Map::new(),
            max_themes: 5,
        };
        assert!(request.validate().is_ok());

        request.max_themes = 0;
        assert!(request.validate().is_err());

        request.max_themes = 11;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_detailed_bounds() {
        let mut request = FileRagDetailedRequest {
            store_name: "fileSearchStores/test".to_string(),
            query: "revenue".to_string(),
            context: Map::new(),
            max_chunks: 10,
            min_confidence: 0.7,
        };
        assert!(request.validate().is_ok());

        request.min_confidence = 1.5;
        assert!(request.validate().is_err());

        request.min_confidence = 0.7;
        request.max_chunks = 21;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_defaults_from_json() {
        let request: FileRagDetailedRequest = serde_json::from_str(
            r#"{"store_name": "fileSearchStores/test", "query": "revenue"}"#,
        )
        .unwrap();

        assert_eq!(request.max_chunks, DEFAULT_MAX_CHUNKS);
        assert_eq!(request.min_confidence, DEFAULT_MIN_CONFIDENCE);
    }

    #[test]
    fn test_data_types_fallback() {
        let request: WebSearchDetailedRequest =
            serde_json::from_str(r#"{"query": "EV adoption"}"#).unwrap();

        assert!(request.recency_required);
        assert_eq!(request.data_types(), vec!["facts", "statistics", "quotes"]);
    }
}
