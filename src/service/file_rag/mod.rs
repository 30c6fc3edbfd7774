//! File-grounded generation service
//!
//! Answers overview and detailed queries against a caller-supplied
//! file-search store. Grounding is the explicit purpose of these
//! endpoints, so a provider failure is a genuine error: there is no
//! fallback to ungrounded generation.

use std::sync::Arc;

use chrono::Utc;

use crate::model::request::{FileRagDetailedRequest, FileRagOverviewRequest};
use crate::model::response::{
    FileRagDetailedResponse, FileRagOverviewResponse, GenerationMethod, MODEL_ID,
};
use crate::provider::{GenerationProvider, GenerationTuning, GroundingTool};
use crate::service::citations::extract_file_citations;
use crate::service::extraction::{get_str, parse_json_response};
use crate::service::file_rag::mappers::{
    map_content_chunks, map_data_points, map_document_structures, map_themes,
};
use crate::service::file_rag::prompts::{build_detailed_prompt, build_overview_prompt};
use crate::service::to_context_json;

pub mod error;
pub mod mappers;
pub mod prompts;

pub use error::FileRagError;

const OVERVIEW_TUNING: GenerationTuning = GenerationTuning {
    temperature: 0.5,
    max_output_tokens: 4096,
};

const DETAILED_TUNING: GenerationTuning = GenerationTuning {
    temperature: 0.3,
    max_output_tokens: 4096,
};

/// Service answering file-RAG overview and detailed requests
pub struct FileRagService {
    provider: Arc<dyn GenerationProvider>,
}

impl FileRagService {
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        Self { provider }
    }

    /// High-level overview of store content for a topic
    pub async fn overview(
        &self,
        request: &FileRagOverviewRequest,
    ) -> Result<FileRagOverviewResponse, FileRagError> {
        let context_json = to_context_json(&request.context);
        let prompt = build_overview_prompt(&request.topic, &context_json, request.max_themes);

        tracing::debug!(
            store = %request.store_name,
            topic = %request.topic,
            max_themes = request.max_themes,
            "Invoking file-grounded overview generation"
        );

        let reply = self
            .provider
            .generate(
                &prompt,
                &GroundingTool::FileSearch {
                    store_name: request.store_name.clone(),
                },
                OVERVIEW_TUNING,
            )
            .await
            .map_err(FileRagError::Overview)?;

        let parsed = parse_json_response(&reply.text());
        let citations = extract_file_citations(&reply, &request.store_name);

        let themes = map_themes(&parsed);
        let data_points = map_data_points(&parsed);
        let document_structures = map_document_structures(&parsed);

        tracing::info!(
            themes = themes.len(),
            data_points = data_points.len(),
            citations = citations.len(),
            "File RAG overview generated"
        );

        let total_files_analyzed = if citations.is_empty() {
            document_structures.len()
        } else {
            citations.len()
        };

        Ok(FileRagOverviewResponse {
            success: true,
            themes,
            data_points,
            document_structures,
            total_files_analyzed,
            relevance_summary: get_str(&parsed, "relevance_summary", ""),
            citations,
            generated_at: Utc::now(),
            model_used: MODEL_ID.to_string(),
            generation_method: GenerationMethod::FileOverview,
        })
    }

    /// Specific content chunks with citations for a query
    pub async fn detailed(
        &self,
        request: &FileRagDetailedRequest,
    ) -> Result<FileRagDetailedResponse, FileRagError> {
        let context_json = to_context_json(&request.context);
        let prompt = build_detailed_prompt(
            &request.query,
            &context_json,
            request.max_chunks,
            request.min_confidence,
        );

        tracing::debug!(
            store = %request.store_name,
            query = %request.query,
            max_chunks = request.max_chunks,
            "Invoking file-grounded detailed generation"
        );

        let reply = self
            .provider
            .generate(
                &prompt,
                &GroundingTool::FileSearch {
                    store_name: request.store_name.clone(),
                },
                DETAILED_TUNING,
            )
            .await
            .map_err(FileRagError::Detailed)?;

        let parsed = parse_json_response(&reply.text());
        let citations = extract_file_citations(&reply, &request.store_name);
        let content_chunks = map_content_chunks(&parsed, &request.store_name);

        let total_chunks_found = content_chunks.len();
        let chunks_returned = total_chunks_found.min(request.max_chunks as usize);

        tracing::info!(
            chunks_found = total_chunks_found,
            chunks_returned = chunks_returned,
            citations = citations.len(),
            "File RAG detailed content generated"
        );

        Ok(FileRagDetailedResponse {
            success: true,
            content_chunks,
            synthesized_content: get_str(&parsed, "synthesized_content", ""),
            citations,
            query_interpretation: get_str(&parsed, "query_interpretation", ""),
            total_chunks_found,
            chunks_returned,
            generated_at: Utc::now(),
            model_used: MODEL_ID.to_string(),
            generation_method: GenerationMethod::FileDetailed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ProviderError, RawModelReply};
    use crate::service::test_support::MockProvider;
    use serde_json::Map;

    fn overview_request() -> FileRagOverviewRequest {
        FileRagOverviewRequest {
            store_name: "fileSearchStores/test".to_string(),
            topic: "Q4 performance".to_string(),
            context: Map::new(),
            max_themes: 5,
        }
    }

    fn detailed_request(max_chunks: u32) -> FileRagDetailedRequest {
        FileRagDetailedRequest {
            store_name: "fileSearchStores/test".to_string(),
            query: "revenue growth".to_string(),
            context: Map::new(),
            max_chunks,
            min_confidence: 0.7,
        }
    }

    fn reply_with_chunks(count: usize) -> RawModelReply {
        let chunks: Vec<_> = (0..count)
            .map(|i| serde_json::json!({"content": format!("chunk {i}"), "confidence_score": 0.9}))
            .collect();
        let payload = serde_json::json!({
            "content_chunks": chunks,
            "synthesized_content": "Revenue grew steadily.",
            "query_interpretation": "Looked for growth figures."
        });
        let text = format!("```json\n{payload}\n```");

        serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": text}]}}]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_overview_provider_failure_is_fatal_no_fallback() {
        let provider = Arc::new(MockProvider::failing(|| ProviderError::Status {
            status: 503,
            body: "unavailable".to_string(),
        }));
        let service = FileRagService::new(provider.clone());

        let result = service.overview(&overview_request()).await;

        assert!(matches!(result, Err(FileRagError::Overview(_))));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_detailed_chunk_counts_clamped_to_request() {
        let provider = Arc::new(MockProvider::returning(vec![Ok(reply_with_chunks(8))]));
        let service = FileRagService::new(provider);

        let response = service.detailed(&detailed_request(5)).await.unwrap();

        assert_eq!(response.total_chunks_found, 8);
        assert_eq!(response.chunks_returned, 5);
        assert_eq!(response.content_chunks.len(), 8);
        assert_eq!(response.model_used, "gemini-2.0-flash");
        assert_eq!(response.generation_method, GenerationMethod::FileDetailed);
    }

    #[tokio::test]
    async fn test_overview_unstructured_reply_degrades_to_empty_lists() {
        let reply: RawModelReply = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "The documents cover Q4."}]}}]
        }))
        .unwrap();
        let provider = Arc::new(MockProvider::returning(vec![Ok(reply)]));
        let service = FileRagService::new(provider);

        let response = service.overview(&overview_request()).await.unwrap();

        assert!(response.success);
        assert!(response.themes.is_empty());
        assert!(response.citations.is_empty());
        assert_eq!(response.total_files_analyzed, 0);
    }
}
