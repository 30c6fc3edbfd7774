//! Legacy content generation service
//!
//! The single-endpoint generation path, kept for backward
//! compatibility. Grounding here is a nice-to-have: when a store is
//! configured and the grounded call fails, the request silently falls
//! back to plain generation. Only a plain-generation failure surfaces
//! to the caller.

use std::sync::Arc;

use chrono::Utc;

use crate::model::citation::GroundingSummary;
use crate::model::request::ContentGenerationRequest;
use crate::model::response::{ContentGenerationResponse, GenerationMethod, MODEL_ID};
use crate::provider::{GenerationProvider, GenerationTuning, GroundingTool, RawModelReply};
use crate::service::citations::extract_legacy_citations;
use crate::service::extraction::parse_json_response;
use crate::service::to_context_json;

pub mod error;

pub use error::ContentServiceError;

const LEGACY_TUNING: GenerationTuning = GenerationTuning {
    temperature: 0.7,
    max_output_tokens: 2048,
};

/// Service behind the legacy content generation endpoint
pub struct ContentService {
    provider: Arc<dyn GenerationProvider>,
}

impl ContentService {
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        Self { provider }
    }

    /// Generate slide content, grounded when a store is configured
    pub async fn generate(
        &self,
        request: &ContentGenerationRequest,
    ) -> Result<ContentGenerationResponse, ContentServiceError> {
        let prompt = format!(
            "{}\n\nContext: {}",
            request.prompt,
            to_context_json(&request.context)
        );

        if let Some(store_name) = request.store_name() {
            match self
                .provider
                .generate(
                    &prompt,
                    &GroundingTool::FileSearch {
                        store_name: store_name.to_string(),
                    },
                    LEGACY_TUNING,
                )
                .await
            {
                Ok(reply) => {
                    tracing::info!(store = %store_name, "Grounded content generation succeeded");
                    return Ok(self.assemble(&reply, GenerationMethod::Rag));
                }
                Err(e) => {
                    tracing::warn!(
                        store = %store_name,
                        error = %e,
                        "Grounded generation failed, falling back to standard generation"
                    );
                }
            }
        }

        let reply = self
            .provider
            .generate(&prompt, &GroundingTool::None, LEGACY_TUNING)
            .await
            .map_err(ContentServiceError::Generation)?;

        Ok(self.assemble(&reply, GenerationMethod::StandardLlm))
    }

    fn assemble(
        &self,
        reply: &RawModelReply,
        method: GenerationMethod,
    ) -> ContentGenerationResponse {
        let content = parse_json_response(&reply.text());

        let grounding = match method {
            GenerationMethod::Rag => GroundingSummary {
                used_files: true,
                // File count is unknown without querying the store
                file_count: 0,
                citations: extract_legacy_citations(reply),
            },
            _ => GroundingSummary {
                used_files: false,
                file_count: 0,
                citations: Vec::new(),
            },
        };

        ContentGenerationResponse {
            content,
            grounding,
            generated_at: Utc::now(),
            model_used: MODEL_ID.to_string(),
            generation_method: method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use crate::service::test_support::MockProvider;
    use serde_json::Map;

    fn request_with_store(store: Option<&str>) -> ContentGenerationRequest {
        ContentGenerationRequest {
            session_id: None,
            user_id: None,
            prompt: "Summarize Q4 revenue".to_string(),
            slide_type: "text".to_string(),
            context: Map::new(),
            rag_config: store.map(|s| crate::model::request::RagConfig {
                store_name: Some(s.to_string()),
            }),
        }
    }

    fn plain_reply(text: &str) -> RawModelReply {
        serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": text}]}}]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_grounded_failure_falls_back_to_standard() {
        let provider = Arc::new(MockProvider::returning(vec![
            Err(ProviderError::Status {
                status: 500,
                body: "store unavailable".to_string(),
            }),
            Ok(plain_reply("Q4 revenue grew 10%.")),
        ]));
        let service = ContentService::new(provider.clone());

        let response = service
            .generate(&request_with_store(Some("fileSearchStores/s")))
            .await
            .unwrap();

        assert_eq!(response.generation_method, GenerationMethod::StandardLlm);
        assert!(!response.grounding.used_files);
        assert!(response.grounding.citations.is_empty());
        assert_eq!(
            response.content,
            serde_json::json!({"raw_text": "Q4 revenue grew 10%."})
        );
        assert_eq!(response.model_used, "gemini-2.0-flash");

        // Fallback made exactly two calls: grounded, then plain
        assert_eq!(provider.call_count(), 2);
        assert!(matches!(
            provider.groundings()[0],
            GroundingTool::FileSearch { .. }
        ));
        assert_eq!(provider.groundings()[1], GroundingTool::None);
    }

    #[tokio::test]
    async fn test_no_store_goes_straight_to_standard() {
        let provider = Arc::new(MockProvider::returning(vec![Ok(plain_reply(
            "plain answer",
        ))]));
        let service = ContentService::new(provider.clone());

        let response = service.generate(&request_with_store(None)).await.unwrap();

        assert_eq!(response.generation_method, GenerationMethod::StandardLlm);
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.groundings()[0], GroundingTool::None);
    }

    #[tokio::test]
    async fn test_grounded_success_reports_rag() {
        let reply: RawModelReply = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "```json\n{\"title\": \"Q4\"}\n```"}]},
                "groundingMetadata": {
                    "groundingChunks": [{"retrievedContext": {"title": "q4.pdf"}}]
                }
            }]
        }))
        .unwrap();
        let provider = Arc::new(MockProvider::returning(vec![Ok(reply)]));
        let service = ContentService::new(provider.clone());

        let response = service
            .generate(&request_with_store(Some("fileSearchStores/s")))
            .await
            .unwrap();

        assert_eq!(response.generation_method, GenerationMethod::Rag);
        assert!(response.grounding.used_files);
        assert_eq!(response.grounding.citations.len(), 1);
        assert_eq!(response.content, serde_json::json!({"title": "Q4"}));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_both_paths_failing_is_fatal() {
        let provider = Arc::new(MockProvider::failing(|| ProviderError::Status {
            status: 500,
            body: "down".to_string(),
        }));
        let service = ContentService::new(provider.clone());

        let result = service
            .generate(&request_with_store(Some("fileSearchStores/s")))
            .await;

        assert!(matches!(result, Err(ContentServiceError::Generation(_))));
        assert_eq!(provider.call_count(), 2);
    }
}
