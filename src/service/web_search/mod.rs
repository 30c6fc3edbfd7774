//! Web-search-grounded generation service
//!
//! Researches a topic or query via the provider's dynamic search
//! grounding. Like file RAG, these endpoints never fall back to plain
//! generation on failure; the resulting error carries a suggestion to
//! use file RAG instead.

use std::sync::Arc;

use chrono::Utc;

use crate::model::request::{WebSearchDetailedRequest, WebSearchOverviewRequest};
use crate::model::response::{
    GenerationMethod, MODEL_ID, WebSearchDetailedResponse, WebSearchOverviewResponse,
};
use crate::provider::{GenerationProvider, GenerationTuning, GroundingTool};
use crate::service::citations::extract_web_citations;
use crate::service::extraction::{get_str, get_string_list, parse_json_response};
use crate::service::to_context_json;
use crate::service::web_search::mappers::{map_web_facts, map_web_sources, map_web_themes};
use crate::service::web_search::prompts::{build_detailed_prompt, build_overview_prompt};

pub mod error;
pub mod mappers;
pub mod prompts;

pub use error::{WEB_SEARCH_FAILURE_SUGGESTION, WebSearchError};

const OVERVIEW_TUNING: GenerationTuning = GenerationTuning {
    temperature: 0.5,
    max_output_tokens: 4096,
};

const DETAILED_TUNING: GenerationTuning = GenerationTuning {
    temperature: 0.2,
    max_output_tokens: 4096,
};

/// Dynamic retrieval threshold for broad topic research
const OVERVIEW_DYNAMIC_THRESHOLD: f64 = 0.6;

/// Dynamic retrieval threshold for fact lookups
const DETAILED_DYNAMIC_THRESHOLD: f64 = 0.8;

/// Search result count the provider typically fetches per query
const SEARCH_RESULTS_FETCHED: usize = 10;

/// Service answering web-search overview and detailed requests
pub struct WebSearchService {
    provider: Arc<dyn GenerationProvider>,
}

impl WebSearchService {
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        Self { provider }
    }

    /// High-level web research overview for a topic
    pub async fn overview(
        &self,
        request: &WebSearchOverviewRequest,
    ) -> Result<WebSearchOverviewResponse, WebSearchError> {
        let context_json = to_context_json(&request.context);
        let prompt = build_overview_prompt(
            &request.topic,
            &context_json,
            request.industry_focus.as_deref(),
            &request.recency_preference,
        );

        tracing::debug!(topic = %request.topic, "Invoking web-grounded overview generation");

        let reply = self
            .provider
            .generate(
                &prompt,
                &GroundingTool::WebSearch {
                    dynamic_threshold: OVERVIEW_DYNAMIC_THRESHOLD,
                },
                OVERVIEW_TUNING,
            )
            .await
            .map_err(WebSearchError::Overview)?;

        let parsed = parse_json_response(&reply.text());
        let citations = extract_web_citations(&reply);

        let key_themes = map_web_themes(&parsed);
        let top_sources = map_web_sources(&parsed);

        tracing::info!(
            themes = key_themes.len(),
            sources = top_sources.len(),
            citations = citations.len(),
            "Web search overview generated"
        );

        let results_analyzed = if citations.is_empty() {
            top_sources.len()
        } else {
            citations.len()
        };

        Ok(WebSearchOverviewResponse {
            success: true,
            summary: get_str(&parsed, "summary", ""),
            key_themes,
            top_sources,
            suggested_angles: get_string_list(&parsed, "suggested_angles"),
            coverage_assessment: get_str(&parsed, "coverage_assessment", ""),
            citations,
            search_results_found: SEARCH_RESULTS_FETCHED,
            results_analyzed,
            generated_at: Utc::now(),
            model_used: MODEL_ID.to_string(),
            generation_method: GenerationMethod::WebOverview,
        })
    }

    /// Specific facts with citations for a query
    pub async fn detailed(
        &self,
        request: &WebSearchDetailedRequest,
    ) -> Result<WebSearchDetailedResponse, WebSearchError> {
        let context_json = to_context_json(&request.context);
        let data_types = request.data_types();
        let prompt = build_detailed_prompt(
            &request.query,
            &context_json,
            &data_types,
            request.recency_required,
        );

        tracing::debug!(query = %request.query, "Invoking web-grounded fact lookup");

        let reply = self
            .provider
            .generate(
                &prompt,
                &GroundingTool::WebSearch {
                    dynamic_threshold: DETAILED_DYNAMIC_THRESHOLD,
                },
                DETAILED_TUNING,
            )
            .await
            .map_err(WebSearchError::Detailed)?;

        let parsed = parse_json_response(&reply.text());
        let citations = extract_web_citations(&reply);
        let facts = map_web_facts(&parsed);

        tracing::info!(
            facts = facts.len(),
            citations = citations.len(),
            "Web search facts generated"
        );

        let facts_extracted = facts.len();

        Ok(WebSearchDetailedResponse {
            success: true,
            facts,
            synthesized_content: get_str(&parsed, "synthesized_content", ""),
            citations,
            data_recency: get_str(&parsed, "data_recency", "recent"),
            source_diversity: get_str(&parsed, "source_diversity", "diverse"),
            search_results_found: SEARCH_RESULTS_FETCHED,
            facts_extracted,
            generated_at: Utc::now(),
            model_used: MODEL_ID.to_string(),
            generation_method: GenerationMethod::WebDetailed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ProviderError, RawModelReply};
    use crate::service::test_support::MockProvider;
    use serde_json::Map;

    fn overview_request() -> WebSearchOverviewRequest {
        WebSearchOverviewRequest {
            topic: "EV adoption".to_string(),
            context: Map::new(),
            industry_focus: None,
            recency_preference: "recent".to_string(),
        }
    }

    #[tokio::test]
    async fn test_overview_failure_is_fatal_single_call() {
        let provider = Arc::new(MockProvider::failing(|| ProviderError::Status {
            status: 429,
            body: "quota exceeded".to_string(),
        }));
        let service = WebSearchService::new(provider.clone());

        let result = service.overview(&overview_request()).await;

        assert!(matches!(result, Err(WebSearchError::Overview(_))));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_overview_uses_web_search_grounding() {
        let reply: RawModelReply = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "{\"summary\": \"brief\"}"}]}}]
        }))
        .unwrap();
        let provider = Arc::new(MockProvider::returning(vec![Ok(reply)]));
        let service = WebSearchService::new(provider.clone());

        let response = service.overview(&overview_request()).await.unwrap();

        assert_eq!(response.summary, "brief");
        assert_eq!(response.search_results_found, SEARCH_RESULTS_FETCHED);
        assert_eq!(response.generation_method, GenerationMethod::WebOverview);
        assert!(matches!(
            provider.groundings()[0],
            GroundingTool::WebSearch { .. }
        ));
    }

    #[tokio::test]
    async fn test_detailed_counts_and_citations() {
        let payload = serde_json::json!({
            "facts": [
                {"content": "Sales rose 30%", "confidence_score": 0.9},
                {"content": "Prices fell", "confidence_score": 0.8}
            ],
            "synthesized_content": "The market grew.",
            "data_recency": "current",
            "source_diversity": "diverse"
        });
        let reply: RawModelReply = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": format!("```json\n{payload}\n```")}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "https://example.com/a", "title": "A"}}
                    ]
                }
            }]
        }))
        .unwrap();
        let provider = Arc::new(MockProvider::returning(vec![Ok(reply)]));
        let service = WebSearchService::new(provider);

        let request = WebSearchDetailedRequest {
            query: "EV sales".to_string(),
            context: Map::new(),
            data_types_needed: None,
            recency_required: true,
        };
        let response = service.detailed(&request).await.unwrap();

        assert_eq!(response.facts_extracted, 2);
        assert_eq!(response.citations.len(), 1);
        assert_eq!(response.data_recency, "current");
        assert_eq!(response.generation_method, GenerationMethod::WebDetailed);
    }
}
