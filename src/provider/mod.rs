//! Generation provider capability and its wire types
//!
//! The rest of the service treats the provider as an opaque capability:
//! given a prompt, an optional grounding tool and tuning knobs, return
//! text plus optional grounding metadata. The concrete Gemini client
//! lives in [`gemini`]; services depend on the [`GenerationProvider`]
//! trait so orchestration can be tested against mocks.

mod gemini;

use async_trait::async_trait;
use serde::Deserialize;

pub use gemini::GeminiClient;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed provider reply: {0}")]
    MalformedReply(String),
}

/// Grounding tool attached to a generation call
#[derive(Debug, Clone, PartialEq)]
pub enum GroundingTool {
    /// Plain generation, no grounding
    None,
    /// Ground against a file-search store
    FileSearch { store_name: String },
    /// Ground against dynamic web search results
    WebSearch { dynamic_threshold: f64 },
}

/// Per-call generation tuning
#[derive(Debug, Clone, Copy)]
pub struct GenerationTuning {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

/// Opaque text-generation capability
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        grounding: &GroundingTool,
        tuning: GenerationTuning,
    ) -> Result<RawModelReply, ProviderError>;
}

// ---------------------------------------------------------------------------
// Wire types
//
// Every field below is optional on the wire. Absence is never an error:
// the citation normalizer treats missing fields as "value not present".
// ---------------------------------------------------------------------------

/// One reply from the provider, consumed immediately and never persisted
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModelReply {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl RawModelReply {
    /// Concatenated text of the first candidate's parts
    pub fn text(&self) -> String {
        let Some(candidate) = self.candidates.first() else {
            return String::new();
        };
        let Some(content) = &candidate.content else {
            return String::new();
        };

        let mut out = String::new();
        for part in &content.parts {
            if let Some(text) = &part.text {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(text);
            }
        }
        out
    }

    /// First candidate, if the provider returned any
    pub fn first_candidate(&self) -> Option<&Candidate> {
        self.candidates.first()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
    #[serde(default)]
    pub grounding_supports: Option<Vec<GroundingSupport>>,
    #[serde(default)]
    pub search_entry_point: Option<SearchEntryPoint>,
    #[serde(default)]
    pub web_search_queries: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingChunk {
    #[serde(default)]
    pub retrieved_context: Option<RetrievedContext>,
    #[serde(default)]
    pub web: Option<WebGrounding>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    /// Snippet some web-grounded replies attach directly to the chunk
    #[serde(default)]
    pub content: Option<String>,
}

/// Which grounding mechanism produced a chunk
///
/// Determined by which sub-shape is present, so extraction branches on
/// an explicit discriminant instead of probing attributes.
#[derive(Debug)]
pub enum ChunkSource<'a> {
    FileGrounded(&'a RetrievedContext),
    WebGrounded(&'a WebGrounding),
    Unrecognized,
}

impl GroundingChunk {
    /// Classify the chunk by its populated sub-shape
    pub fn source(&self) -> ChunkSource<'_> {
        if let Some(ctx) = &self.retrieved_context {
            ChunkSource::FileGrounded(ctx)
        } else if let Some(web) = &self.web {
            ChunkSource::WebGrounded(web)
        } else {
            ChunkSource::Unrecognized
        }
    }
}

/// File-backed grounding context (file-search tool)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievedContext {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Web-backed grounding source (search tool)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebGrounding {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Secondary grounding shape mapping reply segments to chunk indices
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingSupport {
    #[serde(default)]
    pub grounding_chunk_indices: Option<Vec<i32>>,
    #[serde(default)]
    pub confidence_scores: Option<Vec<f64>>,
}

/// Tertiary grounding shape carrying rendered search-result HTML
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntryPoint {
    #[serde(default)]
    pub rendered_content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_text_joins_parts() {
        let reply: RawModelReply = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "first"}, {"text": "second"}]}}]}"#,
        )
        .unwrap();

        assert_eq!(reply.text(), "first\nsecond");
    }

    #[test]
    fn test_reply_text_empty_without_candidates() {
        let reply = RawModelReply::default();
        assert_eq!(reply.text(), "");
    }

    #[test]
    fn test_chunk_source_classification() {
        let file_chunk: GroundingChunk = serde_json::from_str(
            r#"{"retrievedContext": {"title": "report.pdf", "uri": "files/abc"}}"#,
        )
        .unwrap();
        assert!(matches!(file_chunk.source(), ChunkSource::FileGrounded(_)));

        let web_chunk: GroundingChunk =
            serde_json::from_str(r#"{"web": {"uri": "https://example.com", "title": "Example"}}"#)
                .unwrap();
        assert!(matches!(web_chunk.source(), ChunkSource::WebGrounded(_)));

        let empty_chunk: GroundingChunk = serde_json::from_str("{}").unwrap();
        assert!(matches!(empty_chunk.source(), ChunkSource::Unrecognized));
    }
}
