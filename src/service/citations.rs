//! Citation normalization from provider grounding metadata
//!
//! Turns the provider's heterogeneous grounding shapes into uniform
//! citation records. Absent fields are "value not present", never an
//! error: a reply with no candidate, no metadata or no chunks yields an
//! empty list. Order follows the provider, no deduplication.

use crate::model::citation::{FileCitation, LegacyCitation, LegacyCitationChunk, WebCitation};
use crate::provider::{ChunkSource, RawModelReply};

/// Snippet length cap, in characters
const SNIPPET_MAX_CHARS: usize = 500;

/// Confidence assumed for file citations when the provider omits a score
pub const FILE_CITATION_DEFAULT_CONFIDENCE: f64 = 0.9;

/// Confidence assumed for web citations when the provider omits a score
pub const WEB_CITATION_DEFAULT_CONFIDENCE: f64 = 0.8;

/// Extract file-backed citations from a grounded reply
///
/// Chunks whose source is not the file-search tool are skipped. The
/// store name stands in for the file URI when the provider omits one.
pub fn extract_file_citations(reply: &RawModelReply, store_name: &str) -> Vec<FileCitation> {
    let mut citations = Vec::new();

    let Some(chunks) = grounding_chunks(reply) else {
        return citations;
    };

    for chunk in chunks {
        if let ChunkSource::FileGrounded(ctx) = chunk.source() {
            citations.push(FileCitation {
                source_type: "file".to_string(),
                file_name: ctx.title.clone().unwrap_or_else(|| "Unknown".to_string()),
                file_uri: ctx.uri.clone().unwrap_or_else(|| store_name.to_string()),
                page: None,
                section: None,
                content_snippet: truncate_snippet(ctx.text.as_deref().unwrap_or("")),
                confidence: clamp_confidence(
                    chunk
                        .confidence_score
                        .unwrap_or(FILE_CITATION_DEFAULT_CONFIDENCE),
                ),
            });
        }
    }

    citations
}

/// Extract web-backed citations from a grounded reply
pub fn extract_web_citations(reply: &RawModelReply) -> Vec<WebCitation> {
    let mut citations = Vec::new();

    let Some(candidate) = reply.first_candidate() else {
        return citations;
    };
    let Some(metadata) = &candidate.grounding_metadata else {
        return citations;
    };

    if let Some(chunks) = &metadata.grounding_chunks {
        for chunk in chunks {
            if let ChunkSource::WebGrounded(web) = chunk.source() {
                let url = web.uri.clone().unwrap_or_default();

                citations.push(WebCitation {
                    source_type: "web".to_string(),
                    url: url.clone(),
                    domain: domain_from_uri(&url),
                    title: web.title.clone().unwrap_or_else(|| "Unknown".to_string()),
                    published_date: None,
                    content_snippet: truncate_snippet(chunk.content.as_deref().unwrap_or("")),
                    confidence: clamp_confidence(
                        chunk
                            .confidence_score
                            .unwrap_or(WEB_CITATION_DEFAULT_CONFIDENCE),
                    ),
                });
            }
        }
    }

    // Secondary shape: grounding supports map reply segments to chunk
    // indices. Observed in some replies when no chunks are present, but
    // never carried enough data to build a citation from. Recognized as
    // a placeholder; intentionally yields nothing.
    if citations.is_empty() {
        if let Some(supports) = &metadata.grounding_supports {
            for support in supports {
                let _ = &support.grounding_chunk_indices;
            }
        }
    }

    // Tertiary shape: the search entry point carries rendered HTML of
    // the search results page. Recognized but not parsed into citations.
    if let Some(entry_point) = &metadata.search_entry_point {
        let _ = &entry_point.rendered_content;
    }

    citations
}

/// Legacy citation extraction for the backward-compatible content endpoint
///
/// Kept shape-compatible with what existing clients expect: one
/// citation per grounding chunk, identifier fields left at "Unknown",
/// and the single chunk snippet taken from the web title when present.
pub fn extract_legacy_citations(reply: &RawModelReply) -> Vec<LegacyCitation> {
    let mut citations = Vec::new();

    let Some(chunks) = grounding_chunks(reply) else {
        return citations;
    };

    for chunk in chunks {
        let content = match chunk.source() {
            ChunkSource::WebGrounded(web) => web
                .title
                .clone()
                .unwrap_or_else(|| "Content from file".to_string()),
            _ => "Content from file".to_string(),
        };

        citations.push(LegacyCitation {
            file_name: "Unknown".to_string(),
            file_uri: "Unknown".to_string(),
            chunks: vec![LegacyCitationChunk {
                content,
                page: None,
                confidence: Some(FILE_CITATION_DEFAULT_CONFIDENCE),
            }],
        });
    }

    citations
}

/// Derive a host name by splitting the URI on the scheme separator
///
/// A URI without "//" yields an empty string rather than an error.
pub fn domain_from_uri(uri: &str) -> String {
    let Some((_, rest)) = uri.split_once("//") else {
        return String::new();
    };
    rest.split('/').next().unwrap_or("").to_string()
}

fn grounding_chunks(reply: &RawModelReply) -> Option<&[crate::provider::GroundingChunk]> {
    reply
        .first_candidate()?
        .grounding_metadata
        .as_ref()?
        .grounding_chunks
        .as_deref()
}

fn truncate_snippet(text: &str) -> String {
    text.chars().take(SNIPPET_MAX_CHARS).collect()
}

/// Clamp a confidence score into [0, 1]
pub fn clamp_confidence(score: f64) -> f64 {
    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_with_metadata(metadata: serde_json::Value) -> RawModelReply {
        serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "grounded answer"}]},
                "groundingMetadata": metadata
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_no_candidates_yields_empty() {
        let reply = RawModelReply::default();
        assert!(extract_file_citations(&reply, "fileSearchStores/s").is_empty());
        assert!(extract_web_citations(&reply).is_empty());
        assert!(extract_legacy_citations(&reply).is_empty());
    }

    #[test]
    fn test_missing_metadata_yields_empty() {
        let reply: RawModelReply = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "plain answer"}]}}]
        }))
        .unwrap();

        assert!(extract_file_citations(&reply, "fileSearchStores/s").is_empty());
        assert!(extract_web_citations(&reply).is_empty());
    }

    #[test]
    fn test_file_citation_fields() {
        let reply = reply_with_metadata(serde_json::json!({
            "groundingChunks": [{
                "retrievedContext": {
                    "title": "q4_report.pdf",
                    "uri": "files/q4-report",
                    "text": "Revenue grew 10% in Q4."
                },
                "confidenceScore": 0.95
            }]
        }));

        let citations = extract_file_citations(&reply, "fileSearchStores/s");
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].source_type, "file");
        assert_eq!(citations[0].file_name, "q4_report.pdf");
        assert_eq!(citations[0].file_uri, "files/q4-report");
        assert_eq!(citations[0].content_snippet, "Revenue grew 10% in Q4.");
        assert_eq!(citations[0].confidence, 0.95);
    }

    #[test]
    fn test_file_citation_defaults() {
        let reply = reply_with_metadata(serde_json::json!({
            "groundingChunks": [{"retrievedContext": {}}]
        }));

        let citations = extract_file_citations(&reply, "fileSearchStores/s");
        assert_eq!(citations[0].file_name, "Unknown");
        assert_eq!(citations[0].file_uri, "fileSearchStores/s");
        assert_eq!(citations[0].content_snippet, "");
        assert_eq!(citations[0].confidence, FILE_CITATION_DEFAULT_CONFIDENCE);
    }

    #[test]
    fn test_web_citation_domain_and_default_confidence() {
        let reply = reply_with_metadata(serde_json::json!({
            "groundingChunks": [{
                "web": {"uri": "https://example.com/article", "title": "Example"}
            }]
        }));

        let citations = extract_web_citations(&reply);
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].domain, "example.com");
        assert_eq!(citations[0].confidence, WEB_CITATION_DEFAULT_CONFIDENCE);
    }

    #[test]
    fn test_snippet_truncated_to_500_chars() {
        let long_text = "x".repeat(800);
        let reply = reply_with_metadata(serde_json::json!({
            "groundingChunks": [{
                "retrievedContext": {"title": "big.pdf", "text": long_text}
            }]
        }));

        let citations = extract_file_citations(&reply, "fileSearchStores/s");
        assert_eq!(citations[0].content_snippet.chars().count(), 500);
    }

    #[test]
    fn test_confidence_clamped() {
        let reply = reply_with_metadata(serde_json::json!({
            "groundingChunks": [{
                "retrievedContext": {"title": "a.pdf"},
                "confidenceScore": 1.7
            }]
        }));

        let citations = extract_file_citations(&reply, "fileSearchStores/s");
        assert_eq!(citations[0].confidence, 1.0);
    }

    #[test]
    fn test_unrecognized_chunks_skipped_order_preserved() {
        let reply = reply_with_metadata(serde_json::json!({
            "groundingChunks": [
                {"web": {"uri": "https://first.com/a"}},
                {},
                {"web": {"uri": "https://second.com/b"}}
            ]
        }));

        let citations = extract_web_citations(&reply);
        assert_eq!(citations.len(), 2);
        assert_eq!(citations[0].domain, "first.com");
        assert_eq!(citations[1].domain, "second.com");
    }

    #[test]
    fn test_grounding_supports_yield_nothing() {
        let reply = reply_with_metadata(serde_json::json!({
            "groundingSupports": [{
                "groundingChunkIndices": [0, 1],
                "confidenceScores": [0.9, 0.8]
            }]
        }));

        assert!(extract_web_citations(&reply).is_empty());
    }

    #[test]
    fn test_search_entry_point_not_parsed() {
        let reply = reply_with_metadata(serde_json::json!({
            "searchEntryPoint": {"renderedContent": "<div>results</div>"}
        }));

        assert!(extract_web_citations(&reply).is_empty());
    }

    #[test]
    fn test_domain_from_uri() {
        assert_eq!(domain_from_uri("https://example.com/article"), "example.com");
        assert_eq!(domain_from_uri("example.com/article"), "");
        assert_eq!(domain_from_uri(""), "");
        assert_eq!(domain_from_uri("https://"), "");
    }

    #[test]
    fn test_legacy_citation_shape() {
        let reply = reply_with_metadata(serde_json::json!({
            "groundingChunks": [
                {"web": {"title": "Example article"}},
                {"retrievedContext": {"title": "report.pdf"}}
            ]
        }));

        let citations = extract_legacy_citations(&reply);
        assert_eq!(citations.len(), 2);
        assert_eq!(citations[0].file_name, "Unknown");
        assert_eq!(citations[0].chunks[0].content, "Example article");
        assert_eq!(citations[1].chunks[0].content, "Content from file");
    }
}
