//! Mapping from parsed model JSON to typed file-RAG records
//!
//! Each mapper walks a list in the parsed value, applies per-field
//! defaults and drops individual entries that fail coercion. The batch
//! itself never fails and input order is preserved.

use serde_json::Value;

use crate::model::content::{
    ContentChunk, ContentTheme, DEFAULT_SCORE, DataPointSummary, DocumentStructure,
};
use crate::service::extraction::{get_array, get_str, get_string_list};
use crate::service::fields::{coerce_opt_int, coerce_score, opt_str};

/// Map the "themes" list of an overview reply
pub fn map_themes(parsed: &Value) -> Vec<ContentTheme> {
    get_array(parsed, "themes")
        .iter()
        .filter_map(map_theme)
        .collect()
}

fn map_theme(entry: &Value) -> Option<ContentTheme> {
    let relevance_score = coerce_score(entry.get("relevance_score"), DEFAULT_SCORE).ok()?;

    Some(ContentTheme {
        theme_name: get_str(entry, "theme_name", "Unknown"),
        description: get_str(entry, "description", ""),
        relevance_score,
        source_files: get_string_list(entry, "source_files"),
        key_points: get_string_list(entry, "key_points"),
    })
}

/// Map the "data_points" list of an overview reply
pub fn map_data_points(parsed: &Value) -> Vec<DataPointSummary> {
    get_array(parsed, "data_points")
        .iter()
        .map(|entry| DataPointSummary {
            category: get_str(entry, "category", "General"),
            available_metrics: get_string_list(entry, "available_metrics"),
            time_periods: entry
                .get("time_periods")
                .and_then(Value::as_array)
                .map(|list| {
                    list.iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                }),
            source_file: get_str(entry, "source_file", "Unknown"),
        })
        .collect()
}

/// Map the "document_structures" list of an overview reply
pub fn map_document_structures(parsed: &Value) -> Vec<DocumentStructure> {
    get_array(parsed, "document_structures")
        .iter()
        .filter_map(map_document_structure)
        .collect()
}

fn map_document_structure(entry: &Value) -> Option<DocumentStructure> {
    let page_count = coerce_opt_int(entry.get("page_count")).ok()?;

    Some(DocumentStructure {
        file_name: get_str(entry, "file_name", "Unknown"),
        document_type: get_str(entry, "document_type", "document"),
        sections: get_string_list(entry, "sections"),
        page_count,
        has_tables: entry
            .get("has_tables")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        has_charts: entry
            .get("has_charts")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}

/// Map the "content_chunks" list of a detailed reply
pub fn map_content_chunks(parsed: &Value, store_name: &str) -> Vec<ContentChunk> {
    get_array(parsed, "content_chunks")
        .iter()
        .filter_map(|entry| map_content_chunk(entry, store_name))
        .collect()
}

fn map_content_chunk(entry: &Value, store_name: &str) -> Option<ContentChunk> {
    let confidence_score = coerce_score(entry.get("confidence_score"), DEFAULT_SCORE).ok()?;
    let relevance_to_query = coerce_score(entry.get("relevance_to_query"), DEFAULT_SCORE).ok()?;
    let page_reference = coerce_opt_int(entry.get("page_reference")).ok()?;

    Some(ContentChunk {
        content: get_str(entry, "content", ""),
        content_type: get_str(entry, "content_type", "text"),
        source_file: get_str(entry, "source_file", "Unknown"),
        source_uri: get_str(entry, "source_uri", store_name),
        page_reference,
        section_reference: opt_str(entry.get("section_reference")),
        confidence_score,
        relevance_to_query,
    })
}
