//! Mapping from parsed model JSON to typed web research records

use serde_json::Value;

use crate::model::content::{DEFAULT_FACT_CONFIDENCE, WebFact, WebSource, WebTheme};
use crate::service::citations::domain_from_uri;
use crate::service::extraction::{get_array, get_str, get_string_list};
use crate::service::fields::{coerce_score, opt_str};

/// Map the "key_themes" list of an overview reply
pub fn map_web_themes(parsed: &Value) -> Vec<WebTheme> {
    get_array(parsed, "key_themes")
        .iter()
        .map(|entry| WebTheme {
            theme_name: get_str(entry, "theme_name", "Unknown"),
            description: get_str(entry, "description", ""),
            perspective: get_str(entry, "perspective", "mainstream"),
            supporting_sources: get_string_list(entry, "supporting_sources"),
        })
        .collect()
}

/// Map the "top_sources" list of an overview reply
///
/// A missing domain is derived from the URL the same way citation
/// normalization derives it.
pub fn map_web_sources(parsed: &Value) -> Vec<WebSource> {
    get_array(parsed, "top_sources")
        .iter()
        .map(|entry| {
            let url = get_str(entry, "url", "");
            let mut domain = get_str(entry, "domain", "");
            if domain.is_empty() && !url.is_empty() {
                domain = domain_from_uri(&url);
            }

            WebSource {
                title: get_str(entry, "title", "Unknown"),
                url,
                domain,
                source_type: get_str(entry, "source_type", "unknown"),
                published_date: opt_str(entry.get("published_date")),
                reliability_indicator: get_str(entry, "reliability_indicator", "medium"),
                key_insight: get_str(entry, "key_insight", ""),
            }
        })
        .collect()
}

/// Map the "facts" list of a detailed reply
pub fn map_web_facts(parsed: &Value) -> Vec<WebFact> {
    get_array(parsed, "facts")
        .iter()
        .filter_map(map_web_fact)
        .collect()
}

fn map_web_fact(entry: &Value) -> Option<WebFact> {
    let confidence_score =
        coerce_score(entry.get("confidence_score"), DEFAULT_FACT_CONFIDENCE).ok()?;

    let source_url = get_str(entry, "source_url", "");
    let mut source_domain = get_str(entry, "source_domain", "");
    if source_domain.is_empty() && !source_url.is_empty() {
        source_domain = domain_from_uri(&source_url);
    }

    Some(WebFact {
        fact_type: get_str(entry, "fact_type", "claim"),
        content: get_str(entry, "content", ""),
        source_url,
        source_domain,
        source_title: get_str(entry, "source_title", "Unknown"),
        published_date: opt_str(entry.get("published_date")),
        verification_status: get_str(entry, "verification_status", "unverified"),
        confidence_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_theme_defaults() {
        let parsed = json!({"key_themes": [{"theme_name": "Adoption"}]});
        let themes = map_web_themes(&parsed);

        assert_eq!(themes[0].perspective, "mainstream");
        assert!(themes[0].supporting_sources.is_empty());
    }

    #[test]
    fn test_source_domain_derived_from_url() {
        let parsed = json!({"top_sources": [
            {"title": "EV report", "url": "https://news.example.org/ev/2024"},
            {"title": "No scheme", "url": "weird-url"}
        ]});

        let sources = map_web_sources(&parsed);
        assert_eq!(sources[0].domain, "news.example.org");
        assert_eq!(sources[1].domain, "");
    }

    #[test]
    fn test_fact_null_confidence_dropped() {
        let parsed = json!({"facts": [
            {"content": "kept"},
            {"content": "nulled", "confidence_score": null}
        ]});

        let facts = map_web_facts(&parsed);
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].content, "kept");
    }

    #[test]
    fn test_fact_defaults_and_drop() {
        let parsed = json!({"facts": [
            {"content": "EV sales rose 30% in 2024"},
            {"content": "bad score", "confidence_score": {"value": 1}},
            {"content": "quoted", "confidence_score": 0.95,
             "source_url": "https://gov.example/stats"}
        ]});

        let facts = map_web_facts(&parsed);
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].confidence_score, DEFAULT_FACT_CONFIDENCE);
        assert_eq!(facts[0].fact_type, "claim");
        assert_eq!(facts[0].verification_status, "unverified");
        assert_eq!(facts[1].source_domain, "gov.example");
    }
}
