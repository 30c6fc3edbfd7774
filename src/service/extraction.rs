//! JSON extraction from free-form model text
//!
//! Model replies may wrap their JSON payload in a fenced code block,
//! return bare JSON, or return prose. Extraction never fails: when no
//! JSON can be parsed the raw text is wrapped in a sentinel object so
//! downstream mapping can proceed without null checks.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Value, json};

/// Key of the sentinel object wrapping unparseable text
pub const RAW_TEXT_KEY: &str = "raw_text";

/// First fenced code block, language-tagged with `json` or untagged
static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?\s*\n(.*?)\n```").unwrap());

/// Extract a JSON document from model reply text
///
/// Tries the first fenced code block, then the whole text. If neither
/// parses, returns `{"raw_text": <text>}` with the input unmodified.
/// Multiple fenced blocks: only the first match is considered.
pub fn parse_json_response(text: &str) -> Value {
    if let Some(captures) = FENCE.captures(text) {
        if let Ok(value) = serde_json::from_str(&captures[1]) {
            return value;
        }
        return json!({ RAW_TEXT_KEY: text });
    }

    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => json!({ RAW_TEXT_KEY: text }),
    }
}

/// Read a field from the parsed value, tolerating non-object values
pub fn safe_get<'a>(parsed: &'a Value, key: &str) -> Option<&'a Value> {
    parsed.as_object()?.get(key)
}

/// String field with empty-string default
pub fn get_str(parsed: &Value, key: &str, default: &str) -> String {
    safe_get(parsed, key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// List field with empty-list default
pub fn get_array<'a>(parsed: &'a Value, key: &str) -> &'a [Value] {
    safe_get(parsed, key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// String-list field, skipping non-string elements
pub fn get_string_list(parsed: &Value, key: &str) -> Vec<String> {
    get_array(parsed, key)
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_fenced_block() {
        let text = "Here is the analysis:\n```json\n{\"themes\": []}\n```\nDone.";
        let parsed = parse_json_response(text);
        assert_eq!(parsed, json!({"themes": []}));
    }

    #[test]
    fn test_untagged_fenced_block() {
        let text = "```\n{\"summary\": \"ok\"}\n```";
        let parsed = parse_json_response(text);
        assert_eq!(parsed, json!({"summary": "ok"}));
    }

    #[test]
    fn test_whole_text_json() {
        let parsed = parse_json_response(r#"{"facts": [1, 2]}"#);
        assert_eq!(parsed, json!({"facts": [1, 2]}));
    }

    #[test]
    fn test_prose_becomes_sentinel() {
        let text = "Q4 revenue grew 10%.";
        let parsed = parse_json_response(text);
        assert_eq!(parsed, json!({"raw_text": "Q4 revenue grew 10%."}));
    }

    #[test]
    fn test_sentinel_is_idempotent() {
        let first = parse_json_response("not json at all");
        let raw = first["raw_text"].as_str().unwrap();
        let second = parse_json_response(raw);
        assert_eq!(first, second);
    }

    #[test]
    fn test_first_fence_wins() {
        let text = "```json\n{\"pick\": 1}\n```\n```json\n{\"pick\": 2}\n```";
        let parsed = parse_json_response(text);
        assert_eq!(parsed, json!({"pick": 1}));
    }

    #[test]
    fn test_unparseable_fence_falls_back_to_sentinel() {
        let text = "```json\n{not valid json\n```";
        let parsed = parse_json_response(text);
        assert_eq!(parsed["raw_text"].as_str().unwrap(), text);
    }

    #[test]
    fn test_safe_get_on_non_object() {
        let parsed = json!(["a", "b"]);
        assert!(safe_get(&parsed, "themes").is_none());
        assert!(get_array(&parsed, "themes").is_empty());
        assert_eq!(get_str(&parsed, "summary", "fallback"), "fallback");
    }
}
