//! Field coercion helpers shared by the structured-field mappers
//!
//! Mapping is defensive: absent fields take defaults, numbers are
//! coerced to float (numeric strings included), and a wrong primitive
//! type where a number was required is an entry-level error the caller
//! uses to drop that single entry.

use serde_json::Value;

/// An entry field could not be coerced; the entry is dropped
#[derive(Debug)]
pub struct CoercionError;

/// Coerce an optional score field to a float clamped into [0, 1]
///
/// Absent fields take the default. An explicit null is a coercion
/// error, not an absence: a key present with null drops the entry.
/// Numeric strings are accepted the way a float() coercion would
/// accept them.
pub fn coerce_score(value: Option<&Value>, default: f64) -> Result<f64, CoercionError> {
    let score = match value {
        None => default,
        Some(value) => coerce_float(value)?,
    };
    Ok(score.clamp(0.0, 1.0))
}

/// Coerce a required numeric field to float
pub fn coerce_float(value: &Value) -> Result<f64, CoercionError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or(CoercionError),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| CoercionError),
        _ => Err(CoercionError),
    }
}

/// Coerce an optional integer field (page counts, page references)
pub fn coerce_opt_int(value: Option<&Value>) -> Result<Option<i64>, CoercionError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_i64().map(Some).ok_or(CoercionError),
        Some(_) => Err(CoercionError),
    }
}

/// Optional string field, null treated as absent
pub fn opt_str(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_default_and_clamp() {
        assert_eq!(coerce_score(None, 0.8).unwrap(), 0.8);
        assert_eq!(coerce_score(Some(&json!(1.4)), 0.8).unwrap(), 1.0);
        assert_eq!(coerce_score(Some(&json!(-0.2)), 0.8).unwrap(), 0.0);
        assert_eq!(coerce_score(Some(&json!("0.65")), 0.8).unwrap(), 0.65);
    }

    #[test]
    fn test_score_wrong_type_is_error() {
        assert!(coerce_score(Some(&json!(["not", "a", "number"])), 0.8).is_err());
        assert!(coerce_score(Some(&json!("high")), 0.8).is_err());
    }

    #[test]
    fn test_score_explicit_null_is_error_not_default() {
        assert!(coerce_score(Some(&json!(null)), 0.8).is_err());
    }

    #[test]
    fn test_opt_int() {
        assert_eq!(coerce_opt_int(None).unwrap(), None);
        assert_eq!(coerce_opt_int(Some(&json!(null))).unwrap(), None);
        assert_eq!(coerce_opt_int(Some(&json!(3))).unwrap(), Some(3));
        assert!(coerce_opt_int(Some(&json!("three"))).is_err());
    }
}
