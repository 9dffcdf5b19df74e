//! Usage records as sent by the browser extension.

mod category;
mod prompt;
mod score;

pub use category::{Category, category_for_domain, domain_matches, normalize_domain};
pub use prompt::{build_prompt, format_usage_line, usage_text};
pub use score::{PRODUCTIVE_DOMAINS, ScoreReport, category_minutes, productivity_score};

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::{CoachError, Result};

/// One observed (domain, minutes) pair.
///
/// `time` keeps the JSON number as written so the prompt shows `45`, not `45.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct UsageRecord {
    pub domain: String,
    pub time: Number,
}

impl UsageRecord {
    #[must_use]
    pub fn new(domain: impl Into<String>, time: impl Into<Number>) -> Self {
        Self { domain: domain.into(), time: time.into() }
    }

    /// Minutes as a float. Negative or non-finite values count as zero.
    #[must_use]
    pub fn minutes(&self) -> f64 {
        self.time.as_f64().filter(|m| m.is_finite() && *m > 0.0).unwrap_or(0.0)
    }
}

/// Body of `POST /analyze` and `POST /score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AnalysisRequest {
    pub usage: Vec<UsageRecord>,
}

impl AnalysisRequest {
    /// Creates a request, rejecting an empty list.
    ///
    /// # Errors
    /// Returns `CoachError::NoData` if `usage` is empty.
    pub fn new(usage: Vec<UsageRecord>) -> Result<Self> {
        if usage.is_empty() {
            return Err(CoachError::NoData);
        }
        Ok(Self { usage })
    }

    /// Reads a request from an already parsed JSON body.
    ///
    /// An absent or empty `usage` is `NoData`, whatever its JSON type
    /// (`null`, `[]`, `{}`, `""`, `0`, `false`). Every other shape problem is
    /// `MalformedInput`, including a single bad record.
    ///
    /// # Errors
    /// Returns `CoachError::NoData` or `CoachError::MalformedInput`.
    pub fn from_value(body: &Value) -> Result<Self> {
        let object = body.as_object().ok_or_else(|| {
            CoachError::MalformedInput(format!(
                "expected a JSON object body, got {}",
                json_kind(body)
            ))
        })?;

        let entries = match object.get("usage") {
            None => return Err(CoachError::NoData),
            Some(value) if is_empty_value(value) => return Err(CoachError::NoData),
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                return Err(CoachError::MalformedInput(format!(
                    "`usage` must be an array, got {}",
                    json_kind(other)
                )));
            },
        };

        let usage = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                UsageRecord::deserialize(entry)
                    .map_err(|e| CoachError::MalformedInput(format!("usage[{idx}]: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { usage })
    }

    /// Parses a request from raw JSON text.
    ///
    /// # Errors
    /// Returns `CoachError::Serialization` for invalid JSON, otherwise as
    /// [`AnalysisRequest::from_value`].
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let body: Value = serde_json::from_str(raw)?;
        Self::from_value(&body)
    }

    /// The coaching prompt for this usage list.
    #[must_use]
    pub fn prompt(&self) -> String {
        build_prompt(&self.usage)
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_reads_records_in_order() {
        let body = json!({"usage": [
            {"domain": "youtube.com", "time": 45},
            {"domain": "docs.google.com", "time": 30}
        ]});
        let req = AnalysisRequest::from_value(&body).unwrap();
        assert_eq!(req.usage.len(), 2);
        assert_eq!(req.usage[0].domain, "youtube.com");
        assert_eq!(req.usage[1].domain, "docs.google.com");
    }

    #[test]
    fn test_from_value_absent_usage_is_no_data() {
        let err = AnalysisRequest::from_value(&json!({})).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "No data provided");
    }

    #[test]
    fn test_from_value_null_usage_is_no_data() {
        let err = AnalysisRequest::from_value(&json!({"usage": null})).unwrap_err();
        assert!(matches!(err, CoachError::NoData));
    }

    #[test]
    fn test_from_value_empty_usage_is_no_data() {
        let err = AnalysisRequest::from_value(&json!({"usage": []})).unwrap_err();
        assert!(matches!(err, CoachError::NoData));
    }

    #[test]
    fn test_from_value_empty_values_of_any_type_are_no_data() {
        for usage in [json!({}), json!(""), json!(0), json!(0.0), json!(false)] {
            let err = AnalysisRequest::from_value(&json!({"usage": usage})).unwrap_err();
            assert!(matches!(err, CoachError::NoData), "usage: {usage}");
        }
    }

    #[test]
    fn test_from_value_non_empty_object_usage_is_malformed() {
        let body = json!({"usage": {"domain": "github.com", "time": 5}});
        assert!(matches!(
            AnalysisRequest::from_value(&body),
            Err(CoachError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_from_value_non_object_body_is_malformed() {
        let err = AnalysisRequest::from_value(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, CoachError::MalformedInput(_)));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_from_value_usage_not_array_is_malformed() {
        let err = AnalysisRequest::from_value(&json!({"usage": "youtube.com"})).unwrap_err();
        assert!(matches!(err, CoachError::MalformedInput(_)));
    }

    #[test]
    fn test_from_value_missing_time_fails_whole_request() {
        let body = json!({"usage": [
            {"domain": "github.com", "time": 10},
            {"domain": "reddit.com"}
        ]});
        let err = AnalysisRequest::from_value(&body).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("usage[1]"), "{msg}");
        assert!(msg.contains("time"), "{msg}");
    }

    #[test]
    fn test_from_value_string_time_is_malformed() {
        let body = json!({"usage": [{"domain": "github.com", "time": "10"}]});
        assert!(matches!(
            AnalysisRequest::from_value(&body),
            Err(CoachError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_from_json_str_invalid_json() {
        let err = AnalysisRequest::from_json_str("{usage:").unwrap_err();
        assert!(matches!(err, CoachError::Serialization(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(AnalysisRequest::new(Vec::new()), Err(CoachError::NoData)));
    }

    #[test]
    fn test_minutes_clamps_negative() {
        assert_eq!(UsageRecord::new("a.com", -5).minutes(), 0.0);
        assert_eq!(UsageRecord::new("a.com", 12).minutes(), 12.0);
    }
}
