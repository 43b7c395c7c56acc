//! Threshold input validation.
//!
//! The threshold arrives as an untyped JSON value so that a string or a
//! boolean is reported as a validation failure rather than a body
//! deserialization failure.

use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;

/// Request body for `POST /students/above-threshold`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThresholdRequest {
    #[serde(default)]
    pub threshold: Option<Value>,
}

impl ThresholdRequest {
    /// Validate and return the numeric threshold.
    pub fn threshold(&self) -> Result<f64, CoreError> {
        validate_threshold(self.threshold.as_ref())
    }
}

/// Validate that `value` is a JSON number no smaller than zero.
///
/// Zero is accepted. Anything that is not a number (including a missing
/// field or `null`) is rejected, as is any negative number.
pub fn validate_threshold(value: Option<&Value>) -> Result<f64, CoreError> {
    let value = value.ok_or_else(|| CoreError::InvalidThreshold("threshold is required".into()))?;

    let number = match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| {
            CoreError::InvalidThreshold(format!("threshold {n} is not representable as f64"))
        })?,
        other => {
            return Err(CoreError::InvalidThreshold(format!(
                "threshold must be a number, got {}",
                json_kind(other)
            )))
        }
    };

    if number < 0.0 {
        return Err(CoreError::InvalidThreshold(format!(
            "threshold must not be negative, got {number}"
        )));
    }
    Ok(number)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_zero_and_positive_values() {
        assert_eq!(validate_threshold(Some(&json!(0))).unwrap(), 0.0);
        assert_eq!(validate_threshold(Some(&json!(400))).unwrap(), 400.0);
        assert_eq!(validate_threshold(Some(&json!(12.5))).unwrap(), 12.5);
    }

    #[test]
    fn rejects_negative_values() {
        assert_matches!(
            validate_threshold(Some(&json!(-5))),
            Err(CoreError::InvalidThreshold(_))
        );
        assert_matches!(
            validate_threshold(Some(&json!(-0.01))),
            Err(CoreError::InvalidThreshold(_))
        );
    }

    #[test]
    fn rejects_non_numeric_values() {
        for value in [
            json!("abc"),
            json!("400"),
            json!(true),
            json!(null),
            json!([400]),
            json!({"value": 400}),
        ] {
            assert_matches!(
                validate_threshold(Some(&value)),
                Err(CoreError::InvalidThreshold(_)),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_missing_value() {
        let err = validate_threshold(None).unwrap_err();
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn request_without_threshold_field_is_invalid() {
        let req: ThresholdRequest = serde_json::from_value(json!({"limit": 10})).unwrap();
        assert_matches!(req.threshold(), Err(CoreError::InvalidThreshold(_)));
    }

    #[test]
    fn request_with_numeric_threshold_is_valid() {
        let req: ThresholdRequest = serde_json::from_value(json!({"threshold": 410})).unwrap();
        assert_eq!(req.threshold().unwrap(), 410.0);
    }
}
