//! Typed API error for HTTP handlers.
//!
//! Every failure leaves the server as `{"error": "message"}`. Only an absent
//! or empty usage list is the caller's fault (400); everything else, bad JSON
//! included, is a 500 carrying the underlying error text.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use productivity_coach_core::CoachError;
use productivity_coach_llm::LlmError;

/// API error with HTTP status code and human-readable message.
///
/// Use via `Result<Json<T>, ApiError>` in handlers.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: no usage to analyze.
    BadRequest(String),
    /// 500 Internal Server Error: malformed input or upstream failure.
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg) | Self::Internal(msg) => msg,
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<CoachError> for ApiError {
    fn from(err: CoachError) -> Self {
        if err.is_validation() {
            return Self::BadRequest(err.to_string());
        }
        tracing::warn!(error = %err, "rejected malformed usage payload");
        Self::Internal(err.to_string())
    }
}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        tracing::error!(
            error = %err,
            upstream_status = ?err.upstream_status(),
            "completion service call failed"
        );
        Self::Internal(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "unreadable request body");
        Self::Internal(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_is_bad_request() {
        let err = ApiError::from(CoachError::NoData);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(matches!(err, ApiError::BadRequest(ref msg) if msg == "No data provided"));
    }

    #[test]
    fn test_malformed_input_is_internal() {
        let err = ApiError::from(CoachError::MalformedInput("usage[0]: missing field `time`".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_error_keeps_message() {
        let err = ApiError::from(LlmError::HttpStatus { code: 429, body: "quota".to_owned() });
        assert!(matches!(err, ApiError::Internal(ref msg) if msg.contains("429") && msg.contains("quota")));
    }
}
