use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marks_core::error::CoreError;
use serde_json::json;

/// Client-facing message for any rejected threshold.
pub const INVALID_THRESHOLD_MESSAGE: &str =
    "Invalid threshold value. It must be a positive number.";

/// Client-facing message when the dataset cannot be read.
pub const DATA_UNAVAILABLE_MESSAGE: &str = "Failed to read student data.";

/// Client-facing message when the dataset cannot be parsed.
pub const DATA_FORMAT_MESSAGE: &str = "Error parsing student data.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and implements [`IntoResponse`] to produce a
/// `{ "error": <message> }` body. Underlying causes are logged, never sent
/// to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marks_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::InvalidThreshold(detail)) => {
                tracing::debug!(reason = %detail, "Rejected threshold");
                (StatusCode::BAD_REQUEST, INVALID_THRESHOLD_MESSAGE)
            }
            AppError::Core(CoreError::DataUnavailable(err)) => {
                tracing::error!(error = %err, "Student data unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, DATA_UNAVAILABLE_MESSAGE)
            }
            AppError::Core(CoreError::DataFormat(err)) => {
                tracing::error!(error = %err, "Student data malformed");
                (StatusCode::INTERNAL_SERVER_ERROR, DATA_FORMAT_MESSAGE)
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
