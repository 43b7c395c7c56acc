//! Handlers for student marks queries.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use marks_core::error::CoreError;
use marks_core::student::{self, ThresholdResponse};
use marks_core::threshold_validation::ThresholdRequest;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /students/above-threshold
///
/// Return every student whose total is strictly greater than `threshold`,
/// in dataset order. A body that is missing or not a JSON object is treated
/// the same as an invalid threshold, and the dataset is not loaded.
pub async fn students_above_threshold(
    State(state): State<AppState>,
    payload: Result<Json<ThresholdRequest>, JsonRejection>,
) -> AppResult<Json<ThresholdResponse>> {
    let Json(input) =
        payload.map_err(|rejection| CoreError::InvalidThreshold(rejection.body_text()))?;
    let threshold = input.threshold()?;

    let response = student::students_above_threshold(state.students.as_ref(), threshold).await?;

    tracing::info!(threshold, count = response.count, "Students above threshold listed");

    Ok(Json(response))
}
