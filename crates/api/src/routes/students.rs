//! Route definitions for student marks queries.

use axum::routing::post;
use axum::Router;

use crate::handlers::students;
use crate::state::AppState;

/// Student routes mounted at `/students`.
///
/// ```text
/// POST /above-threshold -> students_above_threshold
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/above-threshold", post(students::students_above_threshold))
}
