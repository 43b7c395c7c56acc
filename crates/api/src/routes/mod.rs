pub mod health;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /students/above-threshold                         filter by total marks (POST)
/// ```
///
/// `/health` is mounted separately by the router builder.
pub fn app_routes() -> Router<AppState> {
    Router::new().nest("/students", students::router())
}
