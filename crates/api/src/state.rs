use std::sync::Arc;

use marks_core::dataset::StudentSource;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the dataset source sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Student dataset, loaded fresh by each request.
    pub students: Arc<dyn StudentSource>,
}
