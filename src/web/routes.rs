//! Web view route configuration.

use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, stats_handler};
use axum::{Router, routing::get};

/// HTML view routes.
///
/// # Endpoints
///
/// - `GET /`             - Dashboard listing
/// - `GET /stats/{code}` - Per-link statistics page
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/stats/{code}", get(stats_handler))
}
