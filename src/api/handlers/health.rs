//! Handler for the health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns liveness and process info.
///
/// # Endpoint
///
/// `GET /health`
///
/// Reports uptime, current timestamp, and the configured environment label.
/// The `database` field is a static label; no storage probe is performed
/// here, so a broken pool does not flip this endpoint.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime: format_uptime(state.started_at.elapsed().as_secs()),
        timestamp: Utc::now().to_rfc3339(),
        environment: state.environment.clone(),
        database: "connected".to_string(),
    })
}

/// Formats a duration in seconds as `XhYmZs`.
fn format_uptime(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    format!("{}h {}m {}s", hours, minutes, seconds)
}
