//! Top-level router configuration combining API, web, and redirect routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Dashboard view (HTML)
//! - `GET  /stats/{code}` - Per-link statistics view (HTML)
//! - `GET  /health`       - Liveness/info (JSON)
//! - `GET  /_ping`        - Diagnostic (plain text)
//! - `GET  /_test-html`   - Diagnostic (HTML)
//! - `/api/*`             - JSON API for the dashboard
//! - `GET  /{code}`       - Short link redirect
//!
//! The redirect route is registered last so the fixed routes above always win
//! route matching; the service additionally shadows the reserved codes `api`,
//! `stats`, and `health` at resolution time.

use crate::api;
use crate::api::handlers::{health_handler, ping_handler, redirect_handler, test_html_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .route("/_ping", get(ping_handler))
        .route("/_test-html", get(test_html_handler))
        .nest("/api", api::routes::routes())
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
