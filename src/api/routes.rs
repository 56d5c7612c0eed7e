//! API route configuration.

use crate::api::handlers::{create_link_handler, delete_link_handler, list_links_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// JSON API routes, nested under `/api` by the top-level router.
///
/// # Endpoints
///
/// - `GET    /links`        - List/search links
/// - `POST   /links`        - Create a short link
/// - `DELETE /links/{code}` - Delete a link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/links/{code}", delete(delete_link_handler))
}
