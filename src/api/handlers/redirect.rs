//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Reserved codes (`api`, `stats`, `health`) always return 404 regardless of
/// storage contents so stored rows can never shadow service routes. For any
/// other code the click counter is incremented and `last_clicked` stamped
/// atomically with the URL lookup.
///
/// # Errors
///
/// Returns 404 if the code is reserved or unknown.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.link_service.resolve_redirect(&code).await?;

    debug!(%code, %url, "redirecting");

    // 302 Found, matching what dashboard clients and crawlers expect from
    // a shortener.
    Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
}
