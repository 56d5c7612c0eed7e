//! Handlers for link management endpoints (list, create, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::links::{
    CreateLinkRequest, CreateLinkResponse, DeleteLinkResponse, LinkItem, ListLinksQuery,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists stored links, newest first.
///
/// # Endpoint
///
/// `GET /api/links?search=`
///
/// With `search`, only links whose code or URL case-insensitively contains
/// the substring are returned. No pagination.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(query): Query<ListLinksQuery>,
) -> Result<Json<Vec<LinkItem>>, AppError> {
    let filter = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let links = state.link_service.list_links(filter).await?;

    Ok(Json(links.into_iter().map(Into::into).collect()))
}

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links` with body `{"url": "...", "code": "..."}` (`code`
/// optional).
///
/// # Errors
///
/// Returns 400 for a missing/malformed URL or invalid custom code, 409 when
/// the code is already taken, and 500 when random code generation exhausts
/// its retry budget.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    payload.validate()?;

    let url = payload
        .url
        .ok_or_else(|| AppError::bad_request("URL is required", json!({ "field": "url" })))?;

    let link = state.link_service.create_short_link(url, payload.code).await?;

    let full_url = state.link_service.short_url(&state.base_url, &link.code);

    tracing::info!(code = %link.code, url = %link.url, "short link created");

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            code: link.code,
            full_url,
            url: link.url,
            clicks: link.clicks,
        }),
    ))
}

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Errors
///
/// Returns 404 if no link matches the code.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    tracing::info!(%code, "short link deleted");

    Ok(Json(DeleteLinkResponse {
        message: format!("Link '{}' deleted", code),
    }))
}
