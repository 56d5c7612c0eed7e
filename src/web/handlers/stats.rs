//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Template for the per-link statistics page.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub code: String,
    pub url: String,
    pub full_url: String,
    pub clicks: i32,
    pub last_clicked: String,
    pub created_at: String,
}

/// Template for the HTML 404 page shown for unknown codes.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub code: String,
}

/// Renders the statistics page for a specific link.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// Unknown codes render an HTML 404 page rather than the JSON error
/// envelope, since this route serves browsers.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.link_service.get_link_by_code(&code).await {
        Ok(link) => {
            let full_url = state.link_service.short_url(&state.base_url, &link.code);

            StatsTemplate {
                code: link.code,
                url: link.url,
                full_url,
                clicks: link.clicks,
                last_clicked: link
                    .last_clicked
                    .map(|ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                    .unwrap_or_else(|| "never".to_string()),
                created_at: link.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            }
            .into_response()
        }
        Err(AppError::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, NotFoundTemplate { code }).into_response()
        }
        Err(e) => e.into_response(),
    }
}
