//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html`; the link table, search box, and
/// create form are driven client-side against `/api/links`.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {}

/// Renders the dashboard page.
///
/// # Endpoint
///
/// `GET /`
pub async fn dashboard_handler() -> impl IntoResponse {
    DashboardTemplate {}
}
