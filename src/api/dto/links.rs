//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Query parameters for the link listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListLinksQuery {
    /// Optional case-insensitive substring matched against code and URL.
    pub search: Option<String>,
}

/// Request body for creating a short link.
///
/// `url` is optional at the deserialization level so a missing field is
/// reported as a 400 validation error rather than a body parse failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Target URL to shorten.
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: Option<String>,

    /// Optional custom short code (6-8 alphanumeric characters).
    pub code: Option<String>,
}

/// Response body for a successfully created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub code: String,
    pub full_url: String,
    pub url: String,
    pub clicks: i32,
}

/// JSON representation of a stored link in list responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkItem {
    pub code: String,
    pub url: String,
    pub clicks: i32,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkItem {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            url: link.url,
            clicks: link.clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}

/// Response body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub message: String,
}
