//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with usage metadata.
///
/// `clicks` is only ever incremented by the redirect path, and `last_clicked`
/// is set on every redirect, so `last_clicked` is `None` exactly when
/// `clicks` is zero.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub url: String,
    pub clicks: i32,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        url: String,
        clicks: i32,
        last_clicked: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            url,
            clicks,
            last_clicked,
            created_at,
        }
    }

    /// Returns true if the link has been visited at least once.
    pub fn was_clicked(&self) -> bool {
        self.clicks > 0
    }
}

/// Input data for creating a new link.
///
/// `clicks` and `last_clicked` are not part of the input; storage initializes
/// them to `0` and `NULL`.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub url: String,
}
