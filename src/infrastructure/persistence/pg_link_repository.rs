//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// All statements are parameterized. Uniqueness of `code` is enforced by the
/// table's unique constraint; a violation surfaces as [`AppError::Conflict`]
/// through the error conversion in [`crate::error`].
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Database row shape for the `links` table.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    url: String,
    clicks: i32,
    last_clicked: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.code,
            row.url,
            row.clicks,
            row.last_clicked,
            row.created_at,
        )
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, url)
            VALUES ($1, $2)
            RETURNING id, code, url, clicks, last_clicked, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, url, clicks, last_clicked, created_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list<'a>(&self, filter: Option<&'a str>) -> Result<Vec<Link>, AppError> {
        let rows = match filter {
            Some(needle) => {
                let pattern = format!("%{}%", needle);
                sqlx::query_as::<_, LinkRow>(
                    r#"
                    SELECT id, code, url, clicks, last_clicked, created_at
                    FROM links
                    WHERE code ILIKE $1 OR url ILIKE $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(pattern)
                .fetch_all(self.pool.as_ref())
                .await?
            }
            None => {
                sqlx::query_as::<_, LinkRow>(
                    r#"
                    SELECT id, code, url, clicks, last_clicked, created_at
                    FROM links
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(self.pool.as_ref())
                .await?
            }
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_click(&self, code: &str) -> Result<Option<String>, AppError> {
        // Single atomic statement: the increment is relative to the stored
        // value, so concurrent redirects never lose counts.
        let url = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE links
            SET clicks = clicks + 1, last_clicked = now()
            WHERE code = $1
            RETURNING url
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(url)
    }
}
