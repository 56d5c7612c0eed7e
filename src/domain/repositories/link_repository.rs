//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// One implementation exists for production
/// ([`crate::infrastructure::persistence::PgLinkRepository`]); unit tests use
/// the generated `mockall` mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists
    /// (database unique constraint), [`AppError::Internal`] on other
    /// database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists links ordered by creation time descending.
    ///
    /// When `filter` is present, only links whose code or URL
    /// case-insensitively contains the substring are returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list<'a>(&self, filter: Option<&'a str>) -> Result<Vec<Link>, AppError>;

    /// Deletes a link by code.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no link
    /// matched the code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically increments `clicks`, stamps `last_clicked`, and returns the
    /// stored target URL.
    ///
    /// Returns `Ok(None)` if no link matched the code. The increment is a
    /// single UPDATE relative to the stored value, so concurrent redirects
    /// never lose counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_click(&self, code: &str) -> Result<Option<String>, AppError>;
}
