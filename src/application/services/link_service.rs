//! Link creation, lookup, deletion, and redirect resolution.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{
    DEFAULT_CODE_LENGTH, RESERVED_CODES, generate_code, validate_custom_code,
};
use crate::utils::url_validator::validate_target_url;
use serde_json::json;

/// Default number of random draws before giving up on a unique code.
pub const DEFAULT_CODE_ATTEMPTS: usize = 10;

/// Service orchestrating validation, uniqueness checking, and persistence
/// for short links.
///
/// Generic over the repository so unit tests can inject a mock. Code length
/// and the collision retry budget are injectable for the same reason.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    code_length: usize,
    code_attempts: usize,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service with default code length and retry budget.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_settings(repository, DEFAULT_CODE_LENGTH, DEFAULT_CODE_ATTEMPTS)
    }

    /// Creates a link service with explicit code length and retry budget.
    pub fn with_settings(repository: Arc<R>, code_length: usize, code_attempts: usize) -> Self {
        Self {
            repository,
            code_length,
            code_attempts,
        }
    }

    /// Lists links newest-first, optionally filtered by a case-insensitive
    /// substring match against code or URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self, filter: Option<&str>) -> Result<Vec<Link>, AppError> {
        self.repository.list(filter).await
    }

    /// Creates a short link.
    ///
    /// # Code Selection
    ///
    /// - With `custom_code`: validated against `[A-Za-z0-9]{6,8}` and the
    ///   reserved list, then checked for uniqueness (409 if taken).
    /// - Without: up to `code_attempts` random draws, first unused wins.
    ///
    /// The pre-check cannot exclude a concurrent creator racing the same
    /// code, so the insert itself still reports the unique violation as
    /// [`AppError::Conflict`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL or custom code,
    /// [`AppError::Conflict`] for a taken code, and [`AppError::Exhausted`]
    /// when every random draw collides.
    pub async fn create_short_link(
        &self,
        url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_target_url(&url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let code = if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;

            if self.repository.find_by_code(&custom).await?.is_some() {
                return Err(AppError::conflict(
                    "Custom code already exists",
                    json!({ "code": custom }),
                ));
            }

            custom
        } else {
            self.generate_unique_code().await?
        };

        self.repository.create(NewLink { code, url }).await
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": code }))
            })
    }

    /// Deletes a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        let deleted = self.repository.delete(code).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        Ok(())
    }

    /// Resolves a short code for redirect, counting the click.
    ///
    /// Reserved codes never resolve, regardless of storage contents; the
    /// shadowing keeps stored rows from colliding with service routes. For
    /// everything else the click increment and URL fetch are one atomic
    /// statement in the repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for reserved or unknown codes.
    pub async fn resolve_redirect(&self, code: &str) -> Result<String, AppError> {
        if RESERVED_CODES.contains(&code) {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        self.repository
            .record_click(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": code }))
            })
    }

    /// Constructs the fully qualified short URL for a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// Draws random codes until one is unused, up to the retry budget.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..self.code_attempts {
            let code = generate_code(self.code_length);

            if self.repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::exhausted(
            "Failed to generate a unique code",
            json!({ "attempts": self.code_attempts }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn stored_link(id: i64, code: &str, url: &str) -> Link {
        Link::new(id, code.to_string(), url.to_string(), 0, None, Utc::now())
    }

    #[tokio::test]
    async fn test_create_short_link_generates_code() {
        let mut repo = MockLinkRepository::new();

        repo.expect_find_by_code().times(1).returning(|_| Ok(None));
        repo.expect_create()
            .withf(|new_link| {
                new_link.code.len() == 6
                    && new_link.code.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .times(1)
            .returning(|new_link| Ok(stored_link(1, &new_link.code, &new_link.url)));

        let service = LinkService::new(Arc::new(repo));

        let link = service
            .create_short_link("https://example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(link.url, "https://example.com");
        assert_eq!(link.clicks, 0);
        assert!(link.last_clicked.is_none());
    }

    #[tokio::test]
    async fn test_create_short_link_invalid_url() {
        let repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(repo));

        let result = service
            .create_short_link("not a url".to_string(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_short_link_rejects_javascript_scheme() {
        let repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(repo));

        let result = service
            .create_short_link("javascript:alert(1)".to_string(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_short_link_with_custom_code() {
        let mut repo = MockLinkRepository::new();

        repo.expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|new_link| new_link.code == "abc123")
            .times(1)
            .returning(|new_link| Ok(stored_link(1, &new_link.code, &new_link.url)));

        let service = LinkService::new(Arc::new(repo));

        let link = service
            .create_short_link(
                "https://example.com".to_string(),
                Some("abc123".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(link.code, "abc123");
    }

    #[tokio::test]
    async fn test_create_short_link_custom_code_conflict() {
        let mut repo = MockLinkRepository::new();

        repo.expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(Some(stored_link(5, "abc123", "https://other.com"))));
        repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(repo));

        let result = service
            .create_short_link(
                "https://example.com".to_string(),
                Some("abc123".to_string()),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_short_link_invalid_custom_code() {
        let repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(repo));

        let result = service
            .create_short_link("https://example.com".to_string(), Some("ab".to_string()))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_short_link_exhausts_retry_budget() {
        let mut repo = MockLinkRepository::new();

        // Every draw collides.
        repo.expect_find_by_code()
            .times(3)
            .returning(|code| Ok(Some(stored_link(1, code, "https://taken.com"))));
        repo.expect_create().times(0);

        let service = LinkService::with_settings(Arc::new(repo), 6, 3);

        let result = service
            .create_short_link("https://example.com".to_string(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Exhausted { .. }));
    }

    #[tokio::test]
    async fn test_get_link_by_code_not_found() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(repo));

        let result = service.get_link_by_code("zzzzzz").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_link_not_found() {
        let mut repo = MockLinkRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = LinkService::new(Arc::new(repo));

        let result = service.delete_link("zzzzzz").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_redirect_counts_click() {
        let mut repo = MockLinkRepository::new();
        repo.expect_record_click()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(Some("https://example.com".to_string())));

        let service = LinkService::new(Arc::new(repo));

        let url = service.resolve_redirect("abc123").await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_redirect_unknown_code() {
        let mut repo = MockLinkRepository::new();
        repo.expect_record_click().times(1).returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(repo));

        let result = service.resolve_redirect("zzzzzz").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_redirect_shadows_reserved_codes() {
        let mut repo = MockLinkRepository::new();
        // Storage must not even be consulted for reserved codes.
        repo.expect_record_click().times(0);

        let service = LinkService::new(Arc::new(repo));

        for code in ["api", "stats", "health"] {
            let result = service.resolve_redirect(code).await;
            assert!(
                matches!(result.unwrap_err(), AppError::NotFound { .. }),
                "reserved code '{code}' must not resolve"
            );
        }
    }

    #[tokio::test]
    async fn test_short_url_joins_base_and_code() {
        let repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(repo));

        assert_eq!(
            service.short_url("http://sho.rt", "abc123"),
            "http://sho.rt/abc123"
        );
        assert_eq!(
            service.short_url("http://sho.rt/", "abc123"),
            "http://sho.rt/abc123"
        );
    }
}
