//! Shared application state injected into handlers.

use std::sync::Arc;
use std::time::Instant;

use sqlx::PgPool;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgLinkRepository;

/// Process-wide state constructed once at startup.
///
/// Cloning is cheap; the service is behind an `Arc` and the rest are small
/// values. The connection pool is owned by the service's repository and is
/// dropped with the state on shutdown.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    /// Scheme + host used to build fully qualified short URLs.
    pub base_url: String,
    /// Environment label reported by the health endpoint.
    pub environment: String,
    /// Process start time, used for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Builds the state from a connection pool and service settings.
    pub fn new(
        pool: Arc<PgPool>,
        base_url: String,
        environment: String,
        code_length: usize,
        code_attempts: usize,
    ) -> Self {
        let repository = Arc::new(PgLinkRepository::new(pool));
        let link_service = Arc::new(LinkService::with_settings(
            repository,
            code_length,
            code_attempts,
        ));

        Self {
            link_service,
            base_url,
            environment,
            started_at: Instant::now(),
        }
    }
}
