//! DTO for the health check endpoint.

use serde::Serialize;

/// Liveness/info response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Process uptime formatted as `XhYmZs`.
    pub uptime: String,
    /// Current time, RFC 3339.
    pub timestamp: String,
    pub environment: String,
    pub database: String,
}
