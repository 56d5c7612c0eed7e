//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection pool, migrations, state construction, and
//! the Axum server lifecycle including graceful shutdown.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes the PostgreSQL pool, applies migrations, builds the shared
/// state, and serves until SIGINT. The pool (held by the state) is dropped
/// when this function returns.
///
/// # Errors
///
/// Returns an error if the database is unreachable, migrations fail, or the
/// listen address cannot be bound. All of these are fatal at startup.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let state = AppState::new(
        Arc::new(pool),
        config.base_url.clone(),
        config.environment.clone(),
        config.code_length,
        config.code_attempts,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when SIGINT (Ctrl+C) is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown signal handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
