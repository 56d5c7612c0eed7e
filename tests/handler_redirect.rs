mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;

use linkcut::api::handlers::redirect_handler;

fn redirect_app(state: linkcut::AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_redirect_existing_link(pool: PgPool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;
    let server = TestServer::new(redirect_app(common::create_test_state(pool.clone()))).unwrap();

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::FOUND);
    let location = response.header("location");
    assert_eq!(location.to_str().unwrap(), "https://example.com");

    assert_eq!(common::fetch_clicks(&pool, "abc123").await, 1);
    assert!(common::last_clicked_is_set(&pool, "abc123").await);
}

#[sqlx::test]
async fn test_redirect_unknown_code(pool: PgPool) {
    let server = TestServer::new(redirect_app(common::create_test_state(pool))).unwrap();

    let response = server.get("/zzzzzz").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_reserved_codes_always_404(pool: PgPool) {
    // Even with matching rows stored, reserved codes must not resolve.
    common::create_test_link(&pool, "api", "https://example.com/api").await;
    common::create_test_link(&pool, "stats", "https://example.com/stats").await;
    common::create_test_link(&pool, "health", "https://example.com/health").await;
    let server = TestServer::new(redirect_app(common::create_test_state(pool.clone()))).unwrap();

    for code in ["api", "stats", "health"] {
        let response = server.get(&format!("/{code}")).await;
        response.assert_status_not_found();
        assert_eq!(
            common::fetch_clicks(&pool, code).await,
            0,
            "reserved code '{code}' must not be counted"
        );
    }
}

#[sqlx::test]
async fn test_clicks_accumulate_over_redirects(pool: PgPool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;
    let server = TestServer::new(redirect_app(common::create_test_state(pool.clone()))).unwrap();

    for _ in 0..5 {
        server.get("/abc123").await.assert_status(StatusCode::FOUND);
    }

    assert_eq!(common::fetch_clicks(&pool, "abc123").await, 5);
}

#[sqlx::test]
async fn test_redirect_does_not_touch_other_links(pool: PgPool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;
    common::create_test_link(&pool, "xyz789", "https://other.com").await;
    let server = TestServer::new(redirect_app(common::create_test_state(pool.clone()))).unwrap();

    server.get("/abc123").await.assert_status(StatusCode::FOUND);

    assert_eq!(common::fetch_clicks(&pool, "xyz789").await, 0);
    assert!(!common::last_clicked_is_set(&pool, "xyz789").await);
}
