#![allow(dead_code)]

use linkcut::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "http://sho.rt";

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_link_created_at(pool: &PgPool, code: &str, url: &str, age_minutes: i32) {
    sqlx::query(
        "INSERT INTO links (code, url, created_at)
         VALUES ($1, $2, now() - make_interval(mins => $3))",
    )
    .bind(code)
    .bind(url)
    .bind(age_minutes)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn fetch_clicks(pool: &PgPool, code: &str) -> i32 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn last_clicked_is_set(pool: &PgPool, code: &str) -> bool {
    sqlx::query_scalar::<_, bool>(
        "SELECT last_clicked IS NOT NULL FROM links WHERE code = $1",
    )
    .bind(code)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn link_exists(pool: &PgPool, code: &str) -> bool {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM links WHERE code = $1)")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(pool),
        TEST_BASE_URL.to_string(),
        "test".to_string(),
        6,
        10,
    )
}
