//! Plain diagnostic endpoints used for deploy smoke checks.

use axum::response::Html;

/// Responds with plain text.
///
/// # Endpoint
///
/// `GET /_ping`
pub async fn ping_handler() -> &'static str {
    "pong"
}

/// Responds with a minimal HTML page, verifying HTML responses work end to
/// end (content type, proxies, compression).
///
/// # Endpoint
///
/// `GET /_test-html`
pub async fn test_html_handler() -> Html<&'static str> {
    Html("<!DOCTYPE html><html><body><h1>linkcut</h1><p>HTML rendering works.</p></body></html>")
}
