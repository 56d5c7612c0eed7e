//! Target URL well-formedness check.
//!
//! A target must parse as an absolute URL and use the http or https scheme,
//! which also rejects `javascript:`, `data:`, `file:` and similar schemes.

use url::Url;

/// Errors produced by target URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Checks that `input` is a well-formed HTTP(S) URL and returns it unchanged.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for unparseable input and
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    let url =
        Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}
