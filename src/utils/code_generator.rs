//! Short code generation and validation.
//!
//! Random codes are drawn uniformly from the 62-character alphanumeric
//! alphabet. Generation carries no uniqueness guarantee; the link service
//! retries on collision.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// The 62-character alphabet codes are drawn from.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default length of generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Compiled pattern for user-provided custom codes.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").unwrap());

/// Codes reserved for service endpoints.
///
/// The redirect route shadows these regardless of storage contents, so they
/// are also rejected at creation time.
pub const RESERVED_CODES: &[&str] = &["api", "stats", "health"];

/// Generates a random alphanumeric short code of the given length.
///
/// Each character is an independent uniform draw from [`ALPHABET`].
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - 6 to 8 characters, ASCII letters and digits only
/// - Not a reserved system code
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Custom code must be 6-8 alphanumeric characters",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
