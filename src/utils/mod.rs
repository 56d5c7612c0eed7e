//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Short code generation and custom code validation
//! - [`url_validator`] - Target URL well-formedness check

pub mod code_generator;
pub mod url_validator;
