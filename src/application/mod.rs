//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, validation, and business rules, and
//! provide a clean API for HTTP handlers.

pub mod services;
