//! Infrastructure layer implementing domain contracts.
//!
//! - [`persistence`] - PostgreSQL repository implementations

pub mod persistence;
