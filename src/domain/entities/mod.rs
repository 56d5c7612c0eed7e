//! Core domain entities representing the business data model.

pub mod link;

pub use link::{Link, NewLink};
