//! Web view layer for browser-facing pages.
//!
//! Provides the dashboard and per-link statistics pages, server-rendered
//! with Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - View route configuration

pub mod handlers;
pub mod routes;
