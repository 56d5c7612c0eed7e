//! HTML template rendering handlers.

mod dashboard;
mod stats;

pub use dashboard::dashboard_handler;
pub use stats::stats_handler;
