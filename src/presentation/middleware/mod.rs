//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod error_path;
pub mod logging;
pub mod metrics;

pub use error_path::stamp_error_path;
pub use metrics::track_metrics;
