//! Observability for the salaries service
//!
//! Logging goes through `tracing`; this module installs the subscriber.
//!
//! # Usage
//!
//! ```ignore
//! use salaries::observability::{init_tracing, LogFormat, DEFAULT_FILTER};
//!
//! init_tracing(LogFormat::Json, DEFAULT_FILTER)?;
//! tracing::info!(records = 42, "seeded salaries from dataset");
//! ```

mod logger;

pub use logger::{init_tracing, LogFormat, DEFAULT_FILTER};

use thiserror::Error;

/// Result type for observability setup
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Observability setup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservabilityError {
    /// Log format name not recognised
    #[error("unknown log format '{0}', expected 'text' or 'json'")]
    UnknownFormat(String),

    /// Global subscriber could not be installed
    #[error("failed to initialise logging: {0}")]
    InitFailed(String),
}
