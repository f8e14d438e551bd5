//! Logging setup for the gateway radio integration
//!
//! Thin wrapper around tracing-subscriber so embedding applications and the
//! examples get consistent, env-tunable output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy)]
pub enum LoggingMode {
    /// No output
    Silent,
    /// Compact stderr output for development
    Development,
    /// Verbose diagnostics with source locations
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Initialize logging with the specified mode.
///
/// Call once, early in the application lifecycle; a second initialization
/// fails because a global subscriber is already set.
///
/// # Environment variables
///
/// - `LUMI_LOG_LEVEL`: override the log level (error, warn, info, debug, trace)
/// - `RUST_LOG`: standard fallback filter
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let subscriber = Registry::default()
                .with(fmt::layer().with_target(false).compact())
                .with(env_filter("info"));

            subscriber
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let subscriber = Registry::default()
                .with(fmt::layer().pretty().with_file(true).with_line_number(true))
                .with(env_filter("debug"));

            subscriber
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

fn env_filter(default_level: &str) -> EnvFilter {
    if let Ok(level) = std::env::var("LUMI_LOG_LEVEL") {
        EnvFilter::new(level)
    } else if let Ok(rust_log) = std::env::var("RUST_LOG") {
        EnvFilter::new(rust_log)
    } else {
        EnvFilter::new(default_level)
    }
}
