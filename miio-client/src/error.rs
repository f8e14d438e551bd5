//! Error types for the miIO transport seam

use thiserror::Error;

/// Errors that can occur during miIO device communication
#[derive(Debug, Error)]
pub enum MiioError {
    /// Socket or handshake level communication error
    #[error("Network error: {0}")]
    Network(String),

    /// The reply arrived but could not be decoded into the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error object reported by the device itself
    #[error("Device error {code}: {message}")]
    Device { code: i64, message: String },
}
