//! Error types for the gateway radio integration

use miio_client::MiioError;
use thiserror::Error;

/// Errors raised by configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The host address is empty
    #[error("Host address must not be empty")]
    EmptyHost,

    /// The shared secret has the wrong length
    #[error("Token must be exactly {expected} characters, got {actual}")]
    InvalidTokenLength { expected: usize, actual: usize },
}

/// Errors that abort platform setup
///
/// Only setup can fail loudly. Once an entity exists, command and poll
/// failures are absorbed and reported through its availability flag instead.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The one-time device-info query failed; the host may retry the whole
    /// setup later
    #[error("Gateway is not ready yet: {0}")]
    NotReady(#[from] MiioError),

    /// A gateway with this host address is already registered
    #[error("Gateway at {0} is already configured")]
    AlreadyConfigured(String),

    /// The supplied configuration is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),
}
