//! Configuration surface for the gateway radio platform
//!
//! The host validates user input through [`PlatformConfig::validate`] before
//! any adapter is constructed; a config that fails validation never reaches
//! the network.

use serde::Deserialize;

use crate::error::ConfigError;

/// Display name used when the configuration does not provide one
pub const DEFAULT_NAME: &str = "Xiaomi Gateway Radio";

/// Required token length (hex-encoded 128-bit shared secret)
pub const TOKEN_LENGTH: usize = 32;

/// User-supplied configuration for one gateway radio entity
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    /// Network address of the gateway
    pub host: String,
    /// Shared secret consumed by the transport layer
    pub token: String,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
}

impl PlatformConfig {
    /// Create a configuration with the default display name.
    pub fn new(host: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            token: token.into(),
            name: None,
        }
    }

    /// Set a custom display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check the host and token before adapter construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        let token_chars = self.token.chars().count();
        if token_chars != TOKEN_LENGTH {
            return Err(ConfigError::InvalidTokenLength {
                expected: TOKEN_LENGTH,
                actual: token_chars,
            });
        }

        Ok(())
    }

    /// Display name, falling back to [`DEFAULT_NAME`].
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| DEFAULT_NAME.to_string())
    }
}
