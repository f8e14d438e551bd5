//! Platform bootstrap: registry and entity setup
//!
//! Mirrors the host framework's setup path: validate the configuration,
//! probe the device once, and register the entity keyed by host address.

use std::collections::HashMap;

use miio_client::MiioTransport;
use tracing::info;

use crate::config::PlatformConfig;
use crate::error::SetupError;
use crate::player::RadioMediaPlayer;

/// Registry of configured gateway radios, keyed by host address
///
/// Owned by the embedding bootstrap and passed into [`setup_platform`];
/// nothing in this crate holds process-wide state.
#[derive(Default)]
pub struct PlatformRegistry {
    devices: HashMap<String, RadioMediaPlayer>,
}

impl PlatformRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entity registered for `host`, if any.
    pub fn get(&self, host: &str) -> Option<&RadioMediaPlayer> {
        self.devices.get(host)
    }

    /// Mutable access to an entity, e.g. from the host's refresh schedule.
    pub fn get_mut(&mut self, host: &str) -> Option<&mut RadioMediaPlayer> {
        self.devices.get_mut(host)
    }

    /// Whether a gateway at `host` is already set up.
    pub fn contains(&self, host: &str) -> bool {
        self.devices.contains_key(host)
    }

    /// Number of registered gateways.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

/// Set up one gateway radio entity.
///
/// Validates the configuration, performs the one-time device-info query and
/// registers the entity under the configured host. The info query is a
/// bootstrap step, not retried here: when it fails, setup aborts with
/// [`SetupError::NotReady`] and the host retries the whole setup on its own
/// schedule. On success the entity is polled once so it is registered with
/// fresh state.
pub fn setup_platform<'a>(
    registry: &'a mut PlatformRegistry,
    config: &PlatformConfig,
    transport: Box<dyn MiioTransport>,
) -> Result<&'a mut RadioMediaPlayer, SetupError> {
    config.validate()?;

    if registry.contains(&config.host) {
        return Err(SetupError::AlreadyConfigured(config.host.clone()));
    }

    let token_prefix: String = config.token.chars().take(5).collect();
    info!(host = %config.host, token = %format!("{}...", token_prefix), "Initializing gateway radio");

    let info = transport.device_info()?;
    info!(
        model = %info.model,
        firmware = %info.firmware_version,
        hardware = %info.hardware_version,
        "Gateway detected"
    );

    let mut player = RadioMediaPlayer::new(transport, config.display_name(), &info);
    player.update();

    Ok(registry
        .devices
        .entry(config.host.clone())
        .or_insert(player))
}
