//! # Lumi Radio - gateway FM radio as a media player
//!
//! Bridges a home-automation host's media-player model and the FM radio
//! built into Xiaomi Lumi gateways, over the local miIO command protocol:
//!
//! ```rust,ignore
//! use lumi_radio::{setup_platform, PlatformConfig, PlatformRegistry};
//!
//! let mut registry = PlatformRegistry::new();
//! let config = PlatformConfig::new("192.168.1.30", token).with_name("Kitchen Radio");
//!
//! // `transport` is the application's miIO client behind the MiioTransport trait
//! let player = setup_platform(&mut registry, &config, transport)?;
//!
//! player.turn_on();
//! player.set_volume_level(0.4);
//!
//! // Later, on the host's refresh schedule:
//! player.update();
//! assert!(player.available());
//! ```
//!
//! ## What the entity does
//!
//! - **Commands** (`turn_on`, `turn_off`, `volume_up`, `volume_down`,
//!   `set_volume_level`, `media_next_track`, `mute_volume`) each issue one
//!   RPC and interpret the `["ok"]` status marker. Failures are caught and
//!   logged, never raised to the host.
//! - **Polling** (`update`) reads the current FM properties and rewrites the
//!   mirrored power/volume/mute state. A failed poll only clears the
//!   availability flag.
//! - **State is assumed**: the gateway pushes nothing, so the mirror is
//!   best-effort between polls.
//!
//! ## Architecture
//!
//! ```text
//! lumi-radio (entity surface, platform bootstrap)
//!     ↓
//! RadioMediaPlayer (commands + poll over the state mirror)
//!     ↓
//! miio-client (MiioTransport trait - the encrypted wire client
//!              is supplied by the embedding application)
//! ```

// Main exports
pub use config::{PlatformConfig, DEFAULT_NAME, TOKEN_LENGTH};
pub use error::{ConfigError, SetupError};
pub use model::{DeviceMetadata, DiagnosticAttributes, PowerState, RadioState, SupportedFeatures};
pub use platform::{setup_platform, PlatformRegistry};
pub use player::RadioMediaPlayer;

// Re-export the transport seam so embedders implement it without a direct
// dependency on the client crate
pub use miio_client::{DeviceInfo, MiioError, MiioTransport};

// Internal modules
mod config;
mod error;
pub mod logging;
mod model;
mod platform;
mod player;
