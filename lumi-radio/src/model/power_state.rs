//! Power state enumeration

use serde::{Deserialize, Serialize};

/// Power state of the gateway FM radio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerState {
    /// The radio is playing
    On,
    /// The radio is paused
    Off,
    /// The last poll reported a status string this integration does not know
    Unknown,
}

impl PowerState {
    /// Raw status value reported while the radio is playing
    pub const STATUS_RUN: &'static str = "run";
    /// Raw status value reported while the radio is paused
    pub const STATUS_PAUSE: &'static str = "pause";

    /// Map a raw `current_status` value onto a power state.
    ///
    /// The gateway only ever reports `"run"` or `"pause"`; anything else
    /// maps to [`PowerState::Unknown`].
    pub fn from_status(status: &str) -> Self {
        match status {
            Self::STATUS_RUN => PowerState::On,
            Self::STATUS_PAUSE => PowerState::Off,
            _ => PowerState::Unknown,
        }
    }
}

impl Default for PowerState {
    fn default() -> Self {
        PowerState::Unknown
    }
}
