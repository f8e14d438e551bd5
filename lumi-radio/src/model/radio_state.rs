//! Mirrored radio state

use super::PowerState;
use serde::{Deserialize, Serialize};

/// Locally mirrored state of one gateway's FM radio
///
/// Rewritten by each successful status poll. Commands do not update it
/// (besides the mute flip after an accepted mute command), so between polls
/// the mirror may lag the device. The volume field keeps its last value when
/// the radio leaves the running state, so it is only authoritative while
/// `power` is [`PowerState::On`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RadioState {
    /// Current power state
    pub power: PowerState,
    /// Volume level (0.0 - 1.0), last read while the radio was running
    pub volume: f64,
    /// Whether the raw volume register read 0
    pub muted: bool,
    /// Whether the last remote call succeeded
    pub available: bool,
    /// Last raw `current_status` value, kept for diagnostics
    pub last_status: Option<String>,
}

impl RadioState {
    /// Check if the radio is currently playing
    pub fn is_on(&self) -> bool {
        self.power == PowerState::On
    }
}
