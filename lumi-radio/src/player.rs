//! Media-player entity for the gateway FM radio
//!
//! One entity per configured gateway. The host drives every method and
//! awaits each call before issuing the next; the entity never schedules work
//! on its own. Commands issue exactly one RPC and absorb failures (a failed
//! command is a log line, nothing more); [`RadioMediaPlayer::update`] is the
//! poll that reconciles the local mirror with the device.

use miio_client::{DeviceInfo, MiioError, MiioTransport};
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use crate::model::{
    DeviceMetadata, DiagnosticAttributes, PowerState, RadioState, SupportedFeatures,
};

/// Marker the device puts first in the reply to an accepted command
const SUCCESS_MARKER: &str = "ok";

/// Raw volume written when unmuting
const UNMUTE_VOLUME: i64 = 10;

/// RPC that starts, stops or retunes FM playback
const METHOD_PLAY_FM: &str = "play_fm";
/// RPC that writes the raw FM volume register (0-100)
const METHOD_SET_FM_VOLUME: &str = "set_fm_volume";
/// RPC that reads the current FM properties
const METHOD_GET_PROP_FM: &str = "get_prop_fm";

/// Media-player entity mirroring one gateway's FM radio
pub struct RadioMediaPlayer {
    transport: Box<dyn MiioTransport>,
    name: String,
    metadata: DeviceMetadata,
    state: RadioState,
}

impl RadioMediaPlayer {
    /// Create an entity from a transport handle and the info-query result.
    ///
    /// Callers normally go through [`setup_platform`](crate::setup_platform),
    /// which performs the info query and registers the entity.
    pub fn new(transport: Box<dyn MiioTransport>, name: String, info: &DeviceInfo) -> Self {
        Self {
            transport,
            name,
            metadata: DeviceMetadata::from_info(info),
            state: RadioState::default(),
        }
    }

    // ========================================================================
    // Host-facing read-only surface
    // ========================================================================

    /// Display name of this gateway radio
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current power state of the radio
    pub fn power_state(&self) -> PowerState {
        self.state.power
    }

    /// The gateway never pushes confirmed state, so everything displayed is
    /// best-effort until the next poll.
    pub fn assumed_state(&self) -> bool {
        true
    }

    /// Boolean if volume is currently muted
    pub fn is_volume_muted(&self) -> bool {
        self.state.muted
    }

    /// Volume level of the radio (0..1)
    ///
    /// Only refreshed while the radio reports itself running; after a
    /// transition out of that state the last running value is kept.
    pub fn volume_level(&self) -> f64 {
        self.state.volume
    }

    /// Whether the last remote call reached the device
    pub fn available(&self) -> bool {
        self.state.available
    }

    /// Icon shown by the host UI
    pub fn icon(&self) -> &str {
        "mdi:radio"
    }

    /// Flag media-player features that are supported
    pub fn supported_features(&self) -> SupportedFeatures {
        SupportedFeatures::GATEWAY_FM
    }

    /// Static device metadata captured at setup time
    pub fn metadata(&self) -> &DeviceMetadata {
        &self.metadata
    }

    /// Stable id for the host's entity registry
    pub fn unique_id(&self) -> &str {
        &self.metadata.unique_id
    }

    /// Diagnostic attributes for the host UI
    pub fn diagnostics(&self) -> DiagnosticAttributes {
        self.metadata.diagnostics(self.state.last_status.clone())
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Wake the radio back up.
    pub fn turn_on(&mut self) {
        self.try_command(
            "Turning the gateway radio on failed",
            METHOD_PLAY_FM,
            json!(["on"]),
        );
    }

    /// Pause FM playback.
    pub fn turn_off(&mut self) {
        self.try_command(
            "Turning the gateway radio off failed",
            METHOD_PLAY_FM,
            json!(["off"]),
        );
    }

    /// Raise the raw volume register by one, from the mirrored level.
    pub fn volume_up(&mut self) {
        let volume = (self.state.volume * 100.0).round() as i64 + 1;
        self.try_command(
            "Stepping the gateway volume up failed",
            METHOD_SET_FM_VOLUME,
            json!([volume]),
        );
    }

    /// Lower the raw volume register by one, from the mirrored level.
    pub fn volume_down(&mut self) {
        let volume = (self.state.volume * 100.0).round() as i64 - 1;
        self.try_command(
            "Stepping the gateway volume down failed",
            METHOD_SET_FM_VOLUME,
            json!([volume]),
        );
    }

    /// Set the volume to `level` (0.0 - 1.0).
    pub fn set_volume_level(&mut self, level: f64) {
        let volume = (level * 100.0).round() as i64;
        self.try_command(
            "Setting the gateway volume failed",
            METHOD_SET_FM_VOLUME,
            json!([volume]),
        );
    }

    /// Advance to the next station.
    pub fn media_next_track(&mut self) {
        self.try_command(
            "Skipping to the next station failed",
            METHOD_PLAY_FM,
            json!(["next"]),
        );
    }

    /// Mute or unmute by writing the raw volume register.
    ///
    /// Muting writes 0, unmuting writes a fixed volume of 10. The mirrored
    /// mute flag only flips once the device accepts the command; the next
    /// poll re-derives it from the register either way.
    pub fn mute_volume(&mut self, mute: bool) {
        let volume = if mute { 0 } else { UNMUTE_VOLUME };
        let accepted = self.try_command(
            "Muting the gateway radio failed",
            METHOD_SET_FM_VOLUME,
            json!([volume]),
        );
        if accepted {
            self.state.muted = mute;
        }
    }

    // ========================================================================
    // Polling
    // ========================================================================

    /// Fetch current FM properties and rewrite the local mirror.
    ///
    /// The host invokes this on its own refresh schedule. The resulting
    /// power state depends only on the reply, never on the prior state. On
    /// any failure the mirror is left untouched except for the availability
    /// flag.
    pub fn update(&mut self) {
        let reply = match self.transport.send(METHOD_GET_PROP_FM, json!([])) {
            Ok(reply) => reply,
            Err(err) => {
                self.state.available = false;
                error!(error = %err, "Fetching the gateway radio state failed");
                return;
            }
        };

        debug!(%reply, "Got new state");

        let (volume, status) = match Self::parse_properties(&reply) {
            Ok(parts) => parts,
            Err(err) => {
                self.state.available = false;
                error!(error = %err, "Fetching the gateway radio state failed");
                return;
            }
        };

        self.state.available = true;
        self.state.muted = volume == 0;

        let power = PowerState::from_status(&status);
        match power {
            PowerState::On => self.state.volume = volume as f64 / 100.0,
            // Volume is not updated while paused
            PowerState::Off => {}
            PowerState::Unknown => {
                warn!(
                    status = %status,
                    "New state does not match expected values: {}/{}",
                    PowerState::STATUS_PAUSE,
                    PowerState::STATUS_RUN,
                );
            }
        }
        self.state.power = power;
        self.state.last_status = Some(status);
    }

    /// Pull `current_volume` and `current_status` out of a property reply.
    fn parse_properties(reply: &Value) -> Result<(i64, String), MiioError> {
        let volume = reply
            .get("current_volume")
            .and_then(Value::as_i64)
            .ok_or_else(|| {
                MiioError::Parse("Missing `current_volume` in get_prop_fm reply".to_string())
            })?;
        let status = reply
            .get("current_status")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                MiioError::Parse("Missing `current_status` in get_prop_fm reply".to_string())
            })?;

        Ok((volume, status.to_owned()))
    }

    /// Call a device command, interpreting the reply's status marker.
    ///
    /// Returns true when the device answered with the success marker. A
    /// transport error is logged with `mask_error` and counts as false; a
    /// well-formed reply without the marker is also false, but logged only
    /// at debug level since the call itself went through.
    fn try_command(&mut self, mask_error: &str, method: &str, params: Value) -> bool {
        match self.transport.send(method, params) {
            Ok(reply) => {
                debug!(%reply, "Response received from gateway");
                self.state.available = true;
                reply.get(0).and_then(Value::as_str) == Some(SUCCESS_MARKER)
            }
            Err(err) => {
                self.state.available = false;
                error!(error = %err, "{}", mask_error);
                false
            }
        }
    }
}
