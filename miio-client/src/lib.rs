//! Private miIO transport seam for Lumi gateway communication
//!
//! This crate defines the boundary to the encrypted miIO transport used by
//! Xiaomi Lumi gateways. The concrete wire client (UDP socket, token-based
//! AES framing, request ids) lives in the embedding application; consumers in
//! this workspace talk to the device exclusively through the [`MiioTransport`]
//! trait, which exchanges JSON-RPC-like method calls for parsed
//! `serde_json::Value` payloads.
//!
//! Commands reply with an array whose first element is a status marker
//! (`["ok"]`); info and property queries reply with an object. Failures are
//! surfaced as [`MiioError`] values, never panics.

mod error;

pub use error::MiioError;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// RPC method that returns static device information.
pub const METHOD_INFO: &str = "miIO.info";

/// Type alias for results that can return a MiioError
pub type Result<T> = std::result::Result<T, MiioError>;

/// A handle to an encrypted miIO request/response channel.
///
/// One implementation per device; the transport is stateless
/// request/response, so there is nothing to clean up on drop. A call may
/// block for the duration of the network round-trip and reports timeouts as
/// [`MiioError::Network`].
pub trait MiioTransport {
    /// Send one RPC and return the parsed result payload.
    fn send(&self, method: &str, params: Value) -> Result<Value>;

    /// Query static device information via `miIO.info`.
    fn device_info(&self) -> Result<DeviceInfo> {
        let reply = self.send(METHOD_INFO, Value::Array(Vec::new()))?;
        DeviceInfo::from_reply(&reply)
    }
}

/// Static device information reported by `miIO.info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Vendor model string (e.g. "lumi.gateway.v3")
    pub model: String,
    /// Firmware revision
    pub firmware_version: String,
    /// Hardware revision
    pub hardware_version: String,
    /// MAC address as reported by the device
    pub mac_address: String,
}

impl DeviceInfo {
    /// Parse a `miIO.info` reply object.
    ///
    /// The wire uses the short keys `model`, `fw_ver`, `hw_ver` and `mac`;
    /// a missing or non-string field is a [`MiioError::Parse`].
    pub fn from_reply(reply: &Value) -> Result<Self> {
        let field = |key: &str| {
            reply
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_owned)
                .ok_or_else(|| {
                    MiioError::Parse(format!("Missing `{}` field in miIO.info reply", key))
                })
        };

        Ok(Self {
            model: field("model")?,
            firmware_version: field("fw_ver")?,
            hardware_version: field("hw_ver")?,
            mac_address: field("mac")?,
        })
    }
}
