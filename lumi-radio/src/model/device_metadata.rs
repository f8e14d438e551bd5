//! Static device metadata and the diagnostic attribute set

use miio_client::DeviceInfo;
use serde::{Deserialize, Serialize};

/// Name of the device property the power state is derived from. Also the
/// fixed suffix of the derived unique id.
pub(crate) const STATE_PROPERTY: &str = "pause";

/// Immutable device description captured from the info query at setup time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceMetadata {
    /// Vendor model string
    pub model: String,
    /// Firmware revision
    pub firmware_version: String,
    /// Hardware revision
    pub hardware_version: String,
    /// MAC address of the gateway
    pub mac_address: String,
    /// Stable id derived from model and MAC address
    pub unique_id: String,
}

impl DeviceMetadata {
    /// Capture metadata from a `miIO.info` result.
    pub fn from_info(info: &DeviceInfo) -> Self {
        Self {
            model: info.model.clone(),
            firmware_version: info.firmware_version.clone(),
            hardware_version: info.hardware_version.clone(),
            mac_address: info.mac_address.clone(),
            unique_id: format!("{}-{}-{}", info.model, info.mac_address, STATE_PROPERTY),
        }
    }

    /// Build the diagnostic attribute set shown in the host UI.
    pub fn diagnostics(&self, state_value: Option<String>) -> DiagnosticAttributes {
        DiagnosticAttributes {
            model: self.model.clone(),
            firmware_version: self.firmware_version.clone(),
            hardware_version: self.hardware_version.clone(),
            state_property: STATE_PROPERTY,
            state_value,
        }
    }
}

/// Fixed diagnostic attribute set for one gateway radio
///
/// The key set is static, so this is a typed record rather than a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticAttributes {
    pub model: String,
    pub firmware_version: String,
    pub hardware_version: String,
    /// Device property the power state is derived from
    pub state_property: &'static str,
    /// Last raw status value received from the device
    pub state_value: Option<String>,
}
