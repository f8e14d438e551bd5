//! Model types for lumi-radio

mod device_metadata;
mod power_state;
mod radio_state;
mod supported_features;

pub use device_metadata::{DeviceMetadata, DiagnosticAttributes};
pub use power_state::PowerState;
pub use radio_state::RadioState;
pub use supported_features::SupportedFeatures;
