//! Capability flags for the host-facing media-player surface

use std::ops::BitOr;

/// Set of media-player operations a device supports
///
/// The gateway radio ships a fixed capability set; there is no dynamic
/// negotiation with the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedFeatures(u32);

impl SupportedFeatures {
    pub const NONE: Self = Self(0);
    pub const TURN_ON: Self = Self(1);
    pub const TURN_OFF: Self = Self(1 << 1);
    pub const VOLUME_STEP: Self = Self(1 << 2);
    pub const VOLUME_SET: Self = Self(1 << 3);
    pub const VOLUME_MUTE: Self = Self(1 << 4);
    pub const NEXT_TRACK: Self = Self(1 << 5);

    /// Everything the gateway FM radio supports
    pub const GATEWAY_FM: Self = Self(
        Self::TURN_ON.0
            | Self::TURN_OFF.0
            | Self::VOLUME_STEP.0
            | Self::VOLUME_SET.0
            | Self::VOLUME_MUTE.0
            | Self::NEXT_TRACK.0,
    );

    /// Check whether every flag in `other` is present.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Raw bitmask, as exposed to hosts that store capabilities as an integer.
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for SupportedFeatures {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
