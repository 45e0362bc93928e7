//! Engine configuration

use core::fmt;

/// Runtime configuration of a [`SoftEngine`](crate::SoftEngine)
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of polls that report `Busy` before a job completes
    pub busy_polls: u32,
    /// Root secret from which sideloaded keys are derived
    pub device_secret: [u8; 32],
}

impl EngineConfig {
    pub fn with_busy_polls(mut self, busy_polls: u32) -> Self {
        self.busy_polls = busy_polls;
        self
    }

    pub fn with_device_secret(mut self, device_secret: [u8; 32]) -> Self {
        self.device_secret = device_secret;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            busy_polls: 2,
            device_secret: [0u8; 32],
        }
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("busy_polls", &self.busy_polls)
            .field("device_secret", &"[REDACTED]")
            .finish()
    }
}
