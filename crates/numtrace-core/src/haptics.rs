//! Best-effort haptic feedback.

use thiserror::Error;

/// Haptics errors. Callers never see these; see [`pulse`].
#[derive(Debug, Error)]
pub enum HapticsError {
    #[error("haptics not supported on this platform")]
    Unsupported,
    #[error("haptics failed: {0}")]
    Platform(String),
}

/// Vibration length of a light impact, for platforms that only support durations.
pub const LIGHT_IMPACT_MS: u32 = 10;

/// A platform haptics backend.
pub trait Haptics {
    /// Play a light impact.
    fn light_impact(&self) -> Result<(), HapticsError>;
}

/// Backend for platforms without haptics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn light_impact(&self) -> Result<(), HapticsError> {
        Err(HapticsError::Unsupported)
    }
}

/// Trigger a light impact, ignoring any failure.
pub fn pulse(haptics: &dyn Haptics) {
    if let Err(e) = haptics.light_impact() {
        log::debug!("Haptic pulse skipped: {}", e);
    }
}
