//! Platform haptics backend.

use numtrace_core::haptics::{Haptics, HapticsError};
#[cfg(target_arch = "wasm32")]
use numtrace_core::haptics::LIGHT_IMPACT_MS;

/// Vibrates through the browser on WASM; unsupported on desktop.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformHaptics;

#[cfg(target_arch = "wasm32")]
impl Haptics for PlatformHaptics {
    fn light_impact(&self) -> Result<(), HapticsError> {
        let window = web_sys::window().ok_or_else(|| HapticsError::Platform("no window".to_string()))?;
        if window.navigator().vibrate_with_duration(LIGHT_IMPACT_MS) {
            Ok(())
        } else {
            Err(HapticsError::Platform("vibration rejected".to_string()))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Haptics for PlatformHaptics {
    fn light_impact(&self) -> Result<(), HapticsError> {
        Err(HapticsError::Unsupported)
    }
}
