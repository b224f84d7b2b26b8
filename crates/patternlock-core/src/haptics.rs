//! Haptic feedback capability injected into the gesture tracker.

/// Default vibration length when a new dot is captured.
pub const DEFAULT_VIBRATE_MS: u32 = 5;

/// Something that can buzz the device.
///
/// Implementations must silently do nothing when the platform has no
/// vibration support.
pub trait Haptics {
    /// Vibrate for `duration_ms` milliseconds.
    fn vibrate(&mut self, duration_ms: u32);
}

/// Haptics for environments without a vibration motor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl Haptics for NoopHaptics {
    fn vibrate(&mut self, _duration_ms: u32) {}
}

/// Browser vibration through `navigator.vibrate`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WebVibrator;

#[cfg(target_arch = "wasm32")]
impl Haptics for WebVibrator {
    fn vibrate(&mut self, duration_ms: u32) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if !window.navigator().vibrate_with_duration(duration_ms) {
            log::debug!("navigator.vibrate rejected ({} ms)", duration_ms);
        }
    }
}

/// Haptics appropriate for the current target.
#[cfg(target_arch = "wasm32")]
pub fn platform_haptics() -> Box<dyn Haptics> {
    Box::new(WebVibrator)
}

/// Haptics appropriate for the current target.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_haptics() -> Box<dyn Haptics> {
    Box::new(NoopHaptics)
}
