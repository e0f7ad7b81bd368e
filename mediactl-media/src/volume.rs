//! Linear volume to attenuation conversion
//!
//! Audio outputs take their gain in hundredths of a decibel, where `0` is
//! full volume and [`MIN_VOLUME_DB`] is silence. Player volume is a linear
//! 0-100 slider value. Callers clamp the slider value before converting.

/// Attenuation used for a muted or zero-volume output (-100.00 dB)
pub const MIN_VOLUME_DB: i32 = -10_000;

/// Unity gain
pub const MAX_VOLUME_DB: i32 = 0;

/// Convert a 0-100 volume to hundredths of a decibel
///
/// The input is not clamped. A negative volume has no logarithm and comes
/// out as `0` (unity gain), and values above 100 give positive gain.
pub fn volume_to_decibels(volume: i32) -> i32 {
    match volume {
        0 => MIN_VOLUME_DB,
        100 => MAX_VOLUME_DB,
        _ => ((f64::from(volume) / 100.0).log10() * 5000.0).round() as i32,
    }
}

/// Convert hundredths of a decibel back to a 0-100 volume
///
/// The input is not clamped. Positive gain maps above 100 and saturates at
/// `i32::MAX` once the power overflows.
pub fn decibels_to_volume(decibels: i32) -> i32 {
    match decibels {
        MIN_VOLUME_DB => 0,
        MAX_VOLUME_DB => 100,
        _ => (100.0 * 10f64.powf(f64::from(decibels) / 5000.0)).round() as i32,
    }
}
