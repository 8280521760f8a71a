//! Helpers for turning platform-reported scale values into a [`ScaleFactor`].
//!
//! Callers pass the platform scale factor (logical→physical) as `f32`; nothing
//! here talks to a windowing system.

use crate::scale::ScaleFactor;

/// Smallest factor produced from platform values.
const MIN_FACTOR: f32 = 0.0001;

#[inline]
fn sanitize(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 { v } else { 1.0 }
}

impl ScaleFactor {
    /// Combine the platform scale factor with a user UI scale.
    ///
    /// Missing or bogus values (zero, negative, NaN, infinite) count as 1, so
    /// this never panics.
    pub fn from_platform(scale_factor: f32, ui_scale: f32) -> Self {
        let combined = sanitize(scale_factor) * sanitize(ui_scale);
        Self::new(combined.clamp(MIN_FACTOR, f32::MAX))
    }
}

/// Multiplier for mapping authored logical pixels to physical pixels.
/// Returns 1 when `logical_pixels` is false.
#[inline]
pub fn logical_multiplier(logical_pixels: bool, scale_factor: f32, ui_scale: f32) -> f32 {
    if logical_pixels {
        ScaleFactor::from_platform(scale_factor, ui_scale).factor()
    } else {
        1.0
    }
}

/// Snap a coordinate to the nearest device pixel for crisp edges.
#[inline]
pub fn snap_to_device(v: f32, scale_factor: f32) -> f32 {
    ScaleFactor::from_platform(scale_factor, 1.0).round_to_nearest_pixel(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_platform_sanitizes() {
        assert_eq!(ScaleFactor::from_platform(2.0, 1.5).factor(), 3.0);
        assert_eq!(ScaleFactor::from_platform(0.0, 1.0), ScaleFactor::ONE);
        assert_eq!(ScaleFactor::from_platform(f32::NAN, 2.0).factor(), 2.0);
        assert_eq!(ScaleFactor::from_platform(2.0, -1.0).factor(), 2.0);
        assert_eq!(
            ScaleFactor::from_platform(f32::INFINITY, f32::NEG_INFINITY),
            ScaleFactor::ONE
        );
        assert_eq!(ScaleFactor::from_platform(1e-3, 1e-3).factor(), MIN_FACTOR);
        assert_eq!(ScaleFactor::from_platform(f32::MAX, 4.0).factor(), f32::MAX);
    }

    #[test]
    fn test_logical_multiplier() {
        assert_eq!(logical_multiplier(false, 2.0, 2.0), 1.0);
        assert_eq!(logical_multiplier(true, 2.0, 1.25), 2.5);
        assert_eq!(logical_multiplier(true, -3.0, 0.0), 1.0);
    }

    #[test]
    fn test_snap_to_device() {
        assert_eq!(snap_to_device(10.3, 2.0), 10.5);
        assert_eq!(snap_to_device(10.2, 2.0), 10.0);
        assert_eq!(snap_to_device(4.4, 0.0), 4.0);
    }
}
