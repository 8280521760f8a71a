use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, ScaleError};

/// Multiplier from logical (density independent) lengths to device pixels.
///
/// Always positive and finite. Equality compares the raw `f32`, so `2.0` and
/// `1.9999999` are different factors.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ScaleFactor {
    factor: f32,
}

impl ScaleFactor {
    /// The unscaled factor.
    pub const ONE: ScaleFactor = ScaleFactor { factor: 1.0 };

    /// Create a scale factor.
    ///
    /// # Panics
    /// If `factor` is not a positive finite number. Use [`ScaleFactor::try_new`]
    /// for values that come from outside the program.
    pub fn new(factor: f32) -> Self {
        match Self::try_new(factor) {
            Ok(scale) => scale,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a scale factor, rejecting non-positive and non-finite values.
    pub fn try_new(factor: f32) -> Result<Self> {
        if factor > 0.0 && factor.is_finite() {
            Ok(Self { factor })
        } else {
            Err(ScaleError::InvalidFactor(factor))
        }
    }

    /// The raw multiplier.
    #[inline]
    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Returns `length` scaled by this factor.
    #[inline]
    pub fn scaled(&self, length: f32) -> f32 {
        self.factor * length
    }

    /// Returns `length` scaled by this factor and rounded up.
    #[inline]
    pub fn scaled_ceil(&self, length: f32) -> i32 {
        self.scaled(length).ceil() as i32
    }

    /// Returns `length` scaled by this factor and rounded down.
    #[inline]
    pub fn scaled_floor(&self, length: f32) -> i32 {
        self.scaled(length).floor() as i32
    }

    /// Returns `length` inverse scaled by this factor.
    #[inline]
    pub fn inv_scaled(&self, length: f32) -> f32 {
        length / self.factor
    }

    /// Returns `length` inverse scaled by this factor and rounded down.
    #[inline]
    pub fn inv_scaled_floor(&self, length: f32) -> i32 {
        self.inv_scaled(length).floor() as i32
    }

    /// Returns `length` inverse scaled by this factor and rounded up.
    #[inline]
    pub fn inv_scaled_ceil(&self, length: f32) -> i32 {
        self.inv_scaled(length).ceil() as i32
    }

    /// Snap a logical length to the nearest value that covers a whole number
    /// of device pixels. At a factor of 3, `8.4` becomes `8.333..` (25 px).
    ///
    /// Halfway cases round away from zero.
    #[inline]
    pub fn round_to_nearest_pixel(&self, length: f32) -> f32 {
        (length * self.factor).round() / self.factor
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.factor)
    }
}

impl<'de> Deserialize<'de> for ScaleFactor {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let factor = f32::deserialize(deserializer)?;
        Self::try_new(factor).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_one_is_identity() {
        let one = ScaleFactor::ONE;
        for x in [0.0, 1.0, 2.5, -7.25, 1024.0] {
            assert_eq!(one.scaled(x), x);
            assert_eq!(one.inv_scaled(x), x);
        }
        assert_eq!(ScaleFactor::default(), ScaleFactor::ONE);
    }

    #[test]
    fn test_inverse_scaling_round_trip() {
        for factor in [0.5, 1.0, 1.25, 1.5, 2.0, 2.5, 3.0, 4.0] {
            let scale = ScaleFactor::new(factor);
            for length in [0.0, 1.0, 3.3, 17.0, 640.5] {
                assert!(approx_eq(scale.scaled(length) / factor, length));
                assert!(approx_eq(scale.inv_scaled(scale.scaled(length)), length));
            }
        }
    }

    #[test]
    fn test_rounding_helpers() {
        let scale = ScaleFactor::new(1.5);
        assert_eq!(scale.scaled_ceil(3.0), 5);
        assert_eq!(scale.scaled_floor(3.0), 4);
        assert_eq!(scale.inv_scaled_ceil(4.0), 3);
        assert_eq!(scale.inv_scaled_floor(4.0), 2);

        let two = ScaleFactor::new(2.0);
        assert_eq!(two.scaled_ceil(-1.25), -2);
        assert_eq!(two.scaled_floor(-1.25), -3);
    }

    #[test]
    fn test_round_to_nearest_pixel() {
        let three = ScaleFactor::new(3.0);
        assert!(approx_eq(three.round_to_nearest_pixel(8.4), 25.0 / 3.0));

        for factor in [0.75, 1.0, 1.25, 1.5, 2.0, 2.5, 3.0] {
            let scale = ScaleFactor::new(factor);
            for length in [0.1, 2.2, 8.4, 33.3, 99.9] {
                let px = scale.scaled(scale.round_to_nearest_pixel(length));
                assert!(approx_eq(px, px.round()), "{factor} {length} -> {px}");
            }
        }
    }

    #[test]
    fn test_round_to_nearest_pixel_identity_at_one() {
        let one = ScaleFactor::ONE;
        assert_eq!(one.round_to_nearest_pixel(3.0), 3.0);
        assert_eq!(one.round_to_nearest_pixel(3.4), 3.0);
        assert_eq!(one.round_to_nearest_pixel(3.5), 4.0);
    }

    #[test]
    fn test_try_new_rejects_invalid() {
        assert_eq!(ScaleFactor::try_new(0.0), Err(ScaleError::InvalidFactor(0.0)));
        assert_eq!(ScaleFactor::try_new(-2.0), Err(ScaleError::InvalidFactor(-2.0)));
        assert!(ScaleFactor::try_new(f32::NAN).is_err());
        assert!(ScaleFactor::try_new(f32::INFINITY).is_err());
        assert_eq!(ScaleFactor::try_new(2.0).map(|s| s.factor()), Ok(2.0));
    }

    #[test]
    #[should_panic(expected = "scale factor must be > 0")]
    fn test_new_panics_on_zero() {
        let _ = ScaleFactor::new(0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(ScaleFactor::new(2.0).to_string(), "x2");
        assert_eq!(ScaleFactor::new(1.5).to_string(), "x1.5");
        assert_eq!(ScaleFactor::ONE.to_string(), "x1");
    }
}
