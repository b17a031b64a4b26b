//! Strongly-typed numeric primitives (zero-cost newtypes).
//!
//! Shape parameters are measured in abstract "centimetre" units and degrees.
//! Only the [`Scaler`] turns a [`Length`] into pixels, so the numbers that reach
//! the property calculator never depend on how large the figure is drawn.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject anything that is not a finite, strictly positive number.
fn check_positive(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Length in abstract units (the "cm" of the question text)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    /// Create a strictly positive, finite Length
    #[inline]
    pub fn try_positive(val: f64) -> Result<Length, NumericError> {
        check_positive(val).map(Length)
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Squared value, for Pythagorean sums
    #[inline]
    pub fn squared(self) -> f64 {
        self.0 * self.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Length {
    fn from(val: f64) -> Self {
        Length(val)
    }
}

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Angle whose tangent is `ratio`, in degrees.
    pub fn atan(ratio: f64) -> Angle {
        Angle(ratio.atan().to_degrees())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl From<f64> for Angle {
    fn from(val: f64) -> Self {
        Angle(val)
    }
}

/// Converts lengths to pixels: the caller-controlled multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    px_per_unit: f64,
}

impl Scaler {
    /// Create a Scaler (unchecked).
    pub(crate) const fn new(px_per_unit: f64) -> Self {
        Scaler { px_per_unit }
    }

    /// Create a Scaler with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(px_per_unit: f64) -> Result<Self, NumericError> {
        check_positive(px_per_unit).map(Scaler::new)
    }

    pub fn px_per_unit(&self) -> f64 {
        self.px_per_unit
    }

    /// Convert a length to raw pixels.
    #[inline]
    pub fn px(&self, l: Length) -> f64 {
        l.0 * self.px_per_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_try_positive_valid() {
        assert_eq!(Length::try_positive(2.5), Ok(Length(2.5)));
    }

    #[test]
    fn length_try_positive_rejects_zero_and_negative() {
        assert_eq!(Length::try_positive(0.0), Err(NumericError::Zero));
        assert_eq!(Length::try_positive(-1.0), Err(NumericError::Negative));
    }

    #[test]
    fn length_try_positive_rejects_nan_and_infinity() {
        assert_eq!(Length::try_positive(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Length::try_positive(f64::INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn length_squared() {
        assert_eq!(Length(3.0).squared(), 9.0);
    }

    #[test]
    fn angle_atan_in_degrees() {
        assert!((Angle::atan(1.0).raw() - 45.0).abs() < 1e-12);
        assert!((Angle(180.0).to_radians() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn scaler_try_new_rejects_bad_values() {
        assert_eq!(Scaler::try_new(0.0), Err(NumericError::Zero));
        assert_eq!(Scaler::try_new(-8.0), Err(NumericError::Negative));
        assert_eq!(Scaler::try_new(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Scaler::try_new(f64::INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn scaler_converts_length_to_px() {
        let scaler = Scaler::try_new(12.0).unwrap();
        assert_eq!(scaler.px(Length(5.0)), 60.0);
    }

    #[test]
    fn length_serializes_as_bare_number() {
        let json = serde_json::to_string(&Length(7.5)).unwrap();
        assert_eq!(json, "7.5");
    }
}
