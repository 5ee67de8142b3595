//! # Unit Types
//!
//! Type-safe wrappers for the metric units used throughout the engine.
//! These provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The engine uses a small, fixed set of metric units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Boundary Convention
//!
//! All linear measurements entering the engine are centimeters (cm); results
//! report cm/m or cm²/m² pairs for display (see the result records in
//! [`crate::calculations`]). Glue volume is derived in milliliters and
//! reported in liters.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::units::{Centimeters, Meters};
//!
//! let perimeter = Centimeters(1323.0);
//! let in_meters: Meters = perimeter.into();
//! assert_eq!(in_meters.0, 13.23);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareCentimeters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

impl From<SquareCentimeters> for SquareMeters {
    fn from(cm2: SquareCentimeters) -> Self {
        SquareMeters(cm2.0 / 10_000.0)
    }
}

impl From<SquareMeters> for SquareCentimeters {
    fn from(m2: SquareMeters) -> Self {
        SquareCentimeters(m2.0 * 10_000.0)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in milliliters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Milliliters(pub f64);

/// Volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

impl From<Milliliters> for Liters {
    fn from(ml: Milliliters) -> Self {
        Liters(ml.0 / 1000.0)
    }
}

impl From<Liters> for Milliliters {
    fn from(l: Liters) -> Self {
        Milliliters(l.0 * 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Centimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(SquareCentimeters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(Milliliters);
impl_arithmetic!(Liters);

// ============================================================================
// Display Rounding
// ============================================================================

/// Round to 1 decimal place (waste percentages)
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimal places (display-facing cm/m fields)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 3 decimal places (glue volume in liters)
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_to_meters() {
        let cm = Centimeters(350.0);
        let m: Meters = cm.into();
        assert_eq!(m.0, 3.5);
    }

    #[test]
    fn test_cm2_to_m2() {
        let cm2 = SquareCentimeters(98_000.0);
        let m2: SquareMeters = cm2.into();
        assert_eq!(m2.0, 9.8);
    }

    #[test]
    fn test_ml_to_liters() {
        let ml = Milliliters(240.0);
        let l: Liters = ml.into();
        assert_eq!(l.0, 0.24);
    }

    #[test]
    fn test_arithmetic() {
        let a = Centimeters(350.0);
        let b = Centimeters(280.0);
        assert_eq!((a + b).0, 630.0);
        assert_eq!((a - b).0, 70.0);
        assert_eq!((a * 2.0).0, 700.0);
        assert_eq!((a / 2.0).0, 175.0);
    }

    #[test]
    fn test_serialization() {
        let cm = Centimeters(132.3);
        let json = serde_json::to_string(&cm).unwrap();
        assert_eq!(json, "132.3");

        let roundtrip: Centimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(cm, roundtrip);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round1(12.345), 12.3);
        assert_eq!(round2(13.2349), 13.23);
        assert_eq!(round3(0.2405), 0.241);
    }
}
