//! # Error Types
//!
//! Structured error types for estimate_core. A failed calculation never
//! yields a partial or garbage numeric result: the caller gets an error
//! variant with enough context to re-prompt the user or fix the input
//! programmatically.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::errors::{EstimateError, EstimateResult};
//!
//! fn validate_fabric_width(width_cm: f64) -> EstimateResult<()> {
//!     if width_cm <= 0.0 {
//!         return Err(EstimateError::invalid_input(
//!             "fabric_width_cm",
//!             width_cm.to_string(),
//!             "Roll width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for estimate_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong. Note that
/// a valid-but-degenerate zero-size room is *not* an error (see
/// [`crate::calculations::geometry`]); these variants cover inputs the
/// engine cannot compute from at all.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required side measurement is missing for the declared room shape
    #[error("Missing measurement for side: {side}")]
    MissingMeasurement { side: String },

    /// Manual entry contained no usable numeric tokens
    #[error("No measurements found in input: '{input}'")]
    NoMeasurementsFound { input: String },

    /// Calculation failed (stage ordering violated, inconsistent inputs, etc.)
    #[error("Calculation failed: {calculation} - {reason}")]
    CalculationFailed { calculation: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl EstimateError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingMeasurement error
    pub fn missing_measurement(side: impl Into<String>) -> Self {
        EstimateError::MissingMeasurement { side: side.into() }
    }

    /// Create a NoMeasurementsFound error
    pub fn no_measurements(input: impl Into<String>) -> Self {
        EstimateError::NoMeasurementsFound {
            input: input.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::CalculationFailed {
            calculation: calculation.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidInput { .. } => "INVALID_INPUT",
            EstimateError::MissingMeasurement { .. } => "MISSING_MEASUREMENT",
            EstimateError::NoMeasurementsFound { .. } => "NO_MEASUREMENTS_FOUND",
            EstimateError::CalculationFailed { .. } => "CALCULATION_FAILED",
            EstimateError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }

    /// Whether the caller should re-prompt the user for new input
    pub fn is_user_input_error(&self) -> bool {
        matches!(
            self,
            EstimateError::InvalidInput { .. }
                | EstimateError::MissingMeasurement { .. }
                | EstimateError::NoMeasurementsFound { .. }
        )
    }
}

impl From<serde_json::Error> for EstimateError {
    fn from(err: serde_json::Error) -> Self {
        EstimateError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = EstimateError::invalid_input("fabric_width_cm", "-200", "Roll width must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: EstimateError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            EstimateError::missing_measurement("width").error_code(),
            "MISSING_MEASUREMENT"
        );
        assert_eq!(
            EstimateError::no_measurements("hello").error_code(),
            "NO_MEASUREMENTS_FOUND"
        );
    }

    #[test]
    fn test_user_input_errors() {
        assert!(EstimateError::no_measurements("").is_user_input_error());
        assert!(!EstimateError::calculation_failed("totals", "profile stage missing")
            .is_user_input_error());
    }
}
