//! # Manual Measurement Entry
//!
//! Parses free-text measurement input ("3.5 x 2.8", "350 280 150 200 см")
//! into a confirmed [`Room`], the same structure the photo-recognition
//! collaborator produces.
//!
//! ## Rules
//!
//! - All decimal tokens are extracted; everything else is ignored.
//! - 0 or 1 tokens: the input cannot define a room and parsing fails with
//!   [`EstimateError::NoMeasurementsFound`]; the caller must re-prompt.
//! - Exactly 2 tokens: a rectangle; the larger raw value becomes `length`,
//!   the smaller `width` (ties go to `length`; the comparison happens
//!   before unit normalization).
//! - 3 or more tokens: a complex shape, `side1..sideN` in input order.
//!
//! ## Unit Heuristic
//!
//! Values below 100 are assumed to be meters and are multiplied by 100;
//! values of 100 and above are taken as centimeters. This is ambiguous for
//! genuinely sub-meter sides entered in centimeters, but downstream outputs
//! depend on it, so it is preserved and surfaced here rather than hidden.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{EstimateError, EstimateResult};
use crate::measure::{Measurement, Room, RoomShape, SideId};

/// Decimal token, optionally followed by a unit hint the heuristic ignores.
static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(?:см|мм|м|cm|mm|m)?").expect("valid regex"));

/// Values below this are assumed to be meters
const METERS_THRESHOLD_CM: f64 = 100.0;

/// Normalize one entered value to centimeters.
fn normalize_cm(value: f64) -> f64 {
    if value < METERS_THRESHOLD_CM {
        value * 100.0
    } else {
        value
    }
}

/// Parse manually entered measurements into a single confirmed room.
///
/// # Example
///
/// ```rust
/// use estimate_core::measure::{RoomShape, SideId};
/// use estimate_core::parse::parse_manual_input;
///
/// let room = parse_manual_input("3.5 x 2.8").unwrap();
/// assert_eq!(room.shape, RoomShape::Rectangle);
/// assert_eq!(room.side_value(SideId::Length), 350.0);
/// assert_eq!(room.side_value(SideId::Width), 280.0);
/// ```
pub fn parse_manual_input(text: &str) -> EstimateResult<Room> {
    let values: Vec<f64> = NUMBER_RE
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect();

    if values.len() < 2 {
        return Err(EstimateError::no_measurements(text));
    }

    let room = if values.len() == 2 {
        let length = normalize_cm(f64::max(values[0], values[1]));
        let width = normalize_cm(f64::min(values[0], values[1]));
        Room {
            room_number: 1,
            shape: RoomShape::Rectangle,
            measurements: vec![
                Measurement::new(SideId::Length, length),
                Measurement::new(SideId::Width, width),
            ],
            position: Some("manual input".to_string()),
            confidence: Some(1.0),
        }
    } else {
        Room {
            room_number: 1,
            shape: RoomShape::Complex,
            measurements: values
                .iter()
                .enumerate()
                .map(|(i, &v)| Measurement::new(SideId::Side(i as u32 + 1), normalize_cm(v)))
                .collect(),
            position: Some("manual input".to_string()),
            confidence: Some(1.0),
        }
    };

    Ok(room)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meters() {
        let room = parse_manual_input("3.5 x 2.8").unwrap();
        assert_eq!(room.shape, RoomShape::Rectangle);
        assert_eq!(room.side_value(SideId::Length), 350.0);
        assert_eq!(room.side_value(SideId::Width), 280.0);
    }

    #[test]
    fn test_parse_centimeters() {
        let room = parse_manual_input("350 280").unwrap();
        assert_eq!(room.side_value(SideId::Length), 350.0);
        assert_eq!(room.side_value(SideId::Width), 280.0);
    }

    #[test]
    fn test_larger_value_becomes_length() {
        let room = parse_manual_input("280 350").unwrap();
        assert_eq!(room.side_value(SideId::Length), 350.0);
        assert_eq!(room.side_value(SideId::Width), 280.0);
    }

    #[test]
    fn test_equal_values() {
        let room = parse_manual_input("300 300").unwrap();
        assert_eq!(room.side_value(SideId::Length), 300.0);
        assert_eq!(room.side_value(SideId::Width), 300.0);
    }

    #[test]
    fn test_unit_suffixes_ignored() {
        let room = parse_manual_input("350см на 280см").unwrap();
        assert_eq!(room.side_value(SideId::Length), 350.0);
        assert_eq!(room.side_value(SideId::Width), 280.0);
    }

    #[test]
    fn test_three_or_more_values_are_complex() {
        let room = parse_manual_input("3 4 2.5 3.5").unwrap();
        assert_eq!(room.shape, RoomShape::Complex);
        assert_eq!(room.measurements.len(), 4);
        // Input order preserved, each normalized from meters
        assert_eq!(room.side_value(SideId::Side(1)), 300.0);
        assert_eq!(room.side_value(SideId::Side(2)), 400.0);
        assert_eq!(room.side_value(SideId::Side(3)), 250.0);
        assert_eq!(room.side_value(SideId::Side(4)), 350.0);
    }

    #[test]
    fn test_mixed_units_assign_sides_before_normalization() {
        // length/width are picked on the raw values, then normalized; a
        // mixed-unit entry can therefore end up with width > length
        let room = parse_manual_input("3.5 280").unwrap();
        assert_eq!(room.side_value(SideId::Length), 280.0);
        assert_eq!(room.side_value(SideId::Width), 350.0);
    }

    #[test]
    fn test_no_numbers_fails() {
        assert!(matches!(
            parse_manual_input("hello there"),
            Err(EstimateError::NoMeasurementsFound { .. })
        ));
    }

    #[test]
    fn test_single_number_fails() {
        assert!(matches!(
            parse_manual_input("350"),
            Err(EstimateError::NoMeasurementsFound { .. })
        ));
    }

    #[test]
    fn test_parsed_room_is_valid() {
        let room = parse_manual_input("4.2 x 3.1").unwrap();
        assert!(room.validate().is_ok());
        assert_eq!(room.confidence, Some(1.0));
    }
}
