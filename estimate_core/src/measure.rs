//! # Room Measurements
//!
//! Input types for the geometry calculator: side identifiers, confirmed
//! measurements, and the room records produced by the recognition or
//! manual-entry collaborators.
//!
//! ## Conventions
//!
//! - Rectangular rooms carry exactly one `length` and one `width` side.
//! - Complex (arbitrary polygon) rooms carry `side1..sideN` in traversal
//!   order; only side lengths are known, never vertex coordinates.
//! - All values are centimeters by the time they reach this crate; unit
//!   normalization happens at the boundary (see [`crate::parse`] for the
//!   manual-entry path).
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::measure::{Room, RoomShape};
//!
//! let room = Room::rectangle(350.0, 280.0);
//! assert_eq!(room.shape, RoomShape::Rectangle);
//! assert!(room.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};

/// Identifier for one measured side of a room.
///
/// Serializes as the plain strings `"length"`, `"width"`, `"side1"`, ...
/// to match the recognition payload format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SideId {
    /// The long side of a rectangular room
    Length,
    /// The short side of a rectangular room
    Width,
    /// Numbered side of a complex room, 1-based, in traversal order
    Side(u32),
}

impl From<SideId> for String {
    fn from(side: SideId) -> Self {
        match side {
            SideId::Length => "length".to_string(),
            SideId::Width => "width".to_string(),
            SideId::Side(n) => format!("side{}", n),
        }
    }
}

impl TryFrom<String> for SideId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "length" => Ok(SideId::Length),
            "width" => Ok(SideId::Width),
            other => match other.strip_prefix("side").and_then(|n| n.parse::<u32>().ok()) {
                Some(n) if n >= 1 => Ok(SideId::Side(n)),
                _ => Err(format!("unknown side identifier: '{}'", s)),
            },
        }
    }
}

impl std::fmt::Display for SideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from(*self))
    }
}

/// One confirmed side measurement, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Which side this value belongs to
    pub side: SideId,

    /// Side length in centimeters
    pub value_cm: f64,
}

impl Measurement {
    pub fn new(side: SideId, value_cm: f64) -> Self {
        Measurement { side, value_cm }
    }
}

/// Shape classification determining which formulas apply.
///
/// Immutable once measurements are confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomShape {
    /// Exactly one length and one width measurement
    Rectangle,
    /// Arbitrary polygon given as >= 3 traversal-order side lengths
    Complex,
}

/// One room as confirmed by the recognition or manual-entry collaborator.
///
/// `position` and `confidence` are carried through from photo recognition
/// so the presentation layer can label results; manual entry leaves them
/// unset/1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// 1-based room index as supplied by the recognition collaborator
    pub room_number: u32,

    /// Shape classification
    pub shape: RoomShape,

    /// Confirmed side measurements, centimeters
    pub measurements: Vec<Measurement>,

    /// Where on the plan the room was found (recognition only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Recognition confidence in [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Room {
    /// Build a rectangular room from length and width in centimeters.
    pub fn rectangle(length_cm: f64, width_cm: f64) -> Self {
        Room {
            room_number: 1,
            shape: RoomShape::Rectangle,
            measurements: vec![
                Measurement::new(SideId::Length, length_cm),
                Measurement::new(SideId::Width, width_cm),
            ],
            position: None,
            confidence: None,
        }
    }

    /// Build a complex room from traversal-order side lengths in centimeters.
    pub fn complex(sides_cm: &[f64]) -> Self {
        Room {
            room_number: 1,
            shape: RoomShape::Complex,
            measurements: sides_cm
                .iter()
                .enumerate()
                .map(|(i, &v)| Measurement::new(SideId::Side(i as u32 + 1), v))
                .collect(),
            position: None,
            confidence: None,
        }
    }

    /// Look up a side value; missing sides read as zero.
    ///
    /// The geometry formulas deliberately treat a missing rectangle side as
    /// zero (degenerate result) rather than failing; callers wanting
    /// strictness should run [`Room::validate`] first.
    pub fn side_value(&self, side: SideId) -> f64 {
        self.measurements
            .iter()
            .find(|m| m.side == side)
            .map(|m| m.value_cm)
            .unwrap_or(0.0)
    }

    /// All side values in input order.
    pub fn side_values(&self) -> Vec<f64> {
        self.measurements.iter().map(|m| m.value_cm).collect()
    }

    /// Validate the shape invariants.
    ///
    /// - every value must be positive
    /// - Rectangle: exactly one `length` and one `width`
    /// - Complex: at least 3 sides
    pub fn validate(&self) -> EstimateResult<()> {
        for m in &self.measurements {
            if m.value_cm <= 0.0 {
                return Err(EstimateError::invalid_input(
                    m.side.to_string(),
                    m.value_cm.to_string(),
                    "Side length must be positive",
                ));
            }
        }

        match self.shape {
            RoomShape::Rectangle => {
                for side in [SideId::Length, SideId::Width] {
                    let count = self.measurements.iter().filter(|m| m.side == side).count();
                    if count == 0 {
                        return Err(EstimateError::missing_measurement(side.to_string()));
                    }
                    if count > 1 {
                        return Err(EstimateError::invalid_input(
                            side.to_string(),
                            count.to_string(),
                            "Rectangle must have exactly one measurement per side",
                        ));
                    }
                }
                Ok(())
            }
            RoomShape::Complex => {
                if self.measurements.len() < 3 {
                    return Err(EstimateError::invalid_input(
                        "measurements",
                        self.measurements.len().to_string(),
                        "Complex shape requires at least 3 sides",
                    ));
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_id_serialization() {
        let json = serde_json::to_string(&SideId::Length).unwrap();
        assert_eq!(json, "\"length\"");

        let json = serde_json::to_string(&SideId::Side(3)).unwrap();
        assert_eq!(json, "\"side3\"");

        let roundtrip: SideId = serde_json::from_str("\"side12\"").unwrap();
        assert_eq!(roundtrip, SideId::Side(12));
    }

    #[test]
    fn test_side_id_rejects_garbage() {
        assert!(serde_json::from_str::<SideId>("\"side0\"").is_err());
        assert!(serde_json::from_str::<SideId>("\"diagonal\"").is_err());
    }

    #[test]
    fn test_rectangle_constructor() {
        let room = Room::rectangle(350.0, 280.0);
        assert_eq!(room.side_value(SideId::Length), 350.0);
        assert_eq!(room.side_value(SideId::Width), 280.0);
        assert!(room.validate().is_ok());
    }

    #[test]
    fn test_missing_side_reads_zero() {
        let room = Room {
            room_number: 1,
            shape: RoomShape::Rectangle,
            measurements: vec![Measurement::new(SideId::Length, 350.0)],
            position: None,
            confidence: None,
        };
        assert_eq!(room.side_value(SideId::Width), 0.0);
        assert!(matches!(
            room.validate(),
            Err(EstimateError::MissingMeasurement { .. })
        ));
    }

    #[test]
    fn test_complex_requires_three_sides() {
        let room = Room::complex(&[300.0, 200.0]);
        assert!(room.validate().is_err());

        let room = Room::complex(&[300.0, 200.0, 150.0]);
        assert!(room.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let room = Room::rectangle(350.0, 0.0);
        assert!(matches!(
            room.validate(),
            Err(EstimateError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_room_serialization() {
        let room = Room::rectangle(350.0, 280.0);
        let json = serde_json::to_string(&room).unwrap();
        assert!(json.contains("\"length\""));
        assert!(json.contains("\"rectangle\""));

        let roundtrip: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, room);
    }
}
