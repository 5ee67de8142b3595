//! # Room Geometry Calculator
//!
//! Converts confirmed measurements into perimeter and area with configurable
//! safety margins.
//!
//! ## Formulas
//!
//! | Shape     | Perimeter          | Area                              |
//! |-----------|--------------------|-----------------------------------|
//! | Rectangle | `2 × (L + W)`      | `L × W`                           |
//! | Complex   | `Σ sides`          | product of the two largest sides  |
//!
//! Both results are multiplied by `(1 + margin/100)`.
//!
//! The complex-shape area is a deliberate approximation: side lengths alone
//! do not determine a polygon, so the room is treated as a bounding
//! rectangle of its two largest sides. Callers depend on these exact
//! numbers; do not replace this with true polygon math.
//!
//! A rectangle missing its `length` or `width` measurement yields a
//! degenerate zero result rather than an error; run [`Room::validate`]
//! first when strictness is wanted.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::calculations::geometry::RoomGeometryCalculator;
//! use estimate_core::config::GeometryCoefficients;
//! use estimate_core::measure::Room;
//!
//! let calc = RoomGeometryCalculator::new(GeometryCoefficients::default());
//! let room = Room::rectangle(350.0, 280.0);
//!
//! // 2 × (350 + 280) × 1.05
//! assert_eq!(calc.perimeter(&room).0, 1323.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::GeometryCoefficients;
use crate::measure::{Room, RoomShape, SideId};
use crate::units::{round2, Centimeters, SquareCentimeters};

/// Calculator over a snapshot of geometry coefficients.
///
/// Construct one per calculation request; the snapshot isolates in-flight
/// calculations from coefficient hot-reloads.
#[derive(Debug, Clone)]
pub struct RoomGeometryCalculator {
    coeffs: GeometryCoefficients,
}

impl RoomGeometryCalculator {
    pub fn new(coeffs: GeometryCoefficients) -> Self {
        RoomGeometryCalculator { coeffs }
    }

    /// The coefficient snapshot this calculator was built from.
    pub fn coefficients(&self) -> &GeometryCoefficients {
        &self.coeffs
    }

    /// Perimeter in cm with the configured margin applied.
    pub fn perimeter(&self, room: &Room) -> Centimeters {
        self.perimeter_with_margin(room, self.coeffs.perimeter_margin_percent)
    }

    /// Perimeter in cm with an explicit margin percentage.
    pub fn perimeter_with_margin(&self, room: &Room, margin_percent: f64) -> Centimeters {
        let raw = match room.shape {
            RoomShape::Rectangle => {
                2.0 * (room.side_value(SideId::Length) + room.side_value(SideId::Width))
            }
            RoomShape::Complex => room.side_values().iter().sum(),
        };
        Centimeters(raw * (1.0 + margin_percent / 100.0))
    }

    /// Area in cm² with the configured margin applied.
    pub fn area(&self, room: &Room) -> SquareCentimeters {
        self.area_with_margin(room, self.coeffs.area_margin_percent)
    }

    /// Area in cm² with an explicit margin percentage.
    pub fn area_with_margin(&self, room: &Room, margin_percent: f64) -> SquareCentimeters {
        let raw = match room.shape {
            RoomShape::Rectangle => {
                room.side_value(SideId::Length) * room.side_value(SideId::Width)
            }
            RoomShape::Complex => approximate_polygon_area(&room.side_values()),
        };
        SquareCentimeters(raw * (1.0 + margin_percent / 100.0))
    }

    /// Perimeter as a display record (cm/m pair, 2-decimal rounding).
    pub fn perimeter_result(&self, room: &Room) -> PerimeterResult {
        let value = self.perimeter(room);
        PerimeterResult {
            value_cm: round2(value.0),
            value_m: round2(value.0 / 100.0),
            margin_percent: self.coeffs.perimeter_margin_percent,
        }
    }

    /// Area as a display record (cm²/m² pair, 2-decimal rounding).
    pub fn area_result(&self, room: &Room) -> AreaResult {
        let value = self.area(room);
        AreaResult {
            value_cm2: round2(value.0),
            value_m2: round2(value.0 / 10_000.0),
            margin_percent: self.coeffs.area_margin_percent,
        }
    }
}

/// Bounding-rectangle approximation: the product of the two largest sides.
///
/// Fewer than 3 sides is not a closed polygon and reads as zero area.
fn approximate_polygon_area(sides: &[f64]) -> f64 {
    if sides.len() < 3 {
        return 0.0;
    }
    let mut sorted = sides.to_vec();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    sorted[0] * sorted[1]
}

/// Perimeter with margin applied, as reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerimeterResult {
    /// Perimeter in centimeters, margin included
    pub value_cm: f64,

    /// Perimeter in meters, margin included
    pub value_m: f64,

    /// Margin percentage that was applied
    pub margin_percent: f64,
}

impl PerimeterResult {
    /// Perimeter with the margin backed out, in meters.
    pub fn without_margin_m(&self) -> f64 {
        self.value_cm / (1.0 + self.margin_percent / 100.0) / 100.0
    }
}

/// Area with margin applied, as reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaResult {
    /// Area in square centimeters, margin included
    pub value_cm2: f64,

    /// Area in square meters, margin included
    pub value_m2: f64,

    /// Margin percentage that was applied
    pub margin_percent: f64,
}

impl AreaResult {
    /// Area with the margin backed out, in square meters.
    pub fn without_margin_m2(&self) -> f64 {
        self.value_cm2 / (1.0 + self.margin_percent / 100.0) / 10_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::Measurement;

    fn calc() -> RoomGeometryCalculator {
        RoomGeometryCalculator::new(GeometryCoefficients::default())
    }

    #[test]
    fn test_rectangle_perimeter_with_default_margin() {
        let room = Room::rectangle(350.0, 280.0);
        // 2 × 630 × 1.05
        assert_eq!(calc().perimeter(&room).0, 1323.0);
    }

    #[test]
    fn test_rectangle_area_with_default_margin() {
        let room = Room::rectangle(350.0, 280.0);
        // 350 × 280 × 1.10
        let area = calc().area(&room);
        assert!((area.0 - 107_800.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_margin() {
        let room = Room::rectangle(350.0, 280.0);
        assert_eq!(calc().perimeter_with_margin(&room, 0.0).0, 1260.0);
        assert_eq!(calc().area_with_margin(&room, 0.0).0, 98_000.0);
    }

    #[test]
    fn test_complex_perimeter_sums_all_sides() {
        let room = Room::complex(&[300.0, 200.0, 150.0, 100.0]);
        // (300+200+150+100) × 1.05
        assert_eq!(calc().perimeter(&room).0, 787.5);
    }

    #[test]
    fn test_complex_area_uses_two_largest_sides() {
        let room = Room::complex(&[150.0, 300.0, 100.0, 200.0]);
        // 300 × 200 × 1.10
        let area = calc().area(&room);
        assert!((area.0 - 66_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_complex_area_under_three_sides_is_zero() {
        let room = Room {
            room_number: 1,
            shape: RoomShape::Complex,
            measurements: vec![
                Measurement::new(SideId::Side(1), 300.0),
                Measurement::new(SideId::Side(2), 200.0),
            ],
            position: None,
            confidence: None,
        };
        assert_eq!(calc().area(&room).0, 0.0);
    }

    #[test]
    fn test_missing_rectangle_side_degenerates_to_zero() {
        let room = Room {
            room_number: 1,
            shape: RoomShape::Rectangle,
            measurements: vec![Measurement::new(SideId::Length, 350.0)],
            position: None,
            confidence: None,
        };
        assert_eq!(calc().area(&room).0, 0.0);
        assert_eq!(calc().perimeter(&room).0, 735.0); // 2 × 350 × 1.05
    }

    #[test]
    fn test_perimeter_result_record() {
        let room = Room::rectangle(350.0, 280.0);
        let result = calc().perimeter_result(&room);
        assert_eq!(result.value_cm, 1323.0);
        assert_eq!(result.value_m, 13.23);
        assert_eq!(result.margin_percent, 5.0);
        assert!((result.without_margin_m() - 12.6).abs() < 1e-9);
    }

    #[test]
    fn test_area_result_record() {
        let room = Room::rectangle(350.0, 280.0);
        let result = calc().area_result(&room);
        assert_eq!(result.value_cm2, 107_800.0);
        assert_eq!(result.value_m2, 10.78);
        assert!((result.without_margin_m2() - 9.8).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let room = Room::rectangle(413.0, 287.5);
        let calc = calc();
        assert_eq!(calc.perimeter(&room), calc.perimeter(&room));
        assert_eq!(calc.area(&room), calc.area(&room));
    }
}
