//! # Multi-Room Batches
//!
//! A floor plan photo usually contains several rooms. This module runs the
//! geometry calculator over an ordered room batch and returns one result
//! record per room, computing only the subset of quantities the caller
//! asked for.
//!
//! Per-room results preserve input order. Summing across rooms is the
//! presentation layer's job, not done here.

use serde::{Deserialize, Serialize};

use super::fabric::FabricPlan;
use super::geometry::{AreaResult, PerimeterResult, RoomGeometryCalculator};
use crate::measure::{Measurement, Room, RoomShape};

/// Which quantities a calculation request wants.
///
/// Tags match the request types of the conversation layer
/// (`perimeter`/`area`/`fabric`/`both`/`complete`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationKind {
    /// Perimeter only (trim/molding jobs)
    Perimeter,
    /// Area only (ceiling sheet jobs)
    Area,
    /// Fabric cutting plan only
    Fabric,
    /// Perimeter and area
    #[serde(rename = "both")]
    PerimeterArea,
    /// Perimeter, area, and fabric plan
    Complete,
}

impl CalculationKind {
    pub fn wants_perimeter(&self) -> bool {
        matches!(
            self,
            CalculationKind::Perimeter | CalculationKind::PerimeterArea | CalculationKind::Complete
        )
    }

    pub fn wants_area(&self) -> bool {
        matches!(
            self,
            CalculationKind::Area | CalculationKind::PerimeterArea | CalculationKind::Complete
        )
    }

    pub fn wants_fabric(&self) -> bool {
        matches!(self, CalculationKind::Fabric | CalculationKind::Complete)
    }
}

/// Derived quantities for one room. Absent fields mean the calculation
/// kind did not request them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomResult {
    /// Room index as supplied by the recognition collaborator
    pub room_number: u32,

    /// Where on the plan the room was found, if recognized from a photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Recognition confidence in [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Shape the formulas were applied for
    pub shape: RoomShape,

    /// The measurements the results were derived from
    pub measurements: Vec<Measurement>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perimeter: Option<PerimeterResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<AreaResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fabric: Option<FabricPlan>,
}

impl RoomGeometryCalculator {
    /// Compute results for every room in the batch, in input order.
    ///
    /// `fabric_width_cm` applies to all rooms and falls back to the
    /// configured default roll width when `None`.
    pub fn calculate_rooms(
        &self,
        rooms: &[Room],
        kind: CalculationKind,
        fabric_width_cm: Option<f64>,
    ) -> Vec<RoomResult> {
        rooms
            .iter()
            .map(|room| self.calculate_room(room, kind, fabric_width_cm))
            .collect()
    }

    /// Compute the requested subset of quantities for one room.
    pub fn calculate_room(
        &self,
        room: &Room,
        kind: CalculationKind,
        fabric_width_cm: Option<f64>,
    ) -> RoomResult {
        RoomResult {
            room_number: room.room_number,
            position: room.position.clone(),
            confidence: room.confidence,
            shape: room.shape,
            measurements: room.measurements.clone(),
            perimeter: kind.wants_perimeter().then(|| self.perimeter_result(room)),
            area: kind.wants_area().then(|| self.area_result(room)),
            fabric: kind
                .wants_fabric()
                .then(|| self.fabric_plan(room, fabric_width_cm)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeometryCoefficients;

    fn calc() -> RoomGeometryCalculator {
        RoomGeometryCalculator::new(GeometryCoefficients::default())
    }

    fn batch() -> Vec<Room> {
        let mut first = Room::rectangle(350.0, 280.0);
        first.room_number = 1;
        let mut second = Room::complex(&[300.0, 200.0, 150.0, 100.0]);
        second.room_number = 2;
        vec![first, second]
    }

    #[test]
    fn test_kind_selects_quantities() {
        assert!(CalculationKind::Perimeter.wants_perimeter());
        assert!(!CalculationKind::Perimeter.wants_area());
        assert!(!CalculationKind::Area.wants_fabric());
        assert!(CalculationKind::PerimeterArea.wants_perimeter());
        assert!(CalculationKind::PerimeterArea.wants_area());
        assert!(CalculationKind::Complete.wants_fabric());
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(
            serde_json::to_string(&CalculationKind::PerimeterArea).unwrap(),
            "\"both\""
        );
        assert_eq!(
            serde_json::to_string(&CalculationKind::Complete).unwrap(),
            "\"complete\""
        );
    }

    #[test]
    fn test_batch_preserves_order() {
        let results = calc().calculate_rooms(&batch(), CalculationKind::PerimeterArea, None);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].room_number, 1);
        assert_eq!(results[1].room_number, 2);
    }

    #[test]
    fn test_perimeter_only_omits_other_fields() {
        let results = calc().calculate_rooms(&batch(), CalculationKind::Perimeter, None);
        assert!(results[0].perimeter.is_some());
        assert!(results[0].area.is_none());
        assert!(results[0].fabric.is_none());
    }

    #[test]
    fn test_complete_fills_everything() {
        let results = calc().calculate_rooms(&batch(), CalculationKind::Complete, Some(200.0));
        for result in &results {
            assert!(result.perimeter.is_some());
            assert!(result.area.is_some());
            assert!(result.fabric.is_some());
        }
        assert_eq!(results[0].perimeter.unwrap().value_m, 13.23);
        assert_eq!(results[0].fabric.as_ref().unwrap().total_length_m, 6.05);
    }

    #[test]
    fn test_skipped_fields_not_serialized() {
        let results = calc().calculate_rooms(&batch(), CalculationKind::Area, None);
        let json = serde_json::to_string(&results[0]).unwrap();
        assert!(json.contains("\"area\""));
        assert!(!json.contains("\"perimeter\""));
        assert!(!json.contains("\"fabric\""));
    }
}
