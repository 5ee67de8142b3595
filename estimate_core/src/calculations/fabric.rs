//! # Fabric Cutting Plans
//!
//! Computes how many parallel strips of a fixed-width roll cover a room,
//! with seam and edge allowances, and picks the cheaper of the two possible
//! roll orientations.
//!
//! ## Algorithm
//!
//! For run-length `R`, cross-width `W` and roll width `F` (all cm):
//!
//! ```text
//! R' = R + 2 × edge_allowance
//! W' = W + 2 × edge_allowance
//! F ≥ W':  strips = 1, total = R'
//! F < W':  strips = ceil(W' / F), total = R' × strips + (strips − 1) × seam_allowance
//! ```
//!
//! Both orientations are evaluated and the lower total wins; an exact tie
//! keeps the first orientation (length along the roll). Complex rooms are
//! approximated by their two largest sides.
//!
//! The waste percentage is the historical utilization metric
//! `(total − R·W / (F/100)) / total × 100`, kept verbatim for output
//! compatibility; it is not a precise offcut computation.

use serde::{Deserialize, Serialize};

use super::geometry::RoomGeometryCalculator;
use crate::measure::{Room, RoomShape, SideId};
use crate::units::{round1, round2};

/// Which room dimension runs along the roll in the chosen layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutDirection {
    /// Room length along the roll
    LengthAlongRoll,
    /// Room width along the roll
    WidthAlongRoll,
    /// Complex room: longest side along the roll
    LongestSideAlongRoll,
    /// Complex room: second-longest side along the roll
    SecondSideAlongRoll,
}

/// An optimal cutting layout for one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabricPlan {
    /// Number of parallel strips
    pub strips_count: u32,

    /// Length of each strip, cm (run-length plus edge allowances)
    pub strip_length_cm: f64,

    /// Total fabric to order, cm
    pub total_length_cm: f64,

    /// Total fabric to order, meters (2-decimal rounding)
    pub total_length_m: f64,

    /// Seam allowance included in the total, cm
    pub seam_allowance_cm: f64,

    /// Edge allowance per dimension (both edges), cm
    pub edge_allowance_cm: f64,

    /// Approximate utilization loss, percent (1-decimal rounding)
    pub waste_percent: f64,

    /// The orientation that won
    pub direction: CutDirection,

    /// Room run dimension used, cm
    pub room_length_cm: f64,

    /// Room cross dimension used, cm
    pub room_width_cm: f64,

    /// Roll width used, cm
    pub fabric_width_cm: f64,

    /// True for complex rooms, where the plan covers a bounding rectangle
    pub approximate: bool,
}

/// One evaluated orientation, before direction labeling.
struct CutOption {
    strips_count: u32,
    strip_length_cm: f64,
    total_length_cm: f64,
    seam_allowance_cm: f64,
}

impl RoomGeometryCalculator {
    /// Compute the optimal cutting plan for a room.
    ///
    /// `fabric_width_cm` of `None` uses the configured default roll width.
    pub fn fabric_plan(&self, room: &Room, fabric_width_cm: Option<f64>) -> FabricPlan {
        let fabric_width = fabric_width_cm.unwrap_or(self.coefficients().default_fabric_width_cm);

        match room.shape {
            RoomShape::Rectangle => {
                let length = room.side_value(SideId::Length);
                let width = room.side_value(SideId::Width);
                self.pick_orientation(
                    length,
                    width,
                    fabric_width,
                    CutDirection::LengthAlongRoll,
                    CutDirection::WidthAlongRoll,
                    false,
                )
            }
            RoomShape::Complex => {
                let mut values = room.side_values();
                values.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
                let longest = values.first().copied().unwrap_or(0.0);
                let second = values.get(1).copied().unwrap_or(longest);
                self.pick_orientation(
                    longest,
                    second,
                    fabric_width,
                    CutDirection::LongestSideAlongRoll,
                    CutDirection::SecondSideAlongRoll,
                    true,
                )
            }
        }
    }

    /// Evaluate both orientations and keep the lower total; exact ties keep
    /// the first orientation.
    fn pick_orientation(
        &self,
        length: f64,
        width: f64,
        fabric_width: f64,
        first_direction: CutDirection,
        second_direction: CutDirection,
        approximate: bool,
    ) -> FabricPlan {
        let first = self.evaluate_cut(length, width, fabric_width);
        let second = self.evaluate_cut(width, length, fabric_width);

        let (option, direction, run, cross) = if first.total_length_cm <= second.total_length_cm {
            (first, first_direction, length, width)
        } else {
            (second, second_direction, width, length)
        };

        FabricPlan {
            strips_count: option.strips_count,
            strip_length_cm: option.strip_length_cm,
            total_length_cm: option.total_length_cm,
            total_length_m: round2(option.total_length_cm / 100.0),
            seam_allowance_cm: option.seam_allowance_cm,
            edge_allowance_cm: self.coefficients().fabric_edge_allowance_cm * 2.0,
            waste_percent: waste_percent(option.total_length_cm, run, cross, fabric_width),
            direction,
            room_length_cm: length,
            room_width_cm: width,
            fabric_width_cm: fabric_width,
            approximate,
        }
    }

    /// Evaluate one orientation: `run_length` along the roll, `cross_width`
    /// spanned by strips.
    fn evaluate_cut(&self, run_length: f64, cross_width: f64, fabric_width: f64) -> CutOption {
        let edge = self.coefficients().fabric_edge_allowance_cm;
        let length_with_allowance = run_length + edge * 2.0;
        let width_with_allowance = cross_width + edge * 2.0;

        if fabric_width >= width_with_allowance {
            // Single uncut piece, no seams
            CutOption {
                strips_count: 1,
                strip_length_cm: length_with_allowance,
                total_length_cm: length_with_allowance,
                seam_allowance_cm: 0.0,
            }
        } else {
            let strips = (width_with_allowance / fabric_width).ceil() as u32;
            let seam_allowance =
                (strips - 1) as f64 * self.coefficients().fabric_seam_allowance_cm;
            CutOption {
                strips_count: strips,
                strip_length_cm: length_with_allowance,
                total_length_cm: length_with_allowance * strips as f64 + seam_allowance,
                seam_allowance_cm: seam_allowance,
            }
        }
    }
}

/// Historical utilization metric; see the module docs.
fn waste_percent(total_length: f64, run: f64, cross: f64, fabric_width: f64) -> f64 {
    if total_length <= 0.0 || fabric_width <= 0.0 {
        return 0.0;
    }
    round1((total_length - (run * cross / (fabric_width / 100.0))) / total_length * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeometryCoefficients;

    fn calc() -> RoomGeometryCalculator {
        RoomGeometryCalculator::new(GeometryCoefficients::default())
    }

    #[test]
    fn test_picks_cheaper_orientation() {
        // 350 × 280 room on a 200 cm roll:
        // length along roll: width' = 300 > 200 -> 2 strips, (350+20)×2+5 = 745
        // width along roll:  width' = 370 > 200 -> 2 strips, (280+20)×2+5 = 605
        let room = Room::rectangle(350.0, 280.0);
        let plan = calc().fabric_plan(&room, Some(200.0));

        assert_eq!(plan.direction, CutDirection::WidthAlongRoll);
        assert_eq!(plan.strips_count, 2);
        assert_eq!(plan.strip_length_cm, 300.0);
        assert_eq!(plan.total_length_cm, 605.0);
        assert_eq!(plan.total_length_m, 6.05);
        assert_eq!(plan.seam_allowance_cm, 5.0);
        assert_eq!(plan.edge_allowance_cm, 20.0);
        assert!(!plan.approximate);
    }

    #[test]
    fn test_single_strip_when_roll_is_wide_enough() {
        let room = Room::rectangle(350.0, 280.0);
        let plan = calc().fabric_plan(&room, Some(500.0));

        // Both orientations fit in one strip; the shorter run wins
        assert_eq!(plan.strips_count, 1);
        assert_eq!(plan.seam_allowance_cm, 0.0);
        assert_eq!(plan.direction, CutDirection::WidthAlongRoll);
        assert_eq!(plan.total_length_cm, 300.0);
    }

    #[test]
    fn test_tie_break_keeps_first_orientation() {
        // Square room: both orientations are identical
        let room = Room::rectangle(300.0, 300.0);
        let plan = calc().fabric_plan(&room, Some(200.0));
        assert_eq!(plan.direction, CutDirection::LengthAlongRoll);
    }

    #[test]
    fn test_orientation_choice_is_symmetric() {
        let a = calc().fabric_plan(&Room::rectangle(350.0, 280.0), Some(200.0));
        let b = calc().fabric_plan(&Room::rectangle(280.0, 350.0), Some(200.0));
        assert_eq!(a.total_length_cm, b.total_length_cm);
        assert_eq!(a.strips_count, b.strips_count);
    }

    #[test]
    fn test_complex_room_uses_two_largest_sides() {
        let room = Room::complex(&[350.0, 120.0, 280.0, 90.0]);
        let plan = calc().fabric_plan(&room, Some(200.0));

        // Same numbers as the 350 × 280 rectangle
        assert_eq!(plan.total_length_cm, 605.0);
        assert_eq!(plan.direction, CutDirection::SecondSideAlongRoll);
        assert!(plan.approximate);
        assert_eq!(plan.room_length_cm, 350.0);
        assert_eq!(plan.room_width_cm, 280.0);
    }

    #[test]
    fn test_default_roll_width() {
        let room = Room::rectangle(350.0, 280.0);
        let plan = calc().fabric_plan(&room, None);
        assert_eq!(plan.fabric_width_cm, 200.0);
    }

    #[test]
    fn test_waste_percent_formula() {
        // Chosen orientation: run = 280, cross = 350, roll = 200
        // (605 − 280×350/(200/100)) / 605 × 100, rounded to 1 decimal
        let room = Room::rectangle(350.0, 280.0);
        let plan = calc().fabric_plan(&room, Some(200.0));
        let expected = round1((605.0 - (280.0 * 350.0 / 2.0)) / 605.0 * 100.0);
        assert_eq!(plan.waste_percent, expected);
    }

    #[test]
    fn test_plan_serialization() {
        let plan = calc().fabric_plan(&Room::rectangle(350.0, 280.0), Some(200.0));
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"width_along_roll\""));

        let roundtrip: FabricPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, plan);
    }
}
