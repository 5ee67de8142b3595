//! # Calculations
//!
//! This module contains the two calculation engines and their shared
//! result records. Each calculation follows the pattern:
//!
//! - a calculator struct constructed from a coefficient snapshot
//! - pure methods taking plain inputs and returning `*Result`/`*Estimate`
//!   records (JSON-serializable)
//!
//! ## Available Calculations
//!
//! - [`geometry`] - Perimeter and area from confirmed room measurements
//! - [`fabric`] - Optimal fabric-cutting plans
//! - [`batch`] - Multi-room batches with per-room result subsets
//! - [`ceiling`] - Multi-stage stretch-ceiling bill of materials

pub mod batch;
pub mod ceiling;
pub mod fabric;
pub mod geometry;

// Re-export commonly used types
pub use batch::{CalculationKind, RoomResult};
pub use ceiling::{
    CeilingMaterialsCalculator, CurtainNicheChoice, CurtainNicheEstimate, FastenerType,
    FloatingLightEstimate, LightLinesEstimate, LightingChoice, LightingEstimate, MaterialsTotals,
    ProfileEstimate, ProfileType, SpotLightsEstimate, TimberChoice, TimberEstimate,
};
pub use fabric::{CutDirection, FabricPlan};
pub use geometry::{AreaResult, PerimeterResult, RoomGeometryCalculator};
