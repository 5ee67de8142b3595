//! # estimate_core - Stretch-Ceiling Estimation Engine
//!
//! `estimate_core` is the calculation heart of the ceiling-estimate
//! assistant: it turns confirmed room measurements into perimeter, area,
//! and fabric-cutting plans, and walks a multi-stage stretch-ceiling
//! workflow to a final bill of materials. All inputs and outputs are
//! JSON-serializable plain records, making the engine easy to drive from a
//! conversation layer and to hand to a persistence layer.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: calculators are pure functions over their inputs and a
//!   coefficient snapshot; no global state, no I/O
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Injectable Coefficients**: every tunable constant lives in
//!   [`config`] and is passed in at construction time
//!
//! ## Quick Start
//!
//! ```rust
//! use estimate_core::calculations::{CalculationKind, RoomGeometryCalculator};
//! use estimate_core::config::EstimateConfig;
//! use estimate_core::parse::parse_manual_input;
//!
//! let config = EstimateConfig::default();
//! let geometry = RoomGeometryCalculator::new(config.geometry);
//!
//! let room = parse_manual_input("3.5 x 2.8").unwrap();
//! let results = geometry.calculate_rooms(
//!     std::slice::from_ref(&room),
//!     CalculationKind::Complete,
//!     Some(200.0),
//! );
//!
//! assert_eq!(results[0].perimeter.unwrap().value_m, 13.23);
//! ```
//!
//! ## Modules
//!
//! - [`measure`] - Room shapes, side identifiers, confirmed measurements
//! - [`config`] - Injectable coefficient tables
//! - [`calculations`] - Geometry, fabric, batch, and ceiling calculators
//! - [`parse`] - Manual measurement entry
//! - [`estimate`] - Ceiling workflow builder and the persistence record
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod errors;
pub mod estimate;
pub mod measure;
pub mod parse;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    CalculationKind, CeilingMaterialsCalculator, FabricPlan, MaterialsTotals,
    RoomGeometryCalculator, RoomResult,
};
pub use config::EstimateConfig;
pub use errors::{EstimateError, EstimateResult};
pub use estimate::{CalculationRecord, CeilingEstimate, CeilingEstimateBuilder};
pub use measure::{Measurement, Room, RoomShape, SideId};
