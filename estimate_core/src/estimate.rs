//! # Ceiling Estimate Workflow
//!
//! Ties the two calculators together for the "complete ceiling" workflow:
//! room geometry feeds a sequence of stage choices, and the resolved stages
//! feed the totals aggregation. The builder enforces the stage ordering
//! (profile is mandatory and totals come last); re-entry and editing are a
//! conversation-layer concern and are not modeled here.
//!
//! The resulting [`CalculationRecord`] is the immutable value handed to the
//! persistence and presentation collaborators.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::calculations::{
//!     CeilingMaterialsCalculator, CurtainNicheChoice, FastenerType, LightingChoice, ProfileType,
//!     RoomGeometryCalculator, TimberChoice,
//! };
//! use estimate_core::config::EstimateConfig;
//! use estimate_core::estimate::CeilingEstimateBuilder;
//! use estimate_core::measure::Room;
//!
//! let config = EstimateConfig::default();
//! let geometry = RoomGeometryCalculator::new(config.geometry.clone());
//! let materials = CeilingMaterialsCalculator::new(config.materials.clone());
//!
//! let room = Room::rectangle(350.0, 280.0);
//! let perimeter = geometry.perimeter_result(&room);
//! let area = geometry.area_result(&room);
//!
//! let estimate = CeilingEstimateBuilder::new(&materials, perimeter.value_m, area.value_m2)
//!     .profile(ProfileType::Aluminum)
//!     .lighting(LightingChoice::SpotLights { count: 6, diameter_mm: 65 })
//!     .curtain_niche(CurtainNicheChoice::UShaped { meters: 3.0 })
//!     .timber(TimberChoice::None)
//!     .fastener(FastenerType::DowelNails)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(estimate.totals.total_hangers, 18);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::batch::{CalculationKind, RoomResult};
use crate::calculations::ceiling::{
    CeilingMaterialsCalculator, CurtainNicheChoice, CurtainNicheEstimate, FastenerType,
    LightingChoice, LightingEstimate, MaterialsTotals, ProfileEstimate, ProfileType, TimberChoice,
    TimberEstimate,
};
use crate::errors::{EstimateError, EstimateResult};

/// A fully resolved ceiling workflow: geometry inputs, per-stage estimates,
/// and the aggregated bill of materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeilingEstimate {
    /// Perimeter used, meters (margin applied)
    pub perimeter_m: f64,

    /// Area used, square meters (margin applied)
    pub area_m2: f64,

    /// Chosen profile system
    pub profile_type: ProfileType,

    /// Profile stage output
    pub profile: ProfileEstimate,

    /// Lighting stage output
    pub lighting: LightingEstimate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curtain: Option<CurtainNicheEstimate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timber: Option<TimberEstimate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fastener: Option<FastenerType>,

    /// Aggregated bill of materials
    pub totals: MaterialsTotals,
}

/// Staged builder for [`CeilingEstimate`].
///
/// Stage choices arrive one conversation step at a time; the builder
/// collects them and resolves everything in stage order on
/// [`CeilingEstimateBuilder::build`]. Profile is the only mandatory stage.
#[derive(Debug, Clone)]
pub struct CeilingEstimateBuilder<'a> {
    calculator: &'a CeilingMaterialsCalculator,
    perimeter_m: f64,
    area_m2: f64,
    profile_type: Option<ProfileType>,
    lighting: LightingChoice,
    curtain: CurtainNicheChoice,
    timber: TimberChoice,
    fastener: Option<FastenerType>,
}

impl<'a> CeilingEstimateBuilder<'a> {
    /// Start a workflow from the geometry outputs (margin-applied, meters).
    pub fn new(calculator: &'a CeilingMaterialsCalculator, perimeter_m: f64, area_m2: f64) -> Self {
        CeilingEstimateBuilder {
            calculator,
            perimeter_m,
            area_m2,
            profile_type: None,
            lighting: LightingChoice::None,
            curtain: CurtainNicheChoice::None,
            timber: TimberChoice::None,
            fastener: None,
        }
    }

    /// Mandatory profile stage.
    pub fn profile(mut self, profile_type: ProfileType) -> Self {
        self.profile_type = Some(profile_type);
        self
    }

    pub fn lighting(mut self, choice: LightingChoice) -> Self {
        self.lighting = choice;
        self
    }

    pub fn curtain_niche(mut self, choice: CurtainNicheChoice) -> Self {
        self.curtain = choice;
        self
    }

    pub fn timber(mut self, choice: TimberChoice) -> Self {
        self.timber = choice;
        self
    }

    pub fn fastener(mut self, fastener: FastenerType) -> Self {
        self.fastener = Some(fastener);
        self
    }

    /// Resolve all stages in order and aggregate the totals.
    ///
    /// Fails with [`EstimateError::CalculationFailed`] if the profile stage
    /// was never supplied.
    pub fn build(self) -> EstimateResult<CeilingEstimate> {
        let profile_type = self.profile_type.ok_or_else(|| {
            EstimateError::calculation_failed(
                "ceiling_estimate",
                "Profile stage is mandatory for the ceiling workflow",
            )
        })?;

        let calc = self.calculator;
        let profile = calc.profile(self.perimeter_m);
        let lighting = calc.lighting(self.lighting);
        let curtain = calc.curtain_niche(self.curtain);
        let timber = calc.timber(self.timber);

        let floating = lighting.floating().copied();
        let totals = calc.totals(
            self.area_m2,
            self.perimeter_m,
            Some(&profile),
            Some(&lighting),
            curtain.as_ref(),
            floating.as_ref(),
            timber.as_ref(),
        );

        Ok(CeilingEstimate {
            perimeter_m: self.perimeter_m,
            area_m2: self.area_m2,
            profile_type,
            profile,
            lighting,
            curtain,
            timber,
            fastener: self.fastener,
            totals,
        })
    }
}

/// The immutable record of one calculation session, handed to the
/// persistence collaborator once complete. Never mutated or shared across
/// sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Unique record id
    pub id: Uuid,

    /// When the calculation completed
    pub created: DateTime<Utc>,

    /// What was requested
    pub kind: CalculationKind,

    /// Per-room geometry results, in input order
    pub rooms: Vec<RoomResult>,

    /// Ceiling estimate, for complete-ceiling sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling: Option<CeilingEstimate>,
}

impl CalculationRecord {
    pub fn new(kind: CalculationKind, rooms: Vec<RoomResult>, ceiling: Option<CeilingEstimate>) -> Self {
        CalculationRecord {
            id: Uuid::new_v4(),
            created: Utc::now(),
            kind,
            rooms,
            ceiling,
        }
    }
}
