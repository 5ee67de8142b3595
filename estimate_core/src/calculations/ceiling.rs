//! # Ceiling Materials Estimator
//!
//! Converts staged user choices plus geometry results into a material bill,
//! stage by stage, then aggregates.
//!
//! ## Stage Sequence
//!
//! ```text
//! Profile -> Lighting -> Curtain niche -> Timber -> Fastener -> Totals
//! ```
//!
//! Profile is mandatory for the ceiling workflow; every other stage is
//! optional and a skipped stage contributes zero to the totals. Later
//! totals depend on earlier stage outputs, so the stages must be resolved
//! in order before [`CeilingMaterialsCalculator::totals`] is invoked (the
//! builder in [`crate::estimate`] enforces this).
//!
//! ## Formulas
//!
//! | Stage          | Formula                                                        |
//! |----------------|----------------------------------------------------------------|
//! | Profile        | `qty = P × (1 + margin)`, `dowels = ceil(P × nails_per_m)`     |
//! | Spot lights    | `hangers = count × hangers_per_spotlight`                      |
//! | Light lines    | `diffuser = m + corners × 0.1 + crossings × 0.2`               |
//! | Floating light | `diffuser = m × 1.05`, `screws = ceil(m × 3)`                  |
//! | Curtain niche  | `tape = m × 2` (U only), `brackets = ceil(m × 2)`, `screws = brackets × 2` |
//! | Timber         | `brackets = ceil(m × 2)`                                       |
//!
//! (Coefficient defaults shown; all are injectable via
//! [`MaterialCoefficients`].)
//!
//! Non-positive stage inputs are clamped to zero contribution rather than
//! producing negative or NaN quantities.

use serde::{Deserialize, Serialize};

use crate::config::MaterialCoefficients;
use crate::units::{round2, round3};

/// Wall/ceiling profile system the installer mounts along the perimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileType {
    Aluminum,
    Plastic,
    /// Shadow-gap profile
    Shadow,
    /// Profile for floating (backlit edge) ceilings
    Floating,
}

/// Lighting configuration chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LightingChoice {
    SpotLights { count: u32, diameter_mm: u32 },
    LightLines { meters: f64, corners: u32, crossings: u32 },
    FloatingLight { meters: f64 },
    Chandelier,
    /// Several lighting kinds combined; quantities entered per kind
    Combined,
    None,
}

/// Curtain niche configuration chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CurtainNicheChoice {
    None,
    LShaped { meters: f64 },
    UShaped { meters: f64 },
}

/// Timber backing chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimberChoice {
    None,
    Timber { meters: f64 },
}

/// Primary fastener the installer will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FastenerType {
    DowelNails,
    Anchors,
    Screws,
}

// ============================================================================
// Stage Outputs
// ============================================================================

/// Profile stage output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileEstimate {
    /// Profile to order, meters (perimeter plus margin, 2-decimal rounding)
    pub quantity_m: f64,

    /// Dowel nails along the perimeter
    pub dowel_nails_count: u32,

    /// Margin percentage that was applied
    pub margin_percent: f64,
}

/// Spot lights stage output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotLightsEstimate {
    pub count: u32,
    pub diameter_mm: u32,

    /// Extra hangers dedicated to the lights
    pub hangers_count: u32,
}

/// Light lines stage output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightLinesEstimate {
    pub meters: f64,
    pub corners: u32,
    pub crossings: u32,

    /// Diffuser to order, meters (2-decimal rounding)
    pub diffuser_length_m: f64,

    /// Diffuser added for corners, meters
    pub corner_margin_m: f64,

    /// Diffuser added for crossings, meters
    pub cross_margin_m: f64,
}

/// Floating light stage output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatingLightEstimate {
    pub meters: f64,

    /// Backlight profile to order; equals the entered meters
    pub profile_meters: f64,

    /// Diffuser to order, meters (margin applied, 2-decimal rounding)
    pub diffuser_meters: f64,

    /// Screws beyond the perimeter base count
    pub additional_screws: u32,

    /// Diffuser margin percentage that was applied
    pub diffuser_margin_percent: f64,
}

/// Resolved lighting stage output.
///
/// Chandelier, combined, and no-lighting configurations carry no derived
/// quantities; their material impact is priced by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LightingEstimate {
    SpotLights(SpotLightsEstimate),
    LightLines(LightLinesEstimate),
    FloatingLight(FloatingLightEstimate),
    Chandelier,
    Combined,
    None,
}

impl LightingEstimate {
    /// Extra hangers contributed by this lighting configuration.
    pub fn hangers_count(&self) -> u32 {
        match self {
            LightingEstimate::SpotLights(spot) => spot.hangers_count,
            _ => 0,
        }
    }

    /// The floating-light component, if this configuration has one.
    pub fn floating(&self) -> Option<&FloatingLightEstimate> {
        match self {
            LightingEstimate::FloatingLight(floating) => Some(floating),
            _ => None,
        }
    }
}

/// Curtain niche variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurtainNicheKind {
    LShaped,
    UShaped,
}

/// Curtain niche stage output. `tape_meters` is present only for U-shaped
/// niches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurtainNicheEstimate {
    pub kind: CurtainNicheKind,
    pub meters: f64,

    /// End caps
    pub ends_count: u32,

    /// Banding tape, meters (U-shaped only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tape_meters: Option<f64>,

    /// Mounting brackets
    pub brackets_count: u32,

    /// Self-drilling screws for the brackets
    pub screws_count: u32,
}

/// Timber stage output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimberEstimate {
    pub meters: f64,

    /// Mounting brackets
    pub brackets_count: u32,
}

/// Aggregated bill of materials across all resolved stages.
///
/// Curtain screws are counted in both `total_dowels` and `total_screws`;
/// this mirrors the established estimate output and must not be changed
/// without a product decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialsTotals {
    /// Hangers from area coverage plus lighting
    pub total_hangers: u32,

    /// Hangers from area coverage alone
    pub base_hangers: u32,

    /// Hangers contributed by lighting (spot lights only)
    pub lighting_hangers: u32,

    /// Profile dowels + hangers + curtain screws + timber brackets
    pub total_dowels: u32,

    /// Perimeter screws + floating-light screws + curtain screws
    pub total_screws: u32,

    /// Screws from the perimeter alone
    pub base_screws: u32,

    /// Screws contributed by floating light
    pub floating_screws: u32,

    /// Screws contributed by the curtain niche
    pub curtain_screws: u32,

    /// Glue to order, liters (3-decimal rounding)
    pub glue_volume_l: f64,
}

// ============================================================================
// Calculator
// ============================================================================

/// Ceiling materials calculator over a snapshot of material coefficients.
#[derive(Debug, Clone)]
pub struct CeilingMaterialsCalculator {
    coeffs: MaterialCoefficients,
}

/// `ceil` to a count, clamping non-positive inputs to zero.
fn ceil_count(value: f64) -> u32 {
    if value <= 0.0 {
        0
    } else {
        value.ceil() as u32
    }
}

/// Clamp a stage length to zero so skipped or bogus inputs cannot produce
/// negative quantities.
fn non_negative(meters: f64) -> f64 {
    if meters.is_finite() && meters > 0.0 {
        meters
    } else {
        0.0
    }
}

impl CeilingMaterialsCalculator {
    pub fn new(coeffs: MaterialCoefficients) -> Self {
        CeilingMaterialsCalculator { coeffs }
    }

    /// The coefficient snapshot this calculator was built from.
    pub fn coefficients(&self) -> &MaterialCoefficients {
        &self.coeffs
    }

    /// Profile stage: quantity with margin, plus dowel nails.
    pub fn profile(&self, perimeter_m: f64) -> ProfileEstimate {
        let perimeter = non_negative(perimeter_m);
        ProfileEstimate {
            quantity_m: round2(perimeter * (1.0 + self.coeffs.profile_margin)),
            dowel_nails_count: ceil_count(perimeter * self.coeffs.dowel_nails_per_meter),
            margin_percent: self.coeffs.profile_margin * 100.0,
        }
    }

    /// Spot lights stage: dedicated hangers per light.
    pub fn spot_lights(&self, count: u32, diameter_mm: u32) -> SpotLightsEstimate {
        SpotLightsEstimate {
            count,
            diameter_mm,
            hangers_count: count * self.coeffs.hangers_per_spotlight,
        }
    }

    /// Light lines stage: diffuser length with corner and crossing margins.
    pub fn light_lines(&self, meters: f64, corners: u32, crossings: u32) -> LightLinesEstimate {
        let meters = non_negative(meters);
        let corner_margin = corners as f64 * self.coeffs.light_line_corner_margin;
        let cross_margin = crossings as f64 * self.coeffs.light_line_cross_margin;
        LightLinesEstimate {
            meters,
            corners,
            crossings,
            diffuser_length_m: round2(meters + corner_margin + cross_margin),
            corner_margin_m: corner_margin,
            cross_margin_m: cross_margin,
        }
    }

    /// Floating light stage: profile, diffuser with margin, extra screws.
    pub fn floating_light(&self, meters: f64) -> FloatingLightEstimate {
        let meters = non_negative(meters);
        FloatingLightEstimate {
            meters,
            profile_meters: meters,
            diffuser_meters: round2(meters * (1.0 + self.coeffs.floating_diffuser_margin)),
            additional_screws: ceil_count(meters * self.coeffs.floating_screws_per_meter),
            diffuser_margin_percent: self.coeffs.floating_diffuser_margin * 100.0,
        }
    }

    /// Resolve any lighting choice into its stage output.
    pub fn lighting(&self, choice: LightingChoice) -> LightingEstimate {
        match choice {
            LightingChoice::SpotLights { count, diameter_mm } => {
                LightingEstimate::SpotLights(self.spot_lights(count, diameter_mm))
            }
            LightingChoice::LightLines {
                meters,
                corners,
                crossings,
            } => LightingEstimate::LightLines(self.light_lines(meters, corners, crossings)),
            LightingChoice::FloatingLight { meters } => {
                LightingEstimate::FloatingLight(self.floating_light(meters))
            }
            LightingChoice::Chandelier => LightingEstimate::Chandelier,
            LightingChoice::Combined => LightingEstimate::Combined,
            LightingChoice::None => LightingEstimate::None,
        }
    }

    /// Curtain niche stage. `None` for the no-niche choice.
    pub fn curtain_niche(&self, choice: CurtainNicheChoice) -> Option<CurtainNicheEstimate> {
        let (kind, meters, with_tape) = match choice {
            CurtainNicheChoice::None => return None,
            CurtainNicheChoice::LShaped { meters } => (CurtainNicheKind::LShaped, meters, false),
            CurtainNicheChoice::UShaped { meters } => (CurtainNicheKind::UShaped, meters, true),
        };
        let meters = non_negative(meters);
        let brackets_count = ceil_count(meters * self.coeffs.curtain_brackets_per_meter);
        Some(CurtainNicheEstimate {
            kind,
            meters,
            ends_count: self.coeffs.curtain_ends_count,
            tape_meters: with_tape.then(|| meters * self.coeffs.curtain_tape_per_meter),
            brackets_count,
            screws_count: brackets_count * self.coeffs.curtain_screws_per_bracket,
        })
    }

    /// Timber stage. `None` for the no-timber choice.
    pub fn timber(&self, choice: TimberChoice) -> Option<TimberEstimate> {
        match choice {
            TimberChoice::None => None,
            TimberChoice::Timber { meters } => {
                let meters = non_negative(meters);
                Some(TimberEstimate {
                    meters,
                    brackets_count: ceil_count(meters * self.coeffs.timber_brackets_per_meter),
                })
            }
        }
    }

    /// Aggregate all resolved stages into the final bill of materials.
    ///
    /// `area_m2`/`perimeter_m` are the margin-applied geometry outputs in
    /// meters. Skipped stages are passed as `None` and contribute zero.
    /// Lighting contributes hangers only (spot lights); floating-light
    /// screws enter through the `floating` argument, which the workflow
    /// builder wires up when the lighting choice is a floating light.
    pub fn totals(
        &self,
        area_m2: f64,
        perimeter_m: f64,
        profile: Option<&ProfileEstimate>,
        lighting: Option<&LightingEstimate>,
        curtain: Option<&CurtainNicheEstimate>,
        floating: Option<&FloatingLightEstimate>,
        timber: Option<&TimberEstimate>,
    ) -> MaterialsTotals {
        let base_hangers = ceil_count(non_negative(area_m2) * self.coeffs.hangers_per_sqm);
        let lighting_hangers = lighting.map(|l| l.hangers_count()).unwrap_or(0);
        let total_hangers = base_hangers + lighting_hangers;

        let profile_dowels = profile.map(|p| p.dowel_nails_count).unwrap_or(0);
        let curtain_screws = curtain.map(|c| c.screws_count).unwrap_or(0);
        let timber_brackets = timber.map(|t| t.brackets_count).unwrap_or(0);

        let total_dowels = profile_dowels + total_hangers + curtain_screws + timber_brackets;

        let base_screws =
            ceil_count(non_negative(perimeter_m) * self.coeffs.screws_per_perimeter_meter);
        let floating_screws = floating.map(|f| f.additional_screws).unwrap_or(0);

        // Curtain screws are intentionally counted here a second time; the
        // established estimates include them in both fastener totals.
        let total_screws = base_screws + floating_screws + curtain_screws;

        MaterialsTotals {
            total_hangers,
            base_hangers,
            lighting_hangers,
            total_dowels,
            total_screws,
            base_screws,
            floating_screws,
            curtain_screws,
            glue_volume_l: round3(total_hangers as f64 * self.coeffs.glue_ml_per_hanger / 1000.0),
        }
    }
}
