//! # Coefficient Configuration
//!
//! All tunable constants used by the calculators, grouped into plain
//! serializable structs so the surrounding system can load them from
//! configuration and hot-reload them between requests without redeploying
//! the calculation logic.
//!
//! ## Coefficient Summary
//!
//! | Coefficient                  | Default | Meaning                            |
//! |------------------------------|---------|------------------------------------|
//! | perimeter_margin_percent     | 5.0     | Safety buffer on perimeter         |
//! | area_margin_percent          | 10.0    | Safety buffer on area              |
//! | fabric_seam_allowance_cm     | 5.0     | Extra length per seam              |
//! | fabric_edge_allowance_cm     | 10.0    | Extra length per edge (applied ×2) |
//! | profile_margin               | 0.05    | Profile over-order fraction        |
//! | dowel_nails_per_meter        | 3.33    | One dowel nail every 30 cm         |
//! | hangers_per_sqm              | 0.5     | One hanger per 2 m² of ceiling     |
//! | hangers_per_spotlight        | 2       | Extra hangers per spot light       |
//! | screws_per_perimeter_meter   | 4.0     | Base screws along the profile      |
//! | glue_ml_per_hanger           | 20.0    | Glue budget per hanger             |
//!
//! (Light-line, floating-light, curtain-niche, and timber coefficients are
//! documented on their fields below.)
//!
//! ## Snapshot Semantics
//!
//! Calculators are constructed from a *copy* of the coefficient struct, so
//! an in-flight calculation never observes a concurrent reload.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::config::MaterialCoefficients;
//!
//! let mut coeffs = MaterialCoefficients::default();
//! coeffs.hangers_per_sqm = 0.6; // per-test or per-deployment override
//! ```

use serde::{Deserialize, Serialize};

/// Fabric roll widths offered by suppliers, in centimeters.
pub const FABRIC_WIDTHS_CM: [f64; 5] = [150.0, 200.0, 250.0, 300.0, 500.0];

/// Coefficients for the room geometry calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCoefficients {
    /// Percentage added to the raw perimeter
    pub perimeter_margin_percent: f64,

    /// Percentage added to the raw area
    pub area_margin_percent: f64,

    /// Extra fabric length per seam between strips, cm
    pub fabric_seam_allowance_cm: f64,

    /// Extra fabric per edge, cm; each dimension gets two edges
    pub fabric_edge_allowance_cm: f64,

    /// Roll width assumed when the caller does not choose one, cm
    pub default_fabric_width_cm: f64,
}

impl Default for GeometryCoefficients {
    fn default() -> Self {
        GeometryCoefficients {
            perimeter_margin_percent: 5.0,
            area_margin_percent: 10.0,
            fabric_seam_allowance_cm: 5.0,
            fabric_edge_allowance_cm: 10.0,
            default_fabric_width_cm: 200.0,
        }
    }
}

/// Coefficients for the ceiling materials estimator.
///
/// Field-per-coefficient rather than a string-keyed map so that a typo in
/// a config file fails deserialization instead of silently reading zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCoefficients {
    /// Profile over-order fraction (0.05 = +5%)
    pub profile_margin: f64,

    /// Dowel nails per meter of perimeter (3.33 = one every 30 cm)
    pub dowel_nails_per_meter: f64,

    /// Base ceiling hangers per square meter
    pub hangers_per_sqm: f64,

    /// Extra hangers per spot light
    pub hangers_per_spotlight: u32,

    /// Diffuser meters added per 90-degree light-line corner
    pub light_line_corner_margin: f64,

    /// Diffuser meters added per light-line crossing
    pub light_line_cross_margin: f64,

    /// Diffuser over-order fraction for floating light
    pub floating_diffuser_margin: f64,

    /// Screws per meter of floating-light profile
    pub floating_screws_per_meter: f64,

    /// Curtain tape meters per meter of U-shaped niche
    pub curtain_tape_per_meter: f64,

    /// Niche brackets per meter
    pub curtain_brackets_per_meter: f64,

    /// Screws per niche bracket
    pub curtain_screws_per_bracket: u32,

    /// End caps per niche
    pub curtain_ends_count: u32,

    /// Timber mounting brackets per meter
    pub timber_brackets_per_meter: f64,

    /// Base screws per meter of perimeter
    pub screws_per_perimeter_meter: f64,

    /// Glue budget per hanger, milliliters
    pub glue_ml_per_hanger: f64,
}

impl Default for MaterialCoefficients {
    fn default() -> Self {
        MaterialCoefficients {
            profile_margin: 0.05,
            dowel_nails_per_meter: 3.33,
            hangers_per_sqm: 0.5,
            hangers_per_spotlight: 2,
            light_line_corner_margin: 0.1,
            light_line_cross_margin: 0.2,
            floating_diffuser_margin: 0.05,
            floating_screws_per_meter: 3.0,
            curtain_tape_per_meter: 2.0,
            curtain_brackets_per_meter: 2.0,
            curtain_screws_per_bracket: 2,
            curtain_ends_count: 2,
            timber_brackets_per_meter: 2.0,
            screws_per_perimeter_meter: 4.0,
            glue_ml_per_hanger: 20.0,
        }
    }
}

/// Top-level configuration bundle for the whole engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EstimateConfig {
    /// Geometry calculator coefficients
    #[serde(default)]
    pub geometry: GeometryCoefficients,

    /// Materials estimator coefficients
    #[serde(default)]
    pub materials: MaterialCoefficients,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_production_constants() {
        let g = GeometryCoefficients::default();
        assert_eq!(g.perimeter_margin_percent, 5.0);
        assert_eq!(g.area_margin_percent, 10.0);
        assert_eq!(g.fabric_seam_allowance_cm, 5.0);
        assert_eq!(g.fabric_edge_allowance_cm, 10.0);
        assert_eq!(g.default_fabric_width_cm, 200.0);

        let m = MaterialCoefficients::default();
        assert_eq!(m.profile_margin, 0.05);
        assert_eq!(m.dowel_nails_per_meter, 3.33);
        assert_eq!(m.hangers_per_sqm, 0.5);
        assert_eq!(m.hangers_per_spotlight, 2);
        assert_eq!(m.screws_per_perimeter_meter, 4.0);
        assert_eq!(m.glue_ml_per_hanger, 20.0);
    }

    #[test]
    fn test_default_fabric_width_is_offered() {
        let g = GeometryCoefficients::default();
        assert!(FABRIC_WIDTHS_CM.contains(&g.default_fabric_width_cm));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = EstimateConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let roundtrip: EstimateConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: EstimateConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EstimateConfig::default());
    }
}
