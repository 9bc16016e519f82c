//! Boundary layer parameters
//!
//! Drag coefficient from Large & Pond (1981) and the air- and water-side
//! diffusive sublayer resistances of the COARE 3 gas transfer model
//! (Fairall et al. 2000, Jeffery et al. 2010) as used by Liang et al. (2013).

use gasflux_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Density of air at the sea surface (kg/m^3).
pub const AIR_DENSITY: FloatValue = 1.225;

/// Von Kármán constant.
pub const VON_KARMAN: FloatValue = 0.4;

/// Sublayer scaling constant `lam` (Fairall et al. 2000).
pub const SUBLAYER_LAMBDA: FloatValue = 13.3;

/// Water-side sublayer constant `A`.
pub const WATER_SUBLAYER_CONSTANT: FloatValue = 1.3;

/// Buoyancy flux correction `phi`.
pub const BUOYANCY_CORRECTION: FloatValue = 1.0;

/// Cool skin thickness `tkt` (m).
pub const COOL_SKIN_THICKNESS: FloatValue = 0.01;

/// Schmidt number of the gas in air `ScA`.
pub const AIR_SCHMIDT_NUMBER: FloatValue = 0.9;

/// Parameters of the drag law and the molecular sublayer resistances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryLayerParameters {
    /// Air density (kg/m^3).
    /// default: 1.225
    pub air_density: FloatValue,

    /// Intercept of the linear drag law.
    /// default: 4.9e-4
    pub drag_intercept: FloatValue,

    /// Slope of the linear drag law (s/m).
    /// default: 6.5e-5
    pub drag_slope: FloatValue,

    /// Wind speed at or below which the drag coefficient is constant (m/s).
    /// default: 11.0
    pub low_wind_threshold: FloatValue,

    /// Drag coefficient at or below `low_wind_threshold`.
    /// default: 0.0012
    pub low_wind_drag: FloatValue,

    /// Wind speed at or above which the drag coefficient is constant (m/s).
    /// default: 20.0
    pub high_wind_threshold: FloatValue,

    /// Drag coefficient at or above `high_wind_threshold`.
    /// default: 0.0018
    pub high_wind_drag: FloatValue,

    /// Sublayer scaling constant `lam`.
    /// default: 13.3
    pub lambda: FloatValue,

    /// Water-side sublayer constant `A`.
    /// default: 1.3
    pub water_sublayer: FloatValue,

    /// Buoyancy flux correction `phi`.
    /// default: 1.0
    pub buoyancy_correction: FloatValue,

    /// Cool skin thickness `tkt` (m).
    /// default: 0.01
    pub cool_skin_thickness: FloatValue,

    /// Von Kármán constant.
    /// default: 0.4
    pub von_karman: FloatValue,

    /// Air-side Schmidt number.
    /// default: 0.9
    pub air_schmidt_number: FloatValue,
}

impl Default for BoundaryLayerParameters {
    fn default() -> Self {
        Self {
            air_density: AIR_DENSITY,

            // Large & Pond (1981)
            drag_intercept: 4.9e-4,
            drag_slope: 6.5e-5,
            low_wind_threshold: 11.0,
            low_wind_drag: 0.0012,
            high_wind_threshold: 20.0,
            high_wind_drag: 0.0018,

            // COARE 3 sublayer
            lambda: SUBLAYER_LAMBDA,
            water_sublayer: WATER_SUBLAYER_CONSTANT,
            buoyancy_correction: BUOYANCY_CORRECTION,
            cool_skin_thickness: COOL_SKIN_THICKNESS,
            von_karman: VON_KARMAN,
            air_schmidt_number: AIR_SCHMIDT_NUMBER,
        }
    }
}

impl BoundaryLayerParameters {
    /// Water-side sublayer constant $h_w = \lambda / (A \phi)$.
    pub fn water_sublayer_scale(&self) -> FloatValue {
        self.lambda / (self.water_sublayer * self.buoyancy_correction)
    }

    /// Air-side sublayer constant $h_a = \lambda$.
    pub fn air_sublayer_scale(&self) -> FloatValue {
        self.lambda
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sublayer_scales() {
        let params = BoundaryLayerParameters::default();
        assert!((params.water_sublayer_scale() - 13.3 / 1.3).abs() < 1e-12);
        assert_eq!(params.air_sublayer_scale(), 13.3);
    }

    #[test]
    fn test_defaults_use_published_constants() {
        let params = BoundaryLayerParameters::default();
        assert_eq!(params.air_density, 1.225);
        assert_eq!(params.lambda, 13.3);
        assert_eq!(params.water_sublayer, 1.3);
        assert_eq!(params.buoyancy_correction, 1.0);
        assert_eq!(params.cool_skin_thickness, 0.01);
        assert_eq!(params.von_karman, 0.4);
        assert_eq!(params.air_schmidt_number, 0.9);
    }
}
