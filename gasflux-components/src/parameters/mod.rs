//! Empirical parameters of the Liang et al. (2013) gas exchange model
//!
//! Each parameter struct provides defaults matching the published
//! parameterisation. They are plain serde structs so that perturbed
//! parameter sets can be stored alongside results.

mod boundary_layer;
mod bubbles;

pub use boundary_layer::{
    BoundaryLayerParameters, AIR_DENSITY, AIR_SCHMIDT_NUMBER, BUOYANCY_CORRECTION,
    COOL_SKIN_THICKNESS, SUBLAYER_LAMBDA, VON_KARMAN, WATER_SUBLAYER_CONSTANT,
};
pub use bubbles::{BubbleParameters, EMERSON_BUBBLE_SCALING};

use serde::{Deserialize, Serialize};

/// Complete parameter set for the air-sea flux models.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeParameters {
    /// Drag law and diffusive sublayer parameters.
    pub boundary_layer: BoundaryLayerParameters,
    /// Bubble-mediated transfer parameters.
    pub bubbles: BubbleParameters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let params = ExchangeParameters::default();
        let json = serde_json::to_string(&params).expect("Serialization failed");
        let parsed: ExchangeParameters =
            serde_json::from_str(&json).expect("Deserialization failed");
        assert_eq!(params, parsed);
    }

    #[test]
    fn test_partial_override() {
        let params = ExchangeParameters {
            bubbles: BubbleParameters {
                emerson_scaling: 1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(params.bubbles.emerson_scaling, 1.0);
        assert_eq!(params.boundary_layer, BoundaryLayerParameters::default());
    }
}
