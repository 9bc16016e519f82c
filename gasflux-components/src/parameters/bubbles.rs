//! Bubble-mediated gas transfer parameters
//!
//! Power laws in the water-side friction velocity fitted by Liang et al.
//! (2013) to their bubble model, with the uniform down-scaling of bubble
//! fluxes proposed by Emerson et al. (2019).

use gasflux_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Bubble flux scaling factor of Emerson et al. (2019).
pub const EMERSON_BUBBLE_SCALING: FloatValue = 0.37;

/// Parameters of the partially and fully collapsing bubble terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleParameters {
    /// Prefactor of the partially collapsing bubble transfer velocity (cm/h).
    /// default: 1.98e6
    pub partial_coefficient: FloatValue,

    /// Friction velocity exponent of the partially collapsing term.
    /// default: 2.76
    pub partial_exponent: FloatValue,

    /// Reference Schmidt number.
    /// default: 660
    pub reference_schmidt_number: FloatValue,

    /// Schmidt number exponent of the partially collapsing term.
    /// default: -2/3
    pub schmidt_exponent: FloatValue,

    /// Prefactor of the fully collapsing bubble term (m/s).
    /// default: 5.56
    pub collapsing_coefficient: FloatValue,

    /// Friction velocity exponent of the fully collapsing term.
    /// default: 3.86
    pub collapsing_exponent: FloatValue,

    /// Prefactor of the bubble overpressure.
    /// default: 1.5244
    pub overpressure_coefficient: FloatValue,

    /// Friction velocity exponent of the bubble overpressure.
    /// default: 1.06
    pub overpressure_exponent: FloatValue,

    /// Scaling applied to both bubble terms in the Emerson et al. (2019)
    /// variant.
    /// default: 0.37
    pub emerson_scaling: FloatValue,
}

impl Default for BubbleParameters {
    fn default() -> Self {
        Self {
            partial_coefficient: 1.98e6,
            partial_exponent: 2.76,
            reference_schmidt_number: 660.0,
            schmidt_exponent: -2.0 / 3.0,
            collapsing_coefficient: 5.56,
            collapsing_exponent: 3.86,
            overpressure_coefficient: 1.5244,
            overpressure_exponent: 1.06,
            emerson_scaling: EMERSON_BUBBLE_SCALING,
        }
    }
}
