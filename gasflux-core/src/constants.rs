//! Physical constants and unit conversions
//!
//! These are fixed by the published parameterisations and carry no state.
//! Empirical coefficients that a user may reasonably want to perturb live in
//! the parameter structs of `gasflux-components` instead.

use crate::FloatValue;

/// Ideal gas constant (m^3 Pa K^-1 mol^-1).
pub const GAS_CONSTANT: FloatValue = 8.314;

/// Pascals per standard atmosphere.
pub const ATM_TO_PA: FloatValue = 1.01325e5;

/// Centimetres per metre.
pub const M_TO_CM: FloatValue = 100.0;

/// Seconds per hour.
pub const H_TO_S: FloatValue = 3600.0;

/// Offset between degrees Celsius and kelvin.
pub const ZERO_CELSIUS_K: FloatValue = 273.15;

/// Reference-composition ratio between absolute and practical salinity.
///
/// $$S_A = S_P \times 35.16504 / 35$$
pub const ABSOLUTE_SALINITY_RATIO: FloatValue = 35.16504 / 35.0;

/// Absolute salinity (g/kg) from practical salinity using the reference
/// composition ratio.
pub fn absolute_salinity(practical_salinity: FloatValue) -> FloatValue {
    practical_salinity * ABSOLUTE_SALINITY_RATIO
}

/// Practical salinity from absolute salinity (g/kg).
pub fn practical_salinity(absolute_salinity: FloatValue) -> FloatValue {
    absolute_salinity / ABSOLUTE_SALINITY_RATIO
}
