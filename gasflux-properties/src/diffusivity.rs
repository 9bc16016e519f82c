//! Molecular diffusivity and Schmidt number
//!
//! Diffusivities follow the Arrhenius form of Jähne et al. (1987):
//!
//! $$D = A \exp\left(-\frac{E_a}{R T}\right)$$
//!
//! He, Ne, Kr and Xe are the Jähne et al. fits, Ar is interpolated between
//! Ne and Kr, N2 and O2 are from Ferrell & Himmelblau (1967). The
//! freshwater values are reduced by 4.9 % per 35.5 salinity units
//! (Jähne et al. 1987).
//!
//! The water-side Schmidt number is $Sc = \nu / D$ with the kinematic
//! viscosity from a fit to the Knauss (1978) viscosity table.

use gasflux_core::constants::ZERO_CELSIUS_K;
use gasflux_core::{FloatValue, Gas};

/// Gas constant in kJ mol^-1 K^-1, matching activation energies in kJ/mol.
const GAS_CONSTANT_KJ: FloatValue = 8.314e-3;

/// Pre-exponential factor (m^2/s) and activation energy (kJ/mol).
fn arrhenius_coefficients(gas: Gas) -> (FloatValue, FloatValue) {
    match gas {
        Gas::He => (0.8180e-6, 11.70),
        Gas::Ne => (1.6080e-6, 14.84),
        Gas::Ar => (2.2270e-6, 16.68),
        Gas::Kr => (6.3930e-6, 20.20),
        Gas::Xe => (9.0070e-6, 21.61),
        Gas::N2 => (3.4120e-6, 18.50),
        Gas::O2 => (4.2860e-6, 18.70),
    }
}

/// Molecular diffusivity of `gas` in seawater (m^2/s).
pub fn diffusivity(gas: Gas, sp: FloatValue, pt: FloatValue) -> FloatValue {
    let (a, activation_energy) = arrhenius_coefficients(gas);
    let freshwater = a * (-activation_energy / (GAS_CONSTANT_KJ * (pt + ZERO_CELSIUS_K))).exp();
    freshwater * (1.0 - 0.049 * sp / 35.5)
}

/// Dynamic viscosity of seawater (kg m^-1 s^-1).
pub fn dynamic_viscosity(sp: FloatValue, pt: FloatValue) -> FloatValue {
    1e-4 * (17.91 - 0.5381 * pt + 0.00694 * pt * pt + 0.02305 * sp)
}

/// Kinematic viscosity of seawater (m^2/s) given its density (kg/m^3).
pub fn kinematic_viscosity(sp: FloatValue, pt: FloatValue, density: FloatValue) -> FloatValue {
    dynamic_viscosity(sp, pt) / density
}
