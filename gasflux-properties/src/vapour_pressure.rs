//! Water vapour pressure over seawater
//!
//! Follows SOP 5 of Dickson, Sabine & Christian (2007), *Guide to best
//! practices for ocean CO2 measurements*:
//!
//! 1. Pure water vapour pressure from Wagner & Pruss (2002)
//! 2. Seawater correction through the osmotic coefficient of Millero (1974)
//!
//! $$\ln\frac{p_{sw}}{p_w} = -0.018\,\phi\,m$$
//!
//! where $m$ is the total molality of dissolved salts.

use gasflux_core::constants::{ATM_TO_PA, ZERO_CELSIUS_K};
use gasflux_core::FloatValue;

/// Critical temperature of water (K).
const CRITICAL_TEMPERATURE: FloatValue = 647.096;

/// Critical pressure of water (Pa).
const CRITICAL_PRESSURE: FloatValue = 22.064e6;

/// Wagner & Pruss (2002) saturation curve coefficients.
const WAGNER_PRUSS: [FloatValue; 6] = [
    -7.85951783,
    1.84408259,
    -11.7866497,
    22.6807411,
    -15.9618719,
    1.80122502,
];

/// Millero (1974) osmotic coefficient polynomial in half the molality.
const OSMOTIC: [FloatValue; 5] = [0.90799, -0.08992, 0.18458, -0.07395, -0.00221];

/// Vapour pressure of pure water (atm) at temperature `t` (°C, ITS-90).
pub fn pure_water_vapour_pressure(t: FloatValue) -> FloatValue {
    let temperature = t * 1.00024 + ZERO_CELSIUS_K;
    let w = 1.0 - temperature / CRITICAL_TEMPERATURE;
    let [a1, a2, a3, a4, a5, a6] = WAGNER_PRUSS;

    let exponent = CRITICAL_TEMPERATURE / temperature
        * (a1 * w
            + a2 * w.powf(1.5)
            + a3 * w.powi(3)
            + a4 * w.powf(3.5)
            + a5 * w.powi(4)
            + a6 * w.powf(7.5));

    CRITICAL_PRESSURE / ATM_TO_PA * exponent.exp()
}

/// Saturated vapour pressure over seawater (atm).
///
/// # Arguments
///
/// * `sp` - Practical salinity
/// * `pt` - Potential temperature (°C)
pub fn vapour_pressure(sp: FloatValue, pt: FloatValue) -> FloatValue {
    let molality = 31.998 * sp / (1e3 - 1.005 * sp);
    let half = 0.5 * molality;
    let phi = OSMOTIC
        .iter()
        .rev()
        .fold(0.0, |acc, &coefficient| acc * half + coefficient);

    pure_water_vapour_pressure(pt) * (-0.018 * phi * molality).exp()
}
