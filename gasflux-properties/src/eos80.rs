//! UNESCO EOS-80 one-atmosphere seawater density
//!
//! # References
//!
//! - UNESCO (1981): Tenth report of the joint panel on oceanographic tables and standards.
//! - Millero & Poisson (1981): International one-atmosphere equation of state of seawater.
//!
//! EOS-80 is formulated in practical salinity and (potential) temperature.
//! The [`SeawaterDensity`] interface is expressed in absolute salinity and
//! conservative temperature, so absolute salinity is mapped back through the
//! reference-composition ratio and conservative temperature is used as
//! potential temperature. At the sea surface the two temperatures differ by
//! a few hundredths of a degree for open-ocean salinities, which moves the
//! density by well under 0.01 kg/m^3.

use gasflux_core::constants::practical_salinity;
use gasflux_core::properties::SeawaterDensity;
use gasflux_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Surface density of seawater (kg/m^3).
///
/// # Arguments
///
/// * `sp` - Practical salinity
/// * `t` - Temperature (°C)
pub fn density_surface(sp: FloatValue, t: FloatValue) -> FloatValue {
    // Pure water density (Bigg 1967)
    let rho_w = 999.842594 + 6.793952e-2 * t - 9.095290e-3 * t.powi(2)
        + 1.001685e-4 * t.powi(3)
        - 1.120083e-6 * t.powi(4)
        + 6.536336e-9 * t.powi(5);

    let a = 8.24493e-1 - 4.0899e-3 * t + 7.6438e-5 * t.powi(2) - 8.2467e-7 * t.powi(3)
        + 5.3875e-9 * t.powi(4);
    let b = -5.72466e-3 + 1.0227e-4 * t - 1.6546e-6 * t.powi(2);
    let c = 4.8314e-4;

    rho_w + a * sp + b * sp.powf(1.5) + c * sp.powi(2)
}

/// EOS-80 surface density backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Eos80;

impl SeawaterDensity for Eos80 {
    fn conservative_temperature(&self, _absolute_salinity: FloatValue, pt: FloatValue) -> FloatValue {
        pt
    }

    fn potential_density_anomaly(
        &self,
        absolute_salinity: FloatValue,
        conservative_temperature: FloatValue,
    ) -> FloatValue {
        density_surface(
            practical_salinity(absolute_salinity),
            conservative_temperature,
        ) - 1000.0
    }
}
