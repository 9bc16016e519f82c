//! Seawater and dissolved gas properties
//!
//! Published empirical fits used by the air-sea flux parameterisations:
//!
//! - `solubility`: equilibrium concentrations for He, Ne, Ar, Kr, Xe, N2, O2
//! - `diffusivity`: molecular diffusivities and seawater viscosity
//! - `vapour_pressure`: saturated water vapour pressure over seawater
//! - `mole_fraction`: dry air composition
//! - `eos80`: one-atmosphere seawater density
//!
//! [`StandardProperties`] bundles these behind the
//! [`GasProperties`] and [`SeawaterDensity`] traits of `gasflux-core`.

pub mod diffusivity;
pub mod eos80;
pub mod mole_fraction;
pub mod solubility;
pub mod vapour_pressure;

use gasflux_core::properties::{GasProperties, SeawaterDensity};
use gasflux_core::{FloatValue, Gas};
use serde::{Deserialize, Serialize};

pub use eos80::Eos80;

/// Default property backend built on the published fits in this crate.
///
/// Concentrations fitted per kilogram of seawater are converted to
/// mol/m^3 with the surface density of the wrapped seawater backend, so the
/// same density is used for solubility and for the friction velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardProperties<S = Eos80> {
    seawater: S,
}

impl StandardProperties<Eos80> {
    /// Properties using EOS-80 surface density.
    pub fn new() -> Self {
        Self { seawater: Eos80 }
    }
}

impl<S: SeawaterDensity> StandardProperties<S> {
    /// Use a different seawater density backend.
    pub fn with_seawater(seawater: S) -> Self {
        Self { seawater }
    }
}

impl<S: SeawaterDensity> SeawaterDensity for StandardProperties<S> {
    fn conservative_temperature(&self, absolute_salinity: FloatValue, pt: FloatValue) -> FloatValue {
        self.seawater.conservative_temperature(absolute_salinity, pt)
    }

    fn potential_density_anomaly(
        &self,
        absolute_salinity: FloatValue,
        conservative_temperature: FloatValue,
    ) -> FloatValue {
        self.seawater
            .potential_density_anomaly(absolute_salinity, conservative_temperature)
    }
}

impl<S: SeawaterDensity> GasProperties for StandardProperties<S> {
    fn equilibrium_concentration(&self, gas: Gas, sp: FloatValue, pt: FloatValue) -> FloatValue {
        // µmol/kg * kg/m^3 -> µmol/m^3 -> mol/m^3
        solubility::equilibrium_umol_per_kg(gas, sp, pt) * self.surface_density(sp, pt) * 1e-6
    }

    fn diffusivity(&self, gas: Gas, sp: FloatValue, pt: FloatValue) -> (FloatValue, FloatValue) {
        let d = diffusivity::diffusivity(gas, sp, pt);
        let nu = diffusivity::kinematic_viscosity(sp, pt, self.surface_density(sp, pt));
        (d, nu / d)
    }

    fn vapour_pressure(&self, sp: FloatValue, pt: FloatValue) -> FloatValue {
        vapour_pressure::vapour_pressure(sp, pt)
    }

    fn dry_mole_fraction(&self, gas: Gas) -> FloatValue {
        mole_fraction::dry_mole_fraction(gas)
    }
}
