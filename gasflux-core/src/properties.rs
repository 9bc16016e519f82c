//! Seawater and dissolved gas property lookups
//!
//! The flux parameterisations treat these as black boxes with fixed units.
//! Implementations live in `gasflux-properties`; alternative backends (for
//! example a full TEOS-10 implementation) only need to implement these
//! traits.
//!
//! All methods are pure, element-wise functions of scalar inputs.

use crate::constants::absolute_salinity;
use crate::gas::Gas;
use crate::FloatValue;

/// Seawater density at the sea surface.
pub trait SeawaterDensity {
    /// Conservative temperature (°C) from absolute salinity (g/kg) and
    /// potential temperature (°C).
    fn conservative_temperature(&self, absolute_salinity: FloatValue, pt: FloatValue) -> FloatValue;

    /// Potential density anomaly referenced to 0 dbar (kg/m^3), i.e.
    /// $\sigma_0 = \rho(S_A, \Theta, 0) - 1000$.
    fn potential_density_anomaly(
        &self,
        absolute_salinity: FloatValue,
        conservative_temperature: FloatValue,
    ) -> FloatValue;

    /// Surface seawater density (kg/m^3) from practical salinity and
    /// potential temperature (°C).
    fn surface_density(&self, sp: FloatValue, pt: FloatValue) -> FloatValue {
        let sa = absolute_salinity(sp);
        let ct = self.conservative_temperature(sa, pt);
        self.potential_density_anomaly(sa, ct) + 1000.0
    }
}

/// Gas-specific property lookups.
pub trait GasProperties: SeawaterDensity {
    /// Equilibrium concentration (mol/m^3) with moist air at 1 atm total
    /// pressure.
    fn equilibrium_concentration(&self, gas: Gas, sp: FloatValue, pt: FloatValue) -> FloatValue;

    /// Molecular diffusivity (m^2/s) and water-side Schmidt number.
    fn diffusivity(&self, gas: Gas, sp: FloatValue, pt: FloatValue) -> (FloatValue, FloatValue);

    /// Saturated water vapour pressure over seawater (atm).
    fn vapour_pressure(&self, sp: FloatValue, pt: FloatValue) -> FloatValue;

    /// Mole fraction of the gas in dry air.
    fn dry_mole_fraction(&self, gas: Gas) -> FloatValue;

    /// Water-side Schmidt number.
    fn schmidt_number(&self, gas: Gas, sp: FloatValue, pt: FloatValue) -> FloatValue {
        self.diffusivity(gas, sp, pt).1
    }

    /// Equilibrium concentration (mol/m^3) for a given dry-air partial
    /// pressure of the gas (atm).
    ///
    /// Scales [`GasProperties::equilibrium_concentration`] by the ratio of
    /// `partial_pressure` to the partial pressure in moist air at 1 atm:
    ///
    /// $$C = C_{eq} \frac{p_G}{x_G (1 - p_{H_2O})}$$
    fn concentration_at_partial_pressure(
        &self,
        gas: Gas,
        sp: FloatValue,
        pt: FloatValue,
        partial_pressure: FloatValue,
    ) -> FloatValue {
        let reference = self.dry_mole_fraction(gas) * (1.0 - self.vapour_pressure(sp, pt));
        self.equilibrium_concentration(gas, sp, pt) * partial_pressure / reference
    }
}
