//! Liang et al. (2013) air-sea gas flux
//!
//! Diffusive exchange across the molecular sublayers plus bubble-mediated
//! exchange from partially and completely collapsing bubbles.
//!
//! # Sign convention
//!
//! All fluxes are positive **out of** the ocean, i.e. positive when the
//! dissolved concentration exceeds the atmospheric equilibrium.
//!
//! # Equations
//!
//! With $C_a$ the equilibrium concentration (mol/m^3) for the supplied
//! dry-air partial pressure:
//!
//! $$F_d = K_s (C_w - C_a)$$
//! $$F_p = K_b \left(C_w - C_a (1 + \Delta P)\right)$$
//! $$F_c = -x_G \cdot 5.56\, u_{*w}^{3.86}$$
//!
//! where the mole fraction is approximated from the partial pressure at
//! 1 atm as $x_G \approx p_G / (1 - p_{H_2O})$. The steady-state
//! supersaturation at which the three fluxes cancel is
//!
//! $$\Delta_{eq} = \frac{K_b C_a \Delta P - F_c}{(K_b + K_s) C_a}$$
//!
//! # References
//!
//! - Liang, J.-H. et al. (2013), Parameterizing bubble-mediated air-sea gas
//!   exchange and its effect on ocean ventilation, Global Biogeochem. Cycles, 27.

use crate::parameters::ExchangeParameters;
use crate::transfer::{warn_negative_wind, GasTransfer};
use gasflux_core::errors::GasFluxResult;
use gasflux_core::field::{broadcast_all, Field};
use gasflux_core::properties::GasProperties;
use gasflux_core::{FloatValue, Gas};
use gasflux_properties::StandardProperties;
use log::debug;
use ndarray::{ArrayViewD, Zip};
use serde::{Deserialize, Serialize};

/// Observations driving the Liang et al. (2013) fluxes.
///
/// All fields are mutually broadcastable.
#[derive(Debug, Clone)]
pub struct Liang13Inputs<'a> {
    /// Dissolved gas concentration $C_w$ (mol/m^3)
    pub dissolved: ArrayViewD<'a, FloatValue>,
    /// Dry-air partial pressure of the gas $p_G$ (atm)
    pub partial_pressure: ArrayViewD<'a, FloatValue>,
    /// 10 m wind speed (m/s)
    pub wind_speed: ArrayViewD<'a, FloatValue>,
    /// Practical salinity
    pub salinity: ArrayViewD<'a, FloatValue>,
    /// Potential temperature (°C)
    pub temperature: ArrayViewD<'a, FloatValue>,
}

/// Flux components for a single observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Liang13Point {
    pub diffusive_flux: FloatValue,
    pub complete_bubble_flux: FloatValue,
    pub partial_bubble_flux: FloatValue,
    pub equilibrium_supersaturation: FloatValue,
    pub diffusive_velocity: FloatValue,
}

/// Liang et al. (2013) fluxes over a broadcast set of observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Liang13Fluxes {
    /// $F_d$ (mol m^-2 s^-1)
    pub diffusive_flux: Field,
    /// $F_c$ (mol m^-2 s^-1)
    pub complete_bubble_flux: Field,
    /// $F_p$ (mol m^-2 s^-1)
    pub partial_bubble_flux: Field,
    /// $\Delta_{eq}$
    pub equilibrium_supersaturation: Field,
    /// $K_s$ (m/s)
    pub diffusive_velocity: Field,
}

impl Liang13Fluxes {
    fn from_points(points: &ndarray::ArrayD<Liang13Point>) -> Self {
        Self {
            diffusive_flux: points.map(|p| p.diffusive_flux),
            complete_bubble_flux: points.map(|p| p.complete_bubble_flux),
            partial_bubble_flux: points.map(|p| p.partial_bubble_flux),
            equilibrium_supersaturation: points.map(|p| p.equilibrium_supersaturation),
            diffusive_velocity: points.map(|p| p.diffusive_velocity),
        }
    }

    /// Net air-sea flux $F_d + F_p + F_c$.
    pub fn total(&self) -> Field {
        Zip::from(&self.diffusive_flux)
            .and(&self.partial_bubble_flux)
            .and(&self.complete_bubble_flux)
            .map_collect(|&fd, &fp, &fc| fd + fp + fc)
    }

    /// Shape of the broadcast observations.
    pub fn shape(&self) -> &[usize] {
        self.diffusive_flux.shape()
    }
}

/// Liang et al. (2013) flux model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Liang13<P = StandardProperties> {
    parameters: ExchangeParameters,
    properties: P,
}

impl Liang13 {
    /// Model with published parameters and the standard property fits.
    pub fn new() -> Self {
        Self::from_parameters(ExchangeParameters::default(), StandardProperties::new())
    }
}

impl Default for Liang13 {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: GasProperties> Liang13<P> {
    pub fn from_parameters(parameters: ExchangeParameters, properties: P) -> Self {
        Self {
            parameters,
            properties,
        }
    }

    pub fn parameters(&self) -> &ExchangeParameters {
        &self.parameters
    }

    pub fn properties(&self) -> &P {
        &self.properties
    }

    /// Fluxes for a single observation.
    ///
    /// # Arguments
    ///
    /// * `cw` - Dissolved concentration (mol/m^3)
    /// * `ca` - Dry-air partial pressure of the gas (atm)
    /// * `u10` - 10 m wind speed (m/s)
    /// * `sp` - Practical salinity
    /// * `pt` - Potential temperature (°C)
    pub fn point(
        &self,
        gas: Gas,
        cw: FloatValue,
        ca: FloatValue,
        u10: FloatValue,
        sp: FloatValue,
        pt: FloatValue,
    ) -> Liang13Point {
        let props = &self.properties;

        // Mole fraction inferred from the partial pressure at 1 atm total pressure
        let xg = ca / (1.0 - props.vapour_pressure(sp, pt));
        let ca_m = props.equilibrium_concentration(gas, sp, pt) * xg / props.dry_mole_fraction(gas);
        let transfer = GasTransfer::evaluate(&self.parameters, props, gas, u10, sp, pt, ca_m);

        let ks = transfer.diffusive_velocity;
        let kb = transfer.bubble_velocity;
        let dp = transfer.overpressure;

        let fd = ks * (cw - ca_m);
        let fp = kb * (cw - ca_m * (1.0 + dp));
        let fc = -xg * transfer.collapsing_coefficient;
        let deq = (kb * ca_m * dp - fc) / ((kb + ks) * ca_m);

        Liang13Point {
            diffusive_flux: fd,
            complete_bubble_flux: fc,
            partial_bubble_flux: fp,
            equilibrium_supersaturation: deq,
            diffusive_velocity: ks,
        }
    }

    /// Fluxes for every observation in `inputs`.
    ///
    /// # Errors
    ///
    /// [`gasflux_core::GasFluxError::ShapeMismatch`] if the inputs cannot be
    /// broadcast together.
    pub fn compute(&self, gas: Gas, inputs: &Liang13Inputs<'_>) -> GasFluxResult<Liang13Fluxes> {
        let views = [
            inputs.dissolved.view(),
            inputs.partial_pressure.view(),
            inputs.wind_speed.view(),
            inputs.salinity.view(),
            inputs.temperature.view(),
        ];
        let (shape, b) = broadcast_all(&views)?;
        debug!("Liang13: gas={} shape={:?}", gas, shape);
        warn_negative_wind(&inputs.wind_speed);

        let points = Zip::from(&b[0])
            .and(&b[1])
            .and(&b[2])
            .and(&b[3])
            .and(&b[4])
            .map_collect(|&cw, &ca, &u10, &sp, &pt| self.point(gas, cw, ca, u10, sp, pt));

        Ok(Liang13Fluxes::from_points(&points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gasflux_core::field::scalar;
    use gasflux_core::properties::SeawaterDensity;
    use std::cell::Cell;

    /// Standard properties that count the expensive lookups.
    #[derive(Default)]
    struct Counting {
        inner: StandardProperties,
        vapour_pressure_calls: Cell<usize>,
        equilibrium_calls: Cell<usize>,
    }

    impl SeawaterDensity for Counting {
        fn conservative_temperature(&self, sa: FloatValue, pt: FloatValue) -> FloatValue {
            self.inner.conservative_temperature(sa, pt)
        }
        fn potential_density_anomaly(&self, sa: FloatValue, ct: FloatValue) -> FloatValue {
            self.inner.potential_density_anomaly(sa, ct)
        }
    }

    impl GasProperties for Counting {
        fn equilibrium_concentration(&self, gas: Gas, sp: FloatValue, pt: FloatValue) -> FloatValue {
            self.equilibrium_calls.set(self.equilibrium_calls.get() + 1);
            self.inner.equilibrium_concentration(gas, sp, pt)
        }
        fn diffusivity(&self, gas: Gas, sp: FloatValue, pt: FloatValue) -> (FloatValue, FloatValue) {
            self.inner.diffusivity(gas, sp, pt)
        }
        fn vapour_pressure(&self, sp: FloatValue, pt: FloatValue) -> FloatValue {
            self.vapour_pressure_calls.set(self.vapour_pressure_calls.get() + 1);
            self.inner.vapour_pressure(sp, pt)
        }
        fn dry_mole_fraction(&self, gas: Gas) -> FloatValue {
            self.inner.dry_mole_fraction(gas)
        }
    }

    fn argon_reference(model: &Liang13) -> FloatValue {
        let props = model.properties();
        props.dry_mole_fraction(Gas::Ar) * (1.0 - props.vapour_pressure(35.0, 10.0))
    }

    #[test]
    fn test_zero_wind_has_no_bubble_flux() {
        let model = Liang13::new();
        let ca = argon_reference(&model);
        let p = model.point(Gas::Ar, 0.014, ca, 0.0, 35.0, 10.0);

        assert_eq!(p.partial_bubble_flux, 0.0);
        assert_eq!(p.complete_bubble_flux, 0.0);
        assert_eq!(p.diffusive_velocity, 0.0);
    }

    #[test]
    fn test_diffusive_flux_vanishes_at_equilibrium() {
        let model = Liang13::new();
        let ca = argon_reference(&model);
        let ceq = model
            .properties()
            .equilibrium_concentration(Gas::Ar, 35.0, 10.0);

        let p = model.point(Gas::Ar, ceq, ca, 12.0, 35.0, 10.0);
        assert_relative_eq!(p.diffusive_flux, 0.0, epsilon = 1e-20);
        // Bubbles still push gas into the ocean
        assert!(p.partial_bubble_flux < 0.0);
        assert!(p.complete_bubble_flux < 0.0);
        assert!(p.equilibrium_supersaturation > 0.0);
    }

    #[test]
    fn test_total_flux_vanishes_at_steady_state() {
        let model = Liang13::new();
        let ca = argon_reference(&model);
        let ceq = model
            .properties()
            .equilibrium_concentration(Gas::Ar, 35.0, 10.0);

        let deq = model
            .point(Gas::Ar, ceq, ca, 12.0, 35.0, 10.0)
            .equilibrium_supersaturation;
        let p = model.point(Gas::Ar, ceq * (1.0 + deq), ca, 12.0, 35.0, 10.0);

        let total = p.diffusive_flux + p.partial_bubble_flux + p.complete_bubble_flux;
        assert_relative_eq!(total, 0.0, epsilon = 1e-20);
    }

    #[test]
    fn test_compute_matches_point() {
        let model = Liang13::new();
        let ca = argon_reference(&model);
        let dissolved = scalar(0.014);
        let partial_pressure = scalar(ca);
        let wind_speed = ndarray::arr1(&[3.0, 12.0, 25.0]).into_dyn();
        let salinity = scalar(35.0);
        let temperature = scalar(10.0);

        let fluxes = model
            .compute(
                Gas::Ar,
                &Liang13Inputs {
                    dissolved: dissolved.view(),
                    partial_pressure: partial_pressure.view(),
                    wind_speed: wind_speed.view(),
                    salinity: salinity.view(),
                    temperature: temperature.view(),
                },
            )
            .unwrap();

        assert_eq!(fluxes.shape(), &[3]);
        for (i, &u10) in wind_speed.iter().enumerate() {
            let p = model.point(Gas::Ar, 0.014, ca, u10, 35.0, 10.0);
            assert_eq!(fluxes.diffusive_flux[[i]], p.diffusive_flux);
            assert_eq!(fluxes.partial_bubble_flux[[i]], p.partial_bubble_flux);
            assert_eq!(fluxes.complete_bubble_flux[[i]], p.complete_bubble_flux);
            assert_eq!(fluxes.diffusive_velocity[[i]], p.diffusive_velocity);
        }

        let total = fluxes.total();
        assert_relative_eq!(
            total[[1]],
            fluxes.diffusive_flux[[1]] + fluxes.partial_bubble_flux[[1]] + fluxes.complete_bubble_flux[[1]]
        );
    }

    #[test]
    fn test_point_looks_up_properties_once() {
        let model = Liang13::from_parameters(ExchangeParameters::default(), Counting::default());
        let ca = argon_reference(&Liang13::new());

        let counted = model.point(Gas::Ar, 0.014, ca, 12.0, 35.0, 10.0);
        assert_eq!(model.properties().vapour_pressure_calls.get(), 1);
        assert_eq!(model.properties().equilibrium_calls.get(), 1);

        // Same result as converting through the partial pressure helper
        let props = StandardProperties::new();
        let ca_m = props.concentration_at_partial_pressure(Gas::Ar, 35.0, 10.0, ca);
        assert_relative_eq!(
            counted.diffusive_flux,
            counted.diffusive_velocity * (0.014 - ca_m),
            max_relative = 1e-12
        );
    }
}
