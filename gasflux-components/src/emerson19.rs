//! Emerson et al. (2019) air-sea gas flux
//!
//! Uses the Liang et al. (2013) transfer velocities with both bubble terms
//! scaled by $\beta = 0.37$, and expresses the fluxes relative to the
//! equilibrium concentration at 1 atm corrected for sea level pressure and
//! humidity.
//!
//! # Sign convention
//!
//! All fluxes are positive **into** the ocean, the opposite of
//! [`crate::liang13`].
//!
//! # Stages
//!
//! The calculation is split into three stages, each extending the previous
//! one without recomputing its intermediates:
//!
//! 1. [`Emerson19::transfer_velocities`]: $K_s$, $K_p = \beta K_b$ and
//!    $K_c = \beta \cdot 5.56\, u_{*w}^{3.86}$
//! 2. [`TransferVelocities::fluxes`]: $F_d$, $F_p$, $F_c$ given the
//!    dissolved concentration and atmospheric state
//! 3. [`Fluxes::supersaturation`]: the steady-state supersaturation
//!    $\Delta_{eq}$
//!
//! # Equations
//!
//! With $G_{eq}$ the 1 atm equilibrium concentration, $p_{H_2O}^{eq}$ the
//! saturated vapour pressure and $h$ the relative humidity:
//!
//! $$p_c = \frac{p_{slp} - h\,p_{H_2O}^{eq}}{1 - p_{H_2O}^{eq}}, \quad
//!   G_{sat} = C / G_{eq}$$
//! $$F_d = K_s G_{eq} (p_c - G_{sat})$$
//! $$F_p = K_p G_{eq} \left((1 + \Delta P) p_c - G_{sat}\right)$$
//! $$F_c = K_c x_G$$
//! $$\Delta_{eq} = \frac{K_p G_{eq} \Delta P\, p_c + F_c}{(K_p + K_s) G_{eq} p_c}$$
//!
//! # References
//!
//! - Emerson, S. et al. (2019), Air-sea gas transfer: Determining bubble
//!   fluxes with in situ N2 observations, J. Geophys. Res. Oceans, 124.

use crate::parameters::ExchangeParameters;
use crate::transfer::{warn_negative_wind, GasTransfer};
use gasflux_core::errors::GasFluxResult;
use gasflux_core::field::{broadcast_all, broadcast_owned, broadcast_shape, broadcast_to, scalar, Field};
use gasflux_core::properties::GasProperties;
use gasflux_core::{FloatValue, Gas};
use gasflux_properties::StandardProperties;
use log::debug;
use ndarray::{ArrayD, ArrayViewD, Zip};
use serde::{Deserialize, Serialize};

/// Surface conditions setting the transfer velocities.
///
/// All fields are mutually broadcastable.
#[derive(Debug, Clone)]
pub struct SurfaceConditions<'a> {
    /// 10 m wind speed (m/s)
    pub wind_speed: ArrayViewD<'a, FloatValue>,
    /// Practical salinity
    pub salinity: ArrayViewD<'a, FloatValue>,
    /// Potential temperature (°C)
    pub temperature: ArrayViewD<'a, FloatValue>,
}

/// Dissolved concentration and atmospheric state for the flux stage.
///
/// Every field is optional and must broadcast with the surface conditions.
#[derive(Debug, Clone, Default)]
pub struct AirSeaState<'a> {
    /// Dissolved concentration $C$ (mol/m^3)
    ///
    /// default: the dry-air mole fraction of the gas
    pub concentration: Option<ArrayViewD<'a, FloatValue>>,
    /// Sea level pressure (atm)
    ///
    /// default: 1
    pub sea_level_pressure: Option<ArrayViewD<'a, FloatValue>>,
    /// Relative humidity (fraction)
    ///
    /// default: 1
    pub relative_humidity: Option<ArrayViewD<'a, FloatValue>>,
}

impl<'a> AirSeaState<'a> {
    pub fn with_concentration(mut self, concentration: ArrayViewD<'a, FloatValue>) -> Self {
        self.concentration = Some(concentration);
        self
    }

    pub fn with_sea_level_pressure(mut self, pressure: ArrayViewD<'a, FloatValue>) -> Self {
        self.sea_level_pressure = Some(pressure);
        self
    }

    pub fn with_relative_humidity(mut self, humidity: ArrayViewD<'a, FloatValue>) -> Self {
        self.relative_humidity = Some(humidity);
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct VelocityPoint {
    ks: FloatValue,
    kp: FloatValue,
    kc: FloatValue,
    overpressure: FloatValue,
    equilibrium_concentration: FloatValue,
    saturated_vapour_pressure: FloatValue,
}

/// First stage: transfer velocities over a broadcast set of observations.
///
/// Also carries the intermediates needed by [`TransferVelocities::fluxes`],
/// so later stages never go back to the property lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferVelocities {
    gas: Gas,
    /// Dry-air mole fraction $x_G$
    mole_fraction: FloatValue,
    /// $K_s$ (m/s)
    pub diffusive_velocity: Field,
    /// $K_p$ (m/s)
    pub partial_bubble_velocity: Field,
    /// $K_c$ (m/s)
    pub complete_bubble_velocity: Field,
    /// $\Delta P$
    pub overpressure: Field,
    /// $G_{eq}$ (mol/m^3)
    pub equilibrium_concentration: Field,
    /// $p_{H_2O}^{eq}$ (atm)
    pub saturated_vapour_pressure: Field,
}

impl TransferVelocities {
    pub fn gas(&self) -> Gas {
        self.gas
    }

    pub fn mole_fraction(&self) -> FloatValue {
        self.mole_fraction
    }

    pub fn shape(&self) -> &[usize] {
        self.diffusive_velocity.shape()
    }

    fn broadcast_to(self, shape: &[usize]) -> GasFluxResult<Self> {
        if self.shape() == shape {
            return Ok(self);
        }
        Ok(Self {
            gas: self.gas,
            mole_fraction: self.mole_fraction,
            diffusive_velocity: broadcast_owned(&self.diffusive_velocity, shape)?,
            partial_bubble_velocity: broadcast_owned(&self.partial_bubble_velocity, shape)?,
            complete_bubble_velocity: broadcast_owned(&self.complete_bubble_velocity, shape)?,
            overpressure: broadcast_owned(&self.overpressure, shape)?,
            equilibrium_concentration: broadcast_owned(&self.equilibrium_concentration, shape)?,
            saturated_vapour_pressure: broadcast_owned(&self.saturated_vapour_pressure, shape)?,
        })
    }

    /// Second stage: air-sea fluxes.
    ///
    /// The state may add dimensions; the velocities are broadcast to the
    /// combined shape.
    ///
    /// # Errors
    ///
    /// [`gasflux_core::GasFluxError::ShapeMismatch`] if the state does not
    /// broadcast with the surface conditions.
    pub fn fluxes(self, state: &AirSeaState<'_>) -> GasFluxResult<Fluxes> {
        let mole_fraction = self.mole_fraction;

        let default_concentration = scalar(mole_fraction);
        let unit = scalar(1.0);
        let c = state
            .concentration
            .as_ref()
            .map_or_else(|| default_concentration.view(), |v| v.view());
        let pslp = state
            .sea_level_pressure
            .as_ref()
            .map_or_else(|| unit.view(), |v| v.view());
        let rh = state
            .relative_humidity
            .as_ref()
            .map_or_else(|| unit.view(), |v| v.view());

        let shape = broadcast_shape(&[self.shape(), c.shape(), pslp.shape(), rh.shape()])?;
        debug!("Emerson19 fluxes: gas={} shape={:?}", self.gas, shape);

        let velocities = self.broadcast_to(&shape)?;
        let c = broadcast_to(&c, &shape)?;
        let pslp = broadcast_to(&pslp, &shape)?;
        let rh = broadcast_to(&rh, &shape)?;

        let pressure_correction = Zip::from(&pslp)
            .and(&rh)
            .and(&velocities.saturated_vapour_pressure)
            .map_collect(|&p, &h, &e| (p - h * e) / (1.0 - e));
        let saturation = Zip::from(&c)
            .and(&velocities.equilibrium_concentration)
            .map_collect(|&c, &geq| c / geq);

        let diffusive_flux = Zip::from(&velocities.diffusive_velocity)
            .and(&velocities.equilibrium_concentration)
            .and(&pressure_correction)
            .and(&saturation)
            .map_collect(|&ks, &geq, &pc, &gsat| ks * geq * (pc - gsat));
        let partial_bubble_flux = Zip::from(&velocities.partial_bubble_velocity)
            .and(&velocities.equilibrium_concentration)
            .and(&velocities.overpressure)
            .and(&pressure_correction)
            .and(&saturation)
            .map_collect(|&kp, &geq, &dp, &pc, &gsat| kp * geq * ((1.0 + dp) * pc - gsat));
        let complete_bubble_flux = velocities
            .complete_bubble_velocity
            .mapv(|kc| kc * mole_fraction);

        Ok(Fluxes {
            velocities,
            pressure_correction,
            saturation,
            diffusive_flux,
            partial_bubble_flux,
            complete_bubble_flux,
        })
    }
}

/// Second stage: fluxes together with the transfer velocities they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fluxes {
    pub velocities: TransferVelocities,
    /// $p_c$
    pub pressure_correction: Field,
    /// $G_{sat} = C / G_{eq}$
    pub saturation: Field,
    /// $F_d$ (mol m^-2 s^-1)
    pub diffusive_flux: Field,
    /// $F_p$ (mol m^-2 s^-1)
    pub partial_bubble_flux: Field,
    /// $F_c$ (mol m^-2 s^-1)
    pub complete_bubble_flux: Field,
}

impl Fluxes {
    /// Third stage: steady-state supersaturation $\Delta_{eq}$.
    pub fn supersaturation(&self) -> Field {
        let v = &self.velocities;
        debug!(
            "Emerson19 supersaturation: gas={} shape={:?}",
            v.gas,
            self.shape()
        );
        let numerator = Zip::from(&v.partial_bubble_velocity)
            .and(&v.equilibrium_concentration)
            .and(&v.overpressure)
            .and(&self.pressure_correction)
            .and(&self.complete_bubble_flux)
            .map_collect(|&kp, &geq, &dp, &pc, &fc| kp * geq * dp * pc + fc);

        Zip::from(&numerator)
            .and(&v.partial_bubble_velocity)
            .and(&v.diffusive_velocity)
            .and(&v.equilibrium_concentration)
            .and(&self.pressure_correction)
            .map_collect(|&num, &kp, &ks, &geq, &pc| num / ((kp + ks) * geq * pc))
    }

    /// Net air-sea flux $F_d + F_p + F_c$.
    pub fn total(&self) -> Field {
        Zip::from(&self.diffusive_flux)
            .and(&self.partial_bubble_flux)
            .and(&self.complete_bubble_flux)
            .map_collect(|&fd, &fp, &fc| fd + fp + fc)
    }

    pub fn shape(&self) -> &[usize] {
        self.diffusive_flux.shape()
    }
}

/// All outputs of the Emerson et al. (2019) model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emerson19Output {
    /// $K_s$ (m/s)
    pub diffusive_velocity: Field,
    /// $K_p$ (m/s)
    pub partial_bubble_velocity: Field,
    /// $K_c$ (m/s)
    pub complete_bubble_velocity: Field,
    /// $F_d$ (mol m^-2 s^-1)
    pub diffusive_flux: Field,
    /// $F_p$ (mol m^-2 s^-1)
    pub partial_bubble_flux: Field,
    /// $F_c$ (mol m^-2 s^-1)
    pub complete_bubble_flux: Field,
    /// $\Delta_{eq}$
    pub equilibrium_supersaturation: Field,
}

impl Emerson19Output {
    /// Net air-sea flux $F_d + F_p + F_c$.
    pub fn total(&self) -> Field {
        Zip::from(&self.diffusive_flux)
            .and(&self.partial_bubble_flux)
            .and(&self.complete_bubble_flux)
            .map_collect(|&fd, &fp, &fc| fd + fp + fc)
    }
}

impl From<Fluxes> for Emerson19Output {
    fn from(fluxes: Fluxes) -> Self {
        let equilibrium_supersaturation = fluxes.supersaturation();
        Self {
            diffusive_velocity: fluxes.velocities.diffusive_velocity,
            partial_bubble_velocity: fluxes.velocities.partial_bubble_velocity,
            complete_bubble_velocity: fluxes.velocities.complete_bubble_velocity,
            diffusive_flux: fluxes.diffusive_flux,
            partial_bubble_flux: fluxes.partial_bubble_flux,
            complete_bubble_flux: fluxes.complete_bubble_flux,
            equilibrium_supersaturation,
        }
    }
}

/// Emerson et al. (2019) flux model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emerson19<P = StandardProperties> {
    parameters: ExchangeParameters,
    properties: P,
}

impl Emerson19 {
    /// Model with published parameters and the standard property fits.
    pub fn new() -> Self {
        Self::from_parameters(ExchangeParameters::default(), StandardProperties::new())
    }
}

impl Default for Emerson19 {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: GasProperties> Emerson19<P> {
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

    fn velocity_point(&self, gas: Gas, u10: FloatValue, sp: FloatValue, pt: FloatValue) -> VelocityPoint {
        let geq = self.properties.equilibrium_concentration(gas, sp, pt);
        let transfer = GasTransfer::evaluate(&self.parameters, &self.properties, gas, u10, sp, pt, geq);
        let scaling = self.parameters.bubbles.emerson_scaling;

        VelocityPoint {
            ks: transfer.diffusive_velocity,
            kp: scaling * transfer.bubble_velocity,
            kc: scaling * transfer.collapsing_coefficient,
            overpressure: transfer.overpressure,
            equilibrium_concentration: geq,
            saturated_vapour_pressure: self.properties.vapour_pressure(sp, pt),
        }
    }

    /// First stage: transfer velocities only.
    ///
    /// # Errors
    ///
    /// [`gasflux_core::GasFluxError::ShapeMismatch`] if the surface
    /// conditions cannot be broadcast together.
    pub fn transfer_velocities(
        &self,
        gas: Gas,
        surface: &SurfaceConditions<'_>,
    ) -> GasFluxResult<TransferVelocities> {
        let views = [
            surface.wind_speed.view(),
            surface.salinity.view(),
            surface.temperature.view(),
        ];
        let (shape, b) = broadcast_all(&views)?;
        debug!("Emerson19 transfer velocities: gas={} shape={:?}", gas, shape);
        warn_negative_wind(&surface.wind_speed);

        let points: ArrayD<VelocityPoint> = Zip::from(&b[0])
            .and(&b[1])
            .and(&b[2])
            .map_collect(|&u10, &sp, &pt| self.velocity_point(gas, u10, sp, pt));

        Ok(TransferVelocities {
            gas,
            mole_fraction: self.properties.dry_mole_fraction(gas),
            diffusive_velocity: points.map(|p| p.ks),
            partial_bubble_velocity: points.map(|p| p.kp),
            complete_bubble_velocity: points.map(|p| p.kc),
            overpressure: points.map(|p| p.overpressure),
            equilibrium_concentration: points.map(|p| p.equilibrium_concentration),
            saturated_vapour_pressure: points.map(|p| p.saturated_vapour_pressure),
        })
    }

    /// All three stages.
    pub fn compute(
        &self,
        gas: Gas,
        surface: &SurfaceConditions<'_>,
        state: &AirSeaState<'_>,
    ) -> GasFluxResult<Emerson19Output> {
        let fluxes = self.transfer_velocities(gas, surface)?.fluxes(state)?;
        Ok(fluxes.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr1;

    struct Surface {
        wind_speed: Field,
        salinity: Field,
        temperature: Field,
    }

    impl Surface {
        fn new(u10: FloatValue) -> Self {
            Self {
                wind_speed: scalar(u10),
                salinity: scalar(35.0),
                temperature: scalar(10.0),
            }
        }

        fn conditions(&self) -> SurfaceConditions<'_> {
            SurfaceConditions {
                wind_speed: self.wind_speed.view(),
                salinity: self.salinity.view(),
                temperature: self.temperature.view(),
            }
        }
    }

    #[test]
    fn test_bubble_scaling() {
        let model = Emerson19::new();
        let surface = Surface::new(8.0);
        let v = model.transfer_velocities(Gas::N2, &surface.conditions()).unwrap();

        let unscaled = Emerson19::from_parameters(
            ExchangeParameters {
                bubbles: crate::parameters::BubbleParameters {
                    emerson_scaling: 1.0,
                    ..Default::default()
                },
                ..Default::default()
            },
            StandardProperties::new(),
        );
        let u = unscaled
            .transfer_velocities(Gas::N2, &surface.conditions())
            .unwrap();

        assert_eq!(v.diffusive_velocity, u.diffusive_velocity);
        assert_relative_eq!(
            v.partial_bubble_velocity[[]],
            0.37 * u.partial_bubble_velocity[[]],
            max_relative = 1e-12
        );
        assert_relative_eq!(
            v.complete_bubble_velocity[[]],
            0.37 * u.complete_bubble_velocity[[]],
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_equilibrium_has_no_diffusive_flux() {
        let model = Emerson19::new();
        let surface = Surface::new(10.0);
        let geq = scalar(model.properties().equilibrium_concentration(Gas::Ar, 35.0, 10.0));

        let fluxes = model
            .transfer_velocities(Gas::Ar, &surface.conditions())
            .unwrap()
            .fluxes(&AirSeaState::default().with_concentration(geq.view()))
            .unwrap();

        assert_relative_eq!(fluxes.pressure_correction[[]], 1.0, max_relative = 1e-12);
        assert_relative_eq!(fluxes.diffusive_flux[[]], 0.0, epsilon = 1e-20);
        assert!(fluxes.partial_bubble_flux[[]] > 0.0);
        assert!(fluxes.complete_bubble_flux[[]] > 0.0);
    }

    #[test]
    fn test_total_flux_vanishes_at_steady_state() {
        let model = Emerson19::new();
        let surface = Surface::new(10.0);
        let geq = model.properties().equilibrium_concentration(Gas::N2, 35.0, 10.0);
        let pressure = scalar(1.02);
        let humidity = scalar(0.8);

        let deq = model
            .transfer_velocities(Gas::N2, &surface.conditions())
            .unwrap()
            .fluxes(
                &AirSeaState::default()
                    .with_concentration(scalar(geq).view())
                    .with_sea_level_pressure(pressure.view())
                    .with_relative_humidity(humidity.view()),
            )
            .unwrap()
            .supersaturation()[[]];

        // Steady state sits at (1 + deq) times the pressure-corrected equilibrium
        let velocities = model
            .transfer_velocities(Gas::N2, &surface.conditions())
            .unwrap();
        let pc = {
            let e = model.properties().vapour_pressure(35.0, 10.0);
            (1.02 - 0.8 * e) / (1.0 - e)
        };
        let steady = scalar(geq * pc * (1.0 + deq));
        let at_steady = velocities
            .fluxes(
                &AirSeaState::default()
                    .with_concentration(steady.view())
                    .with_sea_level_pressure(pressure.view())
                    .with_relative_humidity(humidity.view()),
            )
            .unwrap();

        assert_relative_eq!(at_steady.total()[[]], 0.0, epsilon = 1e-20);
    }

    #[test]
    fn test_state_adds_dimensions() {
        let model = Emerson19::new();
        let surface = Surface::new(7.0);
        let concentration = arr1(&[0.010, 0.012, 0.014, 0.016]).into_dyn();

        let fluxes = model
            .transfer_velocities(Gas::Ar, &surface.conditions())
            .unwrap()
            .fluxes(&AirSeaState::default().with_concentration(concentration.view()))
            .unwrap();

        assert_eq!(fluxes.shape(), &[4]);
        assert_eq!(fluxes.velocities.shape(), &[4]);
        assert!(fluxes.diffusive_flux[[0]] > fluxes.diffusive_flux[[3]]);
        // Collapsing bubbles do not depend on the dissolved concentration
        assert_eq!(fluxes.complete_bubble_flux[[0]], fluxes.complete_bubble_flux[[3]]);
    }

    #[test]
    fn test_default_state_uses_mole_fraction() {
        let model = Emerson19::new();
        let surface = Surface::new(7.0);
        let xg = model.properties().dry_mole_fraction(Gas::Ar);
        let explicit = scalar(xg);

        let defaulted = model
            .compute(Gas::Ar, &surface.conditions(), &AirSeaState::default())
            .unwrap();
        let given = model
            .compute(
                Gas::Ar,
                &surface.conditions(),
                &AirSeaState::default().with_concentration(explicit.view()),
            )
            .unwrap();

        assert_eq!(defaulted, given);
    }

    #[test]
    fn test_stages_outlive_model() {
        let surface = Surface::new(5.0);
        let c = scalar(0.01410);

        let velocities = Emerson19::new()
            .transfer_velocities(Gas::Ar, &surface.conditions())
            .unwrap();
        assert_relative_eq!(velocities.mole_fraction(), 0.009332, max_relative = 1e-6);
        assert_relative_eq!(
            velocities.saturated_vapour_pressure[[]],
            StandardProperties::new().vapour_pressure(35.0, 10.0),
            max_relative = 1e-15
        );

        let fluxes = velocities
            .fluxes(&AirSeaState::default().with_concentration(c.view()))
            .unwrap();
        let expected = Emerson19::new()
            .compute(
                Gas::Ar,
                &surface.conditions(),
                &AirSeaState::default().with_concentration(c.view()),
            )
            .unwrap();

        assert_eq!(fluxes.supersaturation(), expected.equilibrium_supersaturation);
        assert_eq!(Emerson19Output::from(fluxes), expected);
    }

    #[test]
    fn test_stage_results_serialize() {
        let surface = Surface::new(9.0);
        let velocities = Emerson19::new()
            .transfer_velocities(Gas::Kr, &surface.conditions())
            .unwrap();

        let json = serde_json::to_string(&velocities).expect("Serialization failed");
        let parsed: TransferVelocities = serde_json::from_str(&json).expect("Deserialization failed");
        assert_eq!(parsed.gas(), Gas::Kr);
        assert_relative_eq!(
            parsed.diffusive_velocity[[]],
            velocities.diffusive_velocity[[]],
            max_relative = 1e-15
        );
    }
}
