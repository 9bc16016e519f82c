//! Gas transfer velocities shared by both flux parameterisations
//!
//! Data flows strictly one way:
//!
//! 1. Wind speed → drag coefficient (Large & Pond 1981)
//! 2. Drag coefficient + densities → air- and water-side friction velocity
//! 3. Schmidt numbers + drag → diffusive sublayer resistances
//! 4. Friction velocity + resistances → diffusive transfer velocity $K_s$
//! 5. Water-side friction velocity → bubble transfer velocity $K_b$,
//!    fully collapsing bubble coefficient and bubble overpressure $\Delta P$
//!
//! Everything here operates on scalars; the models in [`crate::liang13`] and
//! [`crate::emerson19`] apply these element-wise to broadcast arrays.
//!
//! Numeric edge cases are deliberately left unguarded: a vanishing
//! resistance gives an infinite transfer velocity and a negative friction
//! velocity raised to a fractional power gives NaN.

use crate::parameters::{BoundaryLayerParameters, BubbleParameters, ExchangeParameters};
use gasflux_core::constants::{ATM_TO_PA, GAS_CONSTANT, H_TO_S, M_TO_CM, ZERO_CELSIUS_K};
use gasflux_core::field::Field;
use gasflux_core::properties::GasProperties;
use gasflux_core::{FloatValue, Gas};
use log::warn;
use ndarray::ArrayViewD;
use serde::{Deserialize, Serialize};

/// Neutral 10 m drag coefficient.
///
/// $$C_{D10} = \begin{cases}
///   0.0012 & u_{10} \le 11 \\
///   4.9\times10^{-4} + 6.5\times10^{-5} u_{10} & 11 < u_{10} < 20 \\
///   0.0018 & u_{10} \ge 20
/// \end{cases}$$
///
/// The constant branches include their thresholds.
pub fn drag_coefficient(params: &BoundaryLayerParameters, u10: FloatValue) -> FloatValue {
    if u10 <= params.low_wind_threshold {
        params.low_wind_drag
    } else if u10 >= params.high_wind_threshold {
        params.high_wind_drag
    } else {
        params.drag_intercept + params.drag_slope * u10
    }
}

/// Element-wise [`drag_coefficient`] over an array of wind speeds.
pub fn drag_coefficients(params: &BoundaryLayerParameters, u10: ArrayViewD<'_, FloatValue>) -> Field {
    u10.mapv(|u| drag_coefficient(params, u))
}

/// Air- and water-side friction velocities (m/s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrictionVelocities {
    /// Air-side friction velocity $u_*$.
    pub air: FloatValue,
    /// Water-side friction velocity $u_{*w}$.
    pub water: FloatValue,
}

/// Friction velocities from wind speed, drag coefficient and densities.
///
/// $$u_* = u_{10}\sqrt{C_{D10}}, \quad u_{*w} = u_* \Big/ \sqrt{\rho_w / \rho_a}$$
pub fn friction_velocities(
    u10: FloatValue,
    drag_coefficient: FloatValue,
    water_density: FloatValue,
    air_density: FloatValue,
) -> FrictionVelocities {
    let air = u10 * drag_coefficient.sqrt();
    FrictionVelocities {
        air,
        water: air / (water_density / air_density).sqrt(),
    }
}

/// Resistances to diffusive transfer across the molecular sublayers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransferResistances {
    /// Water-side resistance $r_{wt}$.
    pub water: FloatValue,
    /// Air-side resistance $r_{at}$.
    pub air: FloatValue,
}

/// Water- and air-side resistances.
///
/// $$r_{wt} = \sqrt{\rho_w/\rho_a}\left(h_w\sqrt{Sc_w} + \frac{\ln(0.5/\delta)}{\kappa}\right)$$
/// $$r_{at} = h_a\sqrt{Sc_a} + C_{D10}^{-1/2} - 5 + \frac{0.5\ln Sc_a}{\kappa}$$
pub fn transfer_resistances(
    params: &BoundaryLayerParameters,
    schmidt_number: FloatValue,
    drag_coefficient: FloatValue,
    density_ratio: FloatValue,
) -> TransferResistances {
    let kappa = params.von_karman;
    let sc_air = params.air_schmidt_number;

    let water = density_ratio.sqrt()
        * (params.water_sublayer_scale() * schmidt_number.sqrt()
            + (0.5 / params.cool_skin_thickness).ln() / kappa);
    let air = params.air_sublayer_scale() * sc_air.sqrt() + 1.0 / drag_coefficient.sqrt() - 5.0
        + 0.5 * sc_air.ln() / kappa;

    TransferResistances { water, air }
}

/// Dimensionless solubility term converting the air-side resistance to
/// water-side units.
///
/// $$\alpha = \frac{C}{p_{atm}} R\,(T + 273.15)$$
///
/// # Arguments
///
/// * `concentration` - Equilibrium concentration (mol/m^3)
/// * `pt` - Potential temperature (°C)
pub fn solubility_term(concentration: FloatValue, pt: FloatValue) -> FloatValue {
    (concentration / ATM_TO_PA) * GAS_CONSTANT * (pt + ZERO_CELSIUS_K)
}

/// Diffusive gas transfer velocity (m/s).
///
/// $$K_s = \frac{u_*}{r_{wt} + \alpha\, r_{at}}$$
pub fn diffusive_transfer_velocity(
    friction_velocity: FloatValue,
    resistances: &TransferResistances,
    solubility_term: FloatValue,
) -> FloatValue {
    friction_velocity / (resistances.water + resistances.air * solubility_term)
}

/// Partially collapsing bubble transfer velocity (m/s).
///
/// $$K_b = 1.98\times10^{6}\, u_{*w}^{2.76} \left(\frac{Sc_w}{660}\right)^{-2/3}$$
///
/// with the fit in cm/h converted to m/s.
pub fn partial_bubble_velocity(
    params: &BubbleParameters,
    water_friction_velocity: FloatValue,
    schmidt_number: FloatValue,
) -> FloatValue {
    params.partial_coefficient
        * water_friction_velocity.powf(params.partial_exponent)
        * (schmidt_number / params.reference_schmidt_number).powf(params.schmidt_exponent)
        / (M_TO_CM * H_TO_S)
}

/// Fully collapsing bubble coefficient (m/s), $5.56\,u_{*w}^{3.86}$.
///
/// Multiplied by the dry mole fraction this is the injection flux of gas
/// from bubbles that dissolve completely.
pub fn collapsing_bubble_coefficient(
    params: &BubbleParameters,
    water_friction_velocity: FloatValue,
) -> FloatValue {
    params.collapsing_coefficient * water_friction_velocity.powf(params.collapsing_exponent)
}

/// Fractional overpressure of partially collapsing bubbles.
///
/// $$\Delta P = 1.5244\, u_{*w}^{1.06}$$
pub fn overpressure(params: &BubbleParameters, water_friction_velocity: FloatValue) -> FloatValue {
    params.overpressure_coefficient * water_friction_velocity.powf(params.overpressure_exponent)
}

/// Transfer quantities for a single observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasTransfer {
    pub drag_coefficient: FloatValue,
    pub friction: FrictionVelocities,
    pub schmidt_number: FloatValue,
    pub resistances: TransferResistances,
    /// $K_s$ (m/s)
    pub diffusive_velocity: FloatValue,
    /// $K_b$ (m/s), unscaled
    pub bubble_velocity: FloatValue,
    /// $5.56\,u_{*w}^{3.86}$ (m/s), unscaled
    pub collapsing_coefficient: FloatValue,
    /// $\Delta P$
    pub overpressure: FloatValue,
}

impl GasTransfer {
    /// Evaluate the full transfer chain for one observation.
    ///
    /// # Arguments
    ///
    /// * `concentration` - Equilibrium concentration (mol/m^3) entering the
    ///   air-side solubility term
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate<P: GasProperties>(
        params: &ExchangeParameters,
        properties: &P,
        gas: Gas,
        u10: FloatValue,
        sp: FloatValue,
        pt: FloatValue,
        concentration: FloatValue,
    ) -> Self {
        let boundary = &params.boundary_layer;
        let water_density = properties.surface_density(sp, pt);
        let density_ratio = water_density / boundary.air_density;

        let cd10 = drag_coefficient(boundary, u10);
        let friction = friction_velocities(u10, cd10, water_density, boundary.air_density);
        let schmidt_number = properties.schmidt_number(gas, sp, pt);
        let resistances = transfer_resistances(boundary, schmidt_number, cd10, density_ratio);

        Self {
            drag_coefficient: cd10,
            friction,
            schmidt_number,
            resistances,
            diffusive_velocity: diffusive_transfer_velocity(
                friction.air,
                &resistances,
                solubility_term(concentration, pt),
            ),
            bubble_velocity: partial_bubble_velocity(&params.bubbles, friction.water, schmidt_number),
            collapsing_coefficient: collapsing_bubble_coefficient(&params.bubbles, friction.water),
            overpressure: overpressure(&params.bubbles, friction.water),
        }
    }
}

/// Log a warning if any wind speed is negative.
///
/// Negative wind speeds are outside the domain of the drag law and produce
/// NaN bubble terms; they are passed through unchanged.
pub(crate) fn warn_negative_wind(u10: &ArrayViewD<'_, FloatValue>) {
    let negative = u10.iter().filter(|&&u| u < 0.0).count();
    if negative > 0 {
        warn!(
            "{} of {} wind speeds are negative; bubble terms will be NaN",
            negative,
            u10.len()
        );
    }
}
