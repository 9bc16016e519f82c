//! Air-sea gas flux parameterisations
//!
//! This crate provides the Liang et al. (2013) and Emerson et al. (2019)
//! bubble-resolving air-sea gas flux models.
//!
//! # Module Organisation
//!
//! - `transfer`: drag law, friction velocities, sublayer resistances and
//!   bubble transfer terms shared by both models
//! - `liang13`: fluxes from a dissolved concentration and an atmospheric
//!   partial pressure, positive out of the ocean
//! - `emerson19`: staged transfer velocities, fluxes and steady-state
//!   supersaturation, positive into the ocean
//!
//! # Parameters
//!
//! Empirical constants live in the `parameters` module with defaults
//! matching the published fits.
//!
//! Property lookups (solubility, diffusivity, density, vapour pressure) are
//! taken from any [`gasflux_core::properties::GasProperties`]
//! implementation, [`gasflux_properties::StandardProperties`] by default.

pub mod emerson19;
pub mod liang13;
pub mod parameters;
pub mod transfer;

pub use emerson19::{AirSeaState, Emerson19, Emerson19Output, Fluxes, SurfaceConditions, TransferVelocities};
pub use liang13::{Liang13, Liang13Fluxes, Liang13Inputs};
