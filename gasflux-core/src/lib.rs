//! Core types for air-sea gas exchange calculations
//!
//! This crate holds the pieces shared by every flux parameterisation:
//!
//! - [`gas::Gas`]: the dissolved gases that can be modelled
//! - [`field`]: broadcastable arrays of independent observations
//! - [`constants`]: physical constants and unit conversions
//! - [`properties`]: traits for the seawater and gas property lookups
//!   that the flux models consume
//! - [`errors`]: the error type shared by the workspace

pub mod constants;
pub mod errors;
pub mod field;
pub mod gas;
pub mod properties;

/// Floating point type used throughout the workspace
pub type FloatValue = f64;

pub use errors::{GasFluxError, GasFluxResult};
pub use field::Field;
pub use gas::Gas;
