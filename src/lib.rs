//! Air-sea gas exchange
//!
//! Bubble-resolving air-sea gas fluxes for He, Ne, Ar, Kr, Xe, N2 and O2
//! following Liang et al. (2013) and Emerson et al. (2019).
//!
//! # Example
//!
//! ```
//! use gasflux::{Emerson19, SurfaceConditions, AirSeaState, Gas};
//! use gasflux::field::scalar;
//!
//! let wind_speed = ndarray::arr1(&[2.0, 8.0, 15.0]).into_dyn();
//! let salinity = scalar(35.0);
//! let temperature = scalar(10.0);
//! let concentration = scalar(0.0141);
//!
//! let model = Emerson19::new();
//! let surface = SurfaceConditions {
//!     wind_speed: wind_speed.view(),
//!     salinity: salinity.view(),
//!     temperature: temperature.view(),
//! };
//! let output = model
//!     .compute(
//!         Gas::Ar,
//!         &surface,
//!         &AirSeaState::default().with_concentration(concentration.view()),
//!     )
//!     .unwrap();
//! assert_eq!(output.diffusive_flux.shape(), &[3]);
//! ```

pub use gasflux_components::{
    emerson19, liang13, parameters, transfer, AirSeaState, Emerson19, Emerson19Output, Fluxes,
    Liang13, Liang13Fluxes, Liang13Inputs, SurfaceConditions, TransferVelocities,
};
pub use gasflux_core::{constants, errors, field, properties};
pub use gasflux_core::{Field, FloatValue, Gas, GasFluxError, GasFluxResult};
pub use gasflux_properties as seawater;
pub use gasflux_properties::StandardProperties;

#[cfg(feature = "python")]
mod python;
