use thiserror::Error;

/// Error type for invalid gas flux requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasFluxError {
    #[error("Unsupported gas '{0}'. Expected one of He, Ne, Ar, Kr, Xe, N2, O2")]
    UnsupportedGas(String),
    #[error("Input arrays cannot be broadcast together. Shapes: {shapes:?}")]
    ShapeMismatch { shapes: Vec<Vec<usize>> },
}

/// Convenience type for `Result<T, GasFluxError>`.
pub type GasFluxResult<T> = Result<T, GasFluxError>;
