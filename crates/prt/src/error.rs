use prt_solvers::equation::newton;
use thiserror::Error;

use crate::CoefficientError;

/// Errors that may occur when converting between resistance and temperature.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The sensor identifier is not a recognized platinum family.
    #[error("unsupported sensor type `{name}`")]
    UnsupportedSensorType { name: String },

    /// The temperature lies outside the domain of the equations.
    #[error("temperature {temperature} °C is outside [{min}, {max}] °C")]
    OutOfRange {
        temperature: f64,
        min: f64,
        max: f64,
    },

    /// The resistance is not finite and positive.
    #[error("resistance must be finite and positive, got {resistance} Ω")]
    InvalidResistance { resistance: f64 },

    /// The resistance maps to a temperature outside the domain.
    #[error("resistance {resistance} Ω is outside the achievable span [{min}, {max}] Ω")]
    ResistanceOutOfRange {
        resistance: f64,
        min: f64,
        max: f64,
    },

    /// A custom coefficient set breaks the platinum invariants.
    #[error("invalid coefficients: {0}")]
    InvalidCoefficients(#[from] CoefficientError),

    /// The iterative inverse did not meet its tolerance within the iteration cap.
    ///
    /// Carries the best estimate and its residual for diagnostics.
    #[error(
        "no convergence after {iterations} iterations: \
         best estimate {estimate} °C has residual {residual} Ω"
    )]
    Convergence {
        estimate: f64,
        residual: f64,
        iterations: usize,
    },

    /// The root finder rejected the problem before iterating.
    #[error("solver failed")]
    Solver(#[from] newton::Error),
}
