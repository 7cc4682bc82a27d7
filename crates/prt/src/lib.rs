//! Callendar-Van Dusen conversion for platinum resistance thermometers.
//!
//! Converts between resistance and temperature for PT100, PT200, PT500 and
//! PT1000 sensors (or any custom [`CoefficientSet`]) following IEC 60751,
//! over the domain −200 °C to 850 °C.
//!
//! - [`temperature_to_resistance`] evaluates the quadratic branch at or above
//!   0 °C and the quartic-corrected branch below.
//! - [`resistance_to_temperature`] inverts the quadratic branch in closed
//!   form and the quartic branch with a bracketed Newton-bisection solver
//!   (tolerance `1e-9` Ω, at most 100 iterations by default).
//!
//! ```
//! use prt::{SensorType, resistance_to_temperature, temperature_to_resistance};
//!
//! let r = temperature_to_resistance(25.0, SensorType::Pt100)?;
//! assert!((r - 109.73).abs() < 0.01);
//!
//! let t = resistance_to_temperature(80.31, SensorType::Pt100)?;
//! assert!((t + 50.0).abs() < 0.01);
//! # Ok::<(), prt::ConversionError>(())
//! ```
//!
//! All conversions are pure functions; every type here is `Send + Sync`.
//! Progress of the iterative solver is reported through the [`log`] facade.

mod callendar_van_dusen;
mod coefficients;
mod error;
mod inverse;
mod sensor;
mod thermometer;

pub mod quantity;

pub use callendar_van_dusen::{
    Branch, CallendarVanDusen, Response, TEMPERATURE_MAX, TEMPERATURE_MIN,
};
pub use coefficients::{
    CoefficientError, CoefficientSet, IEC_60751_A, IEC_60751_B, IEC_60751_C,
};
pub use error::ConversionError;
pub use sensor::{SensorSpec, SensorType, resolve};
pub use thermometer::{
    Thermometer, r2t, resistance_to_temperature, resistance_to_temperature_with, t2r,
    temperature_to_resistance,
};

/// Configuration of the iterative solver used below 0 °C.
///
/// The default stops once `|R(t) − R| <= 1e-9` Ω and gives up after 100
/// iterations with [`ConversionError::Convergence`].
pub use prt_solvers::equation::newton::Config as SolverConfig;
pub use prt_solvers::equation::newton::ConfigError as SolverConfigError;
