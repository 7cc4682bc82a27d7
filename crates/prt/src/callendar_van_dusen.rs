//! The Callendar-Van Dusen equations as a forward model.
//!
//! ```text
//! t >= 0:  R(t) = R0 (1 + A t + B t²)
//! t <  0:  R(t) = R0 (1 + A t + B t² + C (t − 100) t³)
//! ```
//!
//! Both branches reduce to `R0` at `t = 0`, so the relation is continuous.

use prt_solvers::Model;

use crate::{CoefficientSet, ConversionError};

/// Lowest temperature covered by IEC 60751, in °C.
pub const TEMPERATURE_MIN: f64 = -200.0;

/// Highest temperature covered by IEC 60751, in °C.
pub const TEMPERATURE_MAX: f64 = 850.0;

/// Which form of the equation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// `t >= 0`: quadratic, inverted in closed form.
    Quadratic,
    /// `t < 0`: quartic correction, inverted iteratively.
    Quartic,
}

impl Branch {
    /// Returns the branch for a temperature in °C.
    #[must_use]
    pub fn for_temperature(temperature: f64) -> Self {
        if temperature >= 0.0 {
            Self::Quadratic
        } else {
            Self::Quartic
        }
    }

    /// Returns the branch for a resistance, using `R(t) >= R0` iff `t >= 0`.
    #[must_use]
    pub fn for_resistance(resistance: f64, r0: f64) -> Self {
        if resistance >= r0 {
            Self::Quadratic
        } else {
            Self::Quartic
        }
    }
}

/// Resistance and sensitivity of a sensor at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Response {
    /// Resistance in ohms.
    pub resistance: f64,
    /// Sensitivity `dR/dt` in ohms per °C.
    pub sensitivity: f64,
}

/// Forward temperature → resistance model for one coefficient set.
///
/// Calling the model with a temperature outside
/// [`TEMPERATURE_MIN`]..=[`TEMPERATURE_MAX`] fails with
/// [`ConversionError::OutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallendarVanDusen {
    coefficients: CoefficientSet,
}

impl CallendarVanDusen {
    #[must_use]
    pub fn new(coefficients: CoefficientSet) -> Self {
        Self { coefficients }
    }

    #[must_use]
    pub fn coefficients(&self) -> &CoefficientSet {
        &self.coefficients
    }

    /// Returns the resistance in ohms at `temperature` in °C.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::OutOfRange`] if `temperature` is not finite
    /// or lies outside the supported domain.
    pub fn resistance(&self, temperature: f64) -> Result<f64, ConversionError> {
        self.call(&temperature).map(|response| response.resistance)
    }

    /// Returns the resistances at both ends of the domain.
    #[must_use]
    pub fn resistance_span(&self) -> [f64; 2] {
        [
            self.response_unchecked(TEMPERATURE_MIN).resistance,
            self.response_unchecked(TEMPERATURE_MAX).resistance,
        ]
    }

    fn response_unchecked(&self, t: f64) -> Response {
        let set = &self.coefficients;
        let (a, b, c, r0) = (set.a(), set.b(), set.c(), set.r0());

        match Branch::for_temperature(t) {
            Branch::Quadratic => Response {
                resistance: r0 * (1.0 + a * t + b * t * t),
                sensitivity: r0 * (a + 2.0 * b * t),
            },
            Branch::Quartic => Response {
                resistance: r0 * (1.0 + a * t + b * t * t + c * (t - 100.0) * t.powi(3)),
                sensitivity: r0 * (a + 2.0 * b * t + c * (4.0 * t.powi(3) - 300.0 * t * t)),
            },
        }
    }
}

impl Model for CallendarVanDusen {
    type Input = f64;
    type Output = Response;
    type Error = ConversionError;

    fn call(&self, temperature: &f64) -> Result<Response, ConversionError> {
        let t = *temperature;
        if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&t) {
            return Err(ConversionError::OutOfRange {
                temperature: t,
                min: TEMPERATURE_MIN,
                max: TEMPERATURE_MAX,
            });
        }
        Ok(self.response_unchecked(t))
    }
}
