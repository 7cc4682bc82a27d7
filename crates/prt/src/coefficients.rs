use thiserror::Error;

use crate::TEMPERATURE_MAX;

/// IEC 60751 coefficient `A` in °C⁻¹.
pub const IEC_60751_A: f64 = 3.9083e-3;

/// IEC 60751 coefficient `B` in °C⁻².
pub const IEC_60751_B: f64 = -5.775e-7;

/// IEC 60751 coefficient `C` in °C⁻⁴, used only below 0 °C.
pub const IEC_60751_C: f64 = -4.183e-12;

/// Errors raised when a coefficient set violates the platinum invariants.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoefficientError {
    #[error("coefficients must be finite")]
    NonFinite,

    #[error("A must be positive")]
    A,

    #[error("B must be negative")]
    B,

    #[error("C must be negative")]
    C,

    #[error("R0 must be positive")]
    R0,

    /// The quadratic branch peaks below the top of the domain.
    #[error("resistance must rise up to 850 °C, but A + 2·B·850 = {slope}")]
    NotIncreasing { slope: f64 },
}

/// Callendar-Van Dusen coefficients and the resistance at 0 °C.
///
/// A set is validated once at construction and never changes afterwards.
/// Use [`CoefficientSet::iec60751`] for a standard sensor with a non-standard
/// `R0`, or [`CoefficientSet::new`] for fully custom values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CoefficientValues")
)]
pub struct CoefficientSet {
    a: f64,
    b: f64,
    c: f64,
    r0: f64,
}

impl CoefficientSet {
    /// Creates a validated coefficient set.
    ///
    /// # Errors
    ///
    /// Returns an error unless all values are finite, `A > 0`, `B < 0`,
    /// `C < 0`, `R0 > 0` and `A + 2·B·850 > 0`.
    ///
    /// The last condition keeps resistance strictly increasing over the
    /// whole domain. Below 0 °C the slope is at least `A` when `B` and `C`
    /// are negative, so only the top of the quadratic branch needs checking.
    pub fn new(a: f64, b: f64, c: f64, r0: f64) -> Result<Self, CoefficientError> {
        if ![a, b, c, r0].iter().all(|v| v.is_finite()) {
            return Err(CoefficientError::NonFinite);
        }
        if a <= 0.0 {
            return Err(CoefficientError::A);
        }
        if b >= 0.0 {
            return Err(CoefficientError::B);
        }
        if c >= 0.0 {
            return Err(CoefficientError::C);
        }
        if r0 <= 0.0 {
            return Err(CoefficientError::R0);
        }
        let slope = a + 2.0 * b * TEMPERATURE_MAX;
        if slope <= 0.0 {
            return Err(CoefficientError::NotIncreasing { slope });
        }

        Ok(Self { a, b, c, r0 })
    }

    /// Creates the IEC 60751 set for a sensor with resistance `r0` at 0 °C.
    ///
    /// # Errors
    ///
    /// Returns an error if `r0` is not finite and positive.
    pub fn iec60751(r0: f64) -> Result<Self, CoefficientError> {
        Self::new(IEC_60751_A, IEC_60751_B, IEC_60751_C, r0)
    }

    /// Standard set for a known-good `r0`.
    pub(crate) const fn standard(r0: f64) -> Self {
        Self {
            a: IEC_60751_A,
            b: IEC_60751_B,
            c: IEC_60751_C,
            r0,
        }
    }

    /// Returns a copy with the same `A`, `B`, `C` and a different `R0`.
    ///
    /// # Errors
    ///
    /// Returns an error if `r0` is not finite and positive.
    pub fn with_r0(&self, r0: f64) -> Result<Self, CoefficientError> {
        Self::new(self.a, self.b, self.c, r0)
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Resistance at 0 °C in ohms.
    #[must_use]
    pub fn r0(&self) -> f64 {
        self.r0
    }
}

/// Unvalidated field layout used to deserialize a [`CoefficientSet`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CoefficientValues {
    a: f64,
    b: f64,
    c: f64,
    r0: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CoefficientValues> for CoefficientSet {
    type Error = CoefficientError;

    fn try_from(values: CoefficientValues) -> Result<Self, Self::Error> {
        Self::new(values.a, values.b, values.c, values.r0)
    }
}
