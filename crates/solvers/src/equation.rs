//! Scalar equation problems and the solvers that find their roots.
//!
//! An [`EquationProblem`] maps a solver variable `x` to model input, and
//! turns the model output into a [`Residual`]. Solvers in this module drive
//! that residual toward zero.
//!
//! # Solvers
//!
//! - [`newton`] — Newton-Raphson safeguarded by bisection on a bracket

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod newton;

/// Defines a scalar equation `residual(x) = 0` over a model.
pub trait EquationProblem {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the model input for solver variable `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` cannot be mapped to a valid input.
    fn input(&self, x: f64) -> Result<Self::Input, Self::Error>;

    /// Computes the residual from a model input and output.
    ///
    /// # Errors
    ///
    /// Returns an error if the residual cannot be computed.
    fn residual(&self, input: &Self::Input, output: &Self::Output)
    -> Result<Residual, Self::Error>;
}

/// A residual value and, when known, its derivative with respect to `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residual {
    pub value: f64,
    pub slope: Option<f64>,
}

impl Residual {
    /// Creates a residual without slope information.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value, slope: None }
    }

    /// Creates a residual with a known slope `d(residual)/dx`.
    #[must_use]
    pub fn with_slope(value: f64, slope: f64) -> Self {
        Self {
            value,
            slope: Some(slope),
        }
    }
}
