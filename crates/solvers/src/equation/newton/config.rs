use thiserror::Error;

/// Configuration for the Newton-bisection solver.
///
/// The solver stops as soon as `|residual| <= residual_tol`. If that has not
/// happened after `max_iters` iterations it reports [`Status::MaxIters`].
///
/// [`Status::MaxIters`]: super::Status::MaxIters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
}

/// Errors that can occur when validating a Newton-bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,
}

impl Default for Config {
    /// 100 iterations and a residual tolerance of `1e-9`.
    fn default() -> Self {
        Self {
            max_iters: 100,
            residual_tol: 1e-9,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is negative or non-finite.
    pub fn new(max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            max_iters,
            residual_tol,
        })
    }

    /// Returns the maximum number of iterations after the endpoint evaluations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute residual tolerance.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}
