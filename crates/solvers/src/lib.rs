//! One-dimensional root finding for the PRT workspace.
//!
//! This crate defines the small set of abstractions the conversion crate
//! builds on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`EquationProblem`] — adapts a scalar solver variable to model input and
//!   extracts a residual (with an optional slope) from the output
//!
//! The [`equation::newton`] solver drives that residual to zero on a
//! sign-changing bracket.

mod model;
mod observer;

pub mod equation;

pub use equation::{EquationProblem, Residual};
pub use model::{Model, Snapshot};
pub use observer::Observer;
