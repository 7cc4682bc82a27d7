//! Newton-Raphson root finding safeguarded by bisection.
//!
//! # Algorithm
//!
//! The solver starts from a bracket `[left, right]` whose endpoint residuals
//! have opposite signs. Each iteration proposes a Newton step
//! `x - f(x) / f'(x)` from the latest evaluation. If the residual carries no
//! slope, or the step is not finite, or it lands outside the open bracket,
//! the solver evaluates the bracket midpoint instead. Every evaluation
//! replaces the endpoint with the same residual sign, so the root stays
//! bracketed and the method can never diverge.
//!
//! # Convergence
//!
//! The solver reports [`Status::Converged`] as soon as
//! `|f(x)| <= residual_tol`. Otherwise it returns the best evaluation with
//! [`Status::MaxIters`] after [`Config::max_iters`] iterations. Callers that
//! need a converged root must check the status.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per iteration, after the two endpoint
//! evaluations. Observers can return [`Action::StopEarly`] to halt and
//! receive the best evaluation so far.

mod best;
mod bracket;
mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event, Step};
pub use solution::{Solution, Status};

use crate::{
    EquationProblem, Model, Observer,
    equation::{Evaluation, evaluate},
};

use best::Best;
use bracket::Bounds;

/// Finds a root of the equation inside `bracket`.
///
/// See the [module docs](self) for the iteration scheme.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or does not contain a sign
/// change, if a residual is not finite, or if the model or problem fails.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let tol = config.residual_tol();

    let left = checked_eval(model, problem, bounds.left())?;
    if left.residual.value.abs() <= tol {
        return Ok(Solution::from_eval(left, Status::Converged, 0));
    }

    let right = checked_eval(model, problem, bounds.right())?;
    if right.residual.value.abs() <= tol {
        return Ok(Solution::from_eval(right, Status::Converged, 0));
    }

    let mut bracket = Bracket::new(
        bounds,
        Sign::of(left.residual.value),
        Sign::of(right.residual.value),
    )
    .map_err(|_| Error::NoBracket {
        left: left.x,
        right: right.x,
        left_residual: left.residual.value,
        right_residual: right.residual.value,
    })?;

    let mut best = Best::new(left);
    best.update(right);

    let (mut x, mut step) = next_point(&bracket, best.eval());

    for iter in 1..=config.max_iters() {
        let eval = checked_eval(model, problem, x)?;

        let event = Event {
            iter,
            step,
            bracket: bracket.as_array(),
            eval: &eval,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            best.update(eval);
            return Ok(best.finish(Status::StoppedByObserver, iter));
        }

        if eval.residual.value.abs() <= tol {
            return Ok(Solution::from_eval(eval, Status::Converged, iter));
        }

        bracket.shrink(eval.x, Sign::of(eval.residual.value));
        (x, step) = next_point(&bracket, &eval);
        best.update(eval);
    }

    Ok(best.finish(Status::MaxIters, config.max_iters()))
}

/// Finds a root of the equation without observation.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Evaluates at `x` and rejects non-finite residuals.
fn checked_eval<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, x)?;
    if !eval.residual.value.is_finite() {
        return Err(Error::NonFiniteResidual {
            x,
            residual: eval.residual.value,
        });
    }
    Ok(eval)
}

/// Chooses the next point: a Newton step from `from` if it stays inside the
/// bracket, the midpoint otherwise.
fn next_point<I, O>(bracket: &Bracket, from: &Evaluation<I, O>) -> (f64, Step) {
    let newton = from
        .residual
        .slope
        .map(|slope| from.x - from.residual.value / slope)
        .filter(|x| x.is_finite() && bracket.contains(*x));

    match newton {
        Some(x) => (x, Step::Newton),
        None => (bracket.midpoint(), Step::Bisection),
    }
}
