use thiserror::Error;

use crate::{EquationProblem, Model, Residual, Snapshot};

/// The result of evaluating an equation problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    pub x: f64,
    pub residual: Residual,
    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an equation problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),
    /// Failed to construct input or compute the residual.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as EquationProblem>::Error>,
>;

/// Evaluates the model in the context of an equation problem.
///
/// Maps `x` to model input, calls the model, then computes the residual
/// from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, the model call, or the residual fails.
pub fn evaluate<M, P>(model: &M, problem: &P, x: f64) -> EvaluateResult<M, P>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
{
    let input = problem.input(x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let residual = problem
        .residual(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        residual,
        snapshot: Snapshot::new(input, output),
    })
}
