use crate::equation::Evaluation;

use super::{Solution, Status};

/// Tracks the evaluation with the smallest residual magnitude so far.
pub(super) struct Best<I, O> {
    eval: Evaluation<I, O>,
}

impl<I, O> Best<I, O> {
    /// Starts tracking from an initial evaluation.
    pub(super) fn new(eval: Evaluation<I, O>) -> Self {
        Self { eval }
    }

    /// Returns the current best evaluation.
    pub(super) fn eval(&self) -> &Evaluation<I, O> {
        &self.eval
    }

    /// Replaces the best evaluation if the residual magnitude improves.
    pub(super) fn update(&mut self, eval: Evaluation<I, O>) {
        if eval.residual.value.abs() < self.eval.residual.value.abs() {
            self.eval = eval;
        }
    }

    /// Finalizes the solver using the best evaluation.
    pub(super) fn finish(self, status: Status, iters: usize) -> Solution<I, O> {
        Solution::from_eval(self.eval, status, iters)
    }
}
