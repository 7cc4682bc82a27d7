use crate::equation::Evaluation;

/// How the solver chose the point evaluated in an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A Newton step from the previous evaluation, landing inside the bracket.
    Newton,
    /// The bracket midpoint, used when a Newton step is unavailable or escapes.
    Bisection,
}

/// Control actions supported by the Newton-bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best solution found so far.
    StopEarly,
}

/// Iteration event emitted by the Newton-bisection solver.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// How the evaluated point was chosen.
    pub step: Step,
    /// Bracket that contained the evaluated point.
    pub bracket: [f64; 2],
    /// Evaluation at the chosen point.
    pub eval: &'a Evaluation<I, O>,
}
