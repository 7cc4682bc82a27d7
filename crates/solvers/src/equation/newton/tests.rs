use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use crate::{EquationProblem, Model, Residual};

use super::{
    Action, BracketError, Config, Error, Event, Sign, Status, Step, solve, solve_unobserved,
};

/// Cubes its input and reports the derivative alongside.
struct Cube;

impl Model for Cube {
    type Input = f64;
    type Output = (f64, f64);
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<Self::Output, Self::Error> {
        Ok((x.powi(3), 3.0 * x.powi(2)))
    }
}

/// Drives the model value to a target, optionally passing the slope through.
struct Target {
    value: f64,
    use_slope: bool,
}

impl Target {
    fn newton(value: f64) -> Self {
        Self {
            value,
            use_slope: true,
        }
    }

    fn bisection(value: f64) -> Self {
        Self {
            value,
            use_slope: false,
        }
    }
}

impl EquationProblem for Target {
    type Input = f64;
    type Output = (f64, f64);
    type Error = Infallible;

    fn input(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(x)
    }

    fn residual(&self, _input: &f64, output: &(f64, f64)) -> Result<Residual, Self::Error> {
        let (value, slope) = *output;
        if self.use_slope {
            Ok(Residual::with_slope(value - self.value, slope))
        } else {
            Ok(Residual::new(value - self.value))
        }
    }
}

fn record_steps(
    steps: &mut Vec<Step>,
) -> impl FnMut(&Event<'_, f64, (f64, f64)>) -> Option<Action> {
    move |event: &Event<'_, f64, (f64, f64)>| -> Option<Action> {
        steps.push(event.step);
        None
    }
}

#[test]
fn finds_cube_root_with_newton_steps() {
    let mut steps = Vec::new();
    let solution = solve(
        &Cube,
        &Target::newton(27.0),
        [0.0, 10.0],
        &Config::default(),
        record_steps(&mut steps),
    )
    .expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-9);
    assert!(solution.residual.abs() <= 1e-9);
    assert!(steps.contains(&Step::Newton));
}

#[test]
fn zero_slope_falls_back_to_bisection() {
    let mut steps = Vec::new();
    solve(
        &Cube,
        &Target::newton(27.0),
        [0.0, 10.0],
        &Config::default(),
        record_steps(&mut steps),
    )
    .expect("should solve");

    // The best endpoint is x = 0 where the slope vanishes.
    assert_eq!(steps[0], Step::Bisection);
}

#[test]
fn bisection_only_without_slope() {
    let mut steps = Vec::new();
    let solution = solve(
        &Cube,
        &Target::bisection(27.0),
        [0.0, 10.0],
        &Config::default(),
        record_steps(&mut steps),
    )
    .expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-9);
    assert!(steps.iter().all(|step| *step == Step::Bisection));
    assert_eq!(steps.len(), solution.iters);
}

#[test]
fn newton_needs_fewer_iterations_than_bisection() {
    let config = Config::default();
    let newton = solve_unobserved(&Cube, &Target::newton(-8.0), [-10.0, 1.0], &config)
        .expect("should solve");
    let bisection = solve_unobserved(&Cube, &Target::bisection(-8.0), [-10.0, 1.0], &config)
        .expect("should solve");

    assert_relative_eq!(newton.x, -2.0, epsilon = 1e-9);
    assert_relative_eq!(bisection.x, -2.0, epsilon = 1e-9);
    assert!(newton.iters < bisection.iters);
}

#[test]
fn observer_can_stop_iteration() {
    let mut calls = 0usize;
    let observer = |event: &Event<'_, f64, (f64, f64)>| {
        calls += 1;
        if event.iter >= 2 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = solve(
        &Cube,
        &Target::bisection(27.0),
        [0.0, 10.0],
        &Config::default(),
        observer,
    )
    .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(calls, 2);
}

#[test]
fn events_report_the_shrinking_bracket() {
    let mut brackets = Vec::new();
    let observer = |event: &Event<'_, f64, (f64, f64)>| -> Option<Action> {
        brackets.push(event.bracket);
        None
    };

    solve(
        &Cube,
        &Target::bisection(27.0),
        [0.0, 10.0],
        &Config::default(),
        observer,
    )
    .expect("should solve");

    assert_eq!(brackets[0], [0.0, 10.0]);
    assert_eq!(brackets[1], [0.0, 5.0]);
    assert_eq!(brackets[2], [2.5, 5.0]);
}

#[test]
fn normalizes_reversed_bracket() {
    let solution = solve_unobserved(&Cube, &Target::newton(64.0), [10.0, 0.0], &Config::default())
        .expect("should solve with reversed bracket");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 4.0, epsilon = 1e-9);
}

#[test]
fn converges_on_an_endpoint() {
    let solution = solve_unobserved(&Cube, &Target::newton(8.0), [2.0, 5.0], &Config::default())
        .expect("endpoint is a root");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.x, 2.0);
}

#[test]
fn errors_on_invalid_bracket() {
    let config = Config::default();

    let result = solve_unobserved(&Cube, &Target::newton(1.0), [3.0, 3.0], &config);
    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::ZeroWidth))
    ));

    let result = solve_unobserved(&Cube, &Target::newton(1.0), [f64::NAN, 3.0], &config);
    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NonFinite))
    ));
}

#[test]
fn errors_on_no_sign_change() {
    let result = solve_unobserved(&Cube, &Target::newton(1.0), [2.0, 5.0], &Config::default());

    match result {
        Err(Error::NoBracket {
            left,
            right,
            left_residual,
            right_residual,
        }) => {
            assert_relative_eq!(left, 2.0);
            assert_relative_eq!(right, 5.0);
            assert_eq!(Sign::of(left_residual), Sign::of(right_residual));
        }
        other => panic!("expected NoBracket, got {other:?}"),
    }
}

#[test]
fn zero_iters_returns_best_endpoint() {
    let config = Config::new(0, 1e-9).expect("valid config");
    let solution = solve_unobserved(&Cube, &Target::newton(9.0), [2.0, 10.0], &config)
        .expect("should return best endpoint");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    // |8 - 9| = 1 beats |1000 - 9| = 991.
    assert_relative_eq!(solution.x, 2.0);
    assert_relative_eq!(solution.residual, -1.0);
}

#[test]
fn max_iters_reports_best_estimate() {
    let config = Config::new(3, 0.0).expect("valid config");
    let solution = solve_unobserved(&Cube, &Target::bisection(27.0), [0.0, 10.0], &config)
        .expect("should stop at the cap");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 3);
    // Midpoints 5, 2.5, 3.75: 2.5 has the smallest residual.
    assert_relative_eq!(solution.x, 2.5);
}

#[derive(Debug, Error)]
#[error("input rejected")]
struct Rejected;

/// Square root model that rejects negative input and returns NaN at a pole.
struct Picky;

impl Model for Picky {
    type Input = f64;
    type Output = (f64, f64);
    type Error = Rejected;

    fn call(&self, x: &f64) -> Result<Self::Output, Self::Error> {
        if *x < 0.0 {
            return Err(Rejected);
        }
        #[allow(clippy::float_cmp)]
        if *x == 4.0 {
            return Ok((f64::NAN, f64::NAN));
        }
        Ok((x.sqrt(), 0.5 / x.sqrt()))
    }
}

#[test]
fn model_errors_are_boxed() {
    let result = solve_unobserved(&Picky, &Target::newton(1.0), [-1.0, 4.0], &Config::default());
    assert!(matches!(result, Err(Error::Model(_))));
}

#[test]
fn errors_on_non_finite_residual() {
    let result = solve_unobserved(&Picky, &Target::newton(1.0), [0.0, 4.0], &Config::default());
    assert!(matches!(
        result,
        Err(Error::NonFiniteResidual { x, .. }) if x == 4.0
    ));
}
