//! Resistance → temperature.
//!
//! At or above `R0` the quadratic branch is inverted in closed form. Below
//! `R0` the quartic branch has no practical closed-form inverse, so the
//! temperature is found with the Newton-bisection solver on the bracket
//! `[TEMPERATURE_MIN, 0]`.

use std::convert::Infallible;

use log::{debug, trace, warn};
use prt_solvers::{
    EquationProblem, Residual,
    equation::newton::{self, Action, Event, Status},
};

use crate::{
    Branch, CallendarVanDusen, ConversionError, Response, SolverConfig, TEMPERATURE_MIN,
};

/// Drives the model resistance to a measured value.
struct MeasuredResistance(f64);

impl EquationProblem for MeasuredResistance {
    type Input = f64;
    type Output = Response;
    type Error = Infallible;

    fn input(&self, temperature: f64) -> Result<f64, Self::Error> {
        Ok(temperature)
    }

    fn residual(&self, _temperature: &f64, response: &Response) -> Result<Residual, Self::Error> {
        Ok(Residual::with_slope(
            response.resistance - self.0,
            response.sensitivity,
        ))
    }
}

/// Returns the temperature in °C at which the model reaches `resistance`.
pub(crate) fn temperature(
    model: &CallendarVanDusen,
    resistance: f64,
    config: &SolverConfig,
) -> Result<f64, ConversionError> {
    if !resistance.is_finite() || resistance <= 0.0 {
        return Err(ConversionError::InvalidResistance { resistance });
    }

    let [min, max] = model.resistance_span();
    if resistance < min || resistance > max {
        return Err(ConversionError::ResistanceOutOfRange {
            resistance,
            min,
            max,
        });
    }

    let r0 = model.coefficients().r0();
    let branch = Branch::for_resistance(resistance, r0);
    debug!("inverting {resistance} Ω (R0 = {r0} Ω) on the {branch:?} branch");

    match branch {
        Branch::Quadratic => closed_form(model, resistance),
        Branch::Quartic => iterate(model, resistance, config),
    }
}

/// Solves `B t² + A t + (1 − R/R0) = 0` for the root in `[0, TEMPERATURE_MAX]`.
///
/// Uses `t = 2x / (A + √(A² + 4Bx))` with `x = R/R0 − 1`, which avoids
/// cancellation near `R0` and gives `t = 0` exactly at `R = R0`.
fn closed_form(model: &CallendarVanDusen, resistance: f64) -> Result<f64, ConversionError> {
    let set = model.coefficients();
    let (a, b, r0) = (set.a(), set.b(), set.r0());

    let x = resistance / r0 - 1.0;
    let discriminant = a * a + 4.0 * b * x;
    if discriminant < 0.0 {
        // Past the vertex of the parabola; only reachable with custom sets.
        let [min, max] = model.resistance_span();
        return Err(ConversionError::ResistanceOutOfRange {
            resistance,
            min,
            max,
        });
    }

    Ok(2.0 * x / (a + discriminant.sqrt()))
}

fn iterate(
    model: &CallendarVanDusen,
    resistance: f64,
    config: &SolverConfig,
) -> Result<f64, ConversionError> {
    let observer = |event: &Event<'_, f64, Response>| -> Option<Action> {
        trace!(
            "iter {}: {:?} step to t = {} °C, residual {} Ω, bracket {:?}",
            event.iter, event.step, event.eval.x, event.eval.residual.value, event.bracket,
        );
        None
    };

    let solution = newton::solve(
        model,
        &MeasuredResistance(resistance),
        [TEMPERATURE_MIN, 0.0],
        config,
        observer,
    )?;

    if solution.status != Status::Converged {
        warn!(
            "no convergence for {resistance} Ω after {} iterations (best t = {} °C, residual {} Ω)",
            solution.iters, solution.x, solution.residual,
        );
        return Err(ConversionError::Convergence {
            estimate: solution.x,
            residual: solution.residual,
            iterations: solution.iters,
        });
    }

    // Within tolerance of R0 the solver can stop on the t = 0 endpoint, which
    // belongs to the upper branch. One Newton step moves it below zero.
    if solution.x >= 0.0 {
        return Ok(solution.x - solution.residual / solution.snapshot.output.sensitivity);
    }

    Ok(solution.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{CoefficientSet, SensorType};

    fn pt100() -> CallendarVanDusen {
        CallendarVanDusen::new(SensorType::Pt100.coefficients())
    }

    fn invert(resistance: f64) -> Result<f64, ConversionError> {
        temperature(&pt100(), resistance, &SolverConfig::default())
    }

    #[test]
    fn r0_maps_to_exact_zero() {
        let t = invert(100.0).expect("valid resistance");
        assert_eq!(t, 0.0);
        assert!(t.is_sign_positive());
    }

    #[test]
    fn closed_form_matches_quadratic_formula() {
        // Textbook root of B t² + A t + (1 − R/R0) = 0.
        let (a, b): (f64, f64) = (3.9083e-3, -5.775e-7);
        let c = 1.0 - 250.0 / 100.0;
        let textbook = (-a + (a * a - 4.0 * b * c).sqrt()) / (2.0 * b);

        assert_relative_eq!(invert(250.0).expect("valid"), textbook, max_relative = 1e-10);
    }

    #[test]
    fn iterative_branch_meets_tolerance() {
        let model = pt100();
        let config = SolverConfig::default();
        for r in [18.6, 40.0, 60.0, 80.31, 99.0, 99.999_999] {
            let t = temperature(&model, r, &config).expect("valid resistance");
            assert!(t < 0.0, "{r} Ω gave {t} °C");
            let back = model.resistance(t).expect("in range");
            assert!((back - r).abs() <= config.residual_tol());
        }
    }

    #[test]
    fn just_below_r0_stays_negative() {
        let r = 100.0 - 1e-12;
        let t = invert(r).expect("valid resistance");
        assert!(t < 0.0);
        assert_relative_eq!(t, -(100.0 - r) / (100.0 * 3.9083e-3), max_relative = 1e-6);
    }

    #[test]
    fn span_endpoints_map_to_domain_endpoints() {
        let [low, high] = pt100().resistance_span();
        assert_relative_eq!(invert(low).expect("valid"), -200.0, epsilon = 1e-9);
        assert_relative_eq!(invert(high).expect("valid"), 850.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        for r in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                invert(r),
                Err(ConversionError::InvalidResistance { .. })
            ));
        }
    }

    #[test]
    fn rejects_resistance_outside_span() {
        for r in [10.0, 400.0] {
            match invert(r) {
                Err(ConversionError::ResistanceOutOfRange { min, max, .. }) => {
                    assert_relative_eq!(min, 18.52, epsilon = 0.01);
                    assert_relative_eq!(max, 390.48, epsilon = 0.01);
                }
                other => panic!("expected ResistanceOutOfRange, got {other:?}"),
            }
        }
    }

    #[test]
    fn cap_reached_reports_best_estimate() {
        let config = SolverConfig::new(2, 0.0).expect("valid config");
        let err = temperature(&pt100(), 80.31, &config).expect_err("two iterations are not enough");

        match err {
            ConversionError::Convergence {
                estimate,
                residual,
                iterations,
            } => {
                assert_eq!(iterations, 2);
                assert!((-200.0..0.0).contains(&estimate));
                assert!(residual.abs() > 0.0);
            }
            other => panic!("expected Convergence, got {other:?}"),
        }
    }

    #[test]
    fn custom_coefficients_invert_consistently() {
        let set = CoefficientSet::new(3.85e-3, -6.0e-7, -5.0e-12, 1000.0).expect("valid set");
        let model = CallendarVanDusen::new(set);
        for t in [-180.0, -42.0, 0.0, 137.0, 790.0] {
            let r = model.resistance(t).expect("in range");
            let back = temperature(&model, r, &SolverConfig::default()).expect("valid");
            assert_relative_eq!(back, t, epsilon = 1e-6);
        }
    }
}
