//! tests for the secant root-finding algorithm
use std::f64::consts::FRAC_PI_2;

use approx::assert_abs_diff_eq;
use scalar_roots::root_finding::errors::ConfigError;
use scalar_roots::root_finding::report::{Stencil, TerminationReason, ToleranceSatisfied};
use scalar_roots::root_finding::secant::{secant, SecantCfg};

type TestResult = Result<(), ConfigError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_tol(1e-10)?.set_max_iter(60)?;

    let res = secant(f, 1.0, 2.0, cfg);

    assert!(res.converged);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-9);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn linear_function_converges_in_one_step() {
    let f   = |x: f64| x - 3.0;
    let res = secant(f, 0.0, 10.0, SecantCfg::new());

    assert!(res.converged);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.root, 3.0);
    assert_eq!(res.history, vec![0.0, 10.0, 3.0]);
}

#[test]
fn finds_half_pi_for_cosine() {
    let res = secant(f64::cos, 0.0, 1.0, SecantCfg::new());

    assert!(res.converged);
    assert_abs_diff_eq!(res.root, FRAC_PI_2, epsilon = 1e-7);
}

#[test]
fn history_is_seeded_with_both_guesses() {
    let f   = |x: f64| x * x * x - 2.0 * x - 5.0;
    let res = secant(f, 2.0, 3.0, SecantCfg::new());

    assert!(res.converged);
    assert_eq!(&res.history[..2], &[2.0, 3.0]);
    assert_eq!(res.history.len(), res.iterations + 2);
    assert_eq!(res.history.last().copied(), Some(res.root));
}

#[test]
fn flat_secant_stalls() {
    let f   = |_x: f64| 1.0;
    let res = secant(f, 0.0, 1.0, SecantCfg::new());

    assert!(!res.converged);
    assert_eq!(res.termination_reason, TerminationReason::Stagnation);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.root, 1.0);
    assert_eq!(res.history, vec![0.0, 1.0]);
}

#[test]
fn equal_guesses_stall() {
    let f   = |x: f64| x - 1.0;
    let res = secant(f, 0.0, 0.0, SecantCfg::new());

    assert!(!res.converged);
    assert_eq!(res.termination_reason, TerminationReason::Stagnation);
    assert_eq!(res.iterations, 0);
}

#[test]
fn uses_max_iter_hits_limit() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let cfg = SecantCfg::new().set_max_iter(1)?;

    let res = secant(f, 0.0, 1.0, cfg);

    assert!(!res.converged);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.root, -1.0);
    assert_eq!(res.history, vec![0.0, 1.0, -1.0]);
    Ok(())
}

#[test]
fn evaluates_each_iterate_once() {
    let f   = |x: f64| x - 3.0;
    let res = secant(f, 0.0, 10.0, SecantCfg::new());

    // f(x0), f(x1), f(x2)
    assert_eq!(res.evaluations, 3);
}

#[test]
fn parent_fields_generate_returned_root() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_tol(1e-12)?.set_max_iter(50)?;

    let res = secant(f, 1.0, 2.0, cfg);
    assert!(res.converged);

    let Stencil::Open { x: [p1, p2, _], len: 2 } = res.stencil else {
        panic!("secant must report its two parent iterates");
    };
    let xp = p1 - f(p1) * (p1 - p2) / (f(p1) - f(p2));
    assert_abs_diff_eq!(xp, res.root, epsilon = 1e-12);
    Ok(())
}

#[test]
fn algorithm_field_is_secant() {
    let f   = |x: f64| x * x - 2.0;
    let res = secant(f, 1.0, 2.0, SecantCfg::new());
    assert_eq!(res.algorithm_name, "secant");
}

#[test]
fn nan_values_run_to_iteration_limit() -> TestResult {
    let f   = |x: f64| if x > 0.5 { f64::NAN } else { x - 1.0 };
    let cfg = SecantCfg::new().set_max_iter(10)?;
    let res = secant(f, 0.0, 2.0, cfg);

    assert!(!res.converged);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 10);
    assert_eq!(res.history.len(), 12);
    assert!(res.root.is_nan());
    Ok(())
}
