//! tests for the one-dimensional Broyden method
use approx::assert_abs_diff_eq;
use scalar_roots::root_finding::broyden::{broyden, BroydenCfg};
use scalar_roots::root_finding::errors::ConfigError;
use scalar_roots::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), ConfigError>;

#[test]
fn finds_cubic_root_and_tracks_derivative() {
    let f   = |x: f64| x * x * x - x - 2.0;
    let res = broyden(f, 1.0, 2.0, BroydenCfg::new());

    assert!(res.converged);
    assert_abs_diff_eq!(res.root, 1.521_379_706_804_567_6, epsilon = 1e-7);

    let slope = res.slope().expect("broyden reports its slope");
    let dfr   = 3.0 * res.root * res.root - 1.0;
    assert_abs_diff_eq!(slope, dfr, epsilon = 1e-2);
}

#[test]
fn linear_function_converges_in_one_step() {
    let f   = |x: f64| 2.0 * x - 6.0;
    let res = broyden(f, 0.0, 1.0, BroydenCfg::new());

    assert!(res.converged);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.root, 3.0);
    assert_eq!(res.slope(), Some(2.0));
}

#[test]
fn coincident_points_use_unit_slope() {
    let f   = |x: f64| x - 1.0;
    let res = broyden(f, 2.0, 2.0, BroydenCfg::new());

    assert!(res.converged);
    assert_eq!(res.root, 1.0);
    assert_eq!(res.slope(), Some(1.0));
    assert_eq!(res.history, vec![2.0, 2.0, 1.0]);
}

#[test]
fn zero_initial_slope_stalls() {
    let f   = |x: f64| (x - 1.0) * (x - 1.0);
    let res = broyden(f, 0.0, 2.0, BroydenCfg::new());

    assert!(!res.converged);
    assert_eq!(res.termination_reason, TerminationReason::Stagnation);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.root, 2.0);
    assert_eq!(res.history, vec![0.0, 2.0]);
}

#[test]
fn slope_collapsing_mid_run_stalls() {
    // f(1) == f(-1), so the updated slope after the first step is zero
    let f   = |x: f64| x * x + 1.0;
    let res = broyden(f, 0.0, 1.0, BroydenCfg::new());

    assert!(!res.converged);
    assert_eq!(res.termination_reason, TerminationReason::Stagnation);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.root, -1.0);
    assert_eq!(res.slope(), Some(0.0));
    assert_eq!(res.history, vec![0.0, 1.0, -1.0]);
}

#[test]
fn uses_max_iter_hits_limit() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let cfg = BroydenCfg::new().set_max_iter(3)?;

    let res = broyden(f, 0.5, 1.0, cfg);

    assert!(!res.converged);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 3);
    assert_eq!(res.history.len(), 5);
    assert_eq!(res.history.last().copied(), Some(res.root));
    Ok(())
}

#[test]
fn history_is_seeded_with_both_points() -> TestResult {
    let f   = |x: f64| x.exp() - 2.0;
    let cfg = BroydenCfg::new().set_tol(1e-12)?;
    let res = broyden(f, 0.0, 1.0, cfg);

    assert!(res.converged);
    assert_abs_diff_eq!(res.root, 2.0_f64.ln(), epsilon = 1e-10);
    assert_eq!(&res.history[..2], &[0.0, 1.0]);
    assert_eq!(res.history.len(), res.iterations + 2);
    assert_eq!(res.evaluations, res.iterations + 2);
    Ok(())
}

#[test]
fn nan_values_run_to_iteration_limit() -> TestResult {
    let f   = |x: f64| if x > 0.5 { f64::NAN } else { x - 1.0 };
    let cfg = BroydenCfg::new().set_max_iter(10)?;
    let res = broyden(f, 0.0, 2.0, cfg);

    assert!(!res.converged);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 10);
    assert_eq!(res.history.len(), 12);
    assert!(res.root.is_nan());
    Ok(())
}
