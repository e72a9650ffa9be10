//! Secant method

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, CommonCfg};
use super::recorder::Recorder;
use super::report::{RootFindingReport, Stencil, ToleranceSatisfied};

const ALGORITHM: Algorithm = Algorithm::Secant;


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tol` and `max_iter`.
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl_common_cfg!(SecantCfg);


/// Calculates the secant x-intercept for the line
/// connecting `(x0, fx0)` and `(x1, fx1)`
///
/// # Returns
/// - `Some(x_secant)` if `fx1 != fx0`
/// - `None` if the secant line is horizontal
#[inline]
pub(crate) fn calculate_secant_x_intercept(
    (x0, fx0): (f64, f64),
    (x1, fx1): (f64, f64),
) -> Option<f64> {
    if fx1 == fx0 {
        return None;
    }

    Some(x1 - fx1 * (x1 - x0) / (fx1 - fx0))
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess
/// - `x1`   : Second initial guess
/// - `cfg`  : [`SecantCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`                : approximate root
/// - `converged`           : whether a tolerance was met
/// - `iterations`          : number of secant steps taken
/// - `history`             : `x0`, `x1`, then one entry per step
/// - `evaluations`         : total function evaluations
/// - `termination_reason`  : why it stopped
/// - `tolerance_satisfied` : which tolerance triggered
/// - `stencil`             : pair of iterates used to form the last step
/// - `algorithm_name`      : "secant"
///
/// # Behavior
/// - Update:
///     x_{k+1} = x_k - f(x_k) * (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))
/// - `f(x_k) == f(x_{k-1})` exactly stops with
///   [`TerminationReason::Stagnation`](super::report::TerminationReason::Stagnation),
///   returning `x_k` with `converged = false`.
/// - Tolerances:
///     - |x_{k+1} - x_k| < tol, [`ToleranceSatisfied::StepSizeReached`]
///     - |f(x_{k+1})| < tol,    [`ToleranceSatisfied::AbsFxReached`]
/// - `f(x_{k+1})` is evaluated once per step and reused for the next step.
///
/// # Warning
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg
) -> RootFindingReport
where F: FnMut(f64) -> f64 {

    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();
    let mut rec  = Recorder::new(ALGORITHM, max_iter);

    rec.push(x0);
    rec.push(x1);
    let mut x_parent2 = x0;
    let mut x_parent1 = x1;
    let mut f_parent2 = rec.eval(&mut func, x0);
    let mut f_parent1 = rec.eval(&mut func, x1);

    for iter in 1..=max_iter {
        let Some(x_next) = calculate_secant_x_intercept(
            (x_parent2, f_parent2), (x_parent1, f_parent1)
        ) else {
            return rec.stalled(x_parent1, iter - 1, Stencil::doubleton(x_parent1, x_parent2));
        };
        rec.push(x_next);
        let f_next = rec.eval(&mut func, x_next);
        rec.trace_iter(iter, x_next, f_next);

        // check step tolerance
        if (x_next - x_parent1).abs() < tol {
            return rec.converged(
                x_next, iter, ToleranceSatisfied::StepSizeReached,
                Stencil::doubleton(x_parent1, x_parent2)
            );
        }
        // check |f(x)| tolerance
        if f_next.abs() < tol {
            return rec.converged(
                x_next, iter, ToleranceSatisfied::AbsFxReached,
                Stencil::doubleton(x_parent1, x_parent2)
            );
        }

        x_parent2 = x_parent1;
        f_parent2 = f_parent1;
        x_parent1 = x_next;
        f_parent1 = f_next;
    }

    rec.exhausted(x_parent1, max_iter, Stencil::doubleton(x_parent1, x_parent2))
}
