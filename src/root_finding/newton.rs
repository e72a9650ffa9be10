//! Newton-Raphson method

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, CommonCfg};
use super::recorder::Recorder;
use super::report::{RootFindingReport, Stencil, ToleranceSatisfied};

const ALGORITHM: Algorithm = Algorithm::Newton;

/// Relative step for the central finite-difference derivative.
pub const FD_STEP_SCALE: f64 = 1e-6;


/// Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tol` and `max_iter`.
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl_common_cfg!(NewtonCfg);


/// Finite-difference step at `x`, scaled with `|x|` so the relative
/// perturbation stays bounded for large iterates.
#[inline]
fn fd_step(x: f64) -> f64 {
    FD_STEP_SCALE * x.abs().max(1.0)
}

/// Helpers
/// - `eval_dfx_analytic` : evaluates user-supplied derivative `df(x)`
/// - `eval_dfx_fd`       : central finite-difference
#[inline]
fn eval_dfx_analytic<G>(df: &mut G, x: f64, rec: &mut Recorder) -> f64
where G: FnMut(f64) -> f64 {
    rec.eval(df, x)
}
#[inline]
fn eval_dfx_fd<F>(f: &mut F, x: f64, rec: &mut Recorder) -> f64
where F: FnMut(f64) -> f64 {
    let h   = fd_step(x);
    let fxp = rec.eval(f, x + h);
    let fxm = rec.eval(f, x - h);
    (fxp - fxm) / (2.0 * h)
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
/// Supports analytic derivatives or a central finite-difference fallback.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : optional analytic derivative; if `None`, use finite-difference
/// - `x0`    : initial guess
/// - `cfg`   : [`NewtonCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`                : approximate root
/// - `converged`           : whether a tolerance was met
/// - `iterations`          : number of iterations performed
/// - `history`             : the iterate of every iteration, plus the accepted
///                           step when the step-size test fires
/// - `evaluations`         : total evaluations (f and f')
/// - `termination_reason`  : why it stopped
/// - `tolerance_satisfied` : which tolerance triggered
/// - `stencil`             : iterate the last step was formed from
/// - `algorithm_name`      : "newton"
///
/// # Behavior
/// - Each iteration evaluates `f(x)` and records `x`; `|f(x)| < tol` stops.
/// - Derivative:
///     - analytic path uses `df(x)`
///     - FD path uses `(f(x+h) - f(x-h)) / 2h` with `h = 1e-6 * max(1, |x|)`
/// - A derivative of exactly zero, or a non-finite one (e.g. `x + h` overflowing
///   near `f64::MAX`), stops with
///   [`TerminationReason::Stagnation`](super::report::TerminationReason::Stagnation)
///   and `converged = false`.
/// - `|x_new - x| < tol` accepts `x_new` even if `|f|` has not dropped below
///   `tol` (near-flat functions).
///
/// # Notes
/// - Convergence is *local only* and depends on a good initial guess `x0` and
///   smoothness of `f`. Poor guesses or ill-behaved functions can diverge or cycle.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: Option<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> RootFindingReport
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();
    let mut rec  = Recorder::new(ALGORITHM, max_iter);

    let mut x = x0;
    for iter in 1..=max_iter {
        let fx = rec.eval(&mut func, x);
        rec.push(x);
        rec.trace_iter(iter, x, fx);

        if fx.abs() < tol {
            return rec.converged(x, iter, ToleranceSatisfied::AbsFxReached, Stencil::singleton(x));
        }

        let dfx = match dfunc.as_mut() {
            Some(df) => eval_dfx_analytic(df, x, &mut rec),
            None     => eval_dfx_fd(&mut func, x, &mut rec),
        };
        if dfx == 0.0 || !dfx.is_finite() {
            return rec.stalled(x, iter, Stencil::singleton(x));
        }

        let x_next = x - fx / dfx;
        if (x_next - x).abs() < tol {
            rec.push(x_next);
            return rec.converged(x_next, iter, ToleranceSatisfied::StepSizeReached, Stencil::singleton(x));
        }

        x = x_next;
    }

    rec.exhausted(x, max_iter, Stencil::singleton(x))
}
