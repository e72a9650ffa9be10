//! One-dimensional Broyden (quasi-Newton) method.
//!
//! Keeps a scalar derivative approximation `B` and refreshes it with the
//! rank-one Broyden update after every step, so no derivative or
//! finite-difference evaluations are needed.

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, CommonCfg};
use super::recorder::Recorder;
use super::report::{RootFindingReport, Stencil, ToleranceSatisfied};

const ALGORITHM: Algorithm = Algorithm::Broyden;

/// Slope used when both starting points coincide.
pub const FALLBACK_SLOPE: f64 = 1.0;


/// Broyden configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tol` and `max_iter`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BroydenCfg {
    common: CommonCfg,
}
impl BroydenCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl_common_cfg!(BroydenCfg);


/// Initial slope from the two starting points.
#[inline]
fn initial_slope((x0, fx0): (f64, f64), (x1, fx1): (f64, f64)) -> f64 {
    if x1 != x0 {
        (fx1 - fx0) / (x1 - x0)
    } else {
        FALLBACK_SLOPE
    }
}

/// Rank-one update `B + (y - B s) / s`; a zero step leaves `B` unchanged.
#[inline]
fn broyden_update(slope: f64, step: f64, dfx: f64) -> f64 {
    if step != 0.0 {
        slope + (dfx - slope * step) / step
    } else {
        slope
    }
}


/// Finds a root of `func` with Broyden's method specialised to one dimension.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `x0`   : first starting point
/// - `x1`   : second starting point; iteration starts here
/// - `cfg`  : [`BroydenCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with `history` = `x0`, `x1`, then one entry per step,
/// and [`Stencil::QuasiNewton`] holding the last iterate and the slope `B`
/// used for the final step.
///
/// # Behavior
/// - `B = (f(x1) - f(x0)) / (x1 - x0)`, or `1.0` when `x1 == x0`.
/// - Step `s = -f(x) / B`; `|f(x + s)| < tol` or `|s| < tol` stops.
/// - `B == 0` exactly stops with
///   [`TerminationReason::Stagnation`](super::report::TerminationReason::Stagnation).
/// - After each unconverged step `B` becomes the secant slope through the two
///   latest points.
pub fn broyden<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: BroydenCfg
) -> RootFindingReport
where F: FnMut(f64) -> f64 {

    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();
    let mut rec  = Recorder::new(ALGORITHM, max_iter);

    rec.push(x0);
    rec.push(x1);
    let fx0 = rec.eval(&mut func, x0);
    let fx1 = rec.eval(&mut func, x1);

    let mut slope = initial_slope((x0, fx0), (x1, fx1));
    let mut x     = x1;
    let mut fx    = fx1;

    for iter in 1..=max_iter {
        if slope == 0.0 {
            return rec.stalled(x, iter - 1, Stencil::QuasiNewton { x, slope });
        }

        let step    = -fx / slope;
        let x_next  = x + step;
        let fx_next = rec.eval(&mut func, x_next);
        rec.push(x_next);
        rec.trace_iter(iter, x_next, fx_next);

        if fx_next.abs() < tol {
            return rec.converged(
                x_next, iter, ToleranceSatisfied::AbsFxReached, Stencil::QuasiNewton { x, slope }
            );
        }
        if (x_next - x).abs() < tol {
            return rec.converged(
                x_next, iter, ToleranceSatisfied::StepSizeReached, Stencil::QuasiNewton { x, slope }
            );
        }

        slope = broyden_update(slope, step, fx_next - fx);
        x     = x_next;
        fx    = fx_next;
    }

    rec.exhausted(x, max_iter, Stencil::QuasiNewton { x, slope })
}
