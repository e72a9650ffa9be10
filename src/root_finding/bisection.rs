//! Bisection method

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::ConfigError;
use super::recorder::Recorder;
use super::report::{RootFindingReport, Stencil, ToleranceSatisfied};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bisection;

#[derive(Debug, Error, PartialEq)]
pub enum BisectionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0 (f(a)={fa}, f(b)={fb})")]
    NoSignChange  { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}

/// Bisection configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tol` and `max_iter`.
///
/// # Defaults
/// ┌ `tol`      - 1e-8, applied to |f(mid)| and to the bracket half-width
/// └ `max_iter` - 100
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl_common_cfg!(BisectionCfg);

/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    (a + b) * 0.5
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that the function `func` is continuous on the interval `[a, b]`
/// and that `func(a) * func(b) <= 0`, guaranteeing a root exists within the interval.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the search interval. Must be finite.
/// ├ `b`    - Other end of the search interval. Must be finite; `b < a` is accepted.
/// └ `cfg`  - [`BisectionCfg`] (`tol`, `max_iter`)
///
/// # Returns
///
/// On success, returns a [`RootFindingReport`] with
/// ├ `root`                : last midpoint
/// ├ `converged`           : whether a tolerance was met within `max_iter`
/// ├ `iterations`          : number of midpoints evaluated
/// ├ `history`             : every midpoint, `len == iterations`
/// ├ `tolerance_satisfied` : [`ToleranceSatisfied::AbsFxReached`],
/// │                         [`ToleranceSatisfied::WidthTolReached`] or
/// │                         [`ToleranceSatisfied::ToleranceNotReached`]
/// └ `stencil`             : final `[left, right]`
///
/// # Errors
///
/// ┌ [`BisectionError::InvalidBounds`] - `a` or `b` is NaN/inf.
/// └ [`BisectionError::NoSignChange`]  - `func(a) * func(b) > 0`. Raised before any iteration.
///
/// # Behavior
/// ├ Each iteration evaluates the midpoint and stops once
/// │ `|f(mid)| < tol` or `(right - left) / 2 < tol`.
/// ├ The root is kept in `[left, mid]` when `f(left) * f(mid) <= 0`,
/// │ otherwise in `[mid, right]`.
/// └ Exhausting `max_iter` is not an error: the last midpoint is returned
///   with `converged = false`.
pub fn bisection<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: BisectionCfg
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();
    let mut rec  = Recorder::new(ALGORITHM, max_iter);

    let fa = rec.eval(&mut func, a);
    let fb = rec.eval(&mut func, b);
    if fa * fb > 0.0 {
        return Err(BisectionError::NoSignChange { a, b, fa, fb });
    }

    // reversed brackets are accepted
    let (mut left, mut right, mut f_left) = if a <= b { (a, b, fa) } else { (b, a, fb) };
    let mut mid = calculate_bisection(left, right);

    for iter in 1..=max_iter {
        mid = calculate_bisection(left, right);
        let f_mid = rec.eval(&mut func, mid);
        rec.push(mid);
        rec.trace_iter(iter, mid, f_mid);

        if f_mid.abs() < tol {
            return Ok(rec.converged(
                mid, iter, ToleranceSatisfied::AbsFxReached, Stencil::bracket(left, right)
            ));
        }
        if (right - left) * 0.5 < tol {
            return Ok(rec.converged(
                mid, iter, ToleranceSatisfied::WidthTolReached, Stencil::bracket(left, right)
            ));
        }

        // shrink interval
        if f_left * f_mid <= 0.0 {
            right = mid;
        } else {
            left   = mid;
            f_left = f_mid;
        }
    }

    Ok(rec.exhausted(mid, max_iter, Stencil::bracket(left, right)))
}
