//! Strategy dispatch.
//!
//! [`Strategy`] pairs an [`Algorithm`] with the initial data it needs, so a
//! caller that picks the method at runtime (e.g. from a menu number) can run
//! exactly one solver through [`solve`].
//!
//! ┌ [`Strategy::Bisection`] : bracket `a, b`
//! ├ [`Strategy::Newton`]    : guess `x0` (finite-difference derivative)
//! ├ [`Strategy::Secant`]    : guesses `x0, x1`
//! └ [`Strategy::Broyden`]   : guesses `x0, x1`

use super::algorithms::Algorithm;
use super::bisection::{bisection, BisectionCfg};
use super::broyden::{broyden, BroydenCfg};
use super::config::CommonCfg;
use super::errors::{AlgorithmError, RootFindingError};
use super::newton::{newton, NewtonCfg};
use super::report::RootFindingReport;
use super::secant::{secant, SecantCfg};


#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Strategy {
    Bisection { a: f64, b: f64 },
    Newton    { x0: f64 },
    Secant    { x0: f64, x1: f64 },
    Broyden   { x0: f64, x1: f64 },
}

impl Strategy {
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Strategy::Bisection { .. } => Algorithm::Bisection,
            Strategy::Newton { .. }    => Algorithm::Newton,
            Strategy::Secant { .. }    => Algorithm::Secant,
            Strategy::Broyden { .. }   => Algorithm::Broyden,
        }
    }

    /// Builds a strategy from an algorithm and its collected initial values
    /// (`a, b` / `x0` / `x0, x1`).
    ///
    /// # Errors
    /// - [`AlgorithmError::MissingParameters`] if `values.len()` does not match
    ///   [`Algorithm::initial_values`].
    pub fn from_values(algorithm: Algorithm, values: &[f64]) -> Result<Self, AlgorithmError> {
        let expected = algorithm.initial_values();
        if values.len() != expected {
            return Err(AlgorithmError::MissingParameters {
                algorithm,
                expected,
                got: values.len(),
            });
        }

        Ok(match (algorithm, values) {
            (Algorithm::Newton, &[x0])         => Strategy::Newton { x0 },
            (Algorithm::Bisection, &[a, b])    => Strategy::Bisection { a, b },
            (Algorithm::Secant, &[x0, x1])     => Strategy::Secant { x0, x1 },
            (Algorithm::Broyden, &[x0, x1])    => Strategy::Broyden { x0, x1 },
            _ => {
                return Err(AlgorithmError::MissingParameters {
                    algorithm,
                    expected,
                    got: values.len(),
                })
            }
        })
    }

    /// Same as [`Strategy::from_values`], keyed by menu number (1..=4).
    pub fn from_selection(selection: u8, values: &[f64]) -> Result<Self, AlgorithmError> {
        Self::from_values(Algorithm::try_from(selection)?, values)
    }
}


/// Runs the solver named by `strategy` on `func` with the shared settings in
/// `common`.
///
/// # Errors
/// - [`RootFindingError::Bisection`] for an invalid bracket. Every other
///   outcome, including stalls and iteration limits, is reported in the
///   returned [`RootFindingReport`].
pub fn solve<F>(
    func: F,
    strategy: Strategy,
    common: CommonCfg,
) -> Result<RootFindingReport, RootFindingError>
where F: FnMut(f64) -> f64 {
    log::debug!("solving with {} (tol={:e}, max_iter={})",
        strategy.algorithm(), common.tol(), common.max_iter());

    let report = match strategy {
        Strategy::Bisection { a, b } => bisection(func, a, b, BisectionCfg::from(common))?,
        Strategy::Newton { x0 }      => newton(func, None::<fn(f64) -> f64>, x0, NewtonCfg::from(common)),
        Strategy::Secant { x0, x1 }  => secant(func, x0, x1, SecantCfg::from(common)),
        Strategy::Broyden { x0, x1 } => broyden(func, x0, x1, BroydenCfg::from(common)),
    };

    Ok(report)
}
