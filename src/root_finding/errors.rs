//! Root-finding error types.
//!
//! ┌ [`ConfigError`]      : invalid configuration values
//! │  ├ tolerance not finite or <= 0
//! │  └ max_iter == 0
//! │
//! ├ [`AlgorithmError`]   : algorithm selection misuse
//! │  ├ unknown menu number or name
//! │  └ wrong number of initial values
//! │
//! └ [`RootFindingError`] : umbrella error for [`solve`](super::strategy::solve)
//!
//! Method-specific input errors (e.g. [`BisectionError`]) live next to
//! their algorithm. Numerical stalls and iteration limits are *not* errors;
//! they are reported through the
//! [`RootFindingReport`](super::report::RootFindingReport).

use thiserror::Error;

use super::algorithms::Algorithm;
pub use super::bisection::BisectionError;


/// Configuration errors raised by the validating setters on every
/// algorithm config.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}


/// Algorithm selection errors.
///
/// - Raised when a menu number or name does not map to an algorithm, or
///   when the wrong number of initial values is supplied for it.
#[derive(Debug, Error, PartialEq)]
pub enum AlgorithmError {
    #[error("unknown algorithm selection: expected 1..=4, got {got}")]
    UnknownSelection { got: u8 },

    #[error("unknown algorithm name: {got:?}")]
    UnknownName { got: String },

    #[error("{algorithm} expects {expected} initial value(s), got {got}")]
    MissingParameters { algorithm: Algorithm, expected: usize, got: usize },
}


/// Errors surfaced by strategy dispatch.
///
/// [`solve`](super::strategy::solve) itself only produces
/// [`RootFindingError::Bisection`]. `Config` and `Algorithm` are conversions
/// for callers that build the [`CommonCfg`](super::config::CommonCfg) or the
/// [`Strategy`](super::strategy::Strategy) in the same function and use `?`
/// throughout.
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error(transparent)]
    Bisection(#[from] BisectionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
}
