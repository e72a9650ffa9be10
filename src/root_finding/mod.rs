// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod config;
pub mod strategy;
pub(crate) mod recorder;

// algorithms
pub mod bisection;
pub mod newton;
pub mod secant;
pub mod broyden;

pub use algorithms::Algorithm;
pub use bisection::{bisection, BisectionCfg, BisectionError};
pub use broyden::{broyden, BroydenCfg};
pub use config::CommonCfg;
pub use errors::{AlgorithmError, ConfigError, RootFindingError};
pub use newton::{newton, NewtonCfg};
pub use report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
pub use secant::{secant, SecantCfg};
pub use strategy::{solve, Strategy};
