//! Scalar root-finding.
//!
//! See [`root_finding`] for the available algorithms.

pub mod root_finding;
