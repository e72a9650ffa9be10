//! Per-call bookkeeping shared by every solver.
//!
//! [`Recorder`] counts evaluations, appends iterates to the history and
//! assembles the final [`RootFindingReport`]. One recorder lives for exactly
//! one solver call.

use log::{debug, trace, warn};

use super::algorithms::Algorithm;
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};


#[derive(Debug)]
pub(crate) struct Recorder {
    algorithm: Algorithm,
    history: Vec<f64>,
    evaluations: usize,
}

impl Recorder {
    pub(crate) fn new(algorithm: Algorithm, max_iter: usize) -> Self {
        Self {
            algorithm,
            history: Vec::with_capacity(max_iter.saturating_add(2).min(1024)),
            evaluations: 0,
        }
    }

    /// Evaluates `f(x)` and counts it.
    #[inline]
    pub(crate) fn eval<F>(&mut self, f: &mut F, x: f64) -> f64
    where F: FnMut(f64) -> f64 {
        self.evaluations += 1;
        f(x)
    }

    /// Appends an iterate to the history.
    #[inline]
    pub(crate) fn push(&mut self, x: f64) {
        self.history.push(x);
    }

    /// Logs one iteration at trace level.
    #[inline]
    pub(crate) fn trace_iter(&self, iter: usize, x: f64, fx: f64) {
        trace!("{}: iter={iter} x={x:e} f(x)={fx:e}", self.algorithm);
    }

    pub(crate) fn converged(
        self,
        root: f64,
        iterations: usize,
        tolerance: ToleranceSatisfied,
        stencil: Stencil,
    ) -> RootFindingReport {
        self.finish(root, iterations, TerminationReason::ToleranceReached, tolerance, stencil)
    }

    pub(crate) fn stalled(self, root: f64, iterations: usize, stencil: Stencil) -> RootFindingReport {
        warn!(
            "{}: zero or non-finite divisor after {iterations} iteration(s) at x={root:e}",
            self.algorithm
        );
        self.finish(
            root,
            iterations,
            TerminationReason::Stagnation,
            ToleranceSatisfied::ToleranceNotReached,
            stencil,
        )
    }

    pub(crate) fn exhausted(self, root: f64, iterations: usize, stencil: Stencil) -> RootFindingReport {
        self.finish(
            root,
            iterations,
            TerminationReason::IterationLimit,
            ToleranceSatisfied::ToleranceNotReached,
            stencil,
        )
    }

    fn finish(
        self,
        root: f64,
        iterations: usize,
        termination_reason: TerminationReason,
        tolerance_satisfied: ToleranceSatisfied,
        stencil: Stencil,
    ) -> RootFindingReport {
        let converged = termination_reason == TerminationReason::ToleranceReached;
        debug!(
            "{}: {termination_reason:?} ({tolerance_satisfied:?}) root={root:e} \
             iterations={iterations} evaluations={}",
            self.algorithm, self.evaluations
        );

        RootFindingReport {
            root,
            converged,
            iterations,
            history             : self.history,
            evaluations         : self.evaluations,
            termination_reason,
            tolerance_satisfied,
            stencil,
            algorithm_name      : self.algorithm.algorithm_name(),
        }
    }
}
