//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
    /// A divisor vanished exactly (zero derivative, flat secant,
    /// zero Broyden slope) and no further step could be taken.
    Stagnation,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - All methods
///     - |f(x)| < tol
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - Bisection
///     - (right - left) / 2 < tol
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - Newton, secant, Broyden
///     - |x_n - x_{n - 1}| < tol
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - All methods
///     - Alongside [`TerminationReason::IterationLimit`] or
///       [`TerminationReason::Stagnation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    StepSizeReached,
    ToleranceNotReached,
}


/// Method-specific data returned by a solver.
/// Contains the last set of points used in the update formula.
/// - [`Stencil::Bracket`]     : bisection
///     - `bounds` = final `[left, right]` interval
/// - [`Stencil::Open`]        : Newton, secant
///     - `x` = iterate(s) the last step was formed from
/// - [`Stencil::QuasiNewton`] : Broyden
///     - `x`     = iterate the last step was formed from
///     - `slope` = derivative approximation `B` used for that step
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil {
    Bracket     { bounds: [f64; 2] },
    Open        { x: [f64; 3], len: usize },
    QuasiNewton { x: f64, slope: f64 },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds }    => &bounds[..],
            Stencil::Open { x, len }       => &x[..*len],
            Stencil::QuasiNewton { x, .. } => std::slice::from_ref(x),
        }
    }
    pub fn slope(&self) -> Option<f64> {
        match self {
            Stencil::QuasiNewton { slope, .. } => Some(*slope),
            _ => None,
        }
    }
    pub fn bracket(left: f64, right: f64) -> Self {
        Stencil::Bracket { bounds: [left, right] }
    }
    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0, 0.0], len: 1 }
    }
    pub fn doubleton(x1: f64, x2: f64) -> Self {
        Stencil::Open { x: [x1, x2, 0.0], len: 2 }
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`                : best root estimate
/// - `converged`           : `true` iff a tolerance was met
/// - `iterations`          : total iterations
/// - `history`             : every iterate produced, in evaluation order
/// - `evaluations`         : total function (and derivative) evaluations
/// - `termination_reason`  : why the solver stopped  ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `stencil`             : last set of points used in update formula
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
///
/// # History
/// ├ bisection : one midpoint per iteration, `len == iterations`
/// ├ newton    : one iterate per iteration, plus the accepted step when the
/// │             step-size test fires (`len == iterations + 1` there)
/// └ secant, broyden : both seeds then one iterate per iteration,
///               `len == iterations + 2`
#[derive(Debug, Clone, PartialEq)]
pub struct RootFindingReport {
    pub root                : f64,
    pub converged           : bool,
    pub iterations          : usize,
    pub history             : Vec<f64>,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub stencil             : Stencil,
    pub algorithm_name      : &'static str,
}

impl RootFindingReport {
    /// Iterates produced during the call, oldest first.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Derivative approximation carried by quasi-Newton methods.
    pub fn slope(&self) -> Option<f64> {
        self.stencil.slope()
    }
}
