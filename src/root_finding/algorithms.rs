//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the menu numbering used by interactive front ends.
//!
//! ┌ 1 : [`Algorithm::Bisection`]
//! ├ 2 : [`Algorithm::Newton`]
//! ├ 3 : [`Algorithm::Secant`]
//! └ 4 : [`Algorithm::Broyden`]

use std::str::FromStr;

use super::errors::AlgorithmError;


/// Root-finding algorithm variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bisection,
    Newton,
    Secant,
    Broyden,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bisection,
        Algorithm::Newton,
        Algorithm::Secant,
        Algorithm::Broyden,
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection => "bisection",
            Algorithm::Newton    => "newton",
            Algorithm::Secant    => "secant",
            Algorithm::Broyden   => "broyden",
        }
    }

    /// Menu number for the algorithm (1-based).
    pub const fn selection(self) -> u8 {
        match self {
            Algorithm::Bisection => 1,
            Algorithm::Newton    => 2,
            Algorithm::Secant    => 3,
            Algorithm::Broyden   => 4,
        }
    }

    /// Number of initial values the algorithm consumes.
    /// - bracket `[a, b]`    : 2
    /// - single guess `x0`   : 1
    /// - guess pair `x0, x1` : 2
    pub const fn initial_values(self) -> usize {
        match self {
            Algorithm::Newton => 1,
            Algorithm::Bisection | Algorithm::Secant | Algorithm::Broyden => 2,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

impl TryFrom<u8> for Algorithm {
    type Error = AlgorithmError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.selection() == value)
            .ok_or(AlgorithmError::UnknownSelection { got: value })
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.algorithm_name() == name)
            .ok_or_else(|| AlgorithmError::UnknownName { got: s.to_string() })
    }
}
