//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the default tolerance and iteration limit,
//! embedded in every algorithm config.
//!
//! [`CommonCfg`] — universal fields
//! ├ `tol`      : convergence tolerance, applied to |f(x)| and to the
//! │              step size / half-width, whichever the method checks
//! └ `max_iter` : iteration cap
//!
//! Each algorithm config gets the same validating setters through
//! `impl_common_cfg!`.

use super::errors::ConfigError;


pub const DEFAULT_TOL      : f64   = 1e-8;
pub const DEFAULT_MAX_ITER : usize = 100;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    tol: f64,
    max_iter: usize,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            tol      : DEFAULT_TOL,
            max_iter : DEFAULT_MAX_ITER,
        }
    }

    // getters
    pub fn tol(&self)      -> f64   { self.tol }
    pub fn max_iter(&self) -> usize { self.max_iter }

    pub fn set_tol(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidTolerance { got: v });
        }
        self.tol = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                self.common = self.common.set_tol(v)?;
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                self.common = self.common.set_max_iter(v)?;
                Ok(self)
            }

            #[inline] #[must_use] pub fn tol(&self)      -> f64   { self.common.tol() }
            #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.common.max_iter() }
            #[inline] #[must_use] pub fn common(&self)   -> $crate::root_finding::config::CommonCfg {
                self.common
            }
        }

        impl From<$crate::root_finding::config::CommonCfg> for $cfg {
            fn from(common: $crate::root_finding::config::CommonCfg) -> Self {
                Self { common }
            }
        }

        impl Default for $cfg {
            fn default() -> Self {
                Self { common: $crate::root_finding::config::CommonCfg::new() }
            }
        }
    };
}
pub(crate) use impl_common_cfg;
