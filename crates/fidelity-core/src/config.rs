//! Hyperparameters for the fidelity engine and the per-call numeric policy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fidelity::constants::{
    DEFAULT_BINS_PHI, DEFAULT_BINS_SUSE, DEFAULT_C, DEFAULT_P, DEFAULT_PHASE,
};

/// How a call reports non-finite results.
///
/// Floating-point arithmetic never traps, so this only decides whether a
/// call that ends in NaN/inf leaves a trace. It is carried per call, never
/// stored globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericWarnings {
    /// Non-finite outcomes are returned silently.
    #[default]
    Ignore,
    /// Non-finite outcomes emit a `tracing` warning.
    Log,
}

impl NumericWarnings {
    pub(crate) fn enabled(self) -> bool {
        matches!(self, NumericWarnings::Log)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("p must be finite and positive, got {0}")]
    InvalidExponent(f64),
    #[error("{name} must be at least 1, got {value}")]
    InvalidBins { name: &'static str, value: usize },
    #[error("phase damping constant c must be finite and non-zero, got {0}")]
    InvalidDamping(f64),
}

/// Fidelity engine hyperparameters.
///
/// - `p`: exponent of the normalized error norm (1 = mean absolute error)
/// - `bins_suse`: bin count for the entropy-difference sub-score
/// - `bins_phi`: bin count for the histogram-intersection sub-score
/// - `c`: phase damping constant in `cos(phase_diff / c)`
/// - `phase`: whether the phase penalty is applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FidelityConfig {
    pub p: f64,
    pub bins_suse: usize,
    pub bins_phi: usize,
    pub c: f64,
    pub phase: bool,
    pub warnings: NumericWarnings,
}

impl Default for FidelityConfig {
    fn default() -> Self {
        Self {
            p: DEFAULT_P,
            bins_suse: DEFAULT_BINS_SUSE,
            bins_phi: DEFAULT_BINS_PHI,
            c: DEFAULT_C,
            phase: DEFAULT_PHASE,
            warnings: NumericWarnings::Ignore,
        }
    }
}

impl FidelityConfig {
    /// Create a validated config. Numeric warnings start out ignored.
    pub fn new(
        p: f64,
        bins_suse: usize,
        bins_phi: usize,
        c: f64,
        phase: bool,
    ) -> Result<Self, ConfigError> {
        Self {
            p,
            bins_suse,
            bins_phi,
            c,
            phase,
            warnings: NumericWarnings::Ignore,
        }
        .validate()
    }

    /// Check every hyperparameter, returning the config unchanged when valid.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(self.p.is_finite() && self.p > 0.0) {
            return Err(ConfigError::InvalidExponent(self.p));
        }
        if self.bins_suse == 0 {
            return Err(ConfigError::InvalidBins {
                name: "bins_suse",
                value: self.bins_suse,
            });
        }
        if self.bins_phi == 0 {
            return Err(ConfigError::InvalidBins {
                name: "bins_phi",
                value: self.bins_phi,
            });
        }
        if !self.c.is_finite() || self.c == 0.0 {
            return Err(ConfigError::InvalidDamping(self.c));
        }
        Ok(self)
    }

    pub fn with_p(self, p: f64) -> Result<Self, ConfigError> {
        Self { p, ..self }.validate()
    }

    pub fn with_bins(self, bins_suse: usize, bins_phi: usize) -> Result<Self, ConfigError> {
        Self {
            bins_suse,
            bins_phi,
            ..self
        }
        .validate()
    }

    pub fn with_damping(self, c: f64) -> Result<Self, ConfigError> {
        Self { c, ..self }.validate()
    }

    pub fn with_phase(self, phase: bool) -> Self {
        Self { phase, ..self }
    }

    pub fn with_warnings(self, warnings: NumericWarnings) -> Self {
        Self { warnings, ..self }
    }
}
