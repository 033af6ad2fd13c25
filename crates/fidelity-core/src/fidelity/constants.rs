//! Fidelity engine numerical constants and defaults.
//!
//! Centralises the fixed values used by the sub-score routines.

// -- Default hyperparameters --

/// Exponent of the normalized error norm.
pub const DEFAULT_P: f64 = 1.0;

/// Bin count for the scaled/unscaled entropy difference.
pub const DEFAULT_BINS_SUSE: usize = 10;

/// Bin count for the histogram intersection.
pub const DEFAULT_BINS_PHI: usize = 10;

/// Phase damping constant.
pub const DEFAULT_C: f64 = 4.0;

/// Phase penalty enabled.
pub const DEFAULT_PHASE: bool = true;

// -- Degenerate-input thresholds --

/// Minimum number of finite paired samples for a defined score.
pub const MIN_VALID_SAMPLES: usize = 3;

// -- Dominant-frequency detection --

/// Series longer than this are treated as daily multi-year records.
pub const LONG_SERIES_THRESHOLD: usize = 365;

/// Lowest positive-frequency argmax allowed for long records, keeping
/// detection away from trend-like components.
pub const MIN_DOMINANT_OFFSET: usize = 33;

// -- Fallbacks --

/// Entropy difference when no variability can be distinguished.
pub const SUSE_DEGENERATE: f64 = 0.0;

/// Histogram intersection when both series collapse to one value.
pub const PHI_DEGENERATE: f64 = 1.0;
