//! fidelity — goodness-of-fit scores for hydrological model evaluation.
//!
//! Two independent, stateless engines over a simulated/observed pair:
//!
//! - [`compute_fidelity`]: the composite Model Fidelity Metric (MFM) with its
//!   error, variability and distribution sub-scores.
//! - [`compute_baseline`]: NSE, KGE, modified KGE, RMSE, NRMSE, MAE, NMAE.
//!
//! Both are pure functions of borrowed slices. Degenerate data never panics:
//! it maps to NaN or to a documented fallback value.
pub mod batch;
pub mod config;
pub mod fidelity;
pub mod metrics;
pub mod records;
pub mod series;

pub use config::{ConfigError, FidelityConfig, NumericWarnings};
pub use fidelity::{compute_fidelity, FidelityScores, FidelityScoresTable};
pub use metrics::{
    baseline_metrics, compute_baseline, compute_baseline_with, BaselineStats, BaselineStatsTable,
};
pub use series::SeriesPair;
