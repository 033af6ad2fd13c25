//! Baseline goodness-of-fit statistics.
//!
//! Closed-form NSE, KGE, modified KGE, RMSE, NRMSE, MAE and NMAE. Unlike the
//! fidelity engine, nothing here masks non-finite values: clean the inputs
//! first, or expect NaN in every moment-based field.

use fidelity_macros::Scores;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::NumericWarnings;
use crate::series::{mean, pearson, variance_about};

/// Baseline statistics for one simulated/observed pair.
///
/// `alpha` is the sim/obs standard-deviation ratio, `beta` the sim/obs mean
/// ratio and `rprod` the Pearson correlation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Scores)]
pub struct BaselineStats {
    #[score(label = "NSE")]
    pub nse: f64,
    #[score(label = "KGE")]
    pub kge: f64,
    #[score(label = "mKGE")]
    pub mkge: f64,
    #[score(label = "RMSE")]
    pub rmse: f64,
    #[score(label = "NRMSE")]
    pub nrmse: f64,
    #[score(label = "MAE")]
    pub mae: f64,
    #[score(label = "NMAE")]
    pub nmae: f64,
    pub alpha: f64,
    pub beta: f64,
    pub rprod: f64,
    #[score(label = "meanObs")]
    pub mean_obs: f64,
}

/// Root Mean Square Error. Range: [0, inf), 0 = perfect.
pub fn rmse(simulated: &[f64], observed: &[f64]) -> f64 {
    let n = observed.len() as f64;
    let mse: f64 = observed
        .iter()
        .zip(simulated)
        .map(|(o, s)| (o - s).powi(2))
        .sum::<f64>()
        / n;
    mse.sqrt()
}

/// Mean Absolute Error. Range: [0, inf), 0 = perfect.
pub fn mae(simulated: &[f64], observed: &[f64]) -> f64 {
    let n = observed.len() as f64;
    observed
        .iter()
        .zip(simulated)
        .map(|(o, s)| (o - s).abs())
        .sum::<f64>()
        / n
}

/// Kling-Gupta Efficiency from its components. Range: (-inf, 1], 1 = perfect.
pub fn kge(r: f64, alpha: f64, beta: f64) -> f64 {
    1.0 - ((beta - 1.0).powi(2) + (alpha - 1.0).powi(2) + (r - 1.0).powi(2)).sqrt()
}

/// Modified KGE, using the coefficient-of-variation ratio `alpha / beta`.
pub fn modified_kge(r: f64, alpha: f64, beta: f64) -> f64 {
    1.0 - ((beta - 1.0).powi(2) + (alpha / beta - 1.0).powi(2) + (r - 1.0).powi(2)).sqrt()
}

/// Nash-Sutcliffe Efficiency in its correlation / variability / bias
/// decomposition: `2·alpha·r − yBeta² − alpha²`.
pub fn decomposed_nse(r: f64, alpha: f64, y_beta: f64) -> f64 {
    2.0 * alpha * r - y_beta.powi(2) - alpha.powi(2)
}

/// Compute every baseline statistic, ignoring non-finite results silently.
pub fn compute_baseline(sim: &[f64], obs: &[f64]) -> BaselineStats {
    compute_baseline_with(sim, obs, NumericWarnings::Ignore)
}

/// Same contract as [`compute_baseline`]; kept as the name some callers use.
pub fn baseline_metrics(sim: &[f64], obs: &[f64]) -> BaselineStats {
    compute_baseline(sim, obs)
}

/// Compute every baseline statistic under an explicit numeric policy.
///
/// Zero observed mean gives non-finite `beta`, NRMSE and NMAE; zero observed
/// variance gives NaN `alpha`, correlation and everything built on them.
/// A length mismatch returns an all-NaN record.
pub fn compute_baseline_with(sim: &[f64], obs: &[f64], warnings: NumericWarnings) -> BaselineStats {
    if sim.len() != obs.len() {
        warn!(
            sim_len = sim.len(),
            obs_len = obs.len(),
            "sim and obs lengths differ, baseline statistics undefined"
        );
        return BaselineStats::nan();
    }

    let mean_sim = mean(sim);
    let mean_obs = mean(obs);
    let var_sim = variance_about(sim, mean_sim);
    let var_obs = variance_about(obs, mean_obs);
    let std_sim = var_sim.sqrt();
    let std_obs = var_obs.sqrt();

    let rprod = pearson(sim, obs);
    let beta = mean_sim / mean_obs;
    let y_beta = (mean_obs - mean_sim) / std_obs;
    let alpha = std_sim / std_obs;

    let rmse = rmse(sim, obs);
    let mae = mae(sim, obs);

    let stats = BaselineStats {
        nse: decomposed_nse(rprod, alpha, y_beta),
        kge: kge(rprod, alpha, beta),
        mkge: modified_kge(rprod, alpha, beta),
        rmse,
        nrmse: rmse / mean_obs,
        mae,
        nmae: mae / mean_obs,
        alpha,
        beta,
        rprod,
        mean_obs,
    };

    if warnings.enabled() {
        let non_finite: Vec<&str> = BaselineStats::labels()
            .iter()
            .zip(stats.values())
            .filter(|(_, v)| !v.is_finite())
            .map(|(label, _)| *label)
            .collect();
        if !non_finite.is_empty() {
            warn!(fields = ?non_finite, "non-finite baseline statistics");
        }
    }
    stats
}
