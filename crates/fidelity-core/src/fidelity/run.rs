//! Composite fidelity computation: masking, sub-scores, combination.
use tracing::{debug, warn};

use super::constants::MIN_VALID_SAMPLES;
use super::entropy::variability_capture;
use super::intersection::histogram_intersection;
use super::phase::phase_penalty;
use super::scores::{combine, FidelityScores};
use crate::config::FidelityConfig;
use crate::series::{mask_finite, mean};

/// Normalized Lp error: `mean(|sim − obs|^p)^(1/p) / mean(obs)`.
pub fn nmaep(sim: &[f64], obs: &[f64], p: f64) -> f64 {
    let n = obs.len() as f64;
    let lp = (sim
        .iter()
        .zip(obs)
        .map(|(s, o)| (s - o).abs().powf(p))
        .sum::<f64>()
        / n)
        .powf(1.0 / p);
    lp / mean(obs)
}

/// Compute MFM and its sub-scores for one pair.
///
/// Non-finite pairs are masked out first. The record is all NaN when fewer
/// than three valid pairs remain, when the masked observed mean is zero, or
/// when `sim` and `obs` differ in length. Never panics on degenerate data.
pub fn compute_fidelity(sim: &[f64], obs: &[f64], config: &FidelityConfig) -> FidelityScores {
    if sim.len() != obs.len() {
        warn!(
            sim_len = sim.len(),
            obs_len = obs.len(),
            "sim and obs lengths differ, fidelity undefined"
        );
        return FidelityScores::undefined();
    }

    let (sim, obs) = mask_finite(sim, obs);
    if sim.len() < MIN_VALID_SAMPLES {
        debug!(valid = sim.len(), "too few finite pairs, fidelity undefined");
        return undefined(config, "too few finite pairs");
    }
    let mean_obs = mean(&obs);
    if mean_obs == 0.0 {
        debug!("observed mean is zero, fidelity undefined");
        return undefined(config, "observed mean is zero");
    }

    // 1. Error fidelity with optional phase penalty
    let raw = (-nmaep(&sim, &obs, config.p)).exp();
    let (ppf, omega) = if config.phase {
        let ppf = phase_penalty(&sim, &obs, config.c);
        (ppf, ppf * raw)
    } else {
        (f64::NAN, raw)
    };

    // 2. Variability capture
    let varphi = variability_capture(&sim, &obs, config.bins_suse);
    if varphi.is_nan() {
        return undefined(config, "variability capture undefined");
    }

    // 3. Distribution similarity
    let eta = histogram_intersection(&sim, &obs, config.bins_phi);
    if eta.is_nan() {
        return undefined(config, "distribution similarity undefined");
    }

    let scores = FidelityScores {
        mfm: combine(omega, varphi, eta),
        ppf,
        exp_neg_nmaep: raw,
        omega,
        varphi,
        eta,
    };
    if config.warnings.enabled() && !scores.mfm.is_finite() {
        warn!(mfm = scores.mfm, omega, varphi, eta, "non-finite fidelity score");
    }
    scores
}

fn undefined(config: &FidelityConfig, reason: &str) -> FidelityScores {
    if config.warnings.enabled() {
        warn!(reason, "fidelity undefined");
    }
    FidelityScores::undefined()
}
