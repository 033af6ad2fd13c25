//! End-to-end properties of both engines on synthetic series pairs.
use std::f64::consts::PI;

use approx::assert_relative_eq;
use fidelity_core::batch::{evaluate_pairs, sweep_mfm};
use fidelity_core::records::{read_flow_table, read_sweep_table, write_sweep_table};
use fidelity_core::{compute_baseline, compute_fidelity, FidelityConfig, SeriesPair};

/// Deterministic LCG noise in [0, 1).
fn lcg(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as f64 / (1u64 << 31) as f64
        })
        .collect()
}

/// Offset sine with `cycles` full periods over `n` samples.
fn seasonal(n: usize, cycles: f64, shift: f64) -> Vec<f64> {
    (0..n)
        .map(|i| 2.0 + (2.0 * PI * cycles * i as f64 / n as f64 - shift).sin())
        .collect()
}

#[test]
fn identity_gives_perfect_scores() {
    let obs = [1.0, 2.0, 3.0, 4.0, 5.0];
    let f = compute_fidelity(&obs, &obs, &FidelityConfig::default());
    assert_eq!(f.mfm, 1.0);
    assert_eq!(f.omega, 1.0);
    assert_eq!(f.varphi, 1.0);
    assert_eq!(f.eta, 1.0);

    let b = compute_baseline(&obs, &obs);
    assert_relative_eq!(b.nse, 1.0, epsilon = 1e-12);
    assert_relative_eq!(b.kge, 1.0, epsilon = 1e-12);
    assert_relative_eq!(b.mkge, 1.0, epsilon = 1e-12);
    assert_eq!(b.rmse, 0.0);
    assert_eq!(b.nrmse, 0.0);
}

#[test]
fn identity_on_long_noisy_record() {
    let obs: Vec<f64> = lcg(1000, 7).iter().map(|v| 1.0 + 10.0 * v).collect();
    let f = compute_fidelity(&obs, &obs, &FidelityConfig::default());
    assert_eq!(f.mfm, 1.0);
    assert_eq!(f.ppf, 1.0);
}

#[test]
fn constant_equal_series_use_fallbacks() {
    let v = [4.2; 8];
    let f = compute_fidelity(&v, &v, &FidelityConfig::default());
    assert_eq!(f.varphi, 1.0);
    assert_eq!(f.eta, 1.0);
    assert_eq!(f.mfm, 1.0);
}

#[test]
fn constant_series_at_different_levels() {
    let obs = [1.0; 5];
    let sim = [2.0; 5];
    let f = compute_fidelity(&sim, &obs, &FidelityConfig::default());
    // NMAE = 1
    assert_relative_eq!(f.exp_neg_nmaep, (-1.0_f64).exp(), epsilon = 1e-12);
    assert!(f.omega > 0.0 && f.omega <= f.exp_neg_nmaep);
    // Both constant: no entropy to compare, and no histogram overlap.
    assert_eq!(f.varphi, 1.0);
    assert_eq!(f.eta, 0.0);
    assert!(f.mfm < 1.0);

    let b = compute_baseline(&sim, &obs);
    assert_eq!(b.rmse, 1.0);
    assert_eq!(b.nrmse, 1.0);
    assert!(b.rprod.is_nan());
    assert!(b.nse.is_nan());
    assert!(b.kge.is_nan());
    assert!(b.mkge.is_nan());
}

#[test]
fn short_series_is_undefined() {
    let f = compute_fidelity(&[1.0, 2.0], &[1.0, 2.0], &FidelityConfig::default());
    assert!(f.mfm.is_nan());
    let f = compute_fidelity(&[], &[], &FidelityConfig::default());
    assert!(f.mfm.is_nan());
}

#[test]
fn zero_observed_is_undefined_and_non_finite() {
    let obs = [0.0; 6];
    let sim = [1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
    let f = compute_fidelity(&sim, &obs, &FidelityConfig::default());
    assert!(f.mfm.is_nan());
    let b = compute_baseline(&sim, &obs);
    assert!(!b.nrmse.is_finite());
    assert!(!b.nmae.is_finite());
}

#[test]
fn quarter_period_shift_lowers_omega() {
    let obs = seasonal(200, 4.0, 0.0);
    let in_phase = seasonal(200, 4.0, 0.0);
    let shifted = seasonal(200, 4.0, PI / 2.0);
    let cfg = FidelityConfig::default();

    let a = compute_fidelity(&in_phase, &obs, &cfg);
    let b = compute_fidelity(&shifted, &obs, &cfg);
    assert!(b.omega < a.omega);
    assert_relative_eq!(b.ppf, (PI / 8.0).cos(), epsilon = 1e-9);
}

#[test]
fn phase_penalty_separates_equal_error_magnitudes() {
    let obs = seasonal(200, 4.0, 0.0);
    let shifted = seasonal(200, 4.0, PI / 2.0);
    let mae = shifted
        .iter()
        .zip(&obs)
        .map(|(s, o)| (s - o).abs())
        .sum::<f64>()
        / obs.len() as f64;
    // Same mean absolute error, but perfectly timed.
    let lifted: Vec<f64> = obs.iter().map(|o| o + mae).collect();
    let cfg = FidelityConfig::default();

    let timed = compute_fidelity(&lifted, &obs, &cfg);
    let late = compute_fidelity(&shifted, &obs, &cfg);
    assert_relative_eq!(timed.exp_neg_nmaep, late.exp_neg_nmaep, epsilon = 1e-9);
    assert!(late.omega < timed.omega);

    let unpenalized = compute_fidelity(&shifted, &obs, &cfg.with_phase(false));
    assert_relative_eq!(unpenalized.omega, late.exp_neg_nmaep, epsilon = 1e-15);
    assert!(unpenalized.ppf.is_nan());
}

#[test]
fn sub_scores_stay_in_unit_interval() {
    let cfg = FidelityConfig::default();
    for seed in 1..20u64 {
        let obs: Vec<f64> = lcg(400, seed).iter().map(|v| 0.5 + 5.0 * v).collect();
        let sim: Vec<f64> = lcg(400, seed + 100).iter().map(|v| 0.1 + 8.0 * v * v).collect();
        let f = compute_fidelity(&sim, &obs, &cfg);
        assert!(f.is_defined());
        for v in [f.omega, f.varphi, f.eta, f.exp_neg_nmaep] {
            assert!((0.0..=1.0).contains(&v), "sub-score {v} out of range");
        }
        assert!(f.mfm <= 1.0);
    }
}

#[test]
fn missing_values_are_masked() {
    let obs = seasonal(120, 3.0, 0.0);
    let sim: Vec<f64> = obs.iter().map(|o| o * 1.1).collect();
    let mut obs_gappy = obs.clone();
    let mut sim_gappy = sim.clone();
    obs_gappy.extend([f64::NAN, 3.0]);
    sim_gappy.extend([2.0, f64::INFINITY]);

    let cfg = FidelityConfig::default();
    assert_eq!(
        compute_fidelity(&sim_gappy, &obs_gappy, &cfg),
        compute_fidelity(&sim, &obs, &cfg)
    );
}

#[test]
fn inputs_are_not_modified() {
    let obs = seasonal(50, 2.0, 0.0);
    let sim = seasonal(50, 2.0, 0.3);
    let (obs_before, sim_before) = (obs.clone(), sim.clone());
    let first = compute_fidelity(&sim, &obs, &FidelityConfig::default());
    let second = compute_fidelity(&sim, &obs, &FidelityConfig::default());
    let _ = compute_baseline(&sim, &obs);
    assert_eq!(obs, obs_before);
    assert_eq!(sim, sim_before);
    assert_eq!(first, second);
}

#[test]
fn flow_file_to_scores_to_sweep_table() {
    let mut text = String::from("YR MNTH DY MOD_RUN OBS_RUN\n");
    let obs = seasonal(60, 2.0, 0.0);
    let sim = seasonal(60, 2.0, 0.2);
    for (i, (s, o)) in sim.iter().zip(&obs).enumerate() {
        text.push_str(&format!("2000 1 {} {} {}\n", i + 1, s, o));
    }
    let table = read_flow_table(text.as_bytes()).unwrap();
    let pair = table.series_pair();
    assert_eq!(pair.len(), 60);

    let pairs = vec![pair.clone(), SeriesPair::new(obs.clone(), obs.clone()).unwrap()];
    let report = evaluate_pairs(&pairs, &FidelityConfig::default());
    assert_eq!(report.len(), 2);
    assert_eq!(report.fidelity.mfm[1], 1.0);

    let configs: Vec<FidelityConfig> = (1..=3)
        .map(|k| FidelityConfig::default().with_bins(5 * k, 10).unwrap())
        .collect();
    let rows = sweep_mfm(&pairs, &configs);
    let mut buf = Vec::new();
    write_sweep_table(&mut buf, &rows).unwrap();
    let back = read_sweep_table(buf.as_slice()).unwrap();
    assert_eq!(back, rows);
}
