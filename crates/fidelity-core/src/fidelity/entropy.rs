//! Variability capture via the scaled/unscaled Shannon entropy difference (SUSE).
//!
//! The scaled diagnostic bins both series on one shared range, so it sees
//! differences in location and spread. The unscaled diagnostic bins each
//! series on its own range, so it only sees differences in shape. The larger
//! of the two is kept.
use super::constants::SUSE_DEGENERATE;
use super::histogram::{probabilities, shannon_entropy, EqualWidthBins};

/// Entropy of one series' histogram on the given bins.
fn binned_entropy(values: &[f64], bins: &EqualWidthBins) -> f64 {
    shannon_entropy(&probabilities(&bins.counts(values)))
}

/// `|H(sim) - H(obs)|` with both series binned on their joint range.
///
/// `None` when the joint range is degenerate.
pub fn scaled_entropy_difference(sim: &[f64], obs: &[f64], bins: usize) -> Option<f64> {
    let shared = EqualWidthBins::spanning_both(sim, obs, bins)?;
    Some((binned_entropy(sim, &shared) - binned_entropy(obs, &shared)).abs())
}

/// Entropy of a series binned on its own range. A constant series carries
/// no information and contributes 0.
fn own_range_entropy(values: &[f64], bins: usize) -> f64 {
    match EqualWidthBins::spanning(values, bins) {
        Some(own) => binned_entropy(values, &own),
        None => 0.0,
    }
}

/// `|H(sim) - H(obs)|` with each series binned on its own range.
pub fn unscaled_entropy_difference(sim: &[f64], obs: &[f64], bins: usize) -> f64 {
    (own_range_entropy(sim, bins) - own_range_entropy(obs, bins)).abs()
}

/// SUSE = max(scaled, unscaled) entropy difference.
///
/// - NaN when either series is empty (undefined).
/// - 0.0 when the joint range is degenerate (no mismatch to detect).
pub fn suse(sim: &[f64], obs: &[f64], bins: usize) -> f64 {
    if sim.is_empty() || obs.is_empty() {
        return f64::NAN;
    }
    let Some(hs) = scaled_entropy_difference(sim, obs, bins) else {
        return SUSE_DEGENERATE;
    };
    let hu = unscaled_entropy_difference(sim, obs, bins);
    hs.max(hu)
}

/// Variability capture sub-score: `exp(-SUSE)`, in (0, 1].
pub fn variability_capture(sim: &[f64], obs: &[f64], bins: usize) -> f64 {
    (-suse(sim, obs, bins)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identical_series_have_no_mismatch() {
        let v = [1.0, 3.0, 2.0, 5.0, 4.0, 7.0];
        assert_eq!(suse(&v, &v, 10), 0.0);
        assert_eq!(variability_capture(&v, &v, 10), 1.0);
    }

    #[test]
    fn degenerate_joint_range_falls_back_to_zero() {
        let v = [3.0; 6];
        assert_eq!(suse(&v, &v, 10), SUSE_DEGENERATE);
        assert_eq!(variability_capture(&v, &v, 10), 1.0);
    }

    #[test]
    fn empty_series_is_undefined() {
        assert!(suse(&[], &[1.0, 2.0], 10).is_nan());
        assert!(variability_capture(&[1.0], &[], 10).is_nan());
    }

    #[test]
    fn constant_series_contributes_zero_unscaled_entropy() {
        // sim constant, obs spread evenly over 4 bins -> Hu = ln(4).
        let sim = [2.0; 4];
        let obs = [0.0, 1.0, 2.0, 3.0];
        let hu = unscaled_entropy_difference(&sim, &obs, 4);
        assert_relative_eq!(hu, 4.0_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn scaled_difference_sees_shifted_levels_unscaled_does_not() {
        // Same shape, shifted far apart: each series lands in one shared bin.
        let obs = [0.0, 1.0, 2.0, 3.0];
        let sim = [100.0, 101.0, 102.0, 103.0];
        let hs = scaled_entropy_difference(&sim, &obs, 4).unwrap();
        let hu = unscaled_entropy_difference(&sim, &obs, 4);
        assert_eq!(hs, 0.0);
        assert_relative_eq!(hu, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn suse_keeps_the_larger_diagnostic() {
        // Damped copy of obs: own-range shapes match, the shared range exposes
        // the lost spread.
        let obs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let sim: Vec<f64> = obs.iter().map(|v| 4.0 + v * 0.1).collect();
        let hs = scaled_entropy_difference(&sim, &obs, 10).unwrap();
        let hu = unscaled_entropy_difference(&sim, &obs, 10);
        assert!(hs > hu);
        assert_eq!(suse(&sim, &obs, 10), hs.max(hu));
        let phi = variability_capture(&sim, &obs, 10);
        assert!(phi > 0.0 && phi < 1.0);
    }
}
