//! Distribution similarity via the percentage histogram intersection (PHI).
use super::constants::PHI_DEGENERATE;
use super::histogram::EqualWidthBins;

/// Fraction of the observed histogram mass covered by the simulated one.
///
/// - NaN when either series is empty, or the observed histogram is empty.
/// - 1.0 when the joint range is degenerate (both series are one value).
pub fn histogram_intersection(sim: &[f64], obs: &[f64], bins: usize) -> f64 {
    if sim.is_empty() || obs.is_empty() {
        return f64::NAN;
    }
    let Some(shared) = EqualWidthBins::spanning_both(sim, obs, bins) else {
        return PHI_DEGENERATE;
    };
    let counts_sim = shared.counts(sim);
    let counts_obs = shared.counts(obs);

    let overlap: u64 = counts_sim
        .iter()
        .zip(&counts_obs)
        .map(|(&s, &o)| s.min(o))
        .sum();
    let obs_total: u64 = counts_obs.iter().sum();
    if obs_total == 0 {
        return f64::NAN;
    }
    overlap as f64 / obs_total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identical_series_overlap_fully() {
        let v = [0.5, 1.5, 2.5, 3.5];
        assert_eq!(histogram_intersection(&v, &v, 10), 1.0);
    }

    #[test]
    fn degenerate_range_is_perfect_match() {
        let v = [7.0; 5];
        assert_eq!(histogram_intersection(&v, &v, 10), PHI_DEGENERATE);
    }

    #[test]
    fn empty_series_is_undefined() {
        assert!(histogram_intersection(&[], &[1.0, 2.0], 10).is_nan());
        assert!(histogram_intersection(&[1.0, 2.0], &[], 10).is_nan());
    }

    #[test]
    fn disjoint_distributions_do_not_overlap() {
        let obs = [0.0, 0.1, 0.2];
        let sim = [9.8, 9.9, 10.0];
        assert_eq!(histogram_intersection(&sim, &obs, 10), 0.0);
    }

    #[test]
    fn partial_overlap_known_value() {
        // 4 bins over [0, 4]: obs counts [1,1,1,1], sim counts [0,2,1,1].
        let obs = [0.0, 1.0, 2.0, 3.0];
        let sim = [1.0, 1.5, 2.0, 4.0];
        assert_relative_eq!(histogram_intersection(&sim, &obs, 4), 0.75);
    }

    #[test]
    fn overlap_is_normalized_by_observed_mass() {
        // All sim mass piled in one observed bin still covers only that bin.
        let obs = [0.0, 1.0, 2.0, 3.0];
        let sim = [0.0, 0.0, 0.0, 3.0];
        let phi = histogram_intersection(&sim, &obs, 3);
        assert_relative_eq!(phi, 0.5);
    }
}
