//! Paired simulated/observed series and the slice statistics both engines use.
//!
//! Variances are population variances (divide by `n`). Nothing here masks
//! non-finite values unless asked to: NaN inputs propagate through every moment.

/// An index-aligned pair of simulated and observed values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesPair {
    pub sim: Vec<f64>,
    pub obs: Vec<f64>,
}

impl SeriesPair {
    /// Create a new pair, rejecting length mismatches.
    pub fn new(sim: Vec<f64>, obs: Vec<f64>) -> Result<Self, String> {
        if sim.len() != obs.len() {
            return Err(format!(
                "sim length {} does not match obs length {}",
                sim.len(),
                obs.len()
            ));
        }
        Ok(Self { sim, obs })
    }

    /// Number of timesteps.
    pub fn len(&self) -> usize {
        self.obs.len()
    }

    /// Returns `true` if there are no timesteps.
    pub fn is_empty(&self) -> bool {
        self.obs.is_empty()
    }

    /// Copy of the pair restricted to indices where both values are finite.
    pub fn finite(&self) -> SeriesPair {
        let (sim, obs) = mask_finite(&self.sim, &self.obs);
        SeriesPair { sim, obs }
    }
}

/// Keep only the indices where both `sim` and `obs` are finite.
///
/// Returns owned copies; the inputs are never modified. Extra trailing
/// elements of the longer slice are dropped.
pub fn mask_finite(sim: &[f64], obs: &[f64]) -> (Vec<f64>, Vec<f64>) {
    sim.iter()
        .zip(obs)
        .filter(|(s, o)| s.is_finite() && o.is_finite())
        .map(|(&s, &o)| (s, o))
        .unzip()
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance around a precomputed mean.
pub fn variance_about(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population variance.
pub fn variance(values: &[f64]) -> f64 {
    variance_about(values, mean(values))
}

/// Population covariance around precomputed means.
pub fn covariance_about(a: &[f64], b: &[f64], mean_a: f64, mean_b: f64) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - mean_a) * (y - mean_b))
        .sum::<f64>()
        / a.len() as f64
}

/// Pearson correlation coefficient.
///
/// NaN when either series has zero variance (0/0). Finite results are
/// clamped to `[-1, 1]` to absorb rounding on exactly linear pairs.
pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let mean_a = mean(a);
    let mean_b = mean(b);
    let cov = covariance_about(a, b, mean_a, mean_b);
    let var_a = variance_about(a, mean_a);
    let var_b = variance_about(b, mean_b);
    let r = cov / (var_a * var_b).sqrt();
    if r.is_nan() {
        r
    } else {
        r.clamp(-1.0, 1.0)
    }
}

/// Minimum and maximum of a slice, or `None` when it is empty.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
