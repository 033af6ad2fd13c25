//! Composite fidelity record returned by [`compute_fidelity`](super::compute_fidelity).
use fidelity_macros::Scores;
use serde::{Deserialize, Serialize};

/// MFM and its sub-scores for one simulated/observed pair.
///
/// - `mfm`: composite score, at most 1 (1 = perfect fidelity)
/// - `ppf`: phase penalty factor, NaN when phase correction is off
/// - `exp_neg_nmaep`: error term before the phase penalty
/// - `omega`: error fidelity after the phase penalty
/// - `varphi`: variability capture
/// - `eta`: distribution similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Scores)]
pub struct FidelityScores {
    #[score(label = "MFM")]
    pub mfm: f64,
    #[score(label = "PPF")]
    pub ppf: f64,
    #[score(label = "exp(-NMAEp)")]
    pub exp_neg_nmaep: f64,
    pub omega: f64,
    pub varphi: f64,
    pub eta: f64,
}

impl FidelityScores {
    /// The record returned when the score is undefined (every field NaN).
    pub fn undefined() -> Self {
        Self::nan()
    }

    /// `false` when the composite score is NaN.
    pub fn is_defined(&self) -> bool {
        !self.mfm.is_nan()
    }

    /// Phase penalty factor, or `None` when phase correction was disabled
    /// or the score is undefined.
    pub fn phase_penalty(&self) -> Option<f64> {
        if self.ppf.is_nan() {
            None
        } else {
            Some(self.ppf)
        }
    }
}

/// Normalized Euclidean deficiency of the three sub-scores:
/// `1 − sqrt(((1−ω)² + (1−φ)² + (1−η)²) / 3)`.
pub fn combine(omega: f64, varphi: f64, eta: f64) -> f64 {
    let deficiency = ((1.0 - omega).powi(2) + (1.0 - varphi).powi(2) + (1.0 - eta).powi(2)) / 3.0;
    1.0 - deficiency.sqrt()
}
