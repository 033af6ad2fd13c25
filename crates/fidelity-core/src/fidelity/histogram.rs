//! Equal-width histogram binning shared by the entropy and intersection
//! sub-scores.
//!
//! Edges are `start + i * step` for `i in 0..bins` with the last edge pinned
//! to `stop`. Every bin is half-open `[e_i, e_{i+1})` except the last, which
//! also takes values equal to `stop`. Values outside `[start, stop]` are not
//! counted.

use crate::series::min_max;

#[derive(Debug, Clone, PartialEq)]
pub struct EqualWidthBins {
    edges: Vec<f64>,
}

impl EqualWidthBins {
    /// Build `bins` equal-width bins spanning `[start, stop]`.
    ///
    /// Returns `None` for a degenerate range (`start == stop`), a reversed or
    /// non-finite range, or zero bins. Callers decide what a degenerate range
    /// means for their score.
    pub fn new(start: f64, stop: f64, bins: usize) -> Option<Self> {
        if bins == 0 || !start.is_finite() || !stop.is_finite() || start >= stop {
            return None;
        }
        let step = (stop - start) / bins as f64;
        let mut edges: Vec<f64> = (0..=bins).map(|i| start + i as f64 * step).collect();
        edges[bins] = stop;
        Some(Self { edges })
    }

    /// Bins spanning the range of a single series.
    pub fn spanning(values: &[f64], bins: usize) -> Option<Self> {
        let (lo, hi) = min_max(values)?;
        Self::new(lo, hi, bins)
    }

    /// Bins spanning the joint range of two series.
    pub fn spanning_both(a: &[f64], b: &[f64], bins: usize) -> Option<Self> {
        let (lo_a, hi_a) = min_max(a)?;
        let (lo_b, hi_b) = min_max(b)?;
        Self::new(lo_a.min(lo_b), hi_a.max(hi_b), bins)
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bin index for a value, or `None` when it falls outside the edges.
    pub fn index_of(&self, value: f64) -> Option<usize> {
        let first = self.edges[0];
        let last = self.edges[self.len()];
        if !(value >= first && value <= last) {
            return None;
        }
        if value == last {
            return Some(self.len() - 1);
        }
        // Number of edges <= value, minus one, is the bin the value opens into.
        let upper = self.edges.partition_point(|&e| e <= value);
        Some(upper - 1)
    }

    /// Raw counts per bin.
    pub fn counts(&self, values: &[f64]) -> Vec<u64> {
        let mut counts = vec![0u64; self.len()];
        for &v in values {
            if let Some(i) = self.index_of(v) {
                counts[i] += 1;
            }
        }
        counts
    }
}

/// Counts normalized to a probability vector. All zeros when nothing was counted.
pub fn probabilities(counts: &[u64]) -> Vec<f64> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return vec![0.0; counts.len()];
    }
    counts
        .iter()
        .map(|&c| c as f64 / total as f64)
        .collect()
}

/// Shannon entropy in nats over the nonzero entries of a probability vector.
pub fn shannon_entropy(probs: &[f64]) -> f64 {
    -probs
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.ln())
        .sum::<f64>()
}
