//! Phase offset at the dominant frequency of the observed series.
//!
//! Both series go through a forward DFT (unnormalized). The dominant bin is
//! the largest-magnitude positive frequency of the observed spectrum, and the
//! offset is the wrapped difference of the two spectra's phase angles there.

use std::f64::consts::PI;

use rustfft::{num_complex::Complex, FftPlanner};

use super::constants::{LONG_SERIES_THRESHOLD, MIN_DOMINANT_OFFSET, MIN_VALID_SAMPLES};

/// Forward DFT of a real series.
fn spectrum(planner: &mut FftPlanner<f64>, values: &[f64]) -> Vec<Complex<f64>> {
    let mut buffer: Vec<Complex<f64>> = values.iter().map(|&v| Complex::new(v, 0.0)).collect();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}

/// Index of the dominant positive frequency in `spectrum`.
///
/// Searches bins `1..=n/2`; the first maximum wins. Records longer than
/// [`LONG_SERIES_THRESHOLD`] never resolve below offset
/// [`MIN_DOMINANT_OFFSET`] within that half-spectrum.
pub fn dominant_index(spectrum: &[Complex<f64>]) -> usize {
    let n = spectrum.len();
    let half = spectrum.get(1..=n / 2).unwrap_or_default();
    let mut best = 0;
    let mut best_norm = f64::NEG_INFINITY;
    for (i, c) in half.iter().enumerate() {
        let norm = c.norm();
        if norm > best_norm {
            best = i;
            best_norm = norm;
        }
    }
    if n > LONG_SERIES_THRESHOLD {
        best = best.max(MIN_DOMINANT_OFFSET);
    }
    best + 1
}

/// Wrap an angle with `((x + π) mod 2π) − π`, using a floored modulo.
pub fn wrap_angle(x: f64) -> f64 {
    (x + PI).rem_euclid(2.0 * PI) - PI
}

/// Phase difference `angle(sim) − angle(obs)` at the dominant frequency, in
/// radians within `[−π, π)`.
///
/// Returns 0 when the lengths differ or fewer than three samples are given.
pub fn phase_difference(sim: &[f64], obs: &[f64]) -> f64 {
    let n = obs.len();
    if n != sim.len() || n < MIN_VALID_SAMPLES {
        return 0.0;
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft_obs = spectrum(&mut planner, obs);
    let fft_sim = spectrum(&mut planner, sim);

    let idx = dominant_index(&fft_obs);
    let diff = fft_sim[idx].arg() - fft_obs[idx].arg();
    wrap_angle(diff)
}

/// Phase penalty factor `cos(phase_diff / c)`.
pub fn phase_penalty(sim: &[f64], obs: &[f64], c: f64) -> f64 {
    (phase_difference(sim, obs) / c).cos()
}
