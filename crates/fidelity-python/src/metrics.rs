use numpy::PyReadonlyArray1;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::paired_slices;

use fidelity_core::metrics::{baseline_metrics as core_baseline_metrics, compute_baseline};
use fidelity_core::{compute_fidelity, BaselineStats, FidelityConfig, FidelityScores};

// ---------------------------------------------------------------------------
// Typed pyclass result objects
// ---------------------------------------------------------------------------

define_score_result! {
    /// MFM and its sub-scores. `ppf` is NaN when phase correction is off.
    pub struct FidelityResult from FidelityScores {
        mfm, ppf, exp_neg_nmaep, omega, varphi, eta,
    }
}

define_score_result! {
    /// Baseline goodness-of-fit statistics.
    pub struct BaselineResult from BaselineStats {
        nse, kge, mkge, rmse, nrmse, mae, nmae, alpha, beta, rprod, mean_obs,
    }
}

fn config_from_args(
    p: f64,
    bins_suse: usize,
    bins_phi: usize,
    c: f64,
    phase: bool,
) -> PyResult<FidelityConfig> {
    FidelityConfig::new(p, bins_suse, bins_phi, c, phase)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

// ---------------------------------------------------------------------------
// Dict-returning functions keyed by display labels
// ---------------------------------------------------------------------------

#[pyfunction]
#[pyo3(signature = (sim, obs, p=1.0, bins_suse=10, bins_phi=10, c=4.0, phase=true))]
fn model_fidelity_metric<'py>(
    py: Python<'py>,
    sim: PyReadonlyArray1<'py, f64>,
    obs: PyReadonlyArray1<'py, f64>,
    p: f64,
    bins_suse: usize,
    bins_phi: usize,
    c: f64,
    phase: bool,
) -> PyResult<Bound<'py, PyDict>> {
    let (sim, obs) = paired_slices(&sim, &obs)?;
    let config = config_from_args(p, bins_suse, bins_phi, c, phase)?;
    let scores = compute_fidelity(sim, obs, &config);
    Ok(scores_to_dict!(py, scores, FidelityScores))
}

#[pyfunction]
fn standard_metrics<'py>(
    py: Python<'py>,
    sim: PyReadonlyArray1<'py, f64>,
    obs: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyDict>> {
    let (sim, obs) = paired_slices(&sim, &obs)?;
    let stats = compute_baseline(sim, obs);
    Ok(scores_to_dict!(py, stats, BaselineStats))
}

#[pyfunction]
fn baseline_metrics<'py>(
    py: Python<'py>,
    sim: PyReadonlyArray1<'py, f64>,
    obs: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyDict>> {
    let (sim, obs) = paired_slices(&sim, &obs)?;
    let stats = core_baseline_metrics(sim, obs);
    Ok(scores_to_dict!(py, stats, BaselineStats))
}

// ---------------------------------------------------------------------------
// Typed variants
// ---------------------------------------------------------------------------

#[pyfunction]
#[pyo3(signature = (sim, obs, p=1.0, bins_suse=10, bins_phi=10, c=4.0, phase=true))]
fn model_fidelity_scores<'py>(
    sim: PyReadonlyArray1<'py, f64>,
    obs: PyReadonlyArray1<'py, f64>,
    p: f64,
    bins_suse: usize,
    bins_phi: usize,
    c: f64,
    phase: bool,
) -> PyResult<FidelityResult> {
    let (sim, obs) = paired_slices(&sim, &obs)?;
    let config = config_from_args(p, bins_suse, bins_phi, c, phase)?;
    Ok(FidelityResult::from_scores(&compute_fidelity(sim, obs, &config)))
}

#[pyfunction]
fn baseline_scores<'py>(
    sim: PyReadonlyArray1<'py, f64>,
    obs: PyReadonlyArray1<'py, f64>,
) -> PyResult<BaselineResult> {
    let (sim, obs) = paired_slices(&sim, &obs)?;
    Ok(BaselineResult::from_scores(&compute_baseline(sim, obs)))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "metrics")?;
    m.add_function(wrap_pyfunction!(model_fidelity_metric, &m)?)?;
    m.add_function(wrap_pyfunction!(model_fidelity_scores, &m)?)?;
    m.add_function(wrap_pyfunction!(standard_metrics, &m)?)?;
    m.add_function(wrap_pyfunction!(baseline_metrics, &m)?)?;
    m.add_function(wrap_pyfunction!(baseline_scores, &m)?)?;
    m.add_class::<FidelityResult>()?;
    m.add_class::<BaselineResult>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
