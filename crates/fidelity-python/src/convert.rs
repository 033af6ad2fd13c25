use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

/// Validate that a numpy array is C-contiguous and return its slice.
pub fn contiguous_slice<'py>(arr: &'py PyReadonlyArray1<'py, f64>) -> PyResult<&'py [f64]> {
    arr.as_slice().map_err(|_| {
        pyo3::exceptions::PyValueError::new_err("array must be C-contiguous")
    })
}

/// Validate contiguity of both arrays and that they have the same length.
pub fn paired_slices<'py>(
    sim: &'py PyReadonlyArray1<'py, f64>,
    obs: &'py PyReadonlyArray1<'py, f64>,
) -> PyResult<(&'py [f64], &'py [f64])> {
    let sim = contiguous_slice(sim)?;
    let obs = contiguous_slice(obs)?;
    if sim.len() != obs.len() {
        return Err(pyo3::exceptions::PyValueError::new_err(format!(
            "sim must have the same length as obs ({}), got {}",
            obs.len(),
            sim.len()
        )));
    }
    Ok((sim, obs))
}
