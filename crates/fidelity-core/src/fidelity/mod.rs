//! Composite Model Fidelity Metric (MFM).
//!
//! Fuses error fidelity (with an FFT phase penalty), variability capture
//! (entropy difference) and distribution similarity (histogram intersection)
//! into one score bounded above by 1.
pub mod constants;
pub mod entropy;
pub mod histogram;
pub mod intersection;
pub mod phase;
pub mod run;
pub mod scores;

pub use run::compute_fidelity;
pub use scores::{FidelityScores, FidelityScoresTable};
