/// Pure Rust benchmarks for the fidelity and baseline engines.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for data generation,
/// and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use fidelity_core::{compute_baseline, compute_fidelity, FidelityConfig};

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic streamflow-like data: a seasonal cycle
/// plus noise for obs, and a damped, lagged copy for sim.
fn make_data(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let omega = 2.0 * std::f64::consts::PI / 365.25;
    let obs: Vec<f64> = (0..n)
        .map(|t| 5.0 + 3.0 * (omega * t as f64).sin() + next_f64() * 2.0)
        .collect();
    let sim: Vec<f64> = (0..n)
        .map(|t| 5.0 + 2.5 * (omega * t as f64 - 0.2).sin() + next_f64() * 2.0)
        .collect();
    (sim, obs)
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_fidelity(sizes: &[usize], phase: bool) -> Vec<(&'static str, usize, Duration)> {
    let config = FidelityConfig::default().with_phase(phase);
    let label = if phase { "mfm" } else { "mfm (no phase)" };
    let mut results = Vec::new();

    for &n in sizes {
        let (sim, obs) = make_data(n, 42);

        // Warmup
        black_box(compute_fidelity(&sim, &obs, &config));

        let dur = median_time(|| {
            black_box(compute_fidelity(&sim, &obs, &config));
        });
        results.push((label, n, dur));
    }
    results
}

fn bench_baseline(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();

    for &n in sizes {
        let (sim, obs) = make_data(n, 42);

        // Warmup
        black_box(compute_baseline(&sim, &obs));

        let dur = median_time(|| {
            black_box(compute_baseline(&sim, &obs));
        });
        results.push(("baseline", n, dur));
    }
    results
}

fn main() {
    println!("Pure Rust Metric Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>6}   {:>12}", "Engine", "N", "Median (ms)");
    println!("--------------------------------------------");

    let sizes = [365, 3650, 36500];
    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();

    all_results.extend(bench_fidelity(&sizes, true));
    all_results.extend(bench_fidelity(&sizes, false));
    all_results.extend(bench_baseline(&sizes));

    for (engine, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<18} {:>6}      {:>8.2}", engine, n, ms);
    }

    println!("============================================================");
}
