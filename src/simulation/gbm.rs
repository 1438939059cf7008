//! Geometric Brownian Motion path generation.
//!
//! Prices follow `S_{t+dt} = S_t * exp((mu - sigma^2/2)*dt + sigma*sqrt(dt)*Z)`
//! with one step per trading day and `Z` drawn via the Box-Muller transform.
//! Generation is parallelized via Rayon in fixed-size batches; each path owns
//! an independent random stream derived from (run seed, path index), so a
//! seeded run is bit-reproducible regardless of batch partitioning, thread
//! count, or platform.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::core::error::{MonteVestError, Result};
use crate::core::types::{SimulatedPath, SimulationParameters};
use crate::simulation::progress::{CancelToken, ProgressReporter};

/// Paths generated between progress reports and cancellation checks.
pub const BATCH_SIZE: usize = 100;

/// Derive the random stream for one path.
///
/// SplitMix64 scramble of (seed, index) feeding a ChaCha8 stream; path
/// streams stay decorrelated even for adjacent indices.
fn path_rng(seed: u64, index: u64) -> ChaCha8Rng {
    let mut z = seed ^ index.wrapping_mul(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    ChaCha8Rng::seed_from_u64(z ^ (z >> 31))
}

/// Standard normal variate via the Box-Muller transform.
fn standard_normal(rng: &mut ChaCha8Rng) -> f64 {
    let u1 = rng.random::<f64>().max(1e-15);
    let u2 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Simulate one price trajectory.
///
/// The path is sampled every [`SimulationParameters::PATH_SAMPLE_STRIDE`]
/// steps; the terminal price is recorded after the final step regardless of
/// stride alignment. Fails fast if the recursion leaves the finite range.
fn simulate_path(params: &SimulationParameters, seed: u64, index: usize) -> Result<SimulatedPath> {
    let mut rng = path_rng(seed, index as u64);
    let dt = params.dt();
    let drift = (params.drift - 0.5 * params.volatility * params.volatility) * dt;
    let diffusion_scale = params.volatility * dt.sqrt();

    let mut price = params.current_price;
    let mut samples = Vec::with_capacity(params.path_sample_len());
    for step in 0..params.steps() {
        let shock = standard_normal(&mut rng);
        price *= (drift + diffusion_scale * shock).exp();
        if step % SimulationParameters::PATH_SAMPLE_STRIDE == 0 {
            samples.push(price);
        }
    }

    if !price.is_finite() {
        return Err(MonteVestError::degenerate_numeric(index));
    }

    Ok(SimulatedPath {
        samples,
        terminal: price,
    })
}

/// Generate all trajectories for a run.
///
/// Returns the paths in simulation-index order together with the
/// index-aligned terminal prices: the same index in both collections refers
/// to the same trajectory. Each batch writes only its own pre-sized slots,
/// reports progress as a completed fraction in [0, 1], and honors the
/// cancellation token. Any failure aborts the whole run.
pub fn generate_paths(
    params: &SimulationParameters,
    seed: u64,
    progress: Option<&ProgressReporter>,
    cancel: &CancelToken,
) -> Result<(Vec<SimulatedPath>, Vec<f64>)> {
    let n = params.simulation_count;
    let mut paths: Vec<SimulatedPath> = vec![SimulatedPath::default(); n];
    let completed = AtomicUsize::new(0);

    paths
        .par_chunks_mut(BATCH_SIZE)
        .enumerate()
        .try_for_each(|(batch_idx, slots)| -> Result<()> {
            if cancel.is_cancelled() {
                return Err(MonteVestError::Cancelled);
            }
            let base = batch_idx * BATCH_SIZE;
            for (offset, slot) in slots.iter_mut().enumerate() {
                *slot = simulate_path(params, seed, base + offset)?;
            }
            let done = completed.fetch_add(slots.len(), Ordering::Relaxed) + slots.len();
            if let Some(reporter) = progress {
                reporter.report(done as f64 / n as f64);
            }
            Ok(())
        })?;

    let terminals = paths.iter().map(|p| p.terminal).collect();
    Ok((paths, terminals))
}
