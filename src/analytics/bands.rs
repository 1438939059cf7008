//! Per-step percentile bands across the sampled paths.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analytics::statistics::nearest_rank;
use crate::core::types::SimulatedPath;

/// Percentile envelope of the path population at one sampled step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentileBand {
    /// Sample index within the path (step `index * PATH_SAMPLE_STRIDE`).
    pub step: usize,
    pub p5: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
}

/// Compute the percentile bands for every sampled step.
///
/// Each step gathers the full column of prices across all paths, sorts it
/// and extracts nearest-rank percentiles - the dominant cost of the
/// pipeline, so columns are processed in parallel (they are independent).
/// Paths have uniform sample length by construction; that invariant is
/// asserted in debug builds.
pub fn percentile_bands(paths: &[SimulatedPath]) -> Vec<PercentileBand> {
    let Some(first) = paths.first() else {
        return Vec::new();
    };
    let sample_len = first.len();
    debug_assert!(
        paths.iter().all(|p| p.len() == sample_len),
        "paths must have uniform sample length"
    );

    (0..sample_len)
        .into_par_iter()
        .map(|step| {
            let mut column: Vec<f64> = paths.iter().map(|p| p.samples[step]).collect();
            column.sort_unstable_by(f64::total_cmp);
            PercentileBand {
                step,
                p5: nearest_rank(&column, 5.0),
                p25: nearest_rank(&column, 25.0),
                p50: nearest_rank(&column, 50.0),
                p75: nearest_rank(&column, 75.0),
                p95: nearest_rank(&column, 95.0),
            }
        })
        .collect()
}
