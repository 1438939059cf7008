//! Distribution summaries: fixed-bucket histogram and CDF samples.

use serde::{Deserialize, Serialize};

use crate::analytics::statistics::PricePopulation;

/// Number of fixed-width histogram buckets.
pub const HISTOGRAM_BUCKETS: usize = 50;

/// Every how many sorted ranks a CDF sample is taken.
pub const CDF_RANK_STRIDE: usize = 100;

/// One histogram bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramBucket {
    /// Lower bucket edge, rounded to the nearest dollar.
    pub label: f64,
    /// Number of terminal prices in the bucket.
    pub count: usize,
}

/// Terminal-price histogram: exactly [`HISTOGRAM_BUCKETS`] fixed-width
/// buckets spanning `[min, max]` of the population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram {
    /// Buckets in ascending price order.
    pub buckets: Vec<HistogramBucket>,
}

impl Histogram {
    /// Bucket the population.
    ///
    /// The bucket index is clamped so `price == max` lands in the last
    /// bucket instead of overflowing. A zero-span population (all prices
    /// equal, e.g. a zero-volatility run) puts the whole count in bucket 0,
    /// keeping the mass invariant `sum(counts) == n`.
    pub fn from_population(population: &PricePopulation) -> Self {
        let sorted = population.sorted();
        let min = sorted[0];
        let max = sorted[sorted.len() - 1];
        let width = (max - min) / HISTOGRAM_BUCKETS as f64;

        let mut buckets: Vec<HistogramBucket> = (0..HISTOGRAM_BUCKETS)
            .map(|i| HistogramBucket {
                label: (min + i as f64 * width).round(),
                count: 0,
            })
            .collect();

        if width > 0.0 {
            for &price in sorted {
                let idx = (((price - min) / width).floor() as usize).min(HISTOGRAM_BUCKETS - 1);
                buckets[idx].count += 1;
            }
        } else {
            buckets[0].count = sorted.len();
        }

        Self { buckets }
    }

    /// Total count across all buckets.
    pub fn total_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// One point of the cumulative distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CdfSample {
    /// Price at the sampled rank, rounded to the nearest dollar.
    pub price: f64,
    /// Cumulative probability in [0, 100].
    pub cumulative_pct: f64,
}

/// Sample the sorted population at every [`CDF_RANK_STRIDE`]-th rank.
pub fn build_cdf(population: &PricePopulation) -> Vec<CdfSample> {
    let sorted = population.sorted();
    let n = sorted.len() as f64;
    (0..sorted.len())
        .step_by(CDF_RANK_STRIDE)
        .map(|rank| CdfSample {
            price: sorted[rank].round(),
            cumulative_pct: rank as f64 / n * 100.0,
        })
        .collect()
}
