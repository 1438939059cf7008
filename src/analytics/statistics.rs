//! Summary statistics over the terminal-price population.

use serde::{Deserialize, Serialize};

use crate::core::error::{MonteVestError, Result};

/// The terminal prices of one run.
///
/// Kept both in generation order (path-index aligned, so index `i` refers to
/// the same trajectory as the path list) and as a sorted-ascending view used
/// for every percentile and statistic computation.
#[derive(Debug, Clone)]
pub struct PricePopulation {
    terminal: Vec<f64>,
    sorted: Vec<f64>,
}

impl PricePopulation {
    /// Build the population from terminal prices in generation order.
    ///
    /// Sorts once; every downstream percentile reads the sorted view.
    pub fn new(terminal: Vec<f64>) -> Result<Self> {
        if terminal.is_empty() {
            return Err(MonteVestError::empty_data("price population"));
        }
        let mut sorted = terminal.clone();
        sorted.sort_unstable_by(f64::total_cmp);
        Ok(Self { terminal, sorted })
    }

    /// Population size.
    #[inline]
    pub fn len(&self) -> usize {
        self.terminal.len()
    }

    /// Always false; populations are non-empty by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terminal.is_empty()
    }

    /// Terminal prices in generation order.
    #[inline]
    pub fn by_path(&self) -> &[f64] {
        &self.terminal
    }

    /// Terminal prices sorted ascending.
    #[inline]
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    /// Nearest-rank percentile of the population.
    #[inline]
    pub fn percentile(&self, p: f64) -> f64 {
        nearest_rank(&self.sorted, p)
    }
}

/// Nearest-rank percentile: `sorted[floor(p/100 * n)]`, clamped to
/// `[0, n-1]`. No interpolation between adjacent ranks.
pub fn nearest_rank(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    let idx = ((p / 100.0) * n as f64).floor().max(0.0) as usize;
    sorted[idx.min(n - 1)]
}

/// Summary statistics of a terminal-price population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Mean terminal price.
    pub mean: f64,
    /// Median terminal price: the single element `sorted[n/2]`, identical to
    /// nearest-rank percentile(50). The two middle values of an even-length
    /// population are never averaged.
    pub median: f64,
    /// Population standard deviation (divide by n).
    pub std_dev: f64,
    /// Smallest terminal price.
    pub min: f64,
    /// Largest terminal price.
    pub max: f64,
    /// Fraction in [0, 1] of terminal prices strictly above the spot price.
    pub prob_profit: f64,
    /// Value at Risk at 95% confidence: the 5th-percentile price.
    pub var95: f64,
    /// Value at Risk at 90% confidence: the 10th-percentile price.
    pub var90: f64,
    /// Standard deviation relative to the mean, as a percentage.
    pub coefficient_of_variation: f64,
}

impl SummaryStatistics {
    /// Compute the summary over a population.
    pub fn from_population(population: &PricePopulation, current_price: f64) -> Self {
        let sorted = population.sorted();
        let n = sorted.len() as f64;

        let mean = sorted.iter().sum::<f64>() / n;
        let median = sorted[sorted.len() / 2];
        let variance = sorted.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();
        let prob_profit = sorted.iter().filter(|&&p| p > current_price).count() as f64 / n;
        let coefficient_of_variation = if mean != 0.0 { std_dev / mean * 100.0 } else { 0.0 };

        Self {
            mean,
            median,
            std_dev,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            prob_profit,
            var95: population.percentile(5.0),
            var90: population.percentile(10.0),
            coefficient_of_variation,
        }
    }
}

/// One row of the percentile summary table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentileEntry {
    /// Percentile rank (5, 10, 25, 50, 75, 90, 95).
    pub percentile: u8,
    /// Price at that rank, rounded to the nearest dollar.
    pub value: f64,
}

/// Percentile table at the ranks the rendering layer charts.
pub fn percentile_table(population: &PricePopulation) -> Vec<PercentileEntry> {
    [5u8, 10, 25, 50, 75, 90, 95]
        .iter()
        .map(|&p| PercentileEntry {
            percentile: p,
            value: population.percentile(p as f64).round(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(values: Vec<f64>) -> PricePopulation {
        PricePopulation::new(values).unwrap()
    }

    #[test]
    fn test_empty_population_is_rejected() {
        assert!(PricePopulation::new(vec![]).is_err());
    }

    #[test]
    fn test_sorted_view_is_non_decreasing() {
        let pop = population(vec![3.0, 1.0, 2.0, 5.0, 4.0]);
        assert!(pop.sorted().windows(2).all(|w| w[0] <= w[1]));
        // Generation order is preserved alongside.
        assert_eq!(pop.by_path(), &[3.0, 1.0, 2.0, 5.0, 4.0]);
    }

    #[test]
    fn test_basic_statistics() {
        let pop = population(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let stats = SummaryStatistics::from_population(&pop, 2.5);

        assert!((stats.mean - 3.0).abs() < 1e-12);
        assert!((stats.median - 3.0).abs() < 1e-12);
        // Population variance of 1..5 is 2.
        assert!((stats.std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!((stats.min - 1.0).abs() < 1e-12);
        assert!((stats.max - 5.0).abs() < 1e-12);
        // 3, 4 and 5 are strictly above 2.5.
        assert!((stats.prob_profit - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_median_of_even_population_is_single_element() {
        let pop = population(vec![1.0, 2.0, 3.0, 4.0]);
        let stats = SummaryStatistics::from_population(&pop, 0.0);
        // sorted[4/2] = 3.0, never the 2.5 average of the middle pair.
        assert_eq!(stats.median, 3.0);
    }

    #[test]
    fn test_prob_profit_is_strict() {
        let pop = population(vec![10.0, 10.0, 11.0, 9.0]);
        let stats = SummaryStatistics::from_population(&pop, 10.0);
        // Prices equal to spot do not count as profit.
        assert!((stats.prob_profit - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_rank_percentile() {
        let pop = population((1..=10).map(f64::from).collect());
        // floor(0.50 * 10) = 5 -> sixth element.
        assert_eq!(pop.percentile(50.0), 6.0);
        // floor(0.95 * 10) = 9 -> last element.
        assert_eq!(pop.percentile(95.0), 10.0);
        // Rank 100 clamps to the last index.
        assert_eq!(pop.percentile(100.0), 10.0);
        assert_eq!(pop.percentile(0.0), 1.0);
    }

    #[test]
    fn test_var_is_loss_tail_percentile() {
        let pop = population((1..=100).map(f64::from).collect());
        let stats = SummaryStatistics::from_population(&pop, 50.0);
        assert_eq!(stats.var95, pop.percentile(5.0));
        assert_eq!(stats.var90, pop.percentile(10.0));
        assert!(stats.var95 <= stats.var90);
    }

    #[test]
    fn test_percentile_ordering() {
        let pop = population((1..=1000).map(f64::from).collect());
        assert!(pop.percentile(95.0) >= pop.percentile(50.0));
        assert!(pop.percentile(50.0) >= pop.percentile(5.0));
    }

    #[test]
    fn test_percentile_table_ranks_and_rounding() {
        let pop = population((0..1000).map(|i| i as f64 + 0.4).collect());
        let table = percentile_table(&pop);

        assert_eq!(table.len(), 7);
        assert_eq!(table[0].percentile, 5);
        assert_eq!(table[6].percentile, 95);
        // floor(0.05 * 1000) = 50 -> 50.4 rounds to 50.
        assert_eq!(table[0].value, 50.0);
    }

    #[test]
    fn test_coefficient_of_variation() {
        let pop = population(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let stats = SummaryStatistics::from_population(&pop, 0.0);
        let expected = 2.0_f64.sqrt() / 3.0 * 100.0;
        assert!((stats.coefficient_of_variation - expected).abs() < 1e-9);
    }
}
