//! Simulation engine: orchestrates the pipeline and assembles the result.

use serde::Serialize;
use tracing::{debug, info};

use crate::analytics::bands::{percentile_bands, PercentileBand};
use crate::analytics::histogram::{build_cdf, CdfSample, Histogram};
use crate::analytics::projection::InvestmentProjection;
use crate::analytics::recommendation::{recommend, Advice};
use crate::analytics::statistics::{
    percentile_table, PercentileEntry, PricePopulation, SummaryStatistics,
};
use crate::core::error::{MonteVestError, Result};
use crate::core::types::{AssetProfile, SimulatedPath, SimulationParameters};
use crate::market::profiles::{ProfileSource, StaticProfileTable};
use crate::simulation::gbm::generate_paths;
use crate::simulation::progress::{CancelToken, ProgressReporter};

/// Complete output of one simulation run.
///
/// Immutable aggregate published all-or-nothing: a run either yields every
/// field below or an error. Serializable for consumption by a rendering
/// layer.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    /// Parameter set the run was computed from.
    pub parameters: SimulationParameters,
    /// Resolved asset profile for the ticker.
    pub profile: AssetProfile,
    /// Summary statistics of the terminal-price population.
    pub statistics: SummaryStatistics,
    /// Percentile table at the charted ranks.
    pub percentile_table: Vec<PercentileEntry>,
    /// Dollar-denominated investment outcomes.
    pub projection: InvestmentProjection,
    /// Terminal-price histogram.
    pub histogram: Histogram,
    /// Cumulative distribution samples.
    pub cdf: Vec<CdfSample>,
    /// Per-step percentile bands across all paths.
    pub bands: Vec<PercentileBand>,
    /// First [`SimulationParameters::PATHS_TO_VISUALIZE`] sampled paths.
    pub sample_paths: Vec<SimulatedPath>,
    /// Recommendation and rationale.
    pub advice: Advice,
}

/// Monte Carlo simulation engine.
///
/// Holds a validated, immutable parameter set plus the run hooks (seed,
/// progress callback, cancellation token, profile source). `run` may be
/// called repeatedly; with a pinned seed every run is bit-identical.
pub struct SimulationEngine {
    params: SimulationParameters,
    profile: AssetProfile,
    seed: u64,
    progress: Option<ProgressReporter>,
    cancel: CancelToken,
}

impl SimulationEngine {
    /// Create an engine, validating the parameters.
    ///
    /// The ticker is resolved against the built-in profile table; the seed
    /// is drawn from OS entropy and can be pinned with [`Self::with_seed`].
    pub fn new(params: SimulationParameters) -> Result<Self> {
        params.validate()?;
        let profile = StaticProfileTable.lookup(&params.ticker);
        Ok(Self {
            params,
            profile,
            seed: rand::random(),
            progress: None,
            cancel: CancelToken::new(),
        })
    }

    /// Pin the random seed for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Register a progress callback receiving completion fractions in [0, 1]
    /// at batch granularity.
    pub fn with_progress(mut self, callback: impl Fn(f64) + Send + Sync + 'static) -> Self {
        self.progress = Some(ProgressReporter::new(callback));
        self
    }

    /// Use an externally shared cancellation token.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Resolve the ticker against a different profile source.
    pub fn with_profile_source<S: ProfileSource>(mut self, source: &S) -> Self {
        self.profile = source.lookup(&self.params.ticker);
        self
    }

    /// The engine's parameter set.
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// The resolved asset profile.
    pub fn profile(&self) -> &AssetProfile {
        &self.profile
    }

    /// A handle to cancel this engine's runs from another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Execute the full pipeline:
    /// simulate -> aggregate -> project -> recommend.
    ///
    /// Path generation runs in parallel; aggregation and everything after it
    /// are synchronous reductions that only start once all paths exist.
    pub fn run(&self) -> Result<SimulationResult> {
        let params = &self.params;
        info!(
            ticker = %params.ticker,
            simulations = params.simulation_count,
            seed = self.seed,
            "starting Monte Carlo run"
        );

        let (mut paths, terminals) =
            generate_paths(params, self.seed, self.progress.as_ref(), &self.cancel)?;

        // Barrier: generation is complete, but the run can still be
        // abandoned before the aggregation work.
        if self.cancel.is_cancelled() {
            return Err(MonteVestError::Cancelled);
        }

        let population = PricePopulation::new(terminals)?;
        let statistics = SummaryStatistics::from_population(&population, params.current_price);
        let percentiles = percentile_table(&population);
        let projection = InvestmentProjection::project(&statistics, &population, params);
        let histogram = Histogram::from_population(&population);
        let cdf = build_cdf(&population);
        let bands = percentile_bands(&paths);
        let advice = recommend(projection.expected_return_pct, statistics.prob_profit);

        paths.truncate(SimulationParameters::PATHS_TO_VISUALIZE);

        debug!(
            recommendation = %advice.recommendation,
            expected_return_pct = projection.expected_return_pct,
            prob_profit = statistics.prob_profit,
            "run complete"
        );

        Ok(SimulationResult {
            parameters: params.clone(),
            profile: self.profile.clone(),
            statistics,
            percentile_table: percentiles,
            projection,
            histogram,
            cdf,
            bands,
            sample_paths: paths,
            advice,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(simulations: usize) -> SimulationEngine {
        let params =
            SimulationParameters::new("ASML", 850.0, 0.35, 0.15, simulations, 10_000.0, 15_000.0);
        SimulationEngine::new(params).unwrap().with_seed(42)
    }

    #[test]
    fn test_invalid_parameters_never_start() {
        let params = SimulationParameters::new("ASML", -1.0, 0.35, 0.15, 10_000, 1.0, 1.0);
        assert!(SimulationEngine::new(params).is_err());
    }

    #[test]
    fn test_profile_resolution() {
        let default_engine = engine(1_000);
        assert_eq!(default_engine.profile().name, "ASML Holding N.V.");

        struct FlatSource;
        impl ProfileSource for FlatSource {
            fn lookup(&self, ticker: &str) -> AssetProfile {
                AssetProfile::new(ticker, "Test", 0.1, 0.0)
            }
        }
        let engine = engine(1_000).with_profile_source(&FlatSource);
        assert_eq!(engine.profile().sector, "Test");
    }

    #[test]
    fn test_result_shape() {
        let result = engine(1_000).run().unwrap();

        assert_eq!(result.sample_paths.len(), 100);
        assert_eq!(result.bands.len(), 26);
        assert_eq!(result.histogram.total_count(), 1_000);
        assert_eq!(result.percentile_table.len(), 7);
        // 1000 terminals sampled at every 100th rank.
        assert_eq!(result.cdf.len(), 10);
    }

    #[test]
    fn test_pinned_seed_reproduces_result() {
        let a = engine(1_000).run().unwrap();
        let b = engine(1_000).run().unwrap();

        assert_eq!(a.statistics.mean, b.statistics.mean);
        assert_eq!(a.statistics.std_dev, b.statistics.std_dev);
        assert_eq!(a.projection.avg_final_value, b.projection.avg_final_value);
        assert_eq!(a.advice.recommendation, b.advice.recommendation);
    }

    #[test]
    fn test_cancelled_engine_publishes_nothing() {
        let engine = engine(1_000);
        engine.cancel_token().cancel();
        assert!(matches!(engine.run(), Err(MonteVestError::Cancelled)));
    }
}
