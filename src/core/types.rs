//! Core data types for MonteVest.

use serde::{Deserialize, Serialize};

use crate::core::error::{MonteVestError, Result};

/// Type alias for price values.
pub type Price = f64;

/// Validated inputs for one simulation run.
///
/// Immutable once a run starts: the engine takes the parameter set by value
/// and never mutates it. The projection horizon, step size, path sampling
/// stride and visualization limits are fixed properties of the model rather
/// than user inputs, and are exposed as associated constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Ticker symbol (used for asset profile lookup and display).
    pub ticker: String,
    /// Current (spot) price. Must be positive.
    pub current_price: Price,
    /// Annualized volatility (sigma). Must be non-negative.
    pub volatility: f64,
    /// Annualized expected return (mu).
    pub drift: f64,
    /// Number of independent price trajectories to simulate.
    pub simulation_count: usize,
    /// Capital invested at the spot price. Must be non-negative.
    pub investment_amount: f64,
    /// Investment goal in dollars. Must be non-negative.
    pub target_amount: f64,
}

impl SimulationParameters {
    /// Projection horizon in years.
    pub const TIME_HORIZON_YEARS: f64 = 1.0;
    /// Trading days per year; one GBM step per trading day.
    pub const TRADING_DAYS_PER_YEAR: usize = 252;
    /// A path sample is recorded every this many steps.
    pub const PATH_SAMPLE_STRIDE: usize = 10;
    /// Number of sampled paths carried in the result for visualization.
    pub const PATHS_TO_VISUALIZE: usize = 100;
    /// Smallest accepted simulation count.
    pub const MIN_SIMULATIONS: usize = 1_000;
    /// Largest accepted simulation count.
    pub const MAX_SIMULATIONS: usize = 50_000;

    /// Create a new parameter set with explicit drift and volatility.
    pub fn new(
        ticker: impl Into<String>,
        current_price: Price,
        volatility: f64,
        drift: f64,
        simulation_count: usize,
        investment_amount: f64,
        target_amount: f64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            current_price,
            volatility,
            drift,
            simulation_count,
            investment_amount,
            target_amount,
        }
    }

    /// Create a parameter set taking drift and volatility from an asset profile.
    pub fn from_profile(
        ticker: impl Into<String>,
        profile: &AssetProfile,
        current_price: Price,
        simulation_count: usize,
        investment_amount: f64,
        target_amount: f64,
    ) -> Self {
        Self::new(
            ticker,
            current_price,
            profile.volatility,
            profile.growth,
            simulation_count,
            investment_amount,
            target_amount,
        )
    }

    /// Time step in years (one trading day).
    #[inline]
    pub fn dt(&self) -> f64 {
        Self::TIME_HORIZON_YEARS / Self::TRADING_DAYS_PER_YEAR as f64
    }

    /// Number of GBM steps over the projection horizon.
    #[inline]
    pub fn steps(&self) -> usize {
        (Self::TIME_HORIZON_YEARS * Self::TRADING_DAYS_PER_YEAR as f64).round() as usize
    }

    /// Sampled path length for the fixed horizon and stride.
    #[inline]
    pub fn path_sample_len(&self) -> usize {
        (self.steps() + Self::PATH_SAMPLE_STRIDE - 1) / Self::PATH_SAMPLE_STRIDE
    }

    /// Check every field against its domain constraint.
    ///
    /// Rejects the run before any simulation work begins; the error names
    /// the offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.current_price.is_finite() || self.current_price <= 0.0 {
            return Err(MonteVestError::invalid_parameter(
                "current_price",
                format!("must be a positive finite number, got {}", self.current_price),
            ));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(MonteVestError::invalid_parameter(
                "volatility",
                format!("must be a non-negative finite number, got {}", self.volatility),
            ));
        }
        if !self.drift.is_finite() {
            return Err(MonteVestError::invalid_parameter(
                "drift",
                format!("must be a finite number, got {}", self.drift),
            ));
        }
        if self.simulation_count < Self::MIN_SIMULATIONS
            || self.simulation_count > Self::MAX_SIMULATIONS
        {
            return Err(MonteVestError::invalid_parameter(
                "simulation_count",
                format!(
                    "must be in [{}, {}], got {}",
                    Self::MIN_SIMULATIONS,
                    Self::MAX_SIMULATIONS,
                    self.simulation_count
                ),
            ));
        }
        if !self.investment_amount.is_finite() || self.investment_amount < 0.0 {
            return Err(MonteVestError::invalid_parameter(
                "investment_amount",
                format!(
                    "must be a non-negative finite number, got {}",
                    self.investment_amount
                ),
            ));
        }
        if !self.target_amount.is_finite() || self.target_amount < 0.0 {
            return Err(MonteVestError::invalid_parameter(
                "target_amount",
                format!("must be a non-negative finite number, got {}", self.target_amount),
            ));
        }
        Ok(())
    }
}

/// Display profile for a ticker symbol.
///
/// Supplied by a [`crate::market::profiles::ProfileSource`]; unknown tickers
/// resolve to a default profile, so lookup never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetProfile {
    /// Display name.
    pub name: String,
    /// Sector label.
    pub sector: String,
    /// Annualized volatility estimate.
    pub volatility: f64,
    /// Annualized growth (drift) estimate.
    pub growth: f64,
}

impl AssetProfile {
    /// Create a new asset profile.
    pub fn new(
        name: impl Into<String>,
        sector: impl Into<String>,
        volatility: f64,
        growth: f64,
    ) -> Self {
        Self {
            name: name.into(),
            sector: sector.into(),
            volatility,
            growth,
        }
    }

    /// Default profile substituted for unrecognized tickers.
    pub fn fallback(ticker: &str) -> Self {
        Self::new(format!("{} Stock", ticker), "General", 0.30, 0.12)
    }
}

/// One simulated price trajectory.
///
/// `samples[i]` is the price after the update at step
/// `i * PATH_SAMPLE_STRIDE`; the terminal price is recorded after the last
/// step regardless of stride alignment. All paths in one run have identical
/// sample length.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulatedPath {
    /// Prices recorded every [`SimulationParameters::PATH_SAMPLE_STRIDE`] steps.
    pub samples: Vec<Price>,
    /// True price after the final step.
    pub terminal: Price,
}

impl SimulatedPath {
    /// Number of strided samples in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the path carries no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate samples as `(step, price)` pairs.
    pub fn sample_points(&self) -> impl Iterator<Item = (usize, Price)> + '_ {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, &price)| (i * SimulationParameters::PATH_SAMPLE_STRIDE, price))
    }
}
