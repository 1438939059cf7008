//! MonteVest - Monte Carlo investment projection engine.
//!
//! This crate turns a handful of market assumptions (spot price, drift,
//! volatility, simulation count, an investment amount and a target amount)
//! into a probability distribution of future prices and a rule-based
//! investment recommendation:
//! - Geometric Brownian Motion path generation (parallel, seedable)
//! - Summary statistics, VaR and nearest-rank percentiles over the
//!   terminal-price population
//! - Dollar-denominated investment outcomes (target probability, worst case)
//! - Visualization-ready summaries (histogram, CDF, percentile bands,
//!   sample paths)
//! - A deterministic BUY/SELL/HOLD recommendation
//!
//! The pipeline is a pure function of an immutable [`SimulationParameters`]:
//! progress and cancellation are surfaced through explicit hooks, and a run
//! either returns a complete [`SimulationResult`] or an error - never a
//! partial result.
//!
//! ```no_run
//! use montevest::{SimulationEngine, SimulationParameters};
//!
//! let params = SimulationParameters::new("ASML", 850.0, 0.35, 0.15, 10_000, 10_000.0, 15_000.0);
//! let result = SimulationEngine::new(params)?.with_seed(42).run()?;
//! println!("{}: {}", result.advice.recommendation, result.advice.rationale);
//! # Ok::<(), montevest::MonteVestError>(())
//! ```

pub mod analytics;
pub mod core;
pub mod market;
pub mod simulation;

pub use crate::core::error::{MonteVestError, Result};
pub use crate::core::types::{AssetProfile, SimulatedPath, SimulationParameters};
pub use crate::market::profiles::{ProfileSource, StaticProfileTable};
pub use crate::simulation::engine::{SimulationEngine, SimulationResult};
pub use crate::simulation::progress::CancelToken;
