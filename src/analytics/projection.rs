//! Dollar-denominated investment outcomes.

use serde::{Deserialize, Serialize};

use crate::analytics::statistics::{PricePopulation, SummaryStatistics};
use crate::core::types::SimulationParameters;

/// Investment outcome metrics derived from the price statistics.
///
/// A pure function of the statistics and the invested amounts; no randomness
/// enters after path generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentProjection {
    /// Shares bought at the spot price: `investment_amount / current_price`.
    pub shares: f64,
    /// Mean portfolio value at the horizon: `mean * shares`.
    pub avg_final_value: f64,
    /// Expected return on the investment, in percent.
    pub expected_return_pct: f64,
    /// Probability of the portfolio reaching the target amount, in percent.
    pub prob_target_reached_pct: f64,
    /// Portfolio value at the 5th-percentile price.
    pub worst_case_5pct: f64,
    /// `investment_amount - worst_case_5pct`. Negative when the
    /// 5th-percentile outcome still exceeds the investment; the sign is
    /// preserved, never clamped.
    pub potential_loss: f64,
}

impl InvestmentProjection {
    /// Project investment outcomes from the aggregated statistics.
    pub fn project(
        statistics: &SummaryStatistics,
        population: &PricePopulation,
        params: &SimulationParameters,
    ) -> Self {
        let shares = params.investment_amount / params.current_price;
        let n = population.len() as f64;

        let target_reached = population
            .sorted()
            .iter()
            .filter(|&&price| price * shares >= params.target_amount)
            .count();
        let prob_target_reached_pct = target_reached as f64 / n * 100.0;

        let avg_final_value = statistics.mean * shares;
        let expected_return_pct = if params.investment_amount > 0.0 {
            (avg_final_value - params.investment_amount) / params.investment_amount * 100.0
        } else {
            0.0
        };

        let worst_case_5pct = statistics.var95 * shares;
        let potential_loss = params.investment_amount - worst_case_5pct;

        Self {
            shares,
            avg_final_value,
            expected_return_pct,
            prob_target_reached_pct,
            worst_case_5pct,
            potential_loss,
        }
    }
}
