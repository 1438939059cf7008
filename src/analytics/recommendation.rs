//! Rule-based investment recommendation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Investment recommendation grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    HoldReduce,
    Sell,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Recommendation::StrongBuy => "STRONG BUY",
            Recommendation::Buy => "BUY",
            Recommendation::Hold => "HOLD",
            Recommendation::HoldReduce => "HOLD/REDUCE",
            Recommendation::Sell => "SELL",
        };
        f.write_str(label)
    }
}

/// A recommendation with its rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub recommendation: Recommendation,
    pub rationale: &'static str,
}

/// Map expected return and probability of profit to a recommendation.
///
/// A deterministic first-match rule table; no other signal feeds the
/// decision. `expected_return_pct` is in percent, `prob_profit` a fraction
/// in [0, 1]. All comparisons are strict.
pub fn recommend(expected_return_pct: f64, prob_profit: f64) -> Advice {
    if expected_return_pct > 20.0 && prob_profit > 0.65 {
        Advice {
            recommendation: Recommendation::StrongBuy,
            rationale: "Significant upside potential with high probability of profit",
        }
    } else if expected_return_pct > 10.0 && prob_profit > 0.55 {
        Advice {
            recommendation: Recommendation::Buy,
            rationale: "Attractive risk-reward profile",
        }
    } else if expected_return_pct > 0.0 && prob_profit > 0.50 {
        Advice {
            recommendation: Recommendation::Hold,
            rationale: "Fair valuation with moderate upside",
        }
    } else if expected_return_pct > -10.0 {
        Advice {
            recommendation: Recommendation::HoldReduce,
            rationale: "Limited upside, consider reducing position",
        }
    } else {
        Advice {
            recommendation: Recommendation::Sell,
            rationale: "Overvalued based on Monte Carlo analysis",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_buy() {
        let advice = recommend(25.0, 0.70);
        assert_eq!(advice.recommendation, Recommendation::StrongBuy);
    }

    #[test]
    fn test_buy() {
        let advice = recommend(12.0, 0.60);
        assert_eq!(advice.recommendation, Recommendation::Buy);
    }

    #[test]
    fn test_hold() {
        let advice = recommend(5.0, 0.52);
        assert_eq!(advice.recommendation, Recommendation::Hold);
    }

    #[test]
    fn test_hold_reduce() {
        let advice = recommend(-5.0, 0.40);
        assert_eq!(advice.recommendation, Recommendation::HoldReduce);
    }

    #[test]
    fn test_sell_regardless_of_prob_profit() {
        assert_eq!(recommend(-15.0, 0.0).recommendation, Recommendation::Sell);
        assert_eq!(recommend(-15.0, 0.99).recommendation, Recommendation::Sell);
    }

    #[test]
    fn test_rule_edges_are_strict() {
        // Exactly 20% return fails the first rule and falls through to BUY.
        assert_eq!(recommend(20.0, 0.90).recommendation, Recommendation::Buy);
        // High return with weak profit odds skips the buy grades.
        assert_eq!(recommend(25.0, 0.50).recommendation, Recommendation::HoldReduce);
        // Exactly -10% return is not enough for HOLD/REDUCE.
        assert_eq!(recommend(-10.0, 0.50).recommendation, Recommendation::Sell);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Recommendation::StrongBuy.to_string(), "STRONG BUY");
        assert_eq!(Recommendation::HoldReduce.to_string(), "HOLD/REDUCE");
    }

    #[test]
    fn test_serialized_tags() {
        let json = serde_json::to_string(&Recommendation::StrongBuy).unwrap();
        assert_eq!(json, "\"STRONG_BUY\"");
        let json = serde_json::to_string(&Recommendation::HoldReduce).unwrap();
        assert_eq!(json, "\"HOLD_REDUCE\"");
    }
}
