//! Statistical aggregation and derived analytics over a simulated run.

pub mod bands;
pub mod histogram;
pub mod projection;
pub mod recommendation;
pub mod statistics;

pub use bands::{percentile_bands, PercentileBand};
pub use histogram::{build_cdf, CdfSample, Histogram, HistogramBucket};
pub use projection::InvestmentProjection;
pub use recommendation::{recommend, Advice, Recommendation};
pub use statistics::{percentile_table, PercentileEntry, PricePopulation, SummaryStatistics};
