//! Static ticker-to-profile lookup table.
//!
//! The table is a fallback data source, not a live feed: ten well-known
//! tickers plus a default profile for everything else. The lookup contract
//! (`ticker -> AssetProfile`, never failing) is behind a trait so a caller
//! can substitute a real market-data source.

use tracing::debug;

use crate::core::types::AssetProfile;

/// Source of asset profiles keyed by ticker symbol.
///
/// Implementations must resolve every ticker; substituting a default profile
/// for unknown symbols is a documented degradation, not an error.
pub trait ProfileSource {
    /// Resolve a ticker to its asset profile.
    fn lookup(&self, ticker: &str) -> AssetProfile;
}

/// Built-in static profile table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProfileTable;

impl ProfileSource for StaticProfileTable {
    fn lookup(&self, ticker: &str) -> AssetProfile {
        let symbol = ticker.trim().to_uppercase();
        match symbol.as_str() {
            "ASML" => AssetProfile::new("ASML Holding N.V.", "Technology", 0.35, 0.15),
            "AAPL" => AssetProfile::new("Apple Inc.", "Technology", 0.28, 0.12),
            "TSLA" => AssetProfile::new("Tesla Inc.", "Automotive", 0.65, 0.25),
            "MSFT" => AssetProfile::new("Microsoft Corporation", "Technology", 0.25, 0.14),
            "NVDA" => AssetProfile::new("NVIDIA Corporation", "Technology", 0.55, 0.30),
            "GOOGL" => AssetProfile::new("Alphabet Inc.", "Technology", 0.30, 0.13),
            "AMZN" => AssetProfile::new("Amazon.com Inc.", "E-commerce", 0.35, 0.18),
            "META" => AssetProfile::new("Meta Platforms Inc.", "Social Media", 0.45, 0.16),
            "JPM" => AssetProfile::new("JPMorgan Chase & Co.", "Banking", 0.22, 0.08),
            "V" => AssetProfile::new("Visa Inc.", "Financial Services", 0.24, 0.10),
            _ => {
                debug!(ticker = %symbol, "unknown ticker, using default profile");
                AssetProfile::fallback(&symbol)
            }
        }
    }
}

/// Resolve a ticker against the built-in table.
pub fn lookup(ticker: &str) -> AssetProfile {
    StaticProfileTable.lookup(ticker)
}
