//! Core data types and errors for MonteVest.

pub mod error;
pub mod types;

pub use error::{MonteVestError, Result};
pub use types::{AssetProfile, SimulatedPath, SimulationParameters};
