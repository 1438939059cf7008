//! Asset profile lookup for MonteVest.

pub mod profiles;

pub use profiles::{ProfileSource, StaticProfileTable};
