//! Simulation pipeline: path generation, progress reporting, orchestration.

pub mod engine;
pub mod gbm;
pub mod progress;

pub use engine::{SimulationEngine, SimulationResult};
pub use progress::{CancelToken, ProgressReporter};
