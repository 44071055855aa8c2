//! Command implementations

pub mod score;
pub mod simple;
pub mod simulate;

pub use score::{ScoreReport, score_pair};
pub use simple::run_simple;
pub use simulate::{SimulateConfig, SimulationResult, run_simulation};
