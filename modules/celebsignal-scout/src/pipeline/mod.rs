pub mod runner;
pub mod stats;

pub use runner::{Phase, PhaseRunner, RunOutcome, RunSettings};
pub use stats::RunStats;
