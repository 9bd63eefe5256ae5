//! Greedy hill-climbing baselines.
//!
//! Starting from a random assignment, sweep the variables in index order
//! and flip any variable whose flip strictly improves the objective. Stop
//! after a sweep with no improvement or when the pass budget runs out.
//! The result is a 1-flip local optimum, used as a cheap reference point.

mod config;
mod runner;

pub use config::GreedyConfig;
pub use runner::{GreedyCutResult, GreedyResult, GreedyRunner};
