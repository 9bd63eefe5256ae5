//! Spike search.
//!
//! An incremental-energy local search over single-variable flips. What sets
//! it apart from classical simulated annealing is *where* the randomness
//! enters: each proposal's energy delta is corrupted with Gaussian noise
//! before the accept/reject decision, so the decision is made on a noisy
//! estimate rather than the exact change. The exact delta is still what
//! updates the running energy.
//!
//! Around that core the runner layers a two-phase annealing schedule
//! ([`AnnealingSchedule`](crate::schedule::AnnealingSchedule)), periodic
//! forced perturbations (soft restarts) and adaptive plateau escape
//! (reheats of the noise schedule).
//!
//! Runs are reproducible: the same problem, config and seed always produce
//! the same state, energy and trace.

mod config;
mod runner;

pub use config::SpikeConfig;
#[cfg(feature = "serde")]
pub use config::SpikeOptions;
pub use runner::{SpikeResult, SpikeRunner, TRACE_STRIDE};
