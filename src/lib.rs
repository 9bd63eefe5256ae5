//! Spike-perturbed local search for sparse QUBO and Max-Cut problems.
//!
//! The core optimizer is the **spike search** ([`spike`]): a single-flip
//! local search with an exact `O(degree)` incremental energy delta, whose
//! accept/reject decision is made on a noise-corrupted delta. A two-phase
//! annealing schedule, periodic soft restarts and adaptive reheats steer
//! the trajectory.
//!
//! - **[`qubo`]**: canonical problem type, accepted input encodings,
//!   adjacency index and energy evaluator.
//! - **[`rng`]**: the seeded generator that makes runs reproducible.
//! - **[`schedule`]**: the two-phase temperature / noise curves.
//! - **[`spike`]**: the search loop.
//! - **[`maxcut`]**: Max-Cut → QUBO reduction and direct cut evaluation.
//! - **[`sa`]**, **[`greedy`]**: baseline optimizers sharing the same
//!   problem/result contract, selectable through [`optimizer::Optimizer`].
//!
//! # Example
//!
//! ```
//! use spike_qubo::qubo::{Qubo, Term};
//! use spike_qubo::spike::SpikeConfig;
//!
//! let qubo = Qubo::new(2, vec![
//!     Term::new(0, 0, -1.0),
//!     Term::new(1, 1, -1.0),
//!     Term::new(0, 1, 2.0),
//! ]).unwrap();
//!
//! let result = spike_qubo::solve(&qubo, &SpikeConfig::default().with_seed(7)).unwrap();
//! assert_eq!(result.best_energy, -1.0);
//! ```
//!
//! Every call owns its generator, adjacency index and schedule, so
//! independent solves may run concurrently on separate threads.

pub mod error;
pub mod greedy;
pub mod maxcut;
pub mod optimizer;
pub mod qubo;
pub mod rng;
pub mod sa;
pub mod schedule;
pub mod spike;
pub mod trace;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::QuboError;
pub use maxcut::{solve_max_cut, MaxCutResult};
pub use spike::{SpikeConfig, SpikeResult};

use qubo::{Qubo, QuboInput};
use spike::SpikeRunner;

/// Runs the spike search on a canonical problem.
pub fn solve(qubo: &Qubo, config: &SpikeConfig) -> Result<SpikeResult, QuboError> {
    SpikeRunner::run(qubo, config)
}

/// Canonicalizes `input` and runs the spike search on it.
///
/// # Examples
///
/// ```
/// use spike_qubo::qubo::{QuboInput, Term};
/// use spike_qubo::SpikeConfig;
///
/// let input = QuboInput::Wrapped { q: vec![Term::new(0, 0, -2.0), Term::new(1, 1, 1.0)] };
/// let result = spike_qubo::solve_input(input, &SpikeConfig::default()).unwrap();
/// assert_eq!(result.state, vec![1, 0]);
/// ```
pub fn solve_input(input: impl Into<QuboInput>, config: &SpikeConfig) -> Result<SpikeResult, QuboError> {
    let qubo = input.into().canonicalize()?;
    SpikeRunner::run(&qubo, config)
}
