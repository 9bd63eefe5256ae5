//! Sparse QUBO problems.
//!
//! A QUBO (Quadratic Unconstrained Binary Optimization) problem asks for a
//! binary vector `x` minimizing
//!
//! ```text
//! E(x) = Σ q_ij · x_i · x_j
//! ```
//!
//! over a sparse list of weighted pair terms. Diagonal terms (`i == j`)
//! act as linear coefficients since `x_i² = x_i` for binary `x_i`.
//!
//! This module provides the canonical [`Qubo`] type, the accepted input
//! encodings ([`QuboInput`]), the per-variable [`Adjacency`] index and the
//! [`SparseEnergy`] evaluator with its `O(degree)` flip delta.

mod adjacency;
mod energy;
mod input;
mod types;

pub use adjacency::Adjacency;
pub use energy::SparseEnergy;
pub use input::QuboInput;
pub use types::{Qubo, Term};
