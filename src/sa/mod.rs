//! Simulated Annealing (SA) baseline.
//!
//! Classical single-flip annealing on a QUBO: proposals are accepted by the
//! Metropolis criterion on the *exact* energy delta, with a temperature that
//! follows a [`CoolingSchedule`]. Used as a reference point for the spike
//! search, which perturbs the delta itself.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
