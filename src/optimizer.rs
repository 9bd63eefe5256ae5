//! Interchangeable QUBO optimizers behind one contract.
//!
//! Spike search, simulated annealing and greedy descent all take a
//! [`Qubo`] and return a best energy and assignment. [`Optimizer`] selects
//! one of them by configuration so callers (benchmarks, comparisons) can
//! treat them uniformly.

use crate::error::QuboError;
use crate::greedy::{GreedyConfig, GreedyRunner};
use crate::qubo::Qubo;
use crate::sa::{SaConfig, SaRunner};
use crate::spike::{SpikeConfig, SpikeRunner};

/// Common result shape shared by all optimizers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Outcome {
    pub best_energy: f64,
    pub state: Vec<u8>,
    /// Proposals (spike, SA) or sweeps (greedy) executed.
    pub iterations: usize,
    pub time_ms: f64,
}

/// An optimizer together with its configuration.
///
/// # Examples
///
/// ```
/// use spike_qubo::optimizer::Optimizer;
/// use spike_qubo::qubo::{Qubo, Term};
/// use spike_qubo::sa::SaConfig;
/// use spike_qubo::spike::SpikeConfig;
///
/// let qubo = Qubo::new(2, vec![Term::new(0, 0, -1.0), Term::new(1, 1, 1.0)]).unwrap();
///
/// for opt in [
///     Optimizer::Spike(SpikeConfig::default()),
///     Optimizer::SimulatedAnnealing(SaConfig::default()),
/// ] {
///     let outcome = opt.optimize(&qubo).unwrap();
///     assert_eq!(outcome.best_energy, -1.0, "{}", opt.name());
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "optimizer", content = "config", rename_all = "kebab-case")
)]
pub enum Optimizer {
    Spike(SpikeConfig),
    SimulatedAnnealing(SaConfig),
    Greedy(GreedyConfig),
}

impl Optimizer {
    /// Short stable identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Optimizer::Spike(_) => "spike",
            Optimizer::SimulatedAnnealing(_) => "simulated-annealing",
            Optimizer::Greedy(_) => "greedy",
        }
    }

    /// Runs the selected optimizer on `qubo`.
    pub fn optimize(&self, qubo: &Qubo) -> Result<Outcome, QuboError> {
        let outcome = match self {
            Optimizer::Spike(config) => {
                let r = SpikeRunner::run(qubo, config)?;
                Outcome {
                    best_energy: r.best_energy,
                    state: r.state,
                    iterations: r.iterations,
                    time_ms: r.time_ms,
                }
            }
            Optimizer::SimulatedAnnealing(config) => {
                let r = SaRunner::run(qubo, config)?;
                Outcome {
                    best_energy: r.best_energy,
                    state: r.state,
                    iterations: r.iterations,
                    time_ms: r.time_ms,
                }
            }
            Optimizer::Greedy(config) => {
                let r = GreedyRunner::run(qubo, config)?;
                Outcome {
                    best_energy: r.best_energy,
                    state: r.state,
                    iterations: r.passes,
                    time_ms: r.time_ms,
                }
            }
        };
        Ok(outcome)
    }
}
