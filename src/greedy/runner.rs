//! Greedy sweep execution.

use std::time::Instant;

use rand::Rng;
use tracing::debug;

use super::config::GreedyConfig;
use crate::error::QuboError;
use crate::maxcut::{evaluate_cut, Graph};
use crate::qubo::{Qubo, SparseEnergy};
use crate::rng::Lcg;

/// Result of a greedy QUBO run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GreedyResult {
    /// Energy of the local optimum reached.
    pub best_energy: f64,
    /// The local optimum.
    pub state: Vec<u8>,
    /// Sweeps executed.
    pub passes: usize,
    /// Wall-clock duration in milliseconds.
    pub time_ms: f64,
}

/// Result of a greedy Max-Cut run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GreedyCutResult {
    /// Cut weight of the final partition.
    pub best_cut: f64,
    /// The partition.
    pub state: Vec<u8>,
    /// Sweeps executed.
    pub passes: usize,
    /// Wall-clock duration in milliseconds.
    pub time_ms: f64,
}

/// Greedy hill-climbing runner.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Descends to a 1-flip local minimum of `qubo`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spike_qubo::greedy::{GreedyConfig, GreedyRunner};
    /// use spike_qubo::qubo::{Qubo, Term};
    ///
    /// let qubo = Qubo::new(3, vec![Term::new(0, 0, -1.0), Term::new(2, 2, 1.0)]).unwrap();
    /// let result = GreedyRunner::run(&qubo, &GreedyConfig::default()).unwrap();
    /// assert_eq!(result.best_energy, -1.0);
    /// assert_eq!(result.state[0], 1);
    /// assert_eq!(result.state[2], 0);
    /// ```
    pub fn run(qubo: &Qubo, config: &GreedyConfig) -> Result<GreedyResult, QuboError> {
        config.validate()?;

        let n = qubo.n();
        let eval = SparseEnergy::new(qubo);
        let mut rng = Lcg::from_seed_or_default(config.seed);
        let mut x = random_assignment(n, &mut rng);
        let mut energy = eval.energy(&x);

        let start = Instant::now();
        let mut passes = 0usize;
        let mut improved = true;

        while improved && passes < config.max_passes {
            improved = false;
            passes += 1;

            for k in 0..n {
                let delta = eval.flip_delta(&x, k);
                if delta < 0.0 {
                    x[k] ^= 1;
                    energy += delta;
                    improved = true;
                }
            }
        }

        let time_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(best_energy = energy, passes, "greedy descent finished");

        Ok(GreedyResult {
            best_energy: energy,
            state: x,
            passes,
            time_ms,
        })
    }

    /// Climbs to a 1-flip local maximum of the cut weight of `graph`,
    /// evaluating the cut directly after every tentative flip.
    pub fn run_max_cut(graph: &Graph, config: &GreedyConfig) -> Result<GreedyCutResult, QuboError> {
        config.validate()?;
        graph.validate()?;

        let mut rng = Lcg::from_seed_or_default(config.seed);
        let mut x = random_assignment(graph.n, &mut rng);
        let mut current = evaluate_cut(graph, &x);

        let start = Instant::now();
        let mut passes = 0usize;
        let mut improved = true;

        while improved && passes < config.max_passes {
            improved = false;
            passes += 1;

            for k in 0..graph.n {
                x[k] ^= 1;
                let next = evaluate_cut(graph, &x);
                if next > current {
                    current = next;
                    improved = true;
                } else {
                    x[k] ^= 1; // revert
                }
            }
        }

        let time_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(best_cut = current, passes, "greedy max-cut finished");

        Ok(GreedyCutResult {
            best_cut: current,
            state: x,
            passes,
            time_ms,
        })
    }
}

fn random_assignment<R: Rng>(n: usize, rng: &mut R) -> Vec<u8> {
    (0..n).map(|_| u8::from(rng.random_bool(0.5))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maxcut::Edge;
    use crate::qubo::Term;

    #[test]
    fn test_greedy_reaches_local_minimum() {
        let qubo = Qubo::new(
            4,
            vec![
                Term::new(0, 0, -1.0),
                Term::new(1, 1, -2.0),
                Term::new(0, 1, 0.5),
                Term::new(2, 3, -1.0),
                Term::new(3, 3, 0.25),
            ],
        )
        .unwrap();
        let result = GreedyRunner::run(&qubo, &GreedyConfig::default().with_seed(4)).unwrap();

        let eval = SparseEnergy::new(&qubo);
        for k in 0..4 {
            assert!(
                eval.flip_delta(&result.state, k) >= 0.0,
                "flip {k} still improves"
            );
        }
        assert!((qubo.energy(&result.state) - result.best_energy).abs() < 1e-12);
    }

    #[test]
    fn test_greedy_pass_budget() {
        let qubo = Qubo::new(3, vec![Term::new(0, 1, -1.0), Term::new(1, 2, -1.0)]).unwrap();
        let result = GreedyRunner::run(&qubo, &GreedyConfig::default().with_max_passes(1))
            .unwrap();
        assert_eq!(result.passes, 1);
    }

    #[test]
    fn test_greedy_max_cut_local_optimum() {
        let graph = Graph::new(
            4,
            vec![
                Edge::new(0, 1, 1.0),
                Edge::new(1, 2, 1.0),
                Edge::new(2, 3, 1.0),
                Edge::new(3, 0, 1.0),
            ],
        );
        let result =
            GreedyRunner::run_max_cut(&graph, &GreedyConfig::default().with_seed(8)).unwrap();

        assert_eq!(result.best_cut, evaluate_cut(&graph, &result.state));
        let mut x = result.state.clone();
        for k in 0..4 {
            x[k] ^= 1;
            assert!(evaluate_cut(&graph, &x) <= result.best_cut);
            x[k] ^= 1;
        }
    }

    #[test]
    fn test_greedy_max_cut_rejects_bad_graph() {
        let graph = Graph::new(0, vec![]);
        assert!(GreedyRunner::run_max_cut(&graph, &GreedyConfig::default()).is_err());
    }
}
