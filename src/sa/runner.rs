//! SA execution loop over single-variable flips.

use std::time::Instant;

use rand::Rng;
use tracing::debug;

use super::config::{CoolingSchedule, SaConfig};
use crate::error::QuboError;
use crate::qubo::{Qubo, SparseEnergy};
use crate::rng::Lcg;
use crate::trace::TracePoint;

/// Temperatures at or below this reject every uphill move.
const MIN_TEMPERATURE: f64 = 1e-9;

/// Steps between trace samples.
const TRACE_INTERVAL: usize = 10;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SaResult {
    /// Lowest energy seen.
    pub best_energy: f64,

    /// Assignment achieving `best_energy`.
    pub state: Vec<u8>,

    /// Total number of proposals evaluated.
    pub iterations: usize,

    /// Wall-clock duration in milliseconds.
    pub time_ms: f64,

    /// Final temperature when the budget ran out.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Current energy at step 0 and every 10th step.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub trace: Option<Vec<TracePoint>>,
}

/// Executes Simulated Annealing on a QUBO.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization.
    pub fn run(qubo: &Qubo, config: &SaConfig) -> Result<SaResult, QuboError> {
        config.validate()?;

        let n = qubo.n();
        let eval = SparseEnergy::new(qubo);
        let mut rng = Lcg::from_seed_or_default(config.seed);

        let mut x: Vec<u8> = (0..n).map(|_| u8::from(rng.random_bool(0.5))).collect();
        let mut energy = eval.energy(&x);
        let mut best = x.clone();
        let mut best_energy = energy;

        let mut trace = config
            .record_trace
            .then(|| vec![TracePoint { step: 0, energy }]);

        let start = Instant::now();
        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        for step in 1..=config.max_steps {
            let k = rng.random_range(0..n);
            let delta = eval.flip_delta(&x, k);

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else if temperature > MIN_TEMPERATURE {
                rng.random::<f64>() < (-delta / temperature).exp()
            } else {
                false
            };

            if accept {
                x[k] ^= 1;
                energy += delta;
                accepted_moves += 1;

                if energy < best_energy {
                    best_energy = energy;
                    best.copy_from_slice(&x);
                }
            }

            if let Some(points) = trace.as_mut() {
                if step % TRACE_INTERVAL == 0 {
                    points.push(TracePoint { step, energy });
                }
            }

            temperature = cool(temperature, config, step);
        }

        let time_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            best_energy,
            steps = config.max_steps,
            accepted_moves,
            time_ms,
            "simulated annealing finished"
        );

        Ok(SaResult {
            best_energy,
            state: best,
            iterations: config.max_steps,
            time_ms,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            trace,
        })
    }
}

/// Temperature after `step` proposals.
fn cool(temperature: f64, config: &SaConfig, step: usize) -> f64 {
    match config.cooling {
        CoolingSchedule::Geometric { alpha } => temperature * alpha,
        CoolingSchedule::Linear => {
            let remaining = 1.0 - step as f64 / config.max_steps as f64;
            (config.initial_temperature * remaining).max(0.0)
        }
    }
}
