//! Spike search execution loop.
//!
//! # Algorithm
//!
//! 1. Draw a random initial assignment and compute its energy.
//! 2. At each iteration `t` (1-based count `it`):
//!    a. **Soft restart**: past warmup, when the restart interval divides
//!    `it`, force-flip `max(1, ⌊fraction · n⌋)` random variables.
//!    b. **Propose** a single random flip and compute its exact delta.
//!    c. **Perturb** the delta with `N(0, 1) · noise_factor[t] · noise_std`.
//!    d. **Accept** if the noisy delta is negative, otherwise with
//!    probability `min(1, exp(-delta / T[t]) + bonus)`.
//!    e. **Apply** the exact delta on acceptance and track the best state.
//!    f. **Plateau**: past warmup, after `plateau_window` non-improving
//!    iterations either reheat the noise schedule or, if the noise is
//!    already saturated, stop early.
//! 3. Return the best assignment seen.

use std::time::Instant;

use tracing::{debug, trace};

use super::config::SpikeConfig;
use crate::error::QuboError;
use crate::qubo::{Qubo, SparseEnergy};
use crate::rng::{Lcg, DEFAULT_SEED};
use crate::schedule::AnnealingSchedule;
use crate::trace::{decimate, TracePoint};

/// Temperatures at or below this are treated as zero.
const MIN_TEMPERATURE: f64 = 1e-9;

/// Acceptance bonus for non-improving moves during warmup.
const WARMUP_BONUS: f64 = 0.25;

/// A plateau reheats while the effective noise is below this share of
/// `noise_std`; at or above it the run terminates.
const REHEAT_THRESHOLD: f64 = 0.3;

/// Stride used by [`SpikeResult::decimated_trace`].
pub const TRACE_STRIDE: usize = 10;

/// Result of a spike search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SpikeResult {
    /// Lowest energy seen.
    pub best_energy: f64,

    /// Assignment achieving `best_energy`.
    pub state: Vec<u8>,

    /// Iterations actually executed.
    pub iterations: usize,

    /// Wall-clock duration of the search in milliseconds.
    pub time_ms: f64,

    /// Whether the run stopped on a saturated plateau before its budget.
    pub early_termination: bool,

    /// Number of plateau-triggered reheats.
    pub plateau_resets: usize,

    /// Number of soft restarts executed.
    pub soft_restarts: usize,

    /// Initial energy followed by the energy after every iteration.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub trace: Option<Vec<f64>>,
}

impl SpikeResult {
    /// The recorded trace reduced to every [`TRACE_STRIDE`]-th sample.
    pub fn decimated_trace(&self) -> Option<Vec<TracePoint>> {
        self.trace
            .as_deref()
            .map(|samples| decimate(samples, TRACE_STRIDE))
    }
}

/// Mutable state owned by a single run.
struct SearchState {
    x: Vec<u8>,
    energy: f64,
    best: Vec<u8>,
    best_energy: f64,
    no_improvement: usize,
}

impl SearchState {
    fn new(x: Vec<u8>, energy: f64) -> Self {
        Self {
            best: x.clone(),
            x,
            energy,
            best_energy: energy,
            no_improvement: 0,
        }
    }

    fn flip(&mut self, k: usize, delta: f64) {
        self.x[k] ^= 1;
        self.energy += delta;
    }

    /// Snapshots the current assignment if it beats the best so far.
    fn capture_if_better(&mut self) -> bool {
        if self.energy < self.best_energy {
            self.best_energy = self.energy;
            self.best.copy_from_slice(&self.x);
            true
        } else {
            false
        }
    }
}

/// Executes the spike search.
pub struct SpikeRunner;

impl SpikeRunner {
    /// Runs the spike search on `qubo`.
    ///
    /// Returns an error only if `config` is invalid; any accepted input
    /// produces a result.
    ///
    /// # Examples
    ///
    /// ```
    /// use spike_qubo::qubo::{Qubo, Term};
    /// use spike_qubo::spike::{SpikeConfig, SpikeRunner};
    ///
    /// let qubo = Qubo::new(2, vec![
    ///     Term::new(0, 0, -1.0),
    ///     Term::new(1, 1, -1.0),
    ///     Term::new(0, 1, 2.0),
    /// ]).unwrap();
    ///
    /// let result = SpikeRunner::run(&qubo, &SpikeConfig::default().with_seed(1)).unwrap();
    /// assert_eq!(result.best_energy, -1.0);
    /// ```
    pub fn run(qubo: &Qubo, config: &SpikeConfig) -> Result<SpikeResult, QuboError> {
        config.validate()?;

        let n = qubo.n();
        let max_iterations = config.max_iterations;
        debug!(
            n,
            terms = qubo.terms().len(),
            max_iterations,
            seed = config.seed.unwrap_or(DEFAULT_SEED),
            "spike search started"
        );

        let eval = SparseEnergy::new(qubo);
        let mut rng = Lcg::from_seed_or_default(config.seed);
        let mut schedule = AnnealingSchedule::two_phase(max_iterations);

        let x: Vec<u8> = (0..n).map(|_| u8::from(rng.uniform() >= 0.5)).collect();
        let energy = eval.energy(&x);
        let mut state = SearchState::new(x, energy);

        let mut trace = config.record_trace.then(|| {
            let mut samples = Vec::with_capacity(max_iterations + 1);
            samples.push(energy);
            samples
        });

        let start = Instant::now();
        let mut iterations = 0usize;
        let mut early_termination = false;
        let mut plateau_resets = 0usize;
        let mut soft_restarts = 0usize;

        for t in 0..max_iterations {
            let iteration = t + 1;
            iterations = iteration;
            let warming_up = iteration <= config.warmup_iters;

            // 1. Soft restart
            if !warming_up
                && config.soft_restart_interval > 0
                && iteration % config.soft_restart_interval == 0
            {
                let flips = ((config.soft_restart_fraction * n as f64) as usize).max(1);
                for _ in 0..flips {
                    let k = rng.random_index(n);
                    let delta = eval.flip_delta(&state.x, k);
                    state.flip(k, delta);
                }
                state.capture_if_better();
                state.no_improvement = 0;
                soft_restarts += 1;
                trace!(iteration, flips, energy = state.energy, "soft restart");
            }

            // 2. Propose
            let k = rng.random_index(n);
            let delta = eval.flip_delta(&state.x, k);

            // 3. Perturb
            let sigma = schedule.noise_factor(t) * config.noise_std;
            let noisy_delta = if sigma > 0.0 {
                delta + sigma * rng.gaussian()
            } else {
                delta
            };

            // 4. Accept / reject
            let temperature = schedule.temperature(t);
            let accept = if noisy_delta < 0.0 {
                true
            } else if temperature > MIN_TEMPERATURE {
                let bonus = if warming_up { WARMUP_BONUS } else { 0.0 };
                let p = ((-noisy_delta / temperature).exp() + bonus).min(1.0);
                rng.uniform() < p
            } else {
                false
            };

            // 5. Apply with the exact delta
            if accept {
                state.flip(k, delta);
                if state.capture_if_better() {
                    state.no_improvement = 0;
                } else {
                    state.no_improvement += 1;
                }
            } else {
                state.no_improvement += 1;
            }

            // 6. Trace
            if let Some(samples) = trace.as_mut() {
                samples.push(state.energy);
            }

            // 7. Plateau
            if !warming_up && state.no_improvement >= config.plateau_window {
                let current_noise = schedule.noise_factor(t) * config.noise_std;
                if current_noise < config.noise_std * REHEAT_THRESHOLD {
                    schedule.reheat(t);
                    state.no_improvement = 0;
                    plateau_resets += 1;
                    trace!(iteration, plateau_resets, "plateau reheat");
                } else if iteration < max_iterations {
                    early_termination = true;
                    debug!(iteration, current_noise, "noise saturated on plateau, stopping");
                    break;
                }
            }
        }

        debug_assert!(
            (state.energy - eval.energy(&state.x)).abs() <= 1e-6 * (1.0 + state.energy.abs()),
            "incremental energy drifted from full recomputation"
        );

        let time_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            best_energy = state.best_energy,
            iterations,
            early_termination,
            plateau_resets,
            soft_restarts,
            time_ms,
            "spike search finished"
        );

        Ok(SpikeResult {
            best_energy: state.best_energy,
            state: state.best,
            iterations,
            time_ms,
            early_termination,
            plateau_resets,
            soft_restarts,
            trace,
        })
    }
}
