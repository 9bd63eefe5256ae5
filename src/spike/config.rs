//! Spike search configuration.

use crate::error::QuboError;

/// Configuration for the spike search.
///
/// # Examples
///
/// ```
/// use spike_qubo::spike::SpikeConfig;
///
/// let config = SpikeConfig::default()
///     .with_max_iterations(5000)
///     .with_noise_std(0.3)
///     .with_soft_restart_interval(0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct SpikeConfig {
    /// Iteration budget. Also the length of the schedule buffers.
    #[cfg_attr(feature = "serde", serde(alias = "maxSteps"))]
    pub max_iterations: usize,

    /// Iterations treated as warmup: no soft restarts, no plateau handling,
    /// and a 0.25 acceptance bonus for non-improving moves.
    pub warmup_iters: usize,

    /// Consecutive non-improving iterations that trigger plateau handling.
    pub plateau_window: usize,

    /// Base magnitude of the Gaussian noise added to each proposal's delta.
    pub noise_std: f64,

    /// Soft restart period in iterations. 0 disables soft restarts.
    pub soft_restart_interval: usize,

    /// Fraction of variables flipped per soft restart (at least one).
    pub soft_restart_fraction: f64,

    /// Record the energy after every iteration.
    #[cfg_attr(feature = "serde", serde(alias = "trace"))]
    pub record_trace: bool,

    /// Random seed. `None` uses [`DEFAULT_SEED`](crate::rng::DEFAULT_SEED).
    pub seed: Option<i64>,
}

impl Default for SpikeConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1500,
            warmup_iters: 300,
            plateau_window: 300,
            noise_std: 0.2,
            soft_restart_interval: 250,
            soft_restart_fraction: 0.02,
            record_trace: false,
            seed: None,
        }
    }
}

impl SpikeConfig {
    /// Lightweight preset: longer budget, short warmup, lower noise, and
    /// no soft restarts.
    pub fn compact() -> Self {
        Self {
            max_iterations: 2000,
            warmup_iters: 100,
            plateau_window: 300,
            noise_std: 0.15,
            soft_restart_interval: 0,
            soft_restart_fraction: 0.0,
            record_trace: false,
            seed: None,
        }
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_warmup_iters(mut self, n: usize) -> Self {
        self.warmup_iters = n;
        self
    }

    pub fn with_plateau_window(mut self, n: usize) -> Self {
        self.plateau_window = n;
        self
    }

    pub fn with_noise_std(mut self, std: f64) -> Self {
        self.noise_std = std;
        self
    }

    pub fn with_soft_restart_interval(mut self, n: usize) -> Self {
        self.soft_restart_interval = n;
        self
    }

    pub fn with_soft_restart_fraction(mut self, fraction: f64) -> Self {
        self.soft_restart_fraction = fraction;
        self
    }

    pub fn with_record_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), QuboError> {
        if self.max_iterations == 0 {
            return Err(QuboError::config("max_iterations", "must be positive"));
        }
        if self.plateau_window == 0 {
            return Err(QuboError::config("plateau_window", "must be positive"));
        }
        if !self.noise_std.is_finite() || self.noise_std < 0.0 {
            return Err(QuboError::config(
                "noise_std",
                format!("must be finite and non-negative, got {}", self.noise_std),
            ));
        }
        if !(0.0..=1.0).contains(&self.soft_restart_fraction) {
            return Err(QuboError::config(
                "soft_restart_fraction",
                format!("must be in [0, 1], got {}", self.soft_restart_fraction),
            ));
        }
        Ok(())
    }
}

/// Caller-supplied overrides for a [`SpikeConfig`].
///
/// Every field is optional; [`apply`](SpikeOptions::apply) replaces only the
/// fields that were given. The JavaScript facade deserializes its options
/// object into this type and applies it over [`SpikeConfig::compact`].
///
/// # Examples
///
/// ```
/// use spike_qubo::spike::{SpikeConfig, SpikeOptions};
///
/// let options: SpikeOptions = serde_json::from_str(r#"{ "maxSteps": 800, "seed": -3 }"#).unwrap();
/// let config = options.apply(SpikeConfig::compact());
/// assert_eq!(config.max_iterations, 800);
/// assert_eq!(config.seed, Some(-3));
/// assert_eq!(config.warmup_iters, 100);
/// ```
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpikeOptions {
    #[serde(alias = "maxSteps")]
    pub max_iterations: Option<usize>,
    pub warmup_iters: Option<usize>,
    pub plateau_window: Option<usize>,
    pub noise_std: Option<f64>,
    pub soft_restart_interval: Option<usize>,
    pub soft_restart_fraction: Option<f64>,
    #[serde(alias = "trace")]
    pub record_trace: Option<bool>,
    pub seed: Option<i64>,
}

#[cfg(feature = "serde")]
impl SpikeOptions {
    /// Overlays the supplied fields on `base`.
    pub fn apply(self, base: SpikeConfig) -> SpikeConfig {
        SpikeConfig {
            max_iterations: self.max_iterations.unwrap_or(base.max_iterations),
            warmup_iters: self.warmup_iters.unwrap_or(base.warmup_iters),
            plateau_window: self.plateau_window.unwrap_or(base.plateau_window),
            noise_std: self.noise_std.unwrap_or(base.noise_std),
            soft_restart_interval: self
                .soft_restart_interval
                .unwrap_or(base.soft_restart_interval),
            soft_restart_fraction: self
                .soft_restart_fraction
                .unwrap_or(base.soft_restart_fraction),
            record_trace: self.record_trace.unwrap_or(base.record_trace),
            seed: self.seed.or(base.seed),
        }
    }
}
