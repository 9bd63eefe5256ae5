//! Greedy hill-climbing configuration.

use crate::error::QuboError;

/// Configuration for the greedy baselines.
///
/// # Examples
///
/// ```
/// use spike_qubo::greedy::GreedyConfig;
///
/// let config = GreedyConfig::default().with_max_passes(25).with_seed(3);
/// assert_eq!(config.max_passes, 25);
/// assert_eq!(config.seed, Some(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct GreedyConfig {
    /// Maximum number of full sweeps over the variables.
    pub max_passes: usize,
    /// Seed for the random starting assignment.
    pub seed: Option<i64>,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            max_passes: 10,
            seed: None,
        }
    }
}

impl GreedyConfig {
    /// Sets the maximum number of sweeps.
    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), QuboError> {
        if self.max_passes == 0 {
            return Err(QuboError::config("max_passes", "must be positive"));
        }
        Ok(())
    }
}
