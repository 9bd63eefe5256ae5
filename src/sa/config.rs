//! SA configuration and cooling schedules.

use crate::error::QuboError;

/// Cooling schedule for temperature reduction.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - Linear: fixed-duration cooling
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "camelCase")
)]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling: `T_k = T_0 * (1 - k / max_steps)`, reaching zero at
    /// the end of the budget.
    Linear,
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.995 }
    }
}

/// Configuration for the QUBO simulated annealing baseline.
///
/// # Examples
///
/// ```
/// use spike_qubo::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_max_steps(10_000)
///     .with_initial_temperature(2.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.999 })
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct SaConfig {
    /// Number of single-flip proposals.
    pub max_steps: usize,

    /// Starting temperature.
    pub initial_temperature: f64,

    /// Cooling schedule, applied once per step.
    pub cooling: CoolingSchedule,

    /// Record the current energy every 10 steps.
    pub record_trace: bool,

    /// Random seed. `None` uses [`DEFAULT_SEED`](crate::rng::DEFAULT_SEED).
    pub seed: Option<i64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_steps: 3000,
            initial_temperature: 5.0,
            cooling: CoolingSchedule::default(),
            record_trace: false,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
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
        if self.max_steps == 0 {
            return Err(QuboError::config("max_steps", "must be positive"));
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(QuboError::config(
                "initial_temperature",
                format!("must be positive, got {}", self.initial_temperature),
            ));
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if alpha <= 0.0 || alpha >= 1.0 {
                    return Err(QuboError::config(
                        "alpha",
                        format!("must be in (0, 1), got {alpha}"),
                    ));
                }
            }
            CoolingSchedule::Linear => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.max_steps, 3000);
        assert!((config.initial_temperature - 5.0).abs() < 1e-12);
        assert_eq!(config.cooling, CoolingSchedule::Geometric { alpha: 0.995 });
        assert!(!config.record_trace);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
        assert!(SaConfig::default()
            .with_cooling(CoolingSchedule::Linear)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_steps() {
        assert!(SaConfig::default().with_max_steps(0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.5 });
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_cooling_kinds() {
        let linear: CoolingSchedule = serde_json::from_str(r#"{ "kind": "linear" }"#).unwrap();
        assert_eq!(linear, CoolingSchedule::Linear);
        let geometric: CoolingSchedule =
            serde_json::from_str(r#"{ "kind": "geometric", "alpha": 0.9 }"#).unwrap();
        assert_eq!(geometric, CoolingSchedule::Geometric { alpha: 0.9 });
        assert!(serde_json::from_str::<CoolingSchedule>(r#"{ "kind": "logarithmic" }"#)
            .is_err());
    }
}
