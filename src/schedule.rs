//! Two-phase annealing schedule.
//!
//! For a budget of `M` iterations and normalized position `f = t / (M - 1)`:
//!
//! | phase | range      | temperature          | noise factor          |
//! |-------|------------|----------------------|-----------------------|
//! | 1     | `f < 0.4`  | `1.0 - 0.5a`         | `0.2 - 0.12a`         |
//! | 2     | `f >= 0.4` | `0.5 - 0.49b`        | `0.08 - 0.07b`        |
//!
//! with `a = f / 0.4` and `b = (f - 0.4) / 0.6`. The first 40% of the
//! budget is an exploratory burst; the remainder converges slowly.

/// Fraction of the budget covered by the exploratory phase.
pub const PHASE_SPLIT: f64 = 0.4;

/// Number of schedule entries amplified by one reheat.
pub const REHEAT_WINDOW: usize = 10;

/// Multiplier applied to each reheated noise entry.
pub const REHEAT_GAIN: f64 = 1.5;

/// Upper bound on a reheated noise factor.
pub const REHEAT_CAP: f64 = 0.3;

/// Precomputed temperature and noise-factor curves.
///
/// `noise_factor` is the only buffer mutated after construction, by
/// [`reheat`](Self::reheat). The temperature curve is never reheated.
#[derive(Debug, Clone)]
pub struct AnnealingSchedule {
    temperature: Vec<f64>,
    noise_factor: Vec<f64>,
}

impl AnnealingSchedule {
    /// Builds both curves for `max_iterations` steps.
    ///
    /// # Examples
    ///
    /// ```
    /// use spike_qubo::schedule::AnnealingSchedule;
    ///
    /// let s = AnnealingSchedule::two_phase(101);
    /// assert!((s.temperature(0) - 1.0).abs() < 1e-12);
    /// assert!((s.temperature(100) - 0.01).abs() < 1e-12);
    /// assert!((s.noise_factor(40) - 0.08).abs() < 1e-12);
    /// ```
    pub fn two_phase(max_iterations: usize) -> Self {
        let denom = if max_iterations > 1 {
            (max_iterations - 1) as f64
        } else {
            1.0
        };
        let (temperature, noise_factor) = (0..max_iterations)
            .map(|t| {
                let f = t as f64 / denom;
                if f < PHASE_SPLIT {
                    let a = f / PHASE_SPLIT;
                    (1.0 - 0.5 * a, 0.2 - 0.12 * a)
                } else {
                    let b = (f - PHASE_SPLIT) / (1.0 - PHASE_SPLIT);
                    (0.5 - 0.49 * b, 0.08 - 0.07 * b)
                }
            })
            .unzip();
        Self {
            temperature,
            noise_factor,
        }
    }

    pub fn len(&self) -> usize {
        self.temperature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty()
    }

    pub fn temperature(&self, t: usize) -> f64 {
        self.temperature[t]
    }

    pub fn noise_factor(&self, t: usize) -> f64 {
        self.noise_factor[t]
    }

    /// Amplifies the noise factors at `t .. t + REHEAT_WINDOW` (clipped to
    /// the buffer) by [`REHEAT_GAIN`], capped at [`REHEAT_CAP`].
    pub fn reheat(&mut self, t: usize) {
        let end = (t + REHEAT_WINDOW).min(self.noise_factor.len());
        for factor in &mut self.noise_factor[t.min(end)..end] {
            *factor = (*factor * REHEAT_GAIN).min(REHEAT_CAP);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let s = AnnealingSchedule::two_phase(1000);
        assert_eq!(s.len(), 1000);
        assert!((s.temperature(0) - 1.0).abs() < 1e-12);
        assert!((s.noise_factor(0) - 0.2).abs() < 1e-12);
        assert!((s.temperature(999) - 0.01).abs() < 1e-12);
        assert!((s.noise_factor(999) - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_monotone_decreasing() {
        let s = AnnealingSchedule::two_phase(500);
        for t in 1..s.len() {
            assert!(s.temperature(t) <= s.temperature(t - 1) + 1e-12);
            assert!(s.noise_factor(t) <= s.noise_factor(t - 1) + 1e-12);
        }
    }

    #[test]
    fn test_phase_boundary_is_continuous() {
        // f = 0.4 exactly at t = 40 with M = 101
        let s = AnnealingSchedule::two_phase(101);
        assert!((s.temperature(39) - (1.0 - 0.5 * (0.39 / 0.4))).abs() < 1e-12);
        assert!((s.temperature(40) - 0.5).abs() < 1e-12);
        assert!((s.noise_factor(40) - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_single_iteration_budget() {
        let s = AnnealingSchedule::two_phase(1);
        assert_eq!(s.len(), 1);
        assert!((s.temperature(0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reheat_window_and_cap() {
        let mut s = AnnealingSchedule::two_phase(100);
        let before: Vec<f64> = (0..100).map(|t| s.noise_factor(t)).collect();
        let temps: Vec<f64> = (0..100).map(|t| s.temperature(t)).collect();

        s.reheat(50);

        for t in 0..100 {
            let expected = if (50..60).contains(&t) {
                (before[t] * REHEAT_GAIN).min(REHEAT_CAP)
            } else {
                before[t]
            };
            assert!((s.noise_factor(t) - expected).abs() < 1e-15, "t={t}");
            assert_eq!(s.temperature(t), temps[t]);
        }

        // Repeated reheats saturate at the cap.
        for _ in 0..20 {
            s.reheat(0);
        }
        assert!((s.noise_factor(0) - REHEAT_CAP).abs() < 1e-15);
    }

    #[test]
    fn test_reheat_clipped_at_end() {
        let mut s = AnnealingSchedule::two_phase(20);
        let last = s.noise_factor(19);
        s.reheat(15);
        assert!((s.noise_factor(19) - last * REHEAT_GAIN).abs() < 1e-15);
        s.reheat(25);
    }
}
