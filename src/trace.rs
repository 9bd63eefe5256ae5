//! Energy trace samples.

/// An energy sample tagged with the iteration it was taken at.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TracePoint {
    pub step: usize,
    pub energy: f64,
}

/// Keeps every `every`-th sample of a per-iteration trace, tagging each
/// kept sample with its position in the original sequence.
///
/// # Panics
///
/// Panics if `every == 0`.
pub fn decimate(samples: &[f64], every: usize) -> Vec<TracePoint> {
    assert!(every > 0, "decimation stride must be positive");
    samples
        .iter()
        .enumerate()
        .step_by(every)
        .map(|(step, &energy)| TracePoint { step, energy })
        .collect()
}
