//! Deterministic random stream.
//!
//! [`Lcg`] is a 31-bit linear congruential generator
//!
//! ```text
//! s ← (1103515245 · s + 12345) mod 2^31
//! u = s / 2^31
//! ```
//!
//! The product is evaluated in `f64` and truncated back to 32 bits before
//! masking, so once it exceeds 2^53 its low bits are rounded exactly as a
//! double-precision implementation rounds them. This keeps the stream
//! identical to other implementations that use the same arithmetic, at the
//! cost of a short period: seeds settle into short cycles within about ten
//! thousand draws (10466 states for the default seed, a few hundred for
//! some others).
//!
//! The recurrence is part of the reproducibility contract: the same seed and
//! the same call sequence always yield the same trajectory. Every solve
//! owns its own instance; nothing in the crate shares a generator.

use rand::RngCore;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: i64 = 1_234_567;

const MULTIPLIER: f64 = 1_103_515_245.0;
const INCREMENT: f64 = 12_345.0;
const MASK: u32 = 0x7fff_ffff;
const MODULUS: f64 = 2_147_483_648.0;

/// Seeded 31-bit LCG with uniform, integer and Gaussian sampling.
///
/// Also implements [`RngCore`], so the [`rand::Rng`] extension methods can
/// draw from the same reproducible stream.
///
/// # Examples
///
/// ```
/// use spike_qubo::rng::Lcg;
///
/// let mut a = Lcg::new(7);
/// let mut b = Lcg::new(7);
/// for _ in 0..100 {
///     assert_eq!(a.uniform(), b.uniform());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Lcg {
    state: i32,
}

impl Lcg {
    /// Creates a generator. Only the low 32 bits of `seed` are kept, read
    /// as a signed integer, so negative seeds are accepted.
    pub fn new(seed: i64) -> Self {
        Self { state: seed as i32 }
    }

    /// Creates a generator from an optional seed, falling back to
    /// [`DEFAULT_SEED`].
    pub fn from_seed_or_default(seed: Option<i64>) -> Self {
        Self::new(seed.unwrap_or(DEFAULT_SEED))
    }

    fn step(&mut self) -> u32 {
        // |product| < 2^62, so the truncating cast is exact.
        let product = MULTIPLIER * f64::from(self.state) + INCREMENT;
        let next = (product as i64 as u32) & MASK;
        self.state = next as i32;
        next
    }

    /// Uniform sample in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        f64::from(self.step()) / MODULUS
    }

    /// Uniform index in `[0, max)` as `floor(uniform() * max)`.
    pub fn random_index(&mut self, max: usize) -> usize {
        (self.uniform() * max as f64) as usize
    }

    /// Standard normal sample via Box–Muller.
    ///
    /// Consumes exactly two uniform draws. A first draw of exactly zero is
    /// replaced by `1e-9` before taking its logarithm.
    pub fn gaussian(&mut self) -> f64 {
        let u1 = self.uniform();
        let u2 = self.uniform();
        box_muller(u1, u2)
    }
}

fn box_muller(u1: f64, u2: f64) -> f64 {
    let u1 = if u1 == 0.0 { 1e-9 } else { u1 };
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for Lcg {
    /// Combines the high 16 bits of two consecutive states; the low bits of
    /// a power-of-two LCG are weak.
    fn next_u32(&mut self) -> u32 {
        let hi = self.step() >> 15;
        let lo = self.step() >> 15;
        (hi << 16) | lo
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_u32());
        let lo = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_known_sequence() {
        // s1 = 1103515245 + 12345 is exact in f64.
        let mut rng = Lcg::new(1);
        assert_eq!(rng.step(), 1_103_527_590);
        // The second product exceeds 2^53 and is rounded before masking.
        assert_eq!(rng.step(), 377_401_600);
    }

    #[test]
    fn test_default_seed_stream() {
        let mut rng = Lcg::default();
        let states: Vec<u32> = (0..5).map(|_| rng.step()).collect();
        assert_eq!(
            states,
            vec![2_026_678_708, 1_074_874_880, 1_206_432_256, 810_547_712, 1_278_845_440]
        );

        let mut rng = Lcg::default();
        let draws: Vec<f64> = (0..5).map(|_| rng.uniform()).collect();
        let expected = [
            0.943_745_816_126_465_8,
            0.500_527_620_315_551_8,
            0.561_788_797_378_54,
            0.377_440_690_994_262_7,
            0.595_508_813_858_032_2,
        ];
        for (got, want) in draws.iter().zip(expected) {
            assert!((got - want).abs() < 1e-15, "{got} != {want}");
        }
    }

    #[test]
    fn test_negative_seed_wraps() {
        let mut a = Lcg::new(-5);
        let mut b = Lcg::new((1i64 << 32) - 5);
        let xs: Vec<u32> = (0..3).map(|_| a.step()).collect();
        assert_eq!(xs, vec![924_887_064, 112_136_704, 470_211_136]);
        for &x in &xs {
            assert_eq!(b.step(), x);
        }
    }

    #[test]
    fn test_short_cycle() {
        let mut rng = Lcg::default();
        for _ in 0..20_000 {
            rng.step();
        }
        let anchor = rng.step();
        let period = (1..=20_000).find(|_| rng.step() == anchor);
        assert_eq!(period, Some(10_466));
    }

    #[test]
    fn test_uniform_range() {
        let mut rng = Lcg::default();
        for _ in 0..10_000 {
            let u = rng.uniform();
            assert!((0.0..1.0).contains(&u), "out of range: {u}");
        }
    }

    #[test]
    fn test_random_index_range() {
        let mut rng = Lcg::new(99);
        let mut seen = [false; 7];
        for _ in 0..1_000 {
            let k = rng.random_index(7);
            assert!(k < 7);
            seen[k] = true;
        }
        assert!(seen.iter().all(|&s| s), "every index should be drawn");
    }

    #[test]
    fn test_gaussian_moments() {
        let mut rng = Lcg::new(2024);
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| rng.gaussian()).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|z| (z - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((var - 1.0).abs() < 0.1, "variance {var}");
    }

    #[test]
    fn test_gaussian_consumes_two_draws() {
        let mut a = Lcg::new(5);
        let mut b = Lcg::new(5);
        a.gaussian();
        b.uniform();
        b.uniform();
        assert_eq!(a.uniform(), b.uniform());
    }

    #[test]
    fn test_zero_first_draw_is_guarded() {
        let z = box_muller(0.0, 0.0);
        assert!(z.is_finite());
        assert!((z - (-2.0 * 1e-9f64.ln()).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_default_seed() {
        let mut a = Lcg::from_seed_or_default(None);
        let mut b = Lcg::new(DEFAULT_SEED);
        assert_eq!(a.uniform(), b.uniform());
    }

    #[test]
    fn test_rng_trait_is_reproducible() {
        let mut a = Lcg::new(11);
        let mut b = Lcg::new(11);
        let xs: Vec<usize> = (0..50).map(|_| a.random_range(0..10)).collect();
        let ys: Vec<usize> = (0..50).map(|_| b.random_range(0..10)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|&x| x < 10));
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut rng = Lcg::new(3);
        let mut buf = [0u8; 7];
        rng.fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }
}
