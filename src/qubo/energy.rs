//! Full and incremental energy evaluation.

use super::adjacency::Adjacency;
use super::types::Qubo;

/// Energy evaluator over a sparse QUBO.
///
/// Owns the [`Adjacency`] index so that [`flip_delta`](Self::flip_delta)
/// costs `O(degree(k))` rather than `O(terms)`.
///
/// # Examples
///
/// ```
/// use spike_qubo::qubo::{Qubo, SparseEnergy, Term};
///
/// let qubo = Qubo::new(2, vec![Term::new(0, 0, -1.0), Term::new(0, 1, 2.0)]).unwrap();
/// let eval = SparseEnergy::new(&qubo);
///
/// let x = [1, 1];
/// assert_eq!(eval.energy(&x), 1.0);
/// assert_eq!(eval.flip_delta(&x, 1), -2.0);
/// ```
#[derive(Debug, Clone)]
pub struct SparseEnergy<'a> {
    qubo: &'a Qubo,
    adjacency: Adjacency,
}

impl<'a> SparseEnergy<'a> {
    pub fn new(qubo: &'a Qubo) -> Self {
        Self {
            qubo,
            adjacency: Adjacency::build(qubo),
        }
    }

    pub fn qubo(&self) -> &'a Qubo {
        self.qubo
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Full energy of `x`.
    pub fn energy(&self, x: &[u8]) -> f64 {
        self.qubo.energy(x)
    }

    /// Exact energy change `E(flip(x, k)) - E(x)`.
    pub fn flip_delta(&self, x: &[u8], k: usize) -> f64 {
        let terms = self.qubo.terms();
        let old = f64::from(x[k]);
        let new = 1.0 - old;
        let mut delta = 0.0;
        for &idx in self.adjacency.terms_of(k) {
            let t = &terms[idx];
            if t.i == k && t.j == k {
                delta += t.q * (new - old);
            } else if t.i == k {
                let xj = f64::from(x[t.j]);
                delta += t.q * (new * xj - old * xj);
            } else {
                let xi = f64::from(x[t.i]);
                delta += t.q * (xi * new - xi * old);
            }
        }
        delta
    }
}
