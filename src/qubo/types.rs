//! Canonical sparse QUBO representation.

use crate::error::QuboError;

/// A weighted pair term `q · x_i · x_j`.
///
/// Terms with `i == j` are linear (diagonal) contributions. Duplicate pairs
/// are allowed and accumulate additively.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(usize, usize, f64)", into = "(usize, usize, f64)")
)]
pub struct Term {
    /// First variable index.
    pub i: usize,
    /// Second variable index.
    pub j: usize,
    /// Coefficient.
    pub q: f64,
}

impl Term {
    pub fn new(i: usize, j: usize, q: f64) -> Self {
        Self { i, j, q }
    }

    /// Returns `true` for a linear (`i == j`) term.
    pub fn is_diagonal(&self) -> bool {
        self.i == self.j
    }
}

impl From<(usize, usize, f64)> for Term {
    fn from((i, j, q): (usize, usize, f64)) -> Self {
        Term { i, j, q }
    }
}

impl From<Term> for (usize, usize, f64) {
    fn from(t: Term) -> Self {
        (t.i, t.j, t.q)
    }
}

/// A validated sparse QUBO: `n` binary variables and a list of pair terms.
///
/// Every term index lies in `[0, n)` and every weight is finite. Construct
/// with [`Qubo::new`] or through [`QuboInput`](super::QuboInput).
///
/// # Examples
///
/// ```
/// use spike_qubo::qubo::{Qubo, Term};
///
/// let qubo = Qubo::new(2, vec![
///     Term::new(0, 0, -1.0),
///     Term::new(1, 1, -1.0),
///     Term::new(0, 1, 2.0),
/// ]).unwrap();
///
/// assert_eq!(qubo.energy(&[1, 0]), -1.0);
/// assert_eq!(qubo.energy(&[1, 1]), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "super::QuboInput")
)]
pub struct Qubo {
    n: usize,
    terms: Vec<Term>,
}

impl Qubo {
    /// Creates a problem, checking `n > 0`, index bounds and finite weights.
    pub fn new(n: usize, terms: Vec<Term>) -> Result<Self, QuboError> {
        if n == 0 {
            return Err(QuboError::EmptyProblem);
        }
        for (pos, t) in terms.iter().enumerate() {
            for index in [t.i, t.j] {
                if index >= n {
                    return Err(QuboError::IndexOutOfBounds { term: pos, index, n });
                }
            }
            if !t.q.is_finite() {
                return Err(QuboError::NonFiniteWeight {
                    term: pos,
                    value: t.q,
                });
            }
        }
        Ok(Self { n, terms })
    }

    /// Number of binary variables.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Full energy `Σ q · x_i · x_j` over all terms.
    ///
    /// # Panics
    ///
    /// Panics if `x.len() != self.n()`.
    pub fn energy(&self, x: &[u8]) -> f64 {
        assert_eq!(x.len(), self.n, "assignment length must equal n");
        self.terms
            .iter()
            .map(|t| t.q * f64::from(x[t.i]) * f64::from(x[t.j]))
            .sum()
    }

    /// Consumes the problem, returning its terms.
    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }
}
