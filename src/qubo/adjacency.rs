//! Per-variable term index.

use super::types::Qubo;

/// Maps each variable to the indices of the terms that reference it.
///
/// A diagonal term `(k, k)` is listed once under `k`; an off-diagonal term
/// `(i, j)` is listed under both endpoints. Built once per solve and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct Adjacency {
    by_var: Vec<Vec<usize>>,
}

impl Adjacency {
    pub fn build(qubo: &Qubo) -> Self {
        let mut by_var = vec![Vec::new(); qubo.n()];
        for (idx, t) in qubo.terms().iter().enumerate() {
            by_var[t.i].push(idx);
            if t.j != t.i {
                by_var[t.j].push(idx);
            }
        }
        Self { by_var }
    }

    /// Term indices touching variable `k`, in term order.
    pub fn terms_of(&self, k: usize) -> &[usize] {
        &self.by_var[k]
    }

    pub fn degree(&self, k: usize) -> usize {
        self.by_var[k].len()
    }

    /// Number of variables indexed.
    pub fn len(&self) -> usize {
        self.by_var.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_var.is_empty()
    }
}
