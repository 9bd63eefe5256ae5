//! Accepted QUBO encodings and their canonicalization.

use super::types::{Qubo, Term};
use crate::error::QuboError;

/// The three equivalent ways a QUBO may be supplied.
///
/// All of them are resolved to a single [`Qubo`] by [`canonicalize`]
/// before any algorithm runs. With the `serde` feature the enum
/// deserializes untagged, so the JSON shapes
///
/// ```text
/// [[0, 0, -1], [1, 1, -1], [0, 1, 2]]
/// { "Q": [[0, 0, -1], ...] }
/// { "n": 2, "terms": [[0, 0, -1], ...] }
/// { "terms": [[0, 0, -1], ...] }
/// ```
///
/// are all accepted and anything else is rejected.
///
/// [`canonicalize`]: QuboInput::canonicalize
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(untagged)
)]
pub enum QuboInput {
    /// Terms with an optional explicit variable count.
    Sparse {
        #[cfg_attr(feature = "serde", serde(default))]
        n: Option<usize>,
        terms: Vec<Term>,
    },
    /// Terms wrapped in a `Q` field. `n` is inferred.
    Wrapped {
        #[cfg_attr(feature = "serde", serde(rename = "Q"))]
        q: Vec<Term>,
    },
    /// A bare term sequence. `n` is inferred.
    Terms(Vec<Term>),
}

impl QuboInput {
    /// Resolves the encoding into a validated [`Qubo`].
    ///
    /// A declared `n` is kept, so trailing variables that no term touches
    /// are preserved. Otherwise `n` is one past the largest referenced index.
    pub fn canonicalize(self) -> Result<Qubo, QuboError> {
        match self {
            QuboInput::Sparse { n: Some(n), terms } => Qubo::new(n, terms),
            QuboInput::Sparse { n: None, terms }
            | QuboInput::Wrapped { q: terms }
            | QuboInput::Terms(terms) => {
                let n = terms
                    .iter()
                    .map(|t| t.i.max(t.j) + 1)
                    .max()
                    .ok_or(QuboError::EmptyProblem)?;
                Qubo::new(n, terms)
            }
        }
    }

    /// Deserializes any accepted encoding, mapping shape mismatches to
    /// [`QuboError::UnrecognizedEncoding`].
    #[cfg(feature = "serde")]
    pub fn deserialize_from<'de, D>(deserializer: D) -> Result<Self, QuboError>
    where
        D: serde::Deserializer<'de>,
    {
        <Self as serde::Deserialize>::deserialize(deserializer)
            .map_err(|e| QuboError::UnrecognizedEncoding(e.to_string()))
    }
}

impl TryFrom<QuboInput> for Qubo {
    type Error = QuboError;

    fn try_from(input: QuboInput) -> Result<Self, Self::Error> {
        input.canonicalize()
    }
}

impl From<Vec<Term>> for QuboInput {
    fn from(terms: Vec<Term>) -> Self {
        QuboInput::Terms(terms)
    }
}

impl From<Qubo> for QuboInput {
    fn from(qubo: Qubo) -> Self {
        let n = qubo.n();
        QuboInput::Sparse {
            n: Some(n),
            terms: qubo.into_terms(),
        }
    }
}
