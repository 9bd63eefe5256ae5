//! Error types for problem construction and solver configuration.
//!
//! All errors are raised eagerly, before any search starts. Once a runner
//! has accepted its inputs it always returns a (possibly mediocre) result.

/// Primary error type for the crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuboError {
    /// The canonical problem has no variables.
    #[error("problem has no variables")]
    EmptyProblem,

    /// A term or edge references a variable outside `[0, n)`.
    #[error("index {index} in term {term} out of bounds for {n} variables")]
    IndexOutOfBounds {
        /// Position of the offending term (or edge) in its input sequence.
        term: usize,
        /// The out-of-range variable index.
        index: usize,
        /// Declared variable count.
        n: usize,
    },

    /// A coefficient is NaN or infinite.
    #[error("non-finite weight {value} in term {term}")]
    NonFiniteWeight {
        /// Position of the offending term.
        term: usize,
        /// The rejected value.
        value: f64,
    },

    /// A configuration parameter is outside its valid range.
    #[error("invalid config: {name} {reason}")]
    InvalidConfig {
        /// Parameter name.
        name: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// A serialized problem matched none of the accepted encodings.
    #[error("unrecognized QUBO encoding: {0}")]
    UnrecognizedEncoding(String),
}

impl QuboError {
    pub(crate) fn config(name: &'static str, reason: impl Into<String>) -> Self {
        QuboError::InvalidConfig {
            name,
            reason: reason.into(),
        }
    }
}
