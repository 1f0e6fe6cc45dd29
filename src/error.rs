//! Error types for u-tsp.
//!
//! Every check runs when a solver is constructed. Once a run has started
//! nothing can fail: the computation is pure and in-memory.

use thiserror::Error;

/// Result type alias for u-tsp operations.
pub type TspResult<T> = Result<T, TspError>;

/// Unified error type for solver construction and input validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// A configuration parameter or the city count is out of bounds.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// Which parameter was rejected and why.
        message: String,
    },

    /// Fewer than two distinct city coordinates: no tour can be formed.
    #[error("degenerate input: {distinct} distinct city coordinate(s), at least 2 required")]
    DegenerateInput {
        /// Number of distinct coordinates found.
        distinct: usize,
    },

    /// City data itself is malformed (bad index set, non-finite coordinates).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of the malformed input.
        message: String,
    },
}

impl TspError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        TspError::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub(crate) fn input(message: impl Into<String>) -> Self {
        TspError::InvalidInput {
            message: message.into(),
        }
    }
}
