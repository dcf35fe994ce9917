//! Error types for fallible vector conversions.
//!
//! The infallible constructors of the vector concept leave dimension checks to
//! the dense linear algebra layer. The `try_*` variants report the same
//! problems through [`VectorError`] instead.

use thiserror::Error;

/// Errors that can occur when populating a vector from a dense expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// The dense expression has the wrong number of rows.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected row count
        expected: String,
        /// Actual row count
        actual: String,
    },

    /// Both sides of a combined vector are dynamically sized, so a single
    /// dense expression does not say where the first one ends.
    #[error("Ambiguous split of {rows} rows between two dynamically sized vectors")]
    AmbiguousSplit {
        /// Rows of the dense expression
        rows: usize,
    },

    /// The requested split point lies past the end of the dense expression.
    #[error("Split point {split} is out of range for {rows} rows")]
    SplitOutOfRange {
        /// Requested number of leading rows
        split: usize,
        /// Rows of the dense expression
        rows: usize,
    },
}

impl VectorError {
    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create an AmbiguousSplit error.
    pub fn ambiguous_split(rows: usize) -> Self {
        Self::AmbiguousSplit { rows }
    }

    /// Create a SplitOutOfRange error.
    pub fn split_out_of_range(split: usize, rows: usize) -> Self {
        Self::SplitOutOfRange { split, rows }
    }
}

/// Result type alias for fallible vector operations.
pub type Result<T> = std::result::Result<T, VectorError>;
