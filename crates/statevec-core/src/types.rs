//! Scalar trait, row counts and dense type aliases.
//!
//! Every vector type in the library is parameterized by a [`Scalar`] and
//! reports its number of rows as a [`RowCount`], either a fixed number known
//! at compile time or [`RowCount::Dynamic`].

use nalgebra::{Const, OVector, RealField, Scalar as NalgebraScalar};
use num_traits::Float;
use std::fmt::{self, Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Field the coordinates of a vector live in (f32 or f64).
pub trait Scalar:
    NalgebraScalar + RealField + Float + Display + Debug + Default + Copy + Send + Sync + 'static
{
    /// Tolerance used by [`dense_approx_eq`](crate::concept::dense_approx_eq).
    const DEFAULT_TOLERANCE: Self;
}

impl Scalar for f32 {
    const DEFAULT_TOLERANCE: Self = 1e-5;
}

impl Scalar for f64 {
    const DEFAULT_TOLERANCE: Self = 1e-12;
}

/// Canonical dense representation: a dynamically sized column vector.
pub type DVector<T> = nalgebra::DVector<T>;

/// Statically sized column vector.
pub type SVector<T, const N: usize> = OVector<T, Const<N>>;

/// The empty vector over `T`, the identity element of composition.
pub type NullVector<T> = SVector<T, 0>;

/// Number of rows of a vector type, known at compile time.
///
/// `Dynamic` plays the role of a sentinel: the row count of such a type is
/// only known from a value, through its runtime size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RowCount {
    /// Exactly this many rows for every value of the type.
    Fixed(usize),
    /// Row count chosen per value at runtime.
    Dynamic,
}

impl RowCount {
    /// The static row count, if there is one.
    pub const fn fixed(self) -> Option<usize> {
        match self {
            Self::Fixed(n) => Some(n),
            Self::Dynamic => None,
        }
    }

    /// Whether the row count is only known at runtime.
    pub const fn is_dynamic(self) -> bool {
        matches!(self, Self::Dynamic)
    }

    /// Whether this is the zero-row (null vector) case.
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Fixed(0))
    }

    /// Row count of two vectors stacked end to end.
    ///
    /// The sum is dynamic as soon as either side is.
    pub const fn plus(self, other: Self) -> Self {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => Self::Fixed(a + b),
            _ => Self::Dynamic,
        }
    }

    /// Whether a dense expression with `rows` rows can populate this type.
    pub const fn admits(self, rows: usize) -> bool {
        match self {
            Self::Fixed(n) => n == rows,
            Self::Dynamic => true,
        }
    }
}

impl Display for RowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(n) => write!(f, "{n}"),
            Self::Dynamic => f.write_str("dynamic"),
        }
    }
}
