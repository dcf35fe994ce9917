//! # Combined vector `[x₁; x₂]`
//!
//! [`CombinedVector`] stacks two vectors end to end. It owns both parts by
//! value and is itself [`VectorLike`], so composed states can be composed
//! again.
//!
//! ## Layout
//!
//! ```text
//! ├──── first ────┼─── second ───┤
//! 0               n₁             n₁ + n₂
//! ```
//!
//! The dense form is the dense form of `first` followed by the dense form of
//! `second`, and the row count is `n₁ + n₂`.
//!
//! ## Splitting a dense vector
//!
//! Building a combined vector from a single dense expression needs the point
//! where `first` ends:
//!
//! - `first` has a fixed row count `n₁`: split at `n₁`, `second` takes the rest;
//! - `first` is dynamic and `second` has a fixed row count `n₂`: `second`
//!   takes the last `n₂` rows;
//! - both are dynamic: there is no static split.
//!   [`VectorLike::from_dense`] is then a compile error and
//!   [`CombinedVector::from_dense_split`] must be given the split explicitly.
//!   [`VectorLike::assign_dense`] falls back to the current size of `first`.
//!
//! ## Example
//!
//! ```
//! use statevec_core::combined::CombinedVector;
//! use statevec_core::concept::{size, VectorLike};
//! use statevec_core::types::{DVector, SVector};
//!
//! let position = SVector::<f64, 3>::new(1.0, 2.0, 3.0);
//! let velocity = SVector::<f64, 2>::new(4.0, 5.0);
//! let state = CombinedVector::new(position, velocity);
//!
//! assert_eq!(size(&state), 5);
//! assert_eq!(state.to_dense(), DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0]));
//! ```

use nalgebra::base::storage::RawStorage;
use nalgebra::{Dim, Matrix, U1};
use std::fmt::{self, Display};
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    concept::{size, VectorLike},
    error::{Result, VectorError},
    types::{DVector, RowCount},
};

/// Two vectors stacked end to end.
///
/// # Type Parameters
///
/// - `V1`: type of the leading rows
/// - `V2`: type of the trailing rows, over the same scalar
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CombinedVector<V1, V2> {
    first: V1,
    second: V2,
}

struct SplitCheck<V1, V2>(PhantomData<(V1, V2)>);

impl<V1: VectorLike, V2: VectorLike> SplitCheck<V1, V2> {
    const DETERMINED: () = assert!(
        !(V1::ROWS_AT_COMPILE_TIME.is_dynamic() && V2::ROWS_AT_COMPILE_TIME.is_dynamic()),
        "cannot split a dense vector between two dynamically sized vectors; use from_dense_split"
    );
}

impl<V1, V2> CombinedVector<V1, V2>
where
    V1: VectorLike,
    V2: VectorLike<Scalar = V1::Scalar>,
{
    /// Creates a combined vector from its two parts.
    pub fn new(first: V1, second: V2) -> Self {
        Self { first, second }
    }

    /// Builds each part from its own dense expression.
    pub fn from_dense_pair<R1, S1, R2, S2>(
        x1: &Matrix<V1::Scalar, R1, U1, S1>,
        x2: &Matrix<V1::Scalar, R2, U1, S2>,
    ) -> Self
    where
        R1: Dim,
        S1: RawStorage<V1::Scalar, R1, U1>,
        R2: Dim,
        S2: RawStorage<V1::Scalar, R2, U1>,
    {
        Self::new(V1::from_dense(x1), V2::from_dense(x2))
    }

    /// Builds a combined vector whose first part takes the leading `first_rows` rows.
    ///
    /// # Panics
    ///
    /// Panics if `first_rows` exceeds the rows of `x`, or if either part
    /// rejects its share of the rows.
    pub fn from_dense_split<R, S>(x: &Matrix<V1::Scalar, R, U1, S>, first_rows: usize) -> Self
    where
        R: Dim,
        S: RawStorage<V1::Scalar, R, U1>,
    {
        let rest = x.nrows().saturating_sub(first_rows);
        Self::new(
            V1::from_dense(&x.rows(0, first_rows)),
            V2::from_dense(&x.rows(first_rows, rest)),
        )
    }

    /// Checked version of [`CombinedVector::from_dense_split`].
    pub fn try_from_dense_split<R, S>(
        x: &Matrix<V1::Scalar, R, U1, S>,
        first_rows: usize,
    ) -> Result<Self>
    where
        R: Dim,
        S: RawStorage<V1::Scalar, R, U1>,
    {
        let rows = x.nrows();
        if first_rows > rows {
            tracing::debug!(split = first_rows, rows, "split point past the end");
            return Err(VectorError::split_out_of_range(first_rows, rows));
        }
        let first = V1::try_from_dense(&x.rows(0, first_rows))?;
        let second = V2::try_from_dense(&x.rows(first_rows, rows - first_rows))?;
        Ok(Self::new(first, second))
    }

    /// Row at which `first` ends for a dense expression of `rows` rows, when
    /// the row counts decide it.
    pub const fn static_split(rows: usize) -> Option<usize> {
        match (V1::ROWS_AT_COMPILE_TIME, V2::ROWS_AT_COMPILE_TIME) {
            (RowCount::Fixed(n1), _) => Some(n1),
            (RowCount::Dynamic, RowCount::Fixed(n2)) => Some(rows.saturating_sub(n2)),
            (RowCount::Dynamic, RowCount::Dynamic) => None,
        }
    }

    /// The leading part.
    #[inline]
    pub fn first(&self) -> &V1 {
        &self.first
    }

    /// The trailing part.
    #[inline]
    pub fn second(&self) -> &V2 {
        &self.second
    }

    /// Consumes the combined vector and returns both parts.
    pub fn into_parts(self) -> (V1, V2) {
        (self.first, self.second)
    }

    /// Total number of rows.
    pub fn size(&self) -> usize {
        size(&self.first) + size(&self.second)
    }
}

impl<V1, V2> VectorLike for CombinedVector<V1, V2>
where
    V1: VectorLike,
    V2: VectorLike<Scalar = V1::Scalar>,
{
    type Scalar = V1::Scalar;
    const ROWS_AT_COMPILE_TIME: RowCount =
        V1::ROWS_AT_COMPILE_TIME.plus(V2::ROWS_AT_COMPILE_TIME);

    fn from_dense<R, S>(x: &Matrix<V1::Scalar, R, U1, S>) -> Self
    where
        R: Dim,
        S: RawStorage<V1::Scalar, R, U1>,
    {
        let () = SplitCheck::<V1, V2>::DETERMINED;
        let split = Self::static_split(x.nrows()).unwrap_or_default();
        Self::from_dense_split(x, split)
    }

    fn try_from_dense<R, S>(x: &Matrix<V1::Scalar, R, U1, S>) -> Result<Self>
    where
        R: Dim,
        S: RawStorage<V1::Scalar, R, U1>,
    {
        let rows = x.nrows();
        let expected = Self::ROWS_AT_COMPILE_TIME;
        if !expected.admits(rows) {
            tracing::debug!(expected = %expected, actual = rows, "rejected dense vector");
            return Err(VectorError::dimension_mismatch(expected, rows));
        }
        let Some(split) = Self::static_split(rows) else {
            tracing::debug!(rows, "no static split between dynamic parts");
            return Err(VectorError::ambiguous_split(rows));
        };
        Self::try_from_dense_split(x, split)
    }

    fn assign_dense<R, S>(&mut self, x: &Matrix<V1::Scalar, R, U1, S>)
    where
        R: Dim,
        S: RawStorage<V1::Scalar, R, U1>,
    {
        let rows = x.nrows();
        let split = Self::static_split(rows).unwrap_or_else(|| size(&self.first));
        self.first.assign_dense(&x.rows(0, split));
        self.second
            .assign_dense(&x.rows(split, rows.saturating_sub(split)));
    }

    fn to_dense(&self) -> DVector<V1::Scalar> {
        let first = self.first.to_dense();
        let second = self.second.to_dense();
        let (dim1, dim2) = (first.len(), second.len());

        let mut combined = DVector::zeros(dim1 + dim2);
        combined.rows_mut(0, dim1).copy_from(&first);
        combined.rows_mut(dim1, dim2).copy_from(&second);
        combined
    }

    fn dynamic_size(&self) -> usize {
        self.size()
    }
}

impl<V1: Display, V2: Display> Display for CombinedVector<V1, V2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.first)?;
        writeln!(f, "{}", self.second)
    }
}
