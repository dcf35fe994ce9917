//! The vector concept.
//!
//! A [`VectorLike`] type behaves like a finite-dimensional column vector over
//! a [`Scalar`]: it has a row count known at compile time (or
//! [`RowCount::Dynamic`]), can be built from and assigned from any dense
//! `nalgebra` column expression, and converts to the canonical dense
//! representation [`DVector`].
//!
//! Structured types such as the state of a mechanical system implement the
//! trait directly and keep named fields, while plain `nalgebra` vectors get
//! the implementations below for free.
//!
//! # Example
//!
//! ```
//! use statevec_core::concept::{size, to_dense, VectorLike};
//! use statevec_core::types::{DVector, SVector};
//!
//! let dense = DVector::from_vec(vec![1.0, 2.0, 3.0]);
//! let v = SVector::<f64, 3>::from_dense(&dense);
//! assert_eq!(size(&v), 3);
//! assert_eq!(to_dense(&v), dense);
//! ```

use approx::RelativeEq;
use nalgebra::base::storage::RawStorage;
use nalgebra::{Dim, Matrix, U1};
use rand::Rng;
use std::fmt::Debug;
use std::marker::PhantomData;

use crate::{
    config::FormatConfig,
    error::{Result, VectorError},
    types::{DVector, RowCount, SVector, Scalar},
};

/// A type that can be operated on as a finite-dimensional column vector.
pub trait VectorLike: Clone + Debug + Sized {
    /// The scalar the coordinates are expressed in.
    type Scalar: Scalar;

    /// Number of rows, or [`RowCount::Dynamic`].
    const ROWS_AT_COMPILE_TIME: RowCount;

    /// Builds a vector from a dense column expression.
    ///
    /// # Panics
    ///
    /// Implementations panic when the expression has a row count the type
    /// cannot hold, the same way the dense layer does for out-of-range views.
    fn from_dense<R, S>(x: &Matrix<Self::Scalar, R, U1, S>) -> Self
    where
        R: Dim,
        S: RawStorage<Self::Scalar, R, U1>;

    /// Builds a vector from a dense column expression, checking its row count.
    fn try_from_dense<R, S>(x: &Matrix<Self::Scalar, R, U1, S>) -> Result<Self>
    where
        R: Dim,
        S: RawStorage<Self::Scalar, R, U1>,
    {
        let expected = Self::ROWS_AT_COMPILE_TIME;
        if !expected.admits(x.nrows()) {
            tracing::debug!(
                expected = %expected,
                actual = x.nrows(),
                "rejected dense vector"
            );
            return Err(VectorError::dimension_mismatch(expected, x.nrows()));
        }
        Ok(Self::from_dense(x))
    }

    /// Builds a vector from a statically sized dense vector.
    ///
    /// A static size the type cannot hold is a compile error.
    fn from_fixed<const M: usize>(x: &SVector<Self::Scalar, M>) -> Self {
        let () = FixedRows::<Self, M>::ADMITTED;
        Self::from_dense(x)
    }

    /// Overwrites this vector with the coordinates of a dense column expression.
    fn assign_dense<R, S>(&mut self, x: &Matrix<Self::Scalar, R, U1, S>)
    where
        R: Dim,
        S: RawStorage<Self::Scalar, R, U1>,
    {
        *self = Self::from_dense(x);
    }

    /// Converts to the canonical dense representation.
    fn to_dense(&self) -> DVector<Self::Scalar>;

    /// Runtime row count. Only consulted for dynamically sized types.
    fn dynamic_size(&self) -> usize {
        self.to_dense().len()
    }

    /// Display name of coordinate `index`.
    fn coordinate_name(&self, index: usize) -> String {
        format!("x{index}")
    }
}

struct FixedRows<V, const M: usize>(PhantomData<V>);

impl<V: VectorLike, const M: usize> FixedRows<V, M> {
    const ADMITTED: () = assert!(
        V::ROWS_AT_COMPILE_TIME.admits(M),
        "static row count of the dense vector does not match the vector type"
    );
}

struct StaticRows<V>(PhantomData<V>);

impl<V: VectorLike> StaticRows<V> {
    const FIXED: () = assert!(
        !V::ROWS_AT_COMPILE_TIME.is_dynamic(),
        "operation requires a statically sized vector type"
    );

    const ZERO: () = assert!(
        V::ROWS_AT_COMPILE_TIME.is_zero(),
        "null vector requested for a vector type with rows"
    );
}

impl<T: Scalar, const N: usize> VectorLike for SVector<T, N> {
    type Scalar = T;
    const ROWS_AT_COMPILE_TIME: RowCount = RowCount::Fixed(N);

    fn from_dense<R, S>(x: &Matrix<T, R, U1, S>) -> Self
    where
        R: Dim,
        S: RawStorage<T, R, U1>,
    {
        assert_eq!(
            x.nrows(),
            N,
            "cannot build a {}-row vector from {} rows",
            N,
            x.nrows()
        );
        Self::from_iterator(x.iter().copied())
    }

    fn to_dense(&self) -> DVector<T> {
        DVector::from_iterator(N, self.iter().copied())
    }
}

impl<T: Scalar> VectorLike for DVector<T> {
    type Scalar = T;
    const ROWS_AT_COMPILE_TIME: RowCount = RowCount::Dynamic;

    fn from_dense<R, S>(x: &Matrix<T, R, U1, S>) -> Self
    where
        R: Dim,
        S: RawStorage<T, R, U1>,
    {
        DVector::from_iterator(x.nrows(), x.iter().copied())
    }

    fn to_dense(&self) -> DVector<T> {
        self.clone()
    }

    fn dynamic_size(&self) -> usize {
        self.len()
    }
}

/// Evaluate the size of a vector.
///
/// Returns the static row count for fixed-size types and the runtime size
/// for dynamically sized ones.
pub fn size<V: VectorLike>(vector: &V) -> usize {
    match V::ROWS_AT_COMPILE_TIME {
        RowCount::Fixed(n) => n,
        RowCount::Dynamic => vector.dynamic_size(),
    }
}

/// Name of coordinate `index` of `vector`.
///
/// Defaults to `x0`, `x1`, ... unless the type overrides
/// [`VectorLike::coordinate_name`].
pub fn coordinate_name<V: VectorLike>(vector: &V, index: usize) -> String {
    vector.coordinate_name(index)
}

/// Converts any vector to the canonical dense representation.
pub fn to_dense<V: VectorLike>(vector: &V) -> DVector<V::Scalar> {
    vector.to_dense()
}

/// Whether two vectors have identical dense forms.
pub fn dense_eq<A, B>(a: &A, b: &B) -> bool
where
    A: VectorLike,
    B: VectorLike<Scalar = A::Scalar>,
{
    a.to_dense() == b.to_dense()
}

/// Whether two vectors have the same size and dense forms equal within `epsilon`.
pub fn dense_relative_eq<A, B>(a: &A, b: &B, epsilon: A::Scalar) -> bool
where
    A: VectorLike,
    B: VectorLike<Scalar = A::Scalar>,
{
    let (a, b) = (a.to_dense(), b.to_dense());
    a.len() == b.len() && a.relative_eq(&b, epsilon, epsilon)
}

/// [`dense_relative_eq`] at the scalar's [`Scalar::DEFAULT_TOLERANCE`].
pub fn dense_approx_eq<A, B>(a: &A, b: &B) -> bool
where
    A: VectorLike,
    B: VectorLike<Scalar = A::Scalar>,
{
    dense_relative_eq(a, b, <A::Scalar as Scalar>::DEFAULT_TOLERANCE)
}

/// The empty vector of a zero-row type.
///
/// Asking for the null vector of a type with rows is a compile error.
pub fn null_vector<V: VectorLike>() -> V {
    let () = StaticRows::<V>::ZERO;
    V::from_dense(&DVector::<V::Scalar>::zeros(0))
}

/// Returns a random vector with coordinates uniform in `[-1, 1)`.
///
/// Only statically sized types are supported; a dynamic type is a compile error.
pub fn random_vector<V: VectorLike>() -> V {
    random_vector_with(&mut rand::thread_rng())
}

/// Like [`random_vector`], drawing from the given generator.
pub fn random_vector_with<V, G>(rng: &mut G) -> V
where
    V: VectorLike,
    G: Rng + ?Sized,
{
    let () = StaticRows::<V>::FIXED;
    let rows = V::ROWS_AT_COMPILE_TIME.fixed().unwrap_or_default();
    let dense = DVector::from_fn(rows, |_, _| {
        nalgebra::convert::<f64, V::Scalar>(rng.gen_range(-1.0..1.0))
    });
    V::from_dense(&dense)
}

/// Renders one `name = value` entry per coordinate.
pub fn format_coordinates<V: VectorLike>(vector: &V, config: &FormatConfig) -> String {
    vector
        .to_dense()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let name = vector.coordinate_name(index);
            match config.precision {
                Some(digits) => format!("{name}{}{value:.digits$}", config.assignment),
                None => format!("{name}{}{value}", config.assignment),
            }
        })
        .collect::<Vec<_>>()
        .join(&config.separator)
}
