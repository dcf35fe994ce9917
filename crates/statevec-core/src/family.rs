//! Vector type constructors.
//!
//! A [`VectorFamily`] is a vector type that is still missing its scalar: it
//! maps any [`Scalar`] `T` to a concrete [`VectorLike`] type through the
//! generic associated type [`VectorFamily::Vector`]. Composition works on
//! families rather than on concrete vectors so that a composed state can be
//! instantiated later for `f64`, `f32` or any other scalar.
//!
//! Each family also carries its [`RowShape`]: [`Empty`] for the zero-row
//! (null) vector, [`NonEmpty`] for everything else. The shape is what the
//! composition machinery dispatches on, so it must agree with the row count
//! of the family's vectors.
//!
//! Families declared with [`vector_family!`](crate::vector_family) get their
//! shape from the row count and are checked when the macro expands. A
//! hand-written impl is only checked when a composed vector is built or
//! taken apart through [`CombinedVectorUtil`](crate::builder::CombinedVectorUtil);
//! naming the composed type through
//! [`Combined`](crate::builder::Combined) alone trusts the declared shape.
//! [`has_consistent_shape`] answers the question for any family.

use std::marker::PhantomData;

use crate::{
    concept::VectorLike,
    types::{DVector, RowCount, SVector, Scalar},
};

mod sealed {
    pub trait Sealed {}
}

/// Shape marker of a family with zero rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Empty;

/// Shape marker of a family with at least one row, or a dynamic row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NonEmpty;

/// Type-level answer to "does this family have zero rows?".
pub trait RowShape: sealed::Sealed + 'static {
    /// `true` for [`Empty`].
    const IS_EMPTY: bool;
}

impl sealed::Sealed for Empty {}
impl sealed::Sealed for NonEmpty {}

impl RowShape for Empty {
    const IS_EMPTY: bool = true;
}

impl RowShape for NonEmpty {
    const IS_EMPTY: bool = false;
}

/// Shape of two families stacked end to end.
pub trait ShapeSum<Rhs: RowShape>: RowShape {
    /// Resulting shape.
    type Output: RowShape;
}

impl ShapeSum<Empty> for Empty {
    type Output = Empty;
}

impl ShapeSum<NonEmpty> for Empty {
    type Output = NonEmpty;
}

impl ShapeSum<Empty> for NonEmpty {
    type Output = NonEmpty;
}

impl ShapeSum<NonEmpty> for NonEmpty {
    type Output = NonEmpty;
}

/// A vector type parameterized only by its scalar.
///
/// # Example
///
/// ```
/// use statevec_core::concept::VectorLike;
/// use statevec_core::family::{FamilyVector, Fixed, VectorFamily};
/// use statevec_core::types::{DVector, SVector};
///
/// fn from_values<F: VectorFamily>(values: &[f64]) -> FamilyVector<F, f64> {
///     <FamilyVector<F, f64> as VectorLike>::from_dense(&DVector::from_vec(values.to_vec()))
/// }
///
/// let x: SVector<f64, 3> = from_values::<Fixed<3>>(&[1.0, 2.0, 3.0]);
/// assert_eq!(x[2], 3.0);
/// ```
pub trait VectorFamily: 'static {
    /// Whether the family is the null vector.
    type Shape: RowShape;

    /// The vector type over scalar `T`.
    type Vector<T: Scalar>: VectorLike<Scalar = T>;
}

/// The vector of family `F` over scalar `T`.
pub type FamilyVector<F, T> = <F as VectorFamily>::Vector<T>;

/// The shape marker of family `F`.
pub type ShapeOf<F> = <F as VectorFamily>::Shape;

/// Row count of the vectors of family `F`, read from its `f64` instantiation.
pub const fn row_count<F: VectorFamily>() -> RowCount {
    <FamilyVector<F, f64> as VectorLike>::ROWS_AT_COMPILE_TIME
}

/// Whether the declared shape of `F` agrees with the row count of its vectors.
pub const fn has_consistent_shape<F: VectorFamily>() -> bool {
    <F::Shape as RowShape>::IS_EMPTY == row_count::<F>().is_zero()
}

pub(crate) struct ShapeCheck<F>(PhantomData<F>);

impl<F: VectorFamily> ShapeCheck<F> {
    pub(crate) const CONSISTENT: () = assert!(
        has_consistent_shape::<F>(),
        "vector family declares a row shape that disagrees with its row count"
    );
}

/// Implements [`VectorFamily`] for a marker type, deriving the shape from
/// the row count.
///
/// `$vector` must be generic over the scalar only. The row count is either a
/// literal or `dynamic`, and it is checked against
/// [`VectorLike::ROWS_AT_COMPILE_TIME`] of `$vector<f64>` at compile time.
///
/// # Example
///
/// ```
/// use statevec_core::builder::Combined;
/// use statevec_core::concept::VectorLike;
/// use statevec_core::family::Fixed;
/// use statevec_core::types::{RowCount, SVector};
/// use statevec_core::vector_family;
///
/// type Planar<T> = SVector<T, 2>;
/// struct PlanarFamily;
/// vector_family!(PlanarFamily => Planar, rows = 2);
///
/// assert_eq!(
///     <Combined<PlanarFamily, Fixed<1>, f64> as VectorLike>::ROWS_AT_COMPILE_TIME,
///     RowCount::Fixed(3)
/// );
/// ```
///
/// A row count that disagrees with the vector type does not compile:
///
/// ```compile_fail
/// use statevec_core::types::SVector;
/// use statevec_core::vector_family;
///
/// type Empty<T> = SVector<T, 0>;
/// struct NotReallyPlanar;
/// vector_family!(NotReallyPlanar => Empty, rows = 2);
/// ```
#[macro_export]
macro_rules! vector_family {
    (@impl $family:ty => $vector:ident, $shape:ty, $rows:pat) => {
        impl $crate::family::VectorFamily for $family {
            type Shape = $shape;
            type Vector<T: $crate::types::Scalar> = $vector<T>;
        }

        const _: () = assert!(
            matches!(
                <$vector<f64> as $crate::concept::VectorLike>::ROWS_AT_COMPILE_TIME,
                $rows
            ),
            "row count given to vector_family! disagrees with the vector type"
        );
    };
    ($family:ty => $vector:ident, rows = 0) => {
        $crate::vector_family!(
            @impl $family => $vector, $crate::family::Empty, $crate::types::RowCount::Fixed(0)
        );
    };
    ($family:ty => $vector:ident, rows = dynamic) => {
        $crate::vector_family!(
            @impl $family => $vector, $crate::family::NonEmpty, $crate::types::RowCount::Dynamic
        );
    };
    ($family:ty => $vector:ident, rows = $rows:literal) => {
        $crate::vector_family!(
            @impl $family => $vector, $crate::family::NonEmpty, $crate::types::RowCount::Fixed($rows)
        );
    };
}

/// `nalgebra` column vectors with `N` rows.
///
/// Implemented for `N` up to 64. Larger static sizes need a family of their
/// own declared with [`vector_family!`](crate::vector_family), or [`Dynamic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fixed<const N: usize>;

/// The null vector family.
pub type Null = Fixed<0>;

/// Dynamically sized `nalgebra` column vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dynamic;

vector_family!(Dynamic => DVector, rows = dynamic);

// A const generic cannot select the shape, so each size gets its own impl.
macro_rules! impl_fixed_family {
    ($shape:ty => $($n:literal)+) => {
        $(
            impl VectorFamily for Fixed<$n> {
                type Shape = $shape;
                type Vector<T: Scalar> = SVector<T, $n>;
            }
        )+
    };
}

impl_fixed_family!(Empty => 0);
impl_fixed_family!(NonEmpty =>
    1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16
    17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
    33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48
    49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64
);
