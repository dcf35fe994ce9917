//! Compile-time composition of vector families.
//!
//! [`CombinedFamily<F1, F2>`] is the family of vectors made of an `F1` part
//! followed by an `F2` part. Composing with the null vector does not wrap:
//!
//! | `F1` shape | `F2` shape | `CombinedFamily<F1, F2>` |
//! |------------|------------|--------------------------|
//! | non-empty  | non-empty  | [`Pair<F1, F2>`]         |
//! | non-empty  | empty      | `F1`                     |
//! | empty      | non-empty  | `F2`                     |
//! | empty      | empty      | `F1`                     |
//!
//! When both sides are empty the left operand wins.
//!
//! [`CombinedVectorUtil`] takes composed values apart and puts them together
//! without the caller knowing which row of the table applied. The family
//! choice and the accessors live in the same [`Composition`] impl, so they
//! always agree.
//!
//! # Example
//!
//! ```
//! use statevec_core::builder::{Combined, CombinedVectorUtil};
//! use statevec_core::concept::VectorLike;
//! use statevec_core::family::{Fixed, Null};
//! use statevec_core::types::{DVector, SVector};
//!
//! type Util = CombinedVectorUtil<Fixed<3>, Fixed<2>>;
//! let state: Combined<Fixed<3>, Fixed<2>, f64> = Util::combine(
//!     SVector::<f64, 3>::new(1.0, 2.0, 3.0),
//!     SVector::<f64, 2>::new(4.0, 5.0),
//! );
//! assert_eq!(state.to_dense(), DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0]));
//!
//! // Composing with the null family returns the other operand unchanged.
//! let collapsed: SVector<f64, 2> = CombinedVectorUtil::<Null, Fixed<2>>::combine(
//!     SVector::<f64, 0>::zeros(),
//!     SVector::<f64, 2>::new(7.0, 8.0),
//! );
//! assert_eq!(collapsed, SVector::<f64, 2>::new(7.0, 8.0));
//! ```
//!
//! The table is read from the declared [`VectorFamily::Shape`]. Families
//! declared with [`vector_family!`](crate::vector_family) cannot get it
//! wrong. A hand-written family whose shape disagrees with its row count is
//! rejected as soon as [`CombinedVectorUtil`] touches it:
//!
//! ```compile_fail
//! use statevec_core::builder::CombinedVectorUtil;
//! use statevec_core::family::{Fixed, NonEmpty, VectorFamily};
//! use statevec_core::types::{SVector, Scalar};
//!
//! struct Misdeclared;
//!
//! impl VectorFamily for Misdeclared {
//!     type Shape = NonEmpty;
//!     type Vector<T: Scalar> = SVector<T, 0>;
//! }
//!
//! let _ = CombinedVectorUtil::<Misdeclared, Fixed<2>>::combine(
//!     SVector::<f64, 0>::zeros(),
//!     SVector::<f64, 2>::new(7.0, 8.0),
//! );
//! ```
//!
//! Naming the type through [`Combined`] alone does not run that check; use
//! [`has_consistent_shape`](crate::family::has_consistent_shape) to test a
//! hand-written family.

use std::borrow::Cow;
use std::marker::PhantomData;

use crate::{
    combined::CombinedVector,
    concept::null_vector,
    family::{Empty, FamilyVector, NonEmpty, ShapeCheck, ShapeOf, ShapeSum, VectorFamily},
    types::Scalar,
};

mod sealed {
    pub trait Sealed {}

    impl<S1, S2> Sealed for (S1, S2) {}
}

/// Family of [`CombinedVector`]s of an `F1` vector and an `F2` vector.
pub struct Pair<F1, F2>(PhantomData<fn() -> (F1, F2)>);

impl<F1, F2> VectorFamily for Pair<F1, F2>
where
    F1: VectorFamily,
    F2: VectorFamily,
    F1::Shape: ShapeSum<F2::Shape>,
{
    type Shape = <F1::Shape as ShapeSum<F2::Shape>>::Output;
    type Vector<T: Scalar> = CombinedVector<F1::Vector<T>, F2::Vector<T>>;
}

/// Composition rule for one combination of operand shapes.
///
/// Implemented for the four `(S1, S2)` pairs of [`Empty`] and [`NonEmpty`];
/// the family choice and the accessors are defined together here.
pub trait Composition<F1: VectorFamily, F2: VectorFamily>: sealed::Sealed {
    /// The composed family.
    type Family: VectorFamily;

    /// The `F1` part of a composed vector.
    fn first<T: Scalar>(combined: &FamilyVector<Self::Family, T>) -> Cow<'_, FamilyVector<F1, T>>;

    /// The `F2` part of a composed vector.
    fn second<T: Scalar>(combined: &FamilyVector<Self::Family, T>)
        -> Cow<'_, FamilyVector<F2, T>>;

    /// Assembles a composed vector from its parts.
    fn combine<T: Scalar>(
        first: FamilyVector<F1, T>,
        second: FamilyVector<F2, T>,
    ) -> FamilyVector<Self::Family, T>;
}

fn check_shapes<F1: VectorFamily, F2: VectorFamily>() {
    let () = ShapeCheck::<F1>::CONSISTENT;
    let () = ShapeCheck::<F2>::CONSISTENT;
}

impl<F1, F2> Composition<F1, F2> for (NonEmpty, NonEmpty)
where
    F1: VectorFamily<Shape = NonEmpty>,
    F2: VectorFamily<Shape = NonEmpty>,
{
    type Family = Pair<F1, F2>;

    fn first<T: Scalar>(
        combined: &CombinedVector<F1::Vector<T>, F2::Vector<T>>,
    ) -> Cow<'_, F1::Vector<T>> {
        check_shapes::<F1, F2>();
        Cow::Borrowed(combined.first())
    }

    fn second<T: Scalar>(
        combined: &CombinedVector<F1::Vector<T>, F2::Vector<T>>,
    ) -> Cow<'_, F2::Vector<T>> {
        check_shapes::<F1, F2>();
        Cow::Borrowed(combined.second())
    }

    fn combine<T: Scalar>(
        first: F1::Vector<T>,
        second: F2::Vector<T>,
    ) -> CombinedVector<F1::Vector<T>, F2::Vector<T>> {
        check_shapes::<F1, F2>();
        CombinedVector::new(first, second)
    }
}

impl<F1, F2> Composition<F1, F2> for (NonEmpty, Empty)
where
    F1: VectorFamily<Shape = NonEmpty>,
    F2: VectorFamily<Shape = Empty>,
{
    type Family = F1;

    fn first<T: Scalar>(combined: &F1::Vector<T>) -> Cow<'_, F1::Vector<T>> {
        check_shapes::<F1, F2>();
        Cow::Borrowed(combined)
    }

    fn second<T: Scalar>(_combined: &F1::Vector<T>) -> Cow<'_, F2::Vector<T>> {
        check_shapes::<F1, F2>();
        Cow::Owned(null_vector())
    }

    fn combine<T: Scalar>(first: F1::Vector<T>, _second: F2::Vector<T>) -> F1::Vector<T> {
        check_shapes::<F1, F2>();
        first
    }
}

impl<F1, F2> Composition<F1, F2> for (Empty, NonEmpty)
where
    F1: VectorFamily<Shape = Empty>,
    F2: VectorFamily<Shape = NonEmpty>,
{
    type Family = F2;

    fn first<T: Scalar>(_combined: &F2::Vector<T>) -> Cow<'_, F1::Vector<T>> {
        check_shapes::<F1, F2>();
        Cow::Owned(null_vector())
    }

    fn second<T: Scalar>(combined: &F2::Vector<T>) -> Cow<'_, F2::Vector<T>> {
        check_shapes::<F1, F2>();
        Cow::Borrowed(combined)
    }

    fn combine<T: Scalar>(_first: F1::Vector<T>, second: F2::Vector<T>) -> F2::Vector<T> {
        check_shapes::<F1, F2>();
        second
    }
}

// Both operands empty: the left one is kept.
impl<F1, F2> Composition<F1, F2> for (Empty, Empty)
where
    F1: VectorFamily<Shape = Empty>,
    F2: VectorFamily<Shape = Empty>,
{
    type Family = F1;

    fn first<T: Scalar>(combined: &F1::Vector<T>) -> Cow<'_, F1::Vector<T>> {
        check_shapes::<F1, F2>();
        Cow::Borrowed(combined)
    }

    fn second<T: Scalar>(_combined: &F1::Vector<T>) -> Cow<'_, F2::Vector<T>> {
        check_shapes::<F1, F2>();
        Cow::Owned(null_vector())
    }

    fn combine<T: Scalar>(first: F1::Vector<T>, _second: F2::Vector<T>) -> F1::Vector<T> {
        check_shapes::<F1, F2>();
        first
    }
}

/// The composition rule selected for `F1` followed by `F2`.
pub type CompositionOf<F1, F2> = (ShapeOf<F1>, ShapeOf<F2>);

/// The family of vectors made of an `F1` part followed by an `F2` part.
pub type CombinedFamily<F1, F2> = <CompositionOf<F1, F2> as Composition<F1, F2>>::Family;

/// [`CombinedFamily<F1, F2>`] instantiated at scalar `T`.
pub type Combined<F1, F2, T> = FamilyVector<CombinedFamily<F1, F2>, T>;

/// Accessors for composed vectors that hide whether the composition collapsed.
pub struct CombinedVectorUtil<F1, F2>(PhantomData<fn() -> (F1, F2)>);

impl<F1, F2> CombinedVectorUtil<F1, F2>
where
    F1: VectorFamily,
    F2: VectorFamily,
    CompositionOf<F1, F2>: Composition<F1, F2>,
{
    /// The `F1` part of `combined`.
    ///
    /// Borrowed when `F1` has storage in `combined`, a fresh null vector when
    /// `F1` is the empty family.
    pub fn first<T: Scalar>(combined: &Combined<F1, F2, T>) -> Cow<'_, FamilyVector<F1, T>> {
        <CompositionOf<F1, F2> as Composition<F1, F2>>::first(combined)
    }

    /// The `F2` part of `combined`.
    pub fn second<T: Scalar>(combined: &Combined<F1, F2, T>) -> Cow<'_, FamilyVector<F2, T>> {
        <CompositionOf<F1, F2> as Composition<F1, F2>>::second(combined)
    }

    /// Assembles a composed vector from its parts.
    pub fn combine<T: Scalar>(
        first: FamilyVector<F1, T>,
        second: FamilyVector<F2, T>,
    ) -> Combined<F1, F2, T> {
        <CompositionOf<F1, F2> as Composition<F1, F2>>::combine(first, second)
    }
}
