//! Integration tests for composing state vectors.
//!
//! A user-defined vector family (a planar velocity with named coordinates)
//! is composed with the built-in families, and the composed states are taken
//! apart again through [`CombinedVectorUtil`].

use nalgebra::base::storage::RawStorage;
use nalgebra::{Dim, Matrix, U1};
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use statevec_core::prelude::*;
use statevec_core::vector_family;
use std::any::TypeId;
use std::marker::PhantomData;

/// Planar velocity over any scalar.
#[derive(Debug, Clone, PartialEq)]
struct Velocity<T> {
    vx: T,
    vy: T,
}

impl<T: Scalar> VectorLike for Velocity<T> {
    type Scalar = T;
    const ROWS_AT_COMPILE_TIME: RowCount = RowCount::Fixed(2);

    fn from_dense<R, S>(x: &Matrix<T, R, U1, S>) -> Self
    where
        R: Dim,
        S: RawStorage<T, R, U1>,
    {
        Self { vx: x[0], vy: x[1] }
    }

    fn to_dense(&self) -> DVector<T> {
        DVector::from_vec(vec![self.vx, self.vy])
    }

    fn coordinate_name(&self, index: usize) -> String {
        ["vx", "vy"][index].to_string()
    }
}

/// Family of [`Velocity`] vectors.
struct VelocityFamily;
vector_family!(VelocityFamily => Velocity, rows = 2);

/// Input of an unactuated system: no coordinates at all.
#[derive(Debug, Clone, PartialEq)]
struct NoInput<T>(PhantomData<T>);

impl<T: Scalar> VectorLike for NoInput<T> {
    type Scalar = T;
    const ROWS_AT_COMPILE_TIME: RowCount = RowCount::Fixed(0);

    fn from_dense<R, S>(_x: &Matrix<T, R, U1, S>) -> Self
    where
        R: Dim,
        S: RawStorage<T, R, U1>,
    {
        Self(PhantomData)
    }

    fn to_dense(&self) -> DVector<T> {
        DVector::zeros(0)
    }
}

struct NoInputFamily;
vector_family!(NoInputFamily => NoInput, rows = 0);

fn dense(values: &[f64]) -> DVector<f64> {
    DVector::from_vec(values.to_vec())
}

#[test]
fn test_position_and_velocity_state() {
    type Util = CombinedVectorUtil<Fixed<3>, Fixed<2>>;

    let state = Util::combine(
        SVector::<f64, 3>::new(1.0, 2.0, 3.0),
        SVector::<f64, 2>::new(4.0, 5.0),
    );

    assert_eq!(size(&state), 5);
    assert_eq!(to_dense(&state), dense(&[1.0, 2.0, 3.0, 4.0, 5.0]));
    assert_eq!(*Util::second(&state), SVector::<f64, 2>::new(4.0, 5.0));
}

#[test]
fn test_null_input_leaves_state_unchanged() {
    type Util = CombinedVectorUtil<Null, Fixed<2>>;

    let state: SVector<f64, 2> = Util::combine(null_vector(), SVector::<f64, 2>::new(7.0, 8.0));

    assert_eq!(state, SVector::<f64, 2>::new(7.0, 8.0));
    assert_eq!(size(&*Util::first(&state)), 0);
}

#[test]
fn test_null_with_null_is_null() {
    type Util = CombinedVectorUtil<Null, Null>;

    let state: NullVector<f64> = Util::combine(null_vector(), null_vector());

    assert_eq!(size(&state), 0);
    assert_eq!(to_dense(&state).len(), 0);
    assert_eq!(row_count::<CombinedFamily<Null, Null>>(), RowCount::Fixed(0));
}

#[test]
fn test_user_family_composes_with_builtin_families() {
    type Util = CombinedVectorUtil<Fixed<2>, VelocityFamily>;

    let state: Combined<Fixed<2>, VelocityFamily, f64> = Util::combine(
        SVector::<f64, 2>::new(0.5, -0.5),
        Velocity { vx: 1.0, vy: 2.0 },
    );

    assert_eq!(state.to_dense(), dense(&[0.5, -0.5, 1.0, 2.0]));
    assert_eq!(Util::second(&state).vy, 2.0);
    assert_eq!(row_count::<CombinedFamily<Fixed<2>, VelocityFamily>>(), RowCount::Fixed(4));

    let rebuilt = <Combined<Fixed<2>, VelocityFamily, f64> as VectorLike>::from_dense(
        &dense(&[0.5, -0.5, 1.0, 2.0]),
    );
    assert_eq!(rebuilt, state);
}

#[test]
fn test_user_family_collapses_with_null() {
    let velocity: Velocity<f32> = CombinedVectorUtil::<VelocityFamily, Null>::combine(
        Velocity { vx: 3.0, vy: 4.0 },
        null_vector(),
    );
    assert_eq!(velocity, Velocity { vx: 3.0, vy: 4.0 });
}

#[test]
fn test_coordinate_listing_of_user_vector() {
    let velocity = Velocity { vx: 1.0_f64, vy: 0.25 };

    assert_eq!(coordinate_name(&velocity, 1), "vy");

    let listing = format_coordinates(&velocity, format_config());
    assert_eq!(listing, "vx = 1\nvy = 0.25");

    let config = FormatConfigBuilder::new()
        .precision(2)
        .assignment(": ")
        .separator(", ")
        .build();
    assert_eq!(format_coordinates(&velocity, &config), "vx: 1.00, vy: 0.25");
}

#[test]
fn test_dynamic_state_with_fixed_input() {
    let x = dense(&[1.0, 2.0, 3.0, 4.0]);
    let state = <Combined<Dynamic, Fixed<1>, f64> as VectorLike>::from_dense(&x);

    assert_eq!(state.first().len(), 3);
    assert_eq!(state.second()[0], 4.0);
    assert_eq!(size(&state), 4);
}

#[test]
fn test_two_dynamic_parts_need_explicit_split() {
    type State = CombinedVector<DVector<f64>, DVector<f64>>;
    let x = dense(&[1.0, 2.0, 3.0]);

    let err = <State as VectorLike>::try_from_dense(&x).unwrap_err();
    assert_eq!(err, VectorError::AmbiguousSplit { rows: 3 });

    let state = State::from_dense_split(&x, 1);
    assert_eq!(state.first(), &dense(&[1.0]));
    assert_eq!(state.second(), &dense(&[2.0, 3.0]));

    let err = State::try_from_dense_split(&x, 4).unwrap_err();
    assert_eq!(err, VectorError::SplitOutOfRange { split: 4, rows: 3 });
}

#[test]
fn test_random_composed_state_is_reproducible() {
    type State = Combined<Fixed<3>, VelocityFamily, f64>;

    let a: State = random_vector_with(&mut SmallRng::seed_from_u64(7));
    let b: State = random_vector_with(&mut SmallRng::seed_from_u64(7));

    assert_eq!(a, b);
    assert!(a.to_dense().iter().all(|c| (-1.0..1.0).contains(c)));
}

#[test]
fn test_functional_form_of_composed_dynamics() {
    struct LinearDrift;
    impl HasFunctionalForm for LinearDrift {
        fn functional_form(&self) -> FunctionalForm {
            FunctionalForm::Linear
        }
    }

    struct ConstantForce;
    impl HasFunctionalForm for ConstantForce {
        fn functional_form(&self) -> FunctionalForm {
            FunctionalForm::Affine
        }
    }

    let combined = LinearDrift
        .functional_form()
        .strongest_common(ConstantForce.functional_form());
    assert_eq!(combined, FunctionalForm::Affine);
    assert!(combined.refines(FunctionalForm::Polynomial));
    assert!(!combined.refines(FunctionalForm::Linear));
}

#[test]
fn test_zero_row_user_family_collapses() {
    assert!(has_consistent_shape::<NoInputFamily>());
    assert_eq!(
        TypeId::of::<Combined<NoInputFamily, Fixed<2>, f64>>(),
        TypeId::of::<SVector<f64, 2>>()
    );
    assert_eq!(
        TypeId::of::<Combined<VelocityFamily, NoInputFamily, f32>>(),
        TypeId::of::<Velocity<f32>>()
    );

    let state = <Combined<NoInputFamily, Fixed<2>, f64> as VectorLike>::from_dense(&dense(&[
        7.0, 8.0,
    ]));
    assert_eq!(state, SVector::<f64, 2>::new(7.0, 8.0));

    type Util = CombinedVectorUtil<NoInputFamily, Fixed<2>>;
    assert_eq!(size(&*Util::first(&state)), 0);
    assert_eq!(*Util::second(&state), state);
}

#[test]
fn test_hand_written_family_with_wrong_shape_is_detected() {
    struct MisdeclaredInput;

    impl VectorFamily for MisdeclaredInput {
        type Shape = NonEmpty;
        type Vector<T: Scalar> = NoInput<T>;
    }

    assert!(!has_consistent_shape::<MisdeclaredInput>());
    assert!(has_consistent_shape::<NoInputFamily>());
    assert!(has_consistent_shape::<VelocityFamily>());
}
