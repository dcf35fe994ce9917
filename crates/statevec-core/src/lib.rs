//! Vector concept and compile-time composition of state vectors.
//!
//! This crate provides the vector abstraction used to describe the state,
//! input and output spaces of dynamical systems. Any type that behaves like
//! a finite-dimensional column vector can implement [`VectorLike`], and two
//! such types can be stacked into a larger one whose type is decided at
//! compile time.
//!
//! # Key Concepts
//!
//! - **Vector concept**: fixed or dynamic row count, conversion to and from
//!   dense `nalgebra` columns
//! - **Families**: vector types still missing their scalar
//! - **Composition**: stacking two families, where the null vector is the
//!   identity
//! - **Functional forms**: structural tags (linear, affine, ...) attached to
//!   functions of vectors
//!
//! # Modules
//!
//! - [`builder`]: Compile-time composition of families
//! - [`combined`]: The two-part vector type
//! - [`concept`]: The vector trait and free helpers
//! - [`config`]: Formatting configuration
//! - [`error`]: Error types for fallible conversions
//! - [`family`]: Vector type constructors
//! - [`functional_form`]: Structural tags for functions
//! - [`types`]: Scalar trait, type aliases and row counts
//!
//! # Example
//!
//! ```
//! use statevec_core::prelude::*;
//!
//! type State = Combined<Fixed<3>, Fixed<2>, f64>;
//!
//! let x = <State as VectorLike>::from_dense(&DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0]));
//! assert_eq!(size(&x), 5);
//! assert_eq!(x.second(), &SVector::<f64, 2>::new(4.0, 5.0));
//! ```

pub mod builder;
pub mod combined;
pub mod concept;
pub mod config;
pub mod error;
pub mod family;
pub mod functional_form;
pub mod types;

// Re-export commonly used items at the crate root
pub use concept::VectorLike;
pub use error::{Result, VectorError};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use statevec_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::builder::{
        Combined, CombinedFamily, CombinedVectorUtil, Composition, CompositionOf, Pair,
    };
    pub use crate::combined::CombinedVector;
    pub use crate::concept::{
        coordinate_name, dense_approx_eq, dense_eq, dense_relative_eq, format_coordinates,
        null_vector, random_vector, random_vector_with, size, to_dense, VectorLike,
    };
    pub use crate::config::{format_config, FormatConfig, FormatConfigBuilder};
    pub use crate::error::{Result, VectorError};
    pub use crate::family::{
        has_consistent_shape, row_count, Dynamic, Empty, FamilyVector, Fixed, NonEmpty, Null,
        RowShape, ShapeOf, VectorFamily,
    };
    pub use crate::functional_form::{FunctionalForm, HasFunctionalForm};
    pub use crate::types::{DVector, NullVector, RowCount, SVector, Scalar};
}
