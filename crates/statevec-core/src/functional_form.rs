//! Structural tags for functions and systems.
//!
//! Algorithms can exploit structure in the function they work on: a linear
//! dynamics model admits closed-form propagation, an affine one almost so, a
//! polynomial one can be handled with sum-of-squares tools. The tags form a
//! chain where each one refines the next:
//!
//! ```text
//! Linear ⊑ Affine ⊑ Polynomial ⊑ Arbitrary
//! ```

use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The structure a function is known to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionalForm {
    /// No known structure.
    #[default]
    Arbitrary,
    /// Polynomial in its arguments.
    Polynomial,
    /// Linear plus a constant offset.
    Affine,
    /// Linear in its arguments.
    Linear,
}

impl FunctionalForm {
    /// All forms, from least to most structured.
    pub const ALL: [Self; 4] = [Self::Arbitrary, Self::Polynomial, Self::Affine, Self::Linear];

    // Position in the refinement chain; higher means more structure.
    const fn depth(self) -> u8 {
        match self {
            Self::Arbitrary => 0,
            Self::Polynomial => 1,
            Self::Affine => 2,
            Self::Linear => 3,
        }
    }

    /// Whether a function of this form is also of form `other`.
    ///
    /// Reflexive and transitive: `Linear` refines every form, every form
    /// refines `Arbitrary`.
    pub const fn refines(self, other: Self) -> bool {
        self.depth() >= other.depth()
    }

    /// The most structured form both `self` and `other` refine.
    ///
    /// This is the form of a sum of a function of form `self` and a function
    /// of form `other`.
    pub const fn strongest_common(self, other: Self) -> Self {
        if self.refines(other) {
            other
        } else {
            self
        }
    }

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Arbitrary => "arbitrary",
            Self::Polynomial => "polynomial",
            Self::Affine => "affine",
            Self::Linear => "linear",
        }
    }
}

impl Display for FunctionalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability query for the structure of a function or system.
pub trait HasFunctionalForm {
    /// The known structure; `Arbitrary` unless overridden.
    fn functional_form(&self) -> FunctionalForm {
        FunctionalForm::Arbitrary
    }

    /// Whether the structure is at least `form`.
    fn is_at_least(&self, form: FunctionalForm) -> bool {
        self.functional_form().refines(form)
    }
}
