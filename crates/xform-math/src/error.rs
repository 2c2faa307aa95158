//! Error types for the checked xform-math entry points.
//!
//! The numeric core never fails: degenerate inputs propagate IEEE `Inf`/`NaN`.
//! This module only serves the additive, validating APIs:
//!
//! - [`Matrix4::try_inverse`](crate::Matrix4::try_inverse) - singular matrices
//! - `TryFrom<&[f32]>` for [`Matrix3`](crate::Matrix3) and [`Matrix4`](crate::Matrix4)
//! - [`RotationOrder`](crate::RotationOrder) parsing
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{Error, Matrix4, Result};
//!
//! fn invert(m: &Matrix4) -> Result<Matrix4> {
//!     m.try_inverse()
//! }
//!
//! let err = invert(&Matrix4::ZERO).unwrap_err();
//! assert!(err.is_singular());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the checked conversions and inversions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A rotation order name was not one of the six known orders.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_math::RotationOrder;
    ///
    /// let err = "zzz".parse::<RotationOrder>().unwrap_err();
    /// assert!(err.to_string().contains("zzz"));
    /// ```
    #[error("unknown rotation order: {0}")]
    UnknownRotationOrder(String),

    /// A slice had the wrong number of elements for the target matrix.
    #[error("length mismatch: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Element count of the target type
        expected: usize,
        /// Element count of the input
        got: usize,
    },

    /// The matrix has no inverse.
    ///
    /// Returned when the determinant is zero or not finite.
    #[error("matrix is singular (determinant {determinant})")]
    Singular {
        /// Determinant that was rejected
        determinant: f32,
    },
}

impl Error {
    /// Creates an [`Error::UnknownRotationOrder`] error.
    #[inline]
    pub fn unknown_rotation_order(name: impl Into<String>) -> Self {
        Self::UnknownRotationOrder(name.into())
    }

    /// Creates an [`Error::LengthMismatch`] error.
    #[inline]
    pub fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::LengthMismatch { expected, got }
    }

    /// Creates an [`Error::Singular`] error.
    #[inline]
    pub fn singular(determinant: f32) -> Self {
        Self::Singular { determinant }
    }

    /// Returns `true` if this is a singular-matrix error.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::Singular { .. })
    }
}
