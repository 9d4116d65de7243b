//! Type definitions and aliases for phaseless retrieval.
//!
//! This module provides the scalar abstraction over `f32`/`f64` and the
//! vector/matrix aliases used throughout the crate.

use nalgebra::{Dyn, OMatrix, OVector, RealField, Scalar as NalgebraScalar};
use num_complex::Complex;
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types used in retrieval (f32 or f64).
///
/// This trait combines the numeric traits required by the frame
/// construction and the Gerchberg-Saxton iteration.
pub trait Scalar:
    NalgebraScalar
    + RealField
    + Float
    + FromPrimitive
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Tolerance for checking that frame columns are orthonormal.
    const ORTHONORMALITY_TOLERANCE: Self;

    /// Default tolerance for numerical comparisons.
    const DEFAULT_TOLERANCE: Self;

    /// Convert from f64 (for constants and sampled values).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails.
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("Failed to convert from f64")
    }

    /// Convert to f64 (for reporting and distribution bounds).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails.
    fn to_f64(self) -> f64 {
        num_traits::cast(self).expect("Failed to convert to f64")
    }
}

impl Scalar for f32 {
    const ORTHONORMALITY_TOLERANCE: Self = 1e-4;
    const DEFAULT_TOLERANCE: Self = 1e-4;
}

impl Scalar for f64 {
    const ORTHONORMALITY_TOLERANCE: Self = 1e-8;
    const DEFAULT_TOLERANCE: Self = 1e-10;
}

/// Type alias for a dynamically-sized real matrix.
pub type DMatrix<T> = OMatrix<T, Dyn, Dyn>;

/// Type alias for a dynamically-sized real vector.
pub type DVector<T> = OVector<T, Dyn>;

/// Type alias for a dynamically-sized complex vector.
///
/// Analysis-domain intermediates of the retrieval iteration live here;
/// they are scoped to a single iteration and never escape the engine.
pub type CVector<T> = OVector<Complex<T>, Dyn>;
