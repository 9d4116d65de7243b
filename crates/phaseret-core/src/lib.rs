//! Phaseless signal retrieval over redundant frames.
//!
//! This crate recovers a real signal from only the magnitudes of its
//! measurements against a redundant frame, using the Gerchberg-Saxton
//! alternating-projection iteration. The frame's columns are orthonormal,
//! so the synthesis operator is the adjoint of the analysis operator and
//! each half-step of the iteration is a genuine projection.
//!
//! # Key Concepts
//!
//! - **Frame**: an over-complete set of measurement vectors, the rows of
//!   an `m x n` operator with `m >= n`
//! - **Analysis / synthesis**: the maps `x -> F x` and `Y -> F^T Y`
//! - **Magnitude constraint**: the non-convex set of measurement vectors
//!   with the prescribed elementwise moduli
//! - **Sign ambiguity**: `x` and `-x` are indistinguishable from
//!   magnitudes alone; evaluation resolves the sign explicitly
//!
//! # Modules
//!
//! - [`error`]: Error types for precondition violations
//! - [`evaluate`]: Sign-aligned error reporting
//! - [`frame`]: Frame generation and the analysis/synthesis operators
//! - [`retrieval`]: The Gerchberg-Saxton engine
//! - [`sampling`]: Seeded uniform sampling
//! - [`types`]: Scalar trait and vector aliases

pub mod error;
pub mod evaluate;
pub mod frame;
pub mod retrieval;
pub mod sampling;
pub mod types;

// Re-export commonly used items at the crate root
pub use error::{FrameError, FrameResult, Result, RetrievalError};
pub use evaluate::{sign_aligned, Evaluation};
pub use frame::{Frame, FrameConfig};
pub use retrieval::{phaseless_retrieve, GerchbergSaxton, Retrieval, RetrievalConfig, Sign};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use phaseret_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{FrameError, FrameResult, Result, RetrievalError};
    pub use crate::evaluate::{sign_aligned, Evaluation};
    pub use crate::frame::{Frame, FrameConfig};
    pub use crate::retrieval::{
        phaseless_retrieve, GerchbergSaxton, Retrieval, RetrievalConfig, Sign,
    };
    pub use crate::sampling::{seeded_rng, uniform_matrix, uniform_vector};
    pub use crate::types::{CVector, DMatrix, DVector, Scalar};
}
