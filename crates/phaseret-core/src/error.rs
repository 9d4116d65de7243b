//! Error types for frame construction and phaseless retrieval.
//!
//! Only precondition violations are represented here; numeric degradation
//! (near-singular draws, orthonormality drift) and non-convergence of the
//! iteration are expected outcomes, observable through the reported
//! residual, and never surface as errors.

use thiserror::Error;

/// Errors that can occur while constructing a frame.
#[derive(Debug, Clone, Error)]
pub enum FrameError {
    /// Frame dimensions are invalid.
    ///
    /// The frame must be at least as large as the signal space (`m >= n`)
    /// and both dimensions must be nonzero.
    #[error("Invalid frame dimensions: {reason}")]
    InvalidDimensions {
        /// Description of the dimension violation
        reason: String,
    },

    /// Redundancy factor is invalid.
    ///
    /// The redundancy must be a finite, strictly positive multiplier of
    /// the signal dimension.
    #[error("Invalid redundancy factor: {value}")]
    InvalidRedundancy {
        /// Value that was rejected
        value: f64,
    },
}

impl FrameError {
    /// Create an InvalidDimensions error with a custom reason.
    pub fn invalid_dimensions<S: Into<String>>(reason: S) -> Self {
        Self::InvalidDimensions {
            reason: reason.into(),
        }
    }

    /// Create an InvalidRedundancy error.
    pub fn invalid_redundancy(value: f64) -> Self {
        Self::InvalidRedundancy { value }
    }
}

/// Errors that can occur during retrieval or evaluation.
#[derive(Debug, Clone, Error)]
pub enum RetrievalError {
    /// Dimension mismatch between inputs.
    ///
    /// Raised at the boundary, before any iteration begins, when the
    /// magnitude vector does not match the frame's measurement count or
    /// when an estimate does not match the ground-truth length.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },

    /// Propagated frame error.
    #[error("Frame construction failed: {0}")]
    Frame(#[from] FrameError),
}

impl RetrievalError {
    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Result type alias for frame construction.
pub type FrameResult<T> = std::result::Result<T, FrameError>;

/// Result type alias for retrieval and evaluation operations.
pub type Result<T> = std::result::Result<T, RetrievalError>;
