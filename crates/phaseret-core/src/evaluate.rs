//! Sign-aligned evaluation of a retrieved estimate.
//!
//! The measurement model is blind to global sign: `x` and `-x` produce
//! the same magnitudes, so a raw `||x - x_hat||` comparison can report a
//! large error for a perfect retrieval. Evaluation picks the better of
//! the two sign branches and reports that error. This is a reporting and
//! testing concern only; it never feeds back into the retrieval engine.

use crate::error::{Result, RetrievalError};
use crate::types::{DVector, Scalar};

/// A sign-resolved comparison of an estimate against the ground truth.
#[derive(Debug, Clone)]
pub struct Evaluation<T>
where
    T: Scalar,
{
    /// Estimate with its global sign aligned to the ground truth
    pub estimate: DVector<T>,

    /// Best-case reconstruction error `min(||x - x_hat||, ||x + x_hat||)`
    pub error: T,

    /// Whether the estimate was negated during alignment
    pub negated: bool,
}

/// Resolves the global sign of `estimate` against `truth` and reports the
/// best-case Euclidean error.
///
/// Applying this to `x_hat` and to `-x_hat` yields the same aligned
/// estimate and the same error.
///
/// # Errors
///
/// Returns [`RetrievalError::DimensionMismatch`] when the vectors differ
/// in length.
pub fn sign_aligned<T: Scalar>(truth: &DVector<T>, estimate: &DVector<T>) -> Result<Evaluation<T>> {
    if truth.len() != estimate.len() {
        return Err(RetrievalError::dimension_mismatch(
            format!("estimate of length {}", truth.len()),
            format!("length {}", estimate.len()),
        ));
    }

    let err_pos = (truth - estimate).norm();
    let err_neg = (truth + estimate).norm();

    if err_neg < err_pos {
        Ok(Evaluation {
            estimate: -estimate,
            error: err_neg,
            negated: true,
        })
    } else {
        Ok(Evaluation {
            estimate: estimate.clone(),
            error: err_pos,
            negated: false,
        })
    }
}
