//! Redundant measurement frames with orthonormal columns.
//!
//! A frame is the linear operator `F` of shape `m x n` (`m >= n`) whose
//! rows are the measurement vectors. Columns are orthonormal
//! (`F^T F = I_n`), so the synthesis step `Y -> F^T Y` is the adjoint of
//! the analysis step `x -> F x` and the alternating projection in the
//! retrieval engine is a true projection pair.
//!
//! Generation follows the QR route: draw a square matrix of i.i.d.
//! uniform entries, orthogonalize it, keep the first `n` columns of the
//! orthogonal factor. Degenerate (rank-deficient) draws are accepted
//! as-is; they have probability zero under an absolutely continuous
//! distribution.

use num_complex::Complex;
use num_traits::Float;

use crate::error::{FrameError, FrameResult};
use crate::sampling;
use crate::types::{CVector, DMatrix, DVector, Scalar};

/// Configuration for frame generation.
///
/// The measurement dimension is `round(n * redundancy)` unless an explicit
/// `frame_dim` overrides it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameConfig {
    /// Redundancy factor `m / n` (ignored when `frame_dim` is set)
    pub redundancy: f64,

    /// Explicit measurement dimension `m` (overrides `redundancy`)
    pub frame_dim: Option<usize>,

    /// Seed for the random draw (None = OS entropy)
    pub seed: Option<u64>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            redundancy: 2.0,
            frame_dim: None,
            seed: None,
        }
    }
}

impl FrameConfig {
    /// Creates a new frame configuration with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the redundancy factor.
    pub fn with_redundancy(mut self, redundancy: f64) -> Self {
        self.redundancy = redundancy;
        self
    }

    /// Sets an explicit measurement dimension, overriding the redundancy.
    pub fn with_frame_dim(mut self, frame_dim: usize) -> Self {
        self.frame_dim = Some(frame_dim);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A redundant measurement operator `F` with orthonormal columns.
///
/// Immutable once constructed. The magnitude vector `|F x|` is the only
/// information about a signal `x` that reaches the retrieval engine.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame<T: Scalar> {
    matrix: DMatrix<T>,
}

impl<T: Scalar> Frame<T> {
    /// Generates a random frame for signals of dimension `input_dim`.
    ///
    /// Draws an `m x m` matrix of i.i.d. uniform entries on `[0, 1)`,
    /// computes its QR factorization, and keeps the first `input_dim`
    /// columns of the orthogonal factor, so `F^T F = I` holds up to
    /// floating-point error.
    ///
    /// # Errors
    ///
    /// Returns an error if `input_dim` is zero, the redundancy is not a
    /// finite positive value, or the resulting measurement dimension is
    /// smaller than `input_dim`.
    pub fn generate(input_dim: usize, config: &FrameConfig) -> FrameResult<Self> {
        if input_dim == 0 {
            return Err(FrameError::invalid_dimensions(
                "signal dimension must be nonzero",
            ));
        }

        let frame_dim = match config.frame_dim {
            Some(frame_dim) => frame_dim,
            None => {
                if !config.redundancy.is_finite() || config.redundancy <= 0.0 {
                    return Err(FrameError::invalid_redundancy(config.redundancy));
                }
                (input_dim as f64 * config.redundancy).round() as usize
            }
        };

        if frame_dim < input_dim {
            return Err(FrameError::invalid_dimensions(format!(
                "frame dimension must satisfy m >= n, got m={}, n={}",
                frame_dim, input_dim
            )));
        }

        let square = sampling::uniform_matrix::<T>(frame_dim, frame_dim, T::zero(), T::one(), config.seed);
        let q = square.qr().q();
        let matrix = q.columns(0, input_dim).into_owned();

        Ok(Self { matrix })
    }

    /// Wraps an existing `m x n` matrix as a frame.
    ///
    /// Only the shape is validated; orthonormality of the columns is the
    /// caller's contract. A non-orthonormal matrix silently degrades the
    /// retrieval result rather than raising an error; use
    /// [`is_orthonormal`](Self::is_orthonormal) to check up front.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix has fewer rows than columns or is
    /// empty.
    pub fn from_matrix(matrix: DMatrix<T>) -> FrameResult<Self> {
        if matrix.ncols() == 0 {
            return Err(FrameError::invalid_dimensions(
                "signal dimension must be nonzero",
            ));
        }
        if matrix.nrows() < matrix.ncols() {
            return Err(FrameError::invalid_dimensions(format!(
                "frame dimension must satisfy m >= n, got m={}, n={}",
                matrix.nrows(),
                matrix.ncols()
            )));
        }
        Ok(Self { matrix })
    }

    /// Measurement dimension `m` (number of frame vectors).
    pub fn num_measurements(&self) -> usize {
        self.matrix.nrows()
    }

    /// Signal dimension `n`.
    pub fn signal_dim(&self) -> usize {
        self.matrix.ncols()
    }

    /// Redundancy factor `m / n`.
    pub fn redundancy(&self) -> f64 {
        self.num_measurements() as f64 / self.signal_dim() as f64
    }

    /// The underlying `m x n` matrix.
    pub fn matrix(&self) -> &DMatrix<T> {
        &self.matrix
    }

    /// Checks that `F^T F` equals the identity within `tolerance`
    /// (maximum absolute deviation per entry).
    pub fn is_orthonormal(&self, tolerance: T) -> bool {
        let gram = self.matrix.transpose() * &self.matrix;
        let n = self.signal_dim();
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { T::one() } else { T::zero() };
                if <T as Float>::abs(gram[(i, j)] - expected) > tolerance {
                    return false;
                }
            }
        }
        true
    }

    /// Analysis operator: `x -> F x`.
    pub fn analyze(&self, signal: &DVector<T>) -> DVector<T> {
        &self.matrix * signal
    }

    /// Analysis operator on a complex vector, computed as two real
    /// products.
    pub fn analyze_complex(&self, signal: &CVector<T>) -> CVector<T> {
        let re = &self.matrix * signal.map(|c| c.re);
        let im = &self.matrix * signal.map(|c| c.im);
        DVector::from_fn(self.num_measurements(), |k, _| Complex::new(re[k], im[k]))
    }

    /// Synthesis (adjoint) operator: `Y -> F^T Y`.
    pub fn synthesize_complex(&self, coefficients: &CVector<T>) -> CVector<T> {
        let re = self.matrix.transpose() * coefficients.map(|c| c.re);
        let im = self.matrix.transpose() * coefficients.map(|c| c.im);
        DVector::from_fn(self.signal_dim(), |k, _| Complex::new(re[k], im[k]))
    }

    /// Elementwise magnitudes of the measurements: `|F x|`.
    pub fn magnitudes(&self, signal: &DVector<T>) -> DVector<T> {
        self.analyze(signal).map(<T as Float>::abs)
    }

    /// Euclidean magnitude-fit error `||  |F z| - b  ||_2` of a complex
    /// candidate `z` against measured magnitudes `b`.
    ///
    /// This is the metric driving the engine's sign policy and the
    /// monotonicity of the iteration.
    pub fn magnitude_residual(&self, candidate: &CVector<T>, magnitude: &DVector<T>) -> T {
        let analysis = self.analyze_complex(candidate);
        (analysis.map(|c| c.norm()) - magnitude).norm()
    }
}
