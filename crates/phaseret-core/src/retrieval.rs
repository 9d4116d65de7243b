//! Gerchberg-Saxton phaseless retrieval.
//!
//! Recovers a real signal from the elementwise magnitudes of its frame
//! measurements by alternating projection between two constraint sets:
//! the set of measurement vectors with the prescribed magnitudes and the
//! image of real signal space under the frame. Each iteration applies the
//! analysis operator, swaps in the measured magnitudes while keeping the
//! estimated phases, back-projects through the synthesis operator,
//! resolves the global sign, and drops the imaginary part.
//!
//! The loop runs an unconditional, fixed number of steps; there is no
//! convergence check. The magnitude-fit residual of the iterate is
//! non-increasing, which also means the iteration can settle into a local
//! minimum and stay there. Empirically that happens at low frame
//! redundancy; callers observe it as a final residual (and evaluation
//! error) bounded away from zero. Inputs that violate the frame contract
//! (non-orthonormal columns, negative magnitudes) are not detected here
//! and degrade the result silently.

use num_complex::Complex;

use crate::error::{Result, RetrievalError};
use crate::frame::Frame;
use crate::sampling;
use crate::types::{CVector, DVector, Scalar};

/// Configuration for the Gerchberg-Saxton engine.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetrievalConfig<T>
where
    T: Scalar,
{
    /// Number of iterations to run (no early stopping)
    pub num_iter: usize,

    /// Seed for the random initial iterate (None = OS entropy)
    pub seed: Option<u64>,

    /// Lower bound of the uniform initial iterate
    pub init_low: T,

    /// Upper bound of the uniform initial iterate
    pub init_high: T,
}

impl<T> Default for RetrievalConfig<T>
where
    T: Scalar,
{
    fn default() -> Self {
        Self {
            num_iter: 200,
            seed: None,
            init_low: -T::one(),
            init_high: T::one(),
        }
    }
}

impl<T> RetrievalConfig<T>
where
    T: Scalar,
{
    /// Creates a new configuration with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the iteration count.
    pub fn with_iterations(mut self, num_iter: usize) -> Self {
        self.num_iter = num_iter;
        self
    }

    /// Sets the seed of the initial iterate.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the range of the uniform initial iterate.
    pub fn with_init_range(mut self, low: T, high: T) -> Self {
        self.init_low = low;
        self.init_high = high;
        self
    }
}

/// Outcome of one retrieval run.
///
/// The estimate is determined only up to global sign; resolve it against
/// a reference with [`evaluate::sign_aligned`](crate::evaluate::sign_aligned)
/// before comparing.
#[derive(Debug, Clone)]
pub struct Retrieval<T>
where
    T: Scalar,
{
    /// Final iterate
    pub estimate: DVector<T>,

    /// Magnitude-fit residual `|| |F x| - b ||_2` of the final iterate
    pub residual: T,

    /// Number of iterations performed
    pub iterations: usize,

    /// Residual of the iterate after each step, non-increasing
    pub residual_trace: Vec<T>,
}

/// Which branch of the global sign ambiguity a step keeps.
///
/// The frame is centrally symmetric (`|F z| = |F(-z)|`), so each
/// back-projected candidate and its negation fit the magnitudes equally
/// well in exact arithmetic. The policy is deterministic: the negative
/// branch is taken only when its residual is strictly smaller, so exact
/// ties keep the positive branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Keep the candidate as produced by the synthesis step.
    Positive,
    /// Keep the negated candidate.
    Negative,
}

/// The Gerchberg-Saxton alternating-projection engine.
///
/// Consumes a magnitude vector and a frame; never sees the true signal.
/// Each invocation owns its iterate and intermediate buffers exclusively,
/// so concurrent runs with distinct seeds share nothing but the read-only
/// inputs.
///
/// # Examples
///
/// ```rust
/// use phaseret_core::frame::{Frame, FrameConfig};
/// use phaseret_core::retrieval::{GerchbergSaxton, RetrievalConfig};
/// use phaseret_core::sampling;
///
/// let frame = Frame::<f64>::generate(
///     8,
///     &FrameConfig::new().with_redundancy(6.0).with_seed(1121),
/// )
/// .unwrap();
/// let truth = sampling::uniform_vector(8, -1.0, 1.0, Some(1231));
/// let magnitude = frame.magnitudes(&truth);
///
/// let engine = GerchbergSaxton::new(RetrievalConfig::new().with_seed(4321));
/// let result = engine.retrieve(&magnitude, &frame).unwrap();
/// assert_eq!(result.estimate.len(), 8);
/// ```
#[derive(Debug)]
pub struct GerchbergSaxton<T>
where
    T: Scalar,
{
    config: RetrievalConfig<T>,
}

impl<T> GerchbergSaxton<T>
where
    T: Scalar,
{
    /// Creates a new engine with the given configuration.
    pub fn new(config: RetrievalConfig<T>) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &RetrievalConfig<T> {
        &self.config
    }

    /// Returns the engine name.
    pub fn name(&self) -> &str {
        "Gerchberg-Saxton"
    }

    /// Runs the fixed-iteration retrieval loop.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::DimensionMismatch`] before any iteration
    /// when `magnitude` does not match the frame's measurement count.
    pub fn retrieve(&self, magnitude: &DVector<T>, frame: &Frame<T>) -> Result<Retrieval<T>> {
        if magnitude.len() != frame.num_measurements() {
            return Err(RetrievalError::dimension_mismatch(
                format!("magnitude vector of length {}", frame.num_measurements()),
                format!("length {}", magnitude.len()),
            ));
        }

        let mut iterate = sampling::uniform_vector::<T>(
            frame.signal_dim(),
            self.config.init_low,
            self.config.init_high,
            self.config.seed,
        );
        let mut residual_trace = Vec::with_capacity(self.config.num_iter);

        for _ in 0..self.config.num_iter {
            let analysis = frame.analyze_complex(&lift_complex(&iterate));
            let constrained = apply_measured_magnitudes(&analysis, magnitude);
            let candidate = frame.synthesize_complex(&constrained);

            let chosen = match resolve_sign(frame, &candidate, magnitude) {
                Sign::Positive => candidate,
                Sign::Negative => -candidate,
            };
            iterate = realness_projection(&chosen);

            residual_trace.push((frame.magnitudes(&iterate) - magnitude).norm());
        }

        let residual = (frame.magnitudes(&iterate) - magnitude).norm();
        Ok(Retrieval {
            estimate: iterate,
            residual,
            iterations: self.config.num_iter,
            residual_trace,
        })
    }
}

/// Convenience wrapper running one retrieval with default initialization.
///
/// # Errors
///
/// Returns an error when `magnitude` does not match the frame's
/// measurement count.
pub fn phaseless_retrieve<T: Scalar>(
    magnitude: &DVector<T>,
    frame: &Frame<T>,
    num_iter: usize,
    seed: Option<u64>,
) -> Result<DVector<T>> {
    let config = RetrievalConfig {
        num_iter,
        seed,
        ..RetrievalConfig::default()
    };
    let result = GerchbergSaxton::new(config).retrieve(magnitude, frame)?;
    Ok(result.estimate)
}

/// Lifts a real vector into the complex plane with zero imaginary part.
fn lift_complex<T: Scalar>(signal: &DVector<T>) -> CVector<T> {
    signal.map(|v| Complex::new(v, T::zero()))
}

/// Projection onto the measured-magnitude set: keep each component's
/// estimated phase, replace its modulus with the measured one.
///
/// `arg` lies in `(-pi, pi]` with `arg(0) = 0`, so a zero analysis
/// component maps to `+b_k`.
fn apply_measured_magnitudes<T: Scalar>(
    analysis: &CVector<T>,
    magnitude: &DVector<T>,
) -> CVector<T> {
    DVector::from_fn(analysis.len(), |k, _| {
        Complex::from_polar(magnitude[k], analysis[k].arg())
    })
}

/// Deterministic sign policy: take the branch with the strictly smaller
/// magnitude residual, preferring the positive branch on ties.
fn resolve_sign<T: Scalar>(frame: &Frame<T>, candidate: &CVector<T>, magnitude: &DVector<T>) -> Sign {
    let positive = frame.magnitude_residual(candidate, magnitude);
    let negated = -candidate;
    let negative = frame.magnitude_residual(&negated, magnitude);
    if negative < positive {
        Sign::Negative
    } else {
        Sign::Positive
    }
}

/// Realness projection: discard imaginary parts.
///
/// The target signal is real a priori; a complex-signal variant of the
/// engine would omit exactly this step.
fn realness_projection<T: Scalar>(candidate: &CVector<T>) -> DVector<T> {
    candidate.map(|c| c.re)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameConfig;
    use crate::sampling::uniform_vector;

    fn test_problem() -> (DVector<f64>, Frame<f64>) {
        let frame =
            Frame::<f64>::generate(8, &FrameConfig::new().with_redundancy(6.0).with_seed(1121))
                .unwrap();
        let truth = uniform_vector::<f64>(8, -1.0, 1.0, Some(1231));
        let magnitude = frame.magnitudes(&truth);
        (magnitude, frame)
    }

    #[test]
    fn test_rejects_magnitude_length_mismatch() {
        let (_, frame) = test_problem();
        let short = DVector::<f64>::zeros(frame.num_measurements() - 1);
        let engine = GerchbergSaxton::new(RetrievalConfig::new().with_seed(4321));
        let err = engine.retrieve(&short, &frame).unwrap_err();
        assert!(matches!(err, RetrievalError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_runs_exactly_num_iter_steps() {
        let (magnitude, frame) = test_problem();
        let engine = GerchbergSaxton::new(RetrievalConfig::new().with_iterations(17).with_seed(4321));
        let result = engine.retrieve(&magnitude, &frame).unwrap();
        assert_eq!(result.iterations, 17);
        assert_eq!(result.residual_trace.len(), 17);
        assert_eq!(result.estimate.len(), 8);
    }

    #[test]
    fn test_retrieval_deterministic_per_seed() {
        let (magnitude, frame) = test_problem();
        let engine = GerchbergSaxton::new(RetrievalConfig::new().with_seed(4321));
        let a = engine.retrieve(&magnitude, &frame).unwrap();
        let b = engine.retrieve(&magnitude, &frame).unwrap();
        assert_eq!(a.estimate, b.estimate);
        assert_eq!(a.residual_trace, b.residual_trace);
    }

    #[test]
    fn test_residual_shrinks_from_first_step() {
        let (magnitude, frame) = test_problem();
        let engine = GerchbergSaxton::new(RetrievalConfig::new().with_seed(4321));
        let result = engine.retrieve(&magnitude, &frame).unwrap();
        let first = result.residual_trace[0];
        assert!(result.residual <= first);
    }

    #[test]
    fn test_apply_measured_magnitudes_sets_moduli() {
        let analysis = DVector::from_vec(vec![
            Complex::new(3.0, 4.0),
            Complex::new(-2.0, 0.0),
            Complex::new(0.0, 0.0),
        ]);
        let magnitude = DVector::<f64>::from_vec(vec![10.0, 1.0, 5.0]);
        let constrained = apply_measured_magnitudes(&analysis, &magnitude);

        assert!((constrained[0].norm() - 10.0).abs() < 1e-12);
        assert!((constrained[0].arg() - analysis[0].arg()).abs() < 1e-12);
        // Negative real keeps phase pi.
        assert!((constrained[1].re + 1.0).abs() < 1e-12);
        // arg(0) = 0 maps a dead component to +b_k.
        assert!((constrained[2].re - 5.0).abs() < 1e-12);
        assert!(constrained[2].im.abs() < 1e-12);
    }

    #[test]
    fn test_sign_policy_prefers_positive_on_tie() {
        let (magnitude, frame) = test_problem();
        let candidate = lift_complex(&uniform_vector::<f64>(8, -1.0, 1.0, Some(99)));
        // |F z| = |F(-z)| exactly, so the residuals tie and the policy
        // must keep the positive branch.
        assert_eq!(resolve_sign(&frame, &candidate, &magnitude), Sign::Positive);
    }

    #[test]
    fn test_realness_projection_drops_imaginary() {
        let z = DVector::from_vec(vec![Complex::new(1.5, -0.5), Complex::new(-2.0, 3.0)]);
        let x = realness_projection(&z);
        assert_eq!(x, DVector::from_vec(vec![1.5, -2.0]));
    }

    #[test]
    fn test_phaseless_retrieve_matches_engine() {
        let (magnitude, frame) = test_problem();
        let via_fn = phaseless_retrieve(&magnitude, &frame, 50, Some(4321)).unwrap();
        let engine =
            GerchbergSaxton::new(RetrievalConfig::new().with_iterations(50).with_seed(4321));
        let via_engine = engine.retrieve(&magnitude, &frame).unwrap();
        assert_eq!(via_fn, via_engine.estimate);
    }
}
