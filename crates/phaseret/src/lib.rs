//! Phaseless signal retrieval in Rust.
//!
//! This facade crate re-exports the retrieval library: frame generation,
//! the Gerchberg-Saxton engine, and sign-aligned evaluation.
//!
//! # Example
//!
//! ```rust
//! use phaseret::prelude::*;
//!
//! // Build a problem instance: a ground truth the engine never sees,
//! // a redundant frame, and the magnitudes of the measurements.
//! let truth = uniform_vector::<f64>(21, -1.0, 1.0, Some(1231));
//! let frame = Frame::generate(
//!     21,
//!     &FrameConfig::new().with_redundancy(15.5).with_seed(1121),
//! )
//! .unwrap();
//! let magnitude = frame.magnitudes(&truth);
//!
//! // Retrieve from magnitudes alone, then resolve the sign ambiguity.
//! let engine = GerchbergSaxton::new(RetrievalConfig::new().with_seed(4321));
//! let result = engine.retrieve(&magnitude, &frame).unwrap();
//! let eval = sign_aligned(&truth, &result.estimate).unwrap();
//! assert!(eval.error < 1e-6);
//! ```

pub use phaseret_core::{
    error, evaluate, frame, retrieval, sampling, types, Evaluation, Frame, FrameConfig,
    FrameError, FrameResult, GerchbergSaxton, Result, Retrieval, RetrievalConfig, RetrievalError,
    Sign, phaseless_retrieve, sign_aligned,
};

// Re-export the linear algebra backbone for downstream shape juggling.
pub use nalgebra;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use phaseret::prelude::*;
/// ```
pub mod prelude {
    pub use phaseret_core::prelude::*;
}
