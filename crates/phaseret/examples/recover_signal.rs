//! End-to-end phaseless retrieval example.
//!
//! This example shows how to:
//! - Sample a random ground-truth signal
//! - Generate a redundant frame with orthonormal columns
//! - Retrieve the signal from measurement magnitudes alone
//! - Resolve the sign ambiguity and report the reconstruction error

use phaseret::prelude::*;

fn main() -> phaseret::Result<()> {
    println!("=== Phaseless Retrieval Example: Gerchberg-Saxton ===\n");

    let n = 21;
    let redundancy = n as f64 / 2.0 + 5.0;

    // The ground truth exists only to build the problem instance and to
    // score the result; the engine sees the magnitudes and the frame.
    let truth = uniform_vector::<f64>(n, -1.0, 1.0, Some(1231));
    let frame = Frame::generate(
        n,
        &FrameConfig::new()
            .with_redundancy(redundancy)
            .with_seed(1121),
    )?;
    let magnitude = frame.magnitudes(&truth);

    println!(
        "Problem: n = {}, m = {} measurements (redundancy {:.1})",
        frame.signal_dim(),
        frame.num_measurements(),
        frame.redundancy()
    );

    let engine = GerchbergSaxton::new(
        RetrievalConfig::new()
            .with_iterations(200)
            .with_seed(4321),
    );
    let result = engine.retrieve(&magnitude, &frame)?;

    println!(
        "Ran {} with {} iterations, final magnitude residual {:.3e}",
        engine.name(),
        result.iterations,
        result.residual
    );

    let eval = sign_aligned(&truth, &result.estimate)?;

    println!("\n=== Retrieval Results ===");
    println!("Sign flipped during alignment: {}", eval.negated);
    println!("Reconstruction error: {:.3e}\n", eval.error);

    println!("{:>4}  {:>10}  {:>10}", "k", "truth", "estimate");
    for k in 0..n {
        println!("{:>4}  {:>10.6}  {:>10.6}", k, truth[k], eval.estimate[k]);
    }

    Ok(())
}
