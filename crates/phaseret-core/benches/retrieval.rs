//! Benchmark of a full retrieval run at the reference problem size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phaseret_core::frame::{Frame, FrameConfig};
use phaseret_core::retrieval::{GerchbergSaxton, RetrievalConfig};
use phaseret_core::sampling::uniform_vector;

fn bench_retrieval(c: &mut Criterion) {
    let n = 21;
    let frame =
        Frame::<f64>::generate(n, &FrameConfig::new().with_redundancy(15.5).with_seed(1121))
            .unwrap();
    let truth = uniform_vector::<f64>(n, -1.0, 1.0, Some(1231));
    let magnitude = frame.magnitudes(&truth);
    let engine = GerchbergSaxton::new(RetrievalConfig::new().with_iterations(200).with_seed(4321));

    c.bench_function("gs_retrieve_n21_r15.5", |b| {
        b.iter(|| {
            engine
                .retrieve(black_box(&magnitude), black_box(&frame))
                .unwrap()
        })
    });

    c.bench_function("frame_generate_n21_r15.5", |b| {
        b.iter(|| {
            Frame::<f64>::generate(
                n,
                &FrameConfig::new().with_redundancy(15.5).with_seed(1121),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_retrieval);
criterion_main!(benches);
