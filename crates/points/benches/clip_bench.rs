//! Criterion benchmarks for Cohen–Sutherland clipping.
//! Segments are drawn around a 0..1000 viewport so that roughly a third are
//! inside, a third cross an edge and the rest miss.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use points::{clip_segment, Block, CartesianPoint};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_segments(n: usize, seed: u64) -> Vec<(CartesianPoint, CartesianPoint)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut draw = || {
        CartesianPoint::xy(
            rng.gen_range(-1000.0..2000.0),
            rng.gen_range(-1000.0..2000.0),
        )
    };
    (0..n).map(|_| (draw(), draw())).collect()
}

fn bench_clip(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip");
    let viewport = Block::from_size(1000.0, 1000.0);
    for &n in &[1usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("clip_segment", n), &n, |b, &n| {
            b.iter_batched(
                || random_segments(n, 42),
                |segments| {
                    for (p, q) in &segments {
                        let _ = clip_segment(&viewport, p, q);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_clip);
criterion_main!(benches);
