//! Criterion benchmarks for the brute-force detector.
//! Focus sizes: n in {8, 16, 32, 64}; work grows as C(n,4).
//! Results: by default under target/criterion.

use collinear::prelude::*;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_brute(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute");
    for &n in &[8usize, 16, 32, 64] {
        let cfg = PointCloudCfg {
            count: n,
            planted_lines: n / 8,
            bound: 32_768,
        };
        group.bench_with_input(BenchmarkId::new("detect", n), &cfg, |b, &cfg| {
            b.iter_batched(
                || draw_point_cloud(cfg, ReplayToken { seed: 42, index: 0 }),
                |pts| {
                    let _res = BruteCollinearPoints::new(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.bench_function(BenchmarkId::new("slope_to", "general"), |b| {
        let p = Point::new(17, 3);
        let q = Point::new(-5, 40);
        b.iter(|| p.slope_to(&q))
    });
    group.finish();
}

criterion_group!(benches, bench_brute);
criterion_main!(benches);
