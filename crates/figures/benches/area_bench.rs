//! Criterion microbenches for area computation and `info` formatting.
//!
//! Results live under `target/criterion`.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use figures::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_triangles(n: usize, seed: u64) -> Vec<Triangle> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let a = rng.gen_range(0.1..10.0);
        let b = rng.gen_range(0.1..10.0);
        let c = rng.gen_range(0.1..10.0);
        // Rejection sampling: invalid draws are simply skipped.
        if let Ok(t) = Triangle::new(Color::Red, a, b, c) {
            out.push(t);
        }
    }
    out
}

fn bench_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("area");
    group.bench_function("triangle_heron_1k", |b| {
        b.iter_batched(
            || random_triangles(1000, 43),
            |ts| ts.iter().map(|t| t.area()).sum::<f64>(),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("circle", |b| {
        let circle = Circle::new(Color::Green, 2.0).unwrap();
        b.iter(|| black_box(circle).area())
    });
    group.bench_function("rectangle", |b| {
        let rect = Rectangle::new(Color::Blue, 3.0, 7.0).unwrap();
        b.iter(|| black_box(rect).area())
    });
    group.finish();
}

fn bench_info(c: &mut Criterion) {
    let figures: Vec<Box<dyn Figure>> = vec![
        Box::new(Triangle::new(Color::Red, 3.0, 4.0, 5.0).unwrap()),
        Box::new(Circle::new(Color::Green, 2.0).unwrap()),
        Box::new(Rectangle::new(Color::Blue, 3.0, 7.0).unwrap()),
    ];
    c.bench_function("info_dyn_3", |b| {
        b.iter(|| {
            for f in &figures {
                black_box(info(f));
            }
        })
    });
}

criterion_group!(benches, bench_area, bench_info);
criterion_main!(benches);
