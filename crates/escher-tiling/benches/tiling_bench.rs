use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use escher_geom::Line;
use escher_tiling::{fundamental_triangle, grow, Tiling};

// ── helpers ──

fn seeded() -> Tiling {
    let [v1, v2, v3] = fundamental_triangle().unwrap();
    Tiling::new(v1, v2, v3).unwrap()
}

// ── benches ──

fn bench_reflect(c: &mut Criterion) {
    let [v1, v2, v3] = fundamental_triangle().unwrap();
    let mirror = Line::from_points(&v1, &v2);
    c.bench_function("reflect_seed_vertex", |b| {
        b.iter(|| mirror.reflect(black_box(&v3)).unwrap())
    });
}

fn bench_grow_depth_2(c: &mut Criterion) {
    c.bench_function("grow_depth_2", |b| {
        b.iter(|| {
            let mut tiling = seeded();
            grow(&mut tiling, 2).unwrap();
            black_box(tiling.tile_count())
        })
    });
}

criterion_group!(benches, bench_reflect, bench_grow_depth_2);
criterion_main!(benches);
