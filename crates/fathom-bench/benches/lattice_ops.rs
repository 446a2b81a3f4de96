//! Criterion micro-benchmarks for lattice neighbour enumeration.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fathom_core::Connectivity;
use fathom_space::{Lattice, Torus2D, Torus3D};
use smallvec::smallvec;

/// Benchmark: neighbours() on all 10K cells of a four-connected torus.
fn bench_neighbours_torus2d_four_10k(c: &mut Criterion) {
    let lattice = Torus2D::new(100, 100, Connectivity::Four).unwrap();

    c.bench_function("neighbours_torus2d_four_10k", |b| {
        b.iter(|| {
            for r in 0..100i32 {
                for col in 0..100i32 {
                    let coord = smallvec![r, col];
                    let n = lattice.neighbours(&coord);
                    black_box(&n);
                }
            }
        });
    });
}

/// Benchmark: neighbours() on all 10K cells of an eight-connected torus.
fn bench_neighbours_torus2d_eight_10k(c: &mut Criterion) {
    let lattice = Torus2D::new(100, 100, Connectivity::Eight).unwrap();

    c.bench_function("neighbours_torus2d_eight_10k", |b| {
        b.iter(|| {
            for r in 0..100i32 {
                for col in 0..100i32 {
                    let coord = smallvec![r, col];
                    let n = lattice.neighbours(&coord);
                    black_box(&n);
                }
            }
        });
    });
}

/// Benchmark: neighbours() on all ~10K cells of a 26-connected volume.
///
/// 22^3 = 10,648 cells, close to the 2D benchmarks' cell count.
fn bench_neighbours_torus3d_twentysix_10k(c: &mut Criterion) {
    let lattice = Torus3D::new(22, 22, 22, Connectivity::TwentySix).unwrap();

    c.bench_function("neighbours_torus3d_twentysix_10k", |b| {
        b.iter(|| {
            for l in 0..22i32 {
                for r in 0..22i32 {
                    for col in 0..22i32 {
                        let coord = smallvec![l, r, col];
                        let n = lattice.neighbours(&coord);
                        black_box(&n);
                    }
                }
            }
        });
    });
}

/// Benchmark: wrap() folding far-out coordinates back onto the torus.
fn bench_wrap_torus2d_10k(c: &mut Criterion) {
    let lattice = Torus2D::new(100, 100, Connectivity::Eight).unwrap();

    c.bench_function("wrap_torus2d_10k", |b| {
        b.iter(|| {
            for i in -5000..5000i32 {
                let coord = smallvec![i, -i];
                let w = lattice.wrap(&coord);
                black_box(&w);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_neighbours_torus2d_four_10k,
    bench_neighbours_torus2d_eight_10k,
    bench_neighbours_torus3d_twentysix_10k,
    bench_wrap_torus2d_10k
);
criterion_main!(benches);
