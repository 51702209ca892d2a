//! Benchmarks for the overlap operations.
//!
//! Run with: cargo bench
//!
//! Diagnostics of the library are printed according to `RUST_LOG`, e.g.
//! `RUST_LOG=overlap=debug cargo bench` reports clamped results.

#![allow(missing_docs, clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use overlap::math::Point3;
use overlap::{overlap_area, overlap_volume, Element, Sphere};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// Fixtures
// =============================================================================

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    // criterion runs every group in the same process
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}

fn hexahedron() -> Element {
    Element::hexahedron([
        Point3::new(-1.0, -1.0, -1.0),
        Point3::new(1.0, -1.0, -1.0),
        Point3::new(1.0, 1.0, -1.0),
        Point3::new(-1.0, 1.0, -1.0),
        Point3::new(-1.0, -1.0, 1.0),
        Point3::new(1.0, -1.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(-1.0, 1.0, 1.0),
    ])
    .unwrap()
}

fn tetrahedron() -> Element {
    Element::tetrahedron([
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
        Point3::new(0.0, 0.0, 2.0),
    ])
    .unwrap()
}

/// One sphere per regime plus the configurations with the most corrections.
fn fixed_spheres() -> Vec<(&'static str, Sphere)> {
    vec![
        ("disjoint", Sphere::from_coords([5.0, 0.0, 0.0], 1.0).unwrap()),
        ("aabb_corner", Sphere::from_coords([1.9, 1.9, 1.9], 1.0).unwrap()),
        ("sphere_inside", Sphere::from_coords([0.0, 0.0, 0.0], 0.5).unwrap()),
        ("element_inside", Sphere::from_coords([0.0, 0.0, 0.0], 2.0).unwrap()),
        ("face", Sphere::from_coords([0.0, 0.0, 1.0], 0.5).unwrap()),
        ("edge", Sphere::from_coords([1.0, 1.0, 0.0], 0.5).unwrap()),
        ("vertex", Sphere::from_coords([1.0, 1.0, 1.0], 1.0).unwrap()),
        ("all_faces", Sphere::from_coords([0.0, 0.0, 0.0], 1.5).unwrap()),
    ]
}

fn random_spheres(count: usize) -> Vec<Sphere> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..count)
        .map(|_| {
            let center = [
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
            ];
            Sphere::from_coords(center, rng.gen_range(0.1..2.0)).unwrap()
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_fixed(c: &mut Criterion) {
    init_tracing();
    let mut group = c.benchmark_group("Fixed");

    for (name, element) in [("hexahedron", hexahedron()), ("tetrahedron", tetrahedron())] {
        for (case, sphere) in fixed_spheres() {
            let id = format!("{name}/{case}");
            group.bench_with_input(BenchmarkId::new("volume", &id), &sphere, |b, sphere| {
                b.iter(|| overlap_volume(black_box(sphere), black_box(&element)));
            });
            group.bench_with_input(BenchmarkId::new("area", &id), &sphere, |b, sphere| {
                b.iter(|| overlap_area(black_box(sphere), black_box(&element)));
            });
        }
    }

    group.finish();
}

fn bench_random(c: &mut Criterion) {
    init_tracing();
    let mut group = c.benchmark_group("Random");
    let spheres = random_spheres(1000);
    group.throughput(Throughput::Elements(spheres.len() as u64));

    for (name, element) in [("hexahedron", hexahedron()), ("tetrahedron", tetrahedron())] {
        group.bench_with_input(BenchmarkId::new("volume", name), &element, |b, element| {
            b.iter(|| {
                spheres
                    .iter()
                    .map(|sphere| overlap_volume(black_box(sphere), element))
                    .sum::<f64>()
            });
        });
        group.bench_with_input(BenchmarkId::new("area", name), &element, |b, element| {
            b.iter(|| {
                spheres
                    .iter()
                    .map(|sphere| overlap_area(black_box(sphere), element).total())
                    .sum::<f64>()
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_fixed, bench_random);

criterion_main!(benches);
