use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use twobody::constants::{AU, EARTH_MASS, SUN_MASS};
use twobody::kepler::KeplerSolver;

/// Heliocentric regime: radii spanning Mercury-like to Neptune-like orbits.
fn bench_period(c: &mut Criterion) {
    let solver = KeplerSolver::new(SUN_MASS).unwrap();
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("kepler_solver/period_from_distance", |b| {
        b.iter_batched(
            || {
                // Pre-generate inputs to avoid RNG cost in the timed section
                (0..samples)
                    .map(|_| rng.random_range(0.3 * AU..31.0 * AU))
                    .collect::<Vec<_>>()
            },
            |radii| {
                for a in radii {
                    let period = solver.period_from_distance(black_box(a)).unwrap();
                    black_box(period);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Geocentric regime: radii spanning LEO to beyond GEO.
fn bench_circular_speed(c: &mut Criterion) {
    let solver = KeplerSolver::new(EARTH_MASS).unwrap();
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("kepler_solver/circular_speed_from_distance", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| rng.random_range(6.6e6..4.3e7))
                    .collect::<Vec<_>>()
            },
            |radii| {
                for r in radii {
                    let speed = solver.circular_speed_from_distance(black_box(r)).unwrap();
                    black_box(speed);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Construction cost: validation plus the one-time μ precomputation.
fn bench_construction(c: &mut Criterion) {
    c.bench_function("kepler_solver/new", |b| {
        b.iter(|| {
            let solver = KeplerSolver::new(black_box(SUN_MASS)).unwrap();
            black_box(solver);
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_period, bench_circular_speed, bench_construction
);
criterion_main!(benches);
