use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orrery::planetlib::kepler;
use orrery::{Ephemeris, Planet, Time};

/// Kepler solver over the eccentricity range of the planet table
fn bench_kepler(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let samples = 10_000usize;

    c.bench_function("kepler/eccentric_anomaly", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| {
                        let m = rng.gen_range(0.0..std::f64::consts::TAU);
                        let e = rng.gen_range(0.0..0.21);
                        (m, e)
                    })
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (m, e) in cases {
                    black_box(kepler::eccentric_anomaly(black_box(m), black_box(e)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// One planet through the whole pipeline
fn bench_single_position(c: &mut Criterion) {
    let eph = Ephemeris::new();
    let t = Time::utc(2025, 1, 16, 0, 0, 0.0).unwrap();

    c.bench_function("ephemeris/compute_position_mars", |b| {
        b.iter(|| black_box(eph.compute_position(black_box(Planet::Mars), black_box(&t))))
    });
}

/// A full dashboard snapshot of all eight planets
fn bench_snapshot(c: &mut Criterion) {
    let eph = Ephemeris::new();
    let t = Time::utc(2025, 1, 16, 0, 0, 0.0).unwrap();

    c.bench_function("ephemeris/compute_positions_all", |b| {
        b.iter(|| black_box(eph.compute_positions(black_box(&Planet::ALL), black_box(&t))))
    });
}

criterion_group!(benches, bench_kepler, bench_single_position, bench_snapshot);
criterion_main!(benches);
