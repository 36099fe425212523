use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

use kerfpack::calculate;
use kerfpack::entities::{Job, Piece, SheetSpec};
use kerfpack::packers::Algorithm;

criterion_main!(benches);
criterion_group!(benches, packer_bench);

const N_PIECES: u64 = 40;
const KERF: f64 = 3.0;

/// Cabinet-like job on a standard 2440 x 1220 board.
fn create_benchmark_job(algorithm: Algorithm) -> Job {
    let mut rng = SmallRng::seed_from_u64(0);
    let pieces = (0..N_PIECES)
        .map(|id| {
            let width = rng.random_range(100..900) as f64;
            let height = rng.random_range(60..600) as f64;
            Piece::new(id, width, height, rng.random_range(1..=4))
        })
        .collect();
    Job::new(pieces, SheetSpec::new(2440.0, 1220.0), KERF, algorithm).unwrap()
}

fn packer_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");
    group.sample_size(10);
    for algorithm in Algorithm::ALL {
        let job = create_benchmark_job(algorithm);
        group.bench_with_input(BenchmarkId::from_parameter(algorithm), &job, |b, job| {
            b.iter(|| calculate(job).unwrap())
        });
    }
    group.finish();
}
