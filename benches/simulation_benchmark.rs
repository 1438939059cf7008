//! Benchmark for MonteVest simulation performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use montevest::analytics::bands::percentile_bands;
use montevest::simulation::gbm::generate_paths;
use montevest::{CancelToken, SimulationEngine, SimulationParameters};

fn bench_params(simulations: usize) -> SimulationParameters {
    SimulationParameters::new("ASML", 850.0, 0.35, 0.15, simulations, 10_000.0, 15_000.0)
}

/// Full pipeline at increasing simulation counts.
fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    for simulations in [1_000usize, 10_000, 50_000] {
        let engine = SimulationEngine::new(bench_params(simulations))
            .unwrap()
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(simulations),
            &engine,
            |b, engine| b.iter(|| black_box(engine.run().unwrap())),
        );
    }
    group.finish();
}

/// Path generation alone.
fn bench_path_generation(c: &mut Criterion) {
    let params = bench_params(10_000);
    let cancel = CancelToken::new();
    c.bench_function("generate_paths_10k", |b| {
        b.iter(|| black_box(generate_paths(&params, 42, None, &cancel).unwrap()))
    });
}

/// Percentile band construction - the dominant aggregation cost.
fn bench_percentile_bands(c: &mut Criterion) {
    let params = bench_params(10_000);
    let (paths, _) = generate_paths(&params, 42, None, &CancelToken::new()).unwrap();
    c.bench_function("percentile_bands_10k", |b| {
        b.iter(|| black_box(percentile_bands(&paths)))
    });
}

criterion_group!(
    benches,
    bench_full_pipeline,
    bench_path_generation,
    bench_percentile_bands
);
criterion_main!(benches);
