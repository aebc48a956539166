//! Benchmarks for the engine step and its phases.
//!
//! Run with: `cargo bench --bench step_bench`
//!
//! Enable the `parallel` feature to measure the rayon paths.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use euler_fv::boundary::BoundaryConditionApplier;
use euler_fv::simulation::{EulerSimulation, FlowSimulation};
use euler_fv::solver::{EulerDiagnostics2D, FaceFluxes, FluxAccumulator, GridConfig, GridState};
use euler_fv::time::cfl_time_step;

/// Grid with ghosts filled, ready for a face sweep.
fn setup_grid(n: usize) -> (GridConfig, GridState) {
    let config = GridConfig::new(n);
    let mut grid = GridState::new(&config).unwrap();
    BoundaryConditionApplier::new(&config.boundary).apply(&mut grid);
    (config, grid)
}

/// Benchmark a complete step.
fn bench_full_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_step");
    group.sample_size(20);

    for n in [64, 128, 256] {
        let mut sim = EulerSimulation::new(GridConfig::new(n)).unwrap();
        group.bench_with_input(BenchmarkId::new("euler", n), &n, |b, _| {
            b.iter(|| sim.step());
        });
    }

    group.finish();
}

/// Benchmark the individual phases of a step.
fn bench_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("phases");

    for n in [64, 256] {
        let (config, mut grid) = setup_grid(n);
        let boundary = BoundaryConditionApplier::new(&config.boundary);
        let accumulator = FluxAccumulator::new(config.limiter, config.riemann_solver);
        let mut fluxes = FaceFluxes::new(n);

        group.bench_with_input(BenchmarkId::new("to_primitive", n), &n, |b, _| {
            b.iter(|| grid.conservative_to_primitive());
        });

        group.bench_with_input(BenchmarkId::new("boundary", n), &n, |b, _| {
            b.iter(|| boundary.apply(black_box(&mut grid)));
        });

        group.bench_with_input(BenchmarkId::new("accumulate", n), &n, |b, _| {
            b.iter(|| accumulator.accumulate(black_box(&grid), &mut fluxes));
        });

        group.bench_with_input(BenchmarkId::new("cfl_dt", n), &n, |b, _| {
            b.iter(|| cfl_time_step(black_box(&grid), black_box(config.cfl)));
        });

        group.bench_with_input(BenchmarkId::new("diagnostics", n), &n, |b, _| {
            b.iter(|| EulerDiagnostics2D::compute(black_box(&grid), config.initial_dt()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_step, bench_phases);
criterion_main!(benches);
