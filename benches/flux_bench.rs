//! Benchmarks for numerical flux functions.
//!
//! Run with: `cargo bench --bench flux_bench`
//!
//! Compares performance of the approximate Riemann solvers for 2D Euler.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use euler_fv::equations::Euler2D;
use euler_fv::flux::{NumericalFlux, StandardFlux};
use euler_fv::solver::PrimitiveState2D;
use euler_fv::types::Axis;

/// Generate left/right face states for flux computation.
fn generate_test_states(n: usize) -> Vec<(PrimitiveState2D, PrimitiveState2D)> {
    let mut states = Vec::with_capacity(n);
    for i in 0..n {
        let phase = (i as f64) * 0.1;

        let left = PrimitiveState2D::new(
            1.0 + 0.5 * phase.sin(),
            0.3 * phase.cos(),
            0.2 - 0.1 * phase.sin(),
            1.0 + 0.3 * phase.cos(),
        );
        let right = PrimitiveState2D::new(
            1.0 + 0.4 * (phase + 0.5).sin(),
            0.2 * (phase + 0.3).cos(),
            0.3 - 0.15 * (phase + 0.2).sin(),
            0.9 + 0.2 * (phase + 0.7).cos(),
        );

        states.push((left, right));
    }
    states
}

/// Benchmark individual flux functions on x-faces.
fn bench_flux_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("flux_functions");

    let gas = Euler2D::default();
    let states = generate_test_states(1000);

    for flux in StandardFlux::ALL {
        group.bench_function(flux.name(), |b| {
            b.iter(|| {
                let mut total_mass = 0.0;
                for (left, right) in &states {
                    let f = flux.compute(black_box(left), black_box(right), black_box(&gas));
                    total_mass += f.rho;
                }
                total_mass
            });
        });
    }

    group.finish();
}

/// Benchmark flux computation across a pressure jump of increasing strength.
fn bench_flux_pressure_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("flux_pressure_ratio");

    let gas = Euler2D::default();

    for ratio in [1.0, 2.0, 10.0, 100.0] {
        let left = PrimitiveState2D::at_rest(1.0, ratio);
        let right = PrimitiveState2D::at_rest(0.125, 0.1);

        for flux in StandardFlux::ALL {
            group.bench_with_input(
                BenchmarkId::new(flux.name(), format!("ratio_{:.0}", ratio)),
                &ratio,
                |b, _| {
                    b.iter(|| {
                        flux.solve(black_box(&left), black_box(&right), Axis::Y, black_box(&gas))
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_flux_functions, bench_flux_pressure_ratio);
criterion_main!(benches);
