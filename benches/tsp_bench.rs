//! Criterion benchmarks for the u-tsp solvers.
//!
//! Cities are generated from fixed seeds so every run measures the same
//! instances.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_tsp::brute::{BruteForceConfig, BruteForceSolver};
use u_tsp::ga::fitness::{evaluate, BestSoFar};
use u_tsp::ga::selection::mating_pool;
use u_tsp::ga::{GaConfig, GaSolver};
use u_tsp::model::{generate_cities, Bounds, City, DistanceMatrix};
use u_tsp::random::{create_rng, shuffle};

fn cities(n: usize) -> Vec<City> {
    generate_cities(n, &Bounds::genetic_canvas(), &mut create_rng(42)).expect("valid bounds")
}

// ===========================================================================
// Brute force
// ===========================================================================

fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force");
    group.sample_size(10);

    for n in [6, 7, 8] {
        let solver = BruteForceSolver::new(&cities(n), BruteForceConfig::default())
            .expect("valid instance");
        group.bench_with_input(BenchmarkId::from_parameter(n), &solver, |b, solver| {
            b.iter(|| black_box(solver.run(&mut ())));
        });
    }
    group.finish();
}

// ===========================================================================
// Genetic algorithm
// ===========================================================================

fn bench_ga_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_generation");
    group.sample_size(20);

    for population in [100, 500] {
        let config = GaConfig::default()
            .with_population_size(population)
            .with_max_generations(10)
            .with_seed(42);
        let instance = cities(20);
        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut solver =
                        GaSolver::new(&instance, config.clone()).expect("valid instance");
                    black_box(solver.run(&mut ()))
                });
            },
        );
    }
    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let instance = cities(20);
    let matrix = DistanceMatrix::from_cities(&instance).expect("valid instance");
    let mut rng = create_rng(7);
    let population: Vec<Vec<usize>> = (0..1000)
        .map(|_| {
            let mut tour: Vec<usize> = (0..20).collect();
            shuffle(&mut tour, &mut rng);
            tour
        })
        .collect();
    let fitness = evaluate(&population, &matrix, 0, &mut BestSoFar::new(), false);

    c.bench_function("mating_pool_1000", |b| {
        b.iter(|| black_box(mating_pool(&population, &fitness, &mut rng)));
    });
}

criterion_group!(benches, bench_brute_force, bench_ga_generation, bench_selection);
criterion_main!(benches);
