//! End-to-end runs of both solvers on fixed city sets.

use u_tsp::brute::{BruteForceConfig, BruteForceSolver};
use u_tsp::ga::{GaConfig, GaSolver};
use u_tsp::model::{cities_from_points, generate_cities, is_permutation, Bounds};
use u_tsp::observer::Recorder;
use u_tsp::random::create_rng;

const FIVE: [(f64, f64); 5] = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (5.0, 5.0)];

/// Rounded Euclidean distance, computed without the crate.
fn dist(a: (f64, f64), b: (f64, f64)) -> u64 {
    ((a.0 - b.0).hypot(a.1 - b.1)).round() as u64
}

/// Shortest open path by recursive enumeration, independent of the solver.
fn reference_open_optimum(points: &[(f64, f64)]) -> u64 {
    fn extend(points: &[(f64, f64)], path: &mut Vec<usize>, used: &mut [bool], best: &mut u64) {
        if path.len() == points.len() {
            let len = path
                .windows(2)
                .map(|w| dist(points[w[0]], points[w[1]]))
                .sum::<u64>();
            *best = (*best).min(len);
            return;
        }
        for i in 0..points.len() {
            if !used[i] {
                used[i] = true;
                path.push(i);
                extend(points, path, used, best);
                path.pop();
                used[i] = false;
            }
        }
    }

    let mut best = u64::MAX;
    extend(points, &mut Vec::new(), &mut vec![false; points.len()], &mut best);
    best
}

#[test]
fn brute_force_square_open_path() {
    let cities = cities_from_points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let result = BruteForceSolver::new(&cities, BruteForceConfig::default())
        .unwrap()
        .run(&mut ());
    // Three sides of the square.
    assert_eq!(result.best_length, 30);
}

#[test]
fn brute_force_five_city_scenario() {
    let cities = cities_from_points(&FIVE);
    let mut recorder = Recorder::new();
    let result = BruteForceSolver::new(&cities, BruteForceConfig::default())
        .unwrap()
        .run(&mut recorder);

    let expected = reference_open_optimum(&FIVE);
    assert_eq!(expected, 34);
    assert_eq!(result.best_length, expected);
    assert_eq!(result.permutations_evaluated, 120);
    assert!(is_permutation(&result.best_tour, 5));

    // The centre city sits between two corners on the optimal path.
    let centre = result.best_tour.iter().position(|&c| c == 4).unwrap();
    assert!(centre > 0 && centre < 4, "tour {:?}", result.best_tour);

    let lengths: Vec<u64> = recorder.incumbents.iter().map(|i| i.length).collect();
    assert!(lengths.windows(2).all(|w| w[1] < w[0]), "{lengths:?}");
    assert_eq!(lengths.last(), Some(&34));
}

#[test]
fn brute_force_matches_reference_on_random_sets() {
    for seed in 0..5 {
        let cities =
            generate_cities(6, &Bounds::brute_force_canvas(), &mut create_rng(seed)).unwrap();
        let points: Vec<(f64, f64)> = cities.iter().map(|c| c.position()).collect();
        let result = BruteForceSolver::new(&cities, BruteForceConfig::default())
            .unwrap()
            .run(&mut ());
        assert_eq!(result.best_length, reference_open_optimum(&points), "seed {seed}");
    }
}

#[test]
fn genetic_never_beats_exact_closed_bound() {
    let cities = generate_cities(7, &Bounds::genetic_canvas(), &mut create_rng(77)).unwrap();
    let mut solver = GaSolver::new(&cities, GaConfig::fast().with_seed(77)).unwrap();
    let result = solver.run(&mut ());

    // A closed tour is an open path plus one edge, so it is never shorter
    // than the open optimum.
    let brute = BruteForceSolver::new(&cities, BruteForceConfig::default())
        .unwrap()
        .run(&mut ());
    assert!(result.best_length >= brute.best_length);
    assert_eq!(
        result.best_length,
        solver.matrix().closed_length(&result.best_tour)
    );
}

#[test]
fn genetic_improves_on_initial_population() {
    let cities = generate_cities(20, &Bounds::genetic_canvas(), &mut create_rng(5)).unwrap();
    let config = GaConfig::default()
        .with_population_size(200)
        .with_max_generations(150)
        .with_seed(5);
    let mut solver = GaSolver::new(&cities, config).unwrap();
    let mut recorder = Recorder::new();
    let result = solver.run(&mut recorder);

    let first = result.length_history[0];
    assert!(
        result.best_length < first,
        "expected progress past generation 0: {} vs {}",
        result.best_length,
        first
    );
    assert!(result.improvement_log.len() > 1);
    assert_eq!(recorder.generations.len(), 150);
}
