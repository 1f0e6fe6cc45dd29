//! Exhaustive search loop.

use super::config::BruteForceConfig;
use super::permutations::next_permutation;
use crate::error::TspResult;
use crate::model::{
    identity_tour, open_path, sorted_by_index, validate_cities, City, DistanceMatrix,
};
use crate::observer::{Incumbent, Observer};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a brute-force run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BruteForceResult {
    /// Shortest open path found (the optimum unless cancelled).
    pub best_tour: Vec<usize>,

    /// Length of `best_tour`.
    pub best_length: u64,

    /// Coordinates of `best_tour` in visiting order.
    pub best_path: Vec<(f64, f64)>,

    /// Wall-clock time spent enumerating.
    pub elapsed: Duration,

    /// Number of permutations whose length was computed.
    pub permutations_evaluated: u64,

    /// Number of times the incumbent improved.
    pub improvements: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

impl BruteForceResult {
    /// `true` when every permutation was examined, so the result is optimal.
    pub fn is_exhaustive(&self) -> bool {
        !self.cancelled
    }
}

/// Exact open-path solver over all N! permutations.
///
/// # Usage
///
/// ```
/// use u_tsp::brute::{BruteForceConfig, BruteForceSolver};
/// use u_tsp::model::cities_from_points;
///
/// let cities = cities_from_points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
/// let solver = BruteForceSolver::new(&cities, BruteForceConfig::default()).unwrap();
/// let result = solver.run(&mut ());
/// assert_eq!(result.best_length, 30);
/// ```
#[derive(Debug, Clone)]
pub struct BruteForceSolver {
    cities: Vec<City>,
    matrix: DistanceMatrix,
    config: BruteForceConfig,
}

impl BruteForceSolver {
    /// Validates the configuration and cities and builds the distance matrix.
    ///
    /// Nothing is enumerated until [`run`](Self::run).
    pub fn new(cities: &[City], config: BruteForceConfig) -> TspResult<Self> {
        config.validate()?;
        config.check_city_count(cities.len())?;
        let matrix = DistanceMatrix::from_cities(cities)?;
        validate_cities(cities)?;

        Ok(Self {
            cities: sorted_by_index(cities),
            matrix,
            config,
        })
    }

    /// Cities ordered by index.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The distance matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// The configuration.
    pub fn config(&self) -> &BruteForceConfig {
        &self.config
    }

    /// Runs the search to completion.
    pub fn run<O: Observer + ?Sized>(&self, observer: &mut O) -> BruteForceResult {
        self.run_with_cancel(observer, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked between permutations. A cancelled run returns
    /// the last incumbent with `cancelled = true`; at least one permutation
    /// is always evaluated.
    pub fn run_with_cancel<O: Observer + ?Sized>(
        &self,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> BruteForceResult {
        let start = Instant::now();

        let mut perm = identity_tour(self.cities.len());
        let mut best_tour = perm.clone();
        let mut best_length = u64::MAX;
        let mut evaluated = 0u64;
        let mut improvements = 0usize;
        let mut cancelled = false;

        loop {
            evaluated += 1;
            let length = self.matrix.open_length(&perm);
            if length < best_length {
                best_length = length;
                best_tour.copy_from_slice(&perm);
                improvements += 1;
                observer.on_incumbent(&Incumbent {
                    tour: best_tour.clone(),
                    path: open_path(&best_tour, &self.cities),
                    length,
                    permutation: evaluated,
                });
            }

            if !next_permutation(&mut perm) {
                break;
            }

            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
        }

        BruteForceResult {
            best_path: open_path(&best_tour, &self.cities),
            best_tour,
            best_length,
            elapsed: start.elapsed(),
            permutations_evaluated: evaluated,
            improvements,
            cancelled,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brute::factorial;
    use crate::error::TspError;
    use crate::model::{cities_from_points, generate_cities, is_permutation, Bounds};
    use crate::observer::Recorder;
    use crate::random::create_rng;

    fn square() -> Vec<City> {
        cities_from_points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
    }

    #[test]
    fn test_square_optimum() {
        let solver = BruteForceSolver::new(&square(), BruteForceConfig::default()).unwrap();
        let result = solver.run(&mut ());

        assert_eq!(result.best_length, 30);
        assert_eq!(result.permutations_evaluated, 24);
        assert!(result.is_exhaustive());
        assert!(is_permutation(&result.best_tour, 4));
        assert_eq!(result.best_path.len(), 4);
        // The identity is already optimal and comes first lexicographically.
        assert_eq!(result.best_tour, vec![0, 1, 2, 3]);
        assert_eq!(result.improvements, 1);
    }

    #[test]
    fn test_incumbents_strictly_decrease() {
        let mut rng = create_rng(42);
        let cities = generate_cities(7, &Bounds::brute_force_canvas(), &mut rng).unwrap();
        let solver = BruteForceSolver::new(&cities, BruteForceConfig::default()).unwrap();

        let mut recorder = Recorder::new();
        let result = solver.run(&mut recorder);

        assert!(!recorder.incumbents.is_empty());
        assert_eq!(recorder.incumbents.len(), result.improvements);
        for pair in recorder.incumbents.windows(2) {
            assert!(pair[1].length < pair[0].length);
            assert!(pair[1].permutation > pair[0].permutation);
        }
        let last = recorder.incumbents.last().unwrap();
        assert_eq!(last.length, result.best_length);
        assert_eq!(last.tour, result.best_tour);
        assert_eq!(result.permutations_evaluated, factorial(7).unwrap());
    }

    #[test]
    fn test_incumbent_path_matches_tour() {
        let cities = square();
        let solver = BruteForceSolver::new(&cities, BruteForceConfig::default()).unwrap();
        let mut recorder = Recorder::new();
        solver.run(&mut recorder);

        for inc in &recorder.incumbents {
            let expected: Vec<(f64, f64)> =
                inc.tour.iter().map(|&i| cities[i].position()).collect();
            assert_eq!(inc.path, expected);
        }
    }

    #[test]
    fn test_two_cities() {
        let cities = cities_from_points(&[(0.0, 0.0), (3.0, 4.0)]);
        let solver = BruteForceSolver::new(&cities, BruteForceConfig::default()).unwrap();
        let result = solver.run(&mut ());
        assert_eq!(result.best_length, 5);
        assert_eq!(result.permutations_evaluated, 2);
    }

    #[test]
    fn test_too_many_cities() {
        let mut rng = create_rng(1);
        let cities = generate_cities(11, &Bounds::brute_force_canvas(), &mut rng).unwrap();
        let err = BruteForceSolver::new(&cities, BruteForceConfig::default()).unwrap_err();
        assert!(matches!(err, TspError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_single_city_rejected() {
        let cities = cities_from_points(&[(0.0, 0.0)]);
        assert!(matches!(
            BruteForceSolver::new(&cities, BruteForceConfig::default()),
            Err(TspError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_degenerate_rejected() {
        let cities = cities_from_points(&[(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)]);
        assert_eq!(
            BruteForceSolver::new(&cities, BruteForceConfig::default()).unwrap_err(),
            TspError::DegenerateInput { distinct: 1 }
        );
    }

    #[test]
    fn test_unrepresentable_lengths_rejected() {
        let cities = cities_from_points(&[(0.0, 0.0), (1e19, 0.0), (2e19, 0.0)]);
        assert!(matches!(
            BruteForceSolver::new(&cities, BruteForceConfig::default()),
            Err(TspError::InvalidInput { .. })
        ));
    }

    /// Raises the cancel flag when the first incumbent is reported.
    struct CancelOnIncumbent {
        flag: Arc<AtomicBool>,
        seen: usize,
    }

    impl Observer for CancelOnIncumbent {
        fn on_incumbent(&mut self, _incumbent: &Incumbent) {
            self.seen += 1;
            self.flag.store(true, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_cancel_mid_run() {
        let mut rng = create_rng(5);
        let cities = generate_cities(8, &Bounds::brute_force_canvas(), &mut rng).unwrap();
        let solver = BruteForceSolver::new(&cities, BruteForceConfig::default()).unwrap();

        let flag = Arc::new(AtomicBool::new(false));
        let mut observer = CancelOnIncumbent {
            flag: Arc::clone(&flag),
            seen: 0,
        };
        let result = solver.run_with_cancel(&mut observer, Some(flag));

        assert!(result.cancelled);
        assert!(result.permutations_evaluated < factorial(8).unwrap());
        assert_eq!(observer.seen, result.improvements);
        assert_eq!(result.best_length, solver.matrix().open_length(&result.best_tour));
    }

    #[test]
    fn test_cancel_before_start() {
        let mut rng = create_rng(3);
        let cities = generate_cities(9, &Bounds::brute_force_canvas(), &mut rng).unwrap();
        let solver = BruteForceSolver::new(&cities, BruteForceConfig::default()).unwrap();

        let cancel = Arc::new(AtomicBool::new(true));
        let result = solver.run_with_cancel(&mut (), Some(cancel));

        assert!(result.cancelled);
        assert!(!result.is_exhaustive());
        assert_eq!(result.permutations_evaluated, 1);
        assert_eq!(result.best_tour, identity_tour(9));
    }
}
