//! GA generation loop.
//!
//! [`GaSolver`] orchestrates the evolutionary process, one generation per
//! [`step`](GaSolver::step): evaluation → mating pool → reproduction.

use super::config::GaConfig;
use super::fitness::{evaluate, BestSoFar};
use super::operators::reproduce;
use super::selection::mating_pool;
use super::types::{GaResult, SolverState};
use crate::error::{TspError, TspResult};
use crate::model::{closed_path, sorted_by_index, validate_cities, City, DistanceMatrix};
use crate::observer::{GenerationReport, Observer};
use crate::random::{rng_from_seed, shuffle};
use rand::rngs::StdRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Genetic TSP solver owning all per-run state.
///
/// # Usage
///
/// ```
/// use u_tsp::ga::{GaConfig, GaSolver};
/// use u_tsp::model::cities_from_points;
///
/// let cities = cities_from_points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
/// let config = GaConfig::fast().with_seed(42);
/// let mut solver = GaSolver::new(&cities, config).unwrap();
/// let result = solver.run(&mut ());
/// assert_eq!(result.best_length, 40);
/// ```
#[derive(Debug, Clone)]
pub struct GaSolver {
    cities: Vec<City>,
    matrix: DistanceMatrix,
    config: GaConfig,
    rng: StdRng,
    population: Vec<Vec<usize>>,
    best: BestSoFar,
    state: SolverState,
    next_generation: usize,
    length_history: Vec<u64>,
    elapsed: Duration,
}

impl GaSolver {
    /// Validates configuration and cities, builds the distance matrix and
    /// the initial population of random tours.
    pub fn new(cities: &[City], config: GaConfig) -> TspResult<Self> {
        config.validate()?;
        if cities.len() < 2 {
            return Err(TspError::config(format!(
                "a tour needs at least 2 cities, got {}",
                cities.len()
            )));
        }
        let matrix = DistanceMatrix::from_cities(cities)?;
        validate_cities(cities)?;

        let mut rng = rng_from_seed(config.seed);
        let n = cities.len();
        let population = (0..config.population_size)
            .map(|_| {
                let mut tour: Vec<usize> = (0..n).collect();
                shuffle(&mut tour, &mut rng);
                tour
            })
            .collect();

        Ok(Self {
            cities: sorted_by_index(cities),
            matrix,
            length_history: Vec::with_capacity(config.max_generations),
            config,
            rng,
            population,
            best: BestSoFar::new(),
            state: SolverState::Initialized,
            next_generation: 0,
            elapsed: Duration::ZERO,
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
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SolverState {
        self.state
    }

    /// The population the next generation will evaluate.
    pub fn population(&self) -> &[Vec<usize>] {
        &self.population
    }

    /// Best tour and improvement log so far.
    pub fn best(&self) -> &BestSoFar {
        &self.best
    }

    /// Runs one generation and returns its report.
    ///
    /// Returns `None` once the solver is [`Terminated`](SolverState::Terminated).
    pub fn step(&mut self) -> Option<GenerationReport> {
        if self.state == SolverState::Terminated {
            return None;
        }
        let start = Instant::now();
        let generation = self.next_generation;

        let fitness = evaluate(
            &self.population,
            &self.matrix,
            generation,
            &mut self.best,
            self.config.parallel,
        );
        let pool = mating_pool(&self.population, &fitness, &mut self.rng);
        self.population = reproduce(
            &pool,
            self.config.mutation_rate,
            self.config.elite_fraction,
            &mut self.rng,
        );

        self.length_history.push(self.best.length());
        self.next_generation += 1;
        self.state = if self.next_generation >= self.config.max_generations {
            SolverState::Terminated
        } else {
            SolverState::Running { generation }
        };
        self.elapsed += start.elapsed();

        Some(GenerationReport {
            generation,
            best_length: self.best.length(),
            best_tour: self.best.tour().to_vec(),
            best_path: closed_path(self.best.tour(), &self.cities),
            improvement_log: self.best.improvement_log().to_vec(),
        })
    }

    /// Runs the remaining generations, reporting each to `observer`.
    pub fn run<O: Observer + ?Sized>(&mut self, observer: &mut O) -> GaResult {
        self.run_with_cancel(observer, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If the flag is set, the loop stops before the next generation and
    /// returns the best tour found so far.
    pub fn run_with_cancel<O: Observer + ?Sized>(
        &mut self,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> GaResult {
        let mut cancelled = false;
        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) && self.state != SolverState::Terminated {
                    cancelled = true;
                    break;
                }
            }
            match self.step() {
                Some(report) => observer.on_generation(&report),
                None => break,
            }
        }
        self.result(cancelled)
    }

    /// Snapshot of the run so far.
    pub fn result(&self, cancelled: bool) -> GaResult {
        GaResult {
            best_tour: self.best.tour().to_vec(),
            best_length: self.best.length(),
            best_path: closed_path(self.best.tour(), &self.cities),
            generations: self.next_generation,
            improvement_log: self.best.improvement_log().to_vec(),
            length_history: self.length_history.clone(),
            elapsed: self.elapsed,
            cancelled,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
