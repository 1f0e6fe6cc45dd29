//! Genetic solver.
//!
//! Evolves a fixed-size population of **closed** tours for a fixed number
//! of generations. Each generation:
//!
//! 1. [`fitness`]: closed length per tour, best-so-far update, fitness
//!    `1/length` normalized to a probability distribution
//! 2. [`selection`]: nearest-breakpoint roulette mating pool, slot 0 forced
//!    to the fittest tour
//! 3. [`operators`]: ordered crossover, per-position swap mutation, then
//!    the first `floor(P × elite_fraction)` slots replaced by the best tour
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, generations, elite fraction, mutation rate
//! - [`GaSolver`]: owns the population, RNG and best-so-far; one generation per step
//! - [`GaResult`]: best tour, improvement log and convergence history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod fitness;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use fitness::BestSoFar;
pub use runner::GaSolver;
pub use types::{GaResult, SolverState};
