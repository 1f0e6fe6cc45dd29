//! Small-instance Travelling Salesperson solvers.
//!
//! Two independent strategies share one data model:
//!
//! - **Brute force** ([`brute`]): enumerates every permutation and returns
//!   the exact shortest **open** path. Practical up to about 10 cities.
//! - **Genetic algorithm** ([`ga`]): evolves a population of **closed**
//!   tours with roulette selection, ordered crossover, swap mutation and
//!   elitism. Heuristic; no optimality guarantee.
//!
//! Distances are rounded Euclidean integers ([`model::DistanceMatrix`]), so
//! tour lengths compare exactly.
//!
//! # Architecture
//!
//! The solvers are pure in-memory computations. They never draw or print:
//! per-step results (new incumbents, generation reports) go to an
//! [`observer::Observer`], and all randomness comes from one seedable
//! generator per run ([`random`]). Rendering and input handling belong to
//! the caller.

pub mod brute;
pub mod error;
pub mod ga;
pub mod model;
pub mod observer;
pub mod random;

pub use error::{TspError, TspResult};
