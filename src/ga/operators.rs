//! Reproduction operators for permutation tours.
//!
//! # Crossover
//!
//! - [`ordered_crossover`]: prefix of parent A, remainder in parent B's order
//!
//! # Mutation
//!
//! - [`swap_mutation`]: per-position swap with a random partner
//!
//! Both preserve the permutation invariant: every child visits each city
//! exactly once.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Ordered crossover with an explicit cut point.
///
/// The child starts with `a[..cut]` and continues with the cities of `b`
/// that are not in that prefix, in `b`'s order.
///
/// ```
/// use u_tsp::ga::operators::ordered_crossover;
///
/// let child = ordered_crossover(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], 2);
/// assert_eq!(child, vec![0, 1, 4, 3, 2]);
/// ```
///
/// # Panics
/// Panics if the parents differ in length or `cut` is outside `1..=n`.
pub fn ordered_crossover(a: &[usize], b: &[usize], cut: usize) -> Vec<usize> {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");
    assert!((1..=n).contains(&cut), "cut {cut} outside 1..={n}");

    let mut taken = vec![false; n];
    let mut child = Vec::with_capacity(n);
    for &city in &a[..cut] {
        taken[city] = true;
        child.push(city);
    }
    child.extend(b.iter().copied().filter(|&city| !taken[city]));
    child
}

/// Ordered crossover with a uniformly random cut in `1..=n`.
///
/// # Panics
/// Panics if the parents are empty or differ in length.
pub fn crossover<R: Rng>(a: &[usize], b: &[usize], rng: &mut R) -> Vec<usize> {
    assert!(!a.is_empty(), "parents must not be empty");
    let cut = rng.random_range(1..=a.len());
    ordered_crossover(a, b, cut)
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation applied independently at every position.
///
/// With probability `rate`, position `i` swaps with a uniformly random
/// position (possibly itself). A tour may receive zero, one or many swaps.
pub fn swap_mutation<R: Rng>(tour: &mut [usize], rate: f64, rng: &mut R) {
    let n = tour.len();
    for i in 0..n {
        if rng.random::<f64>() < rate {
            let j = rng.random_range(0..n);
            tour.swap(i, j);
        }
    }
}

// ============================================================================
// Reproduction
// ============================================================================

/// Number of elite slots: `floor(population_size × fraction)`, at most
/// `population_size`.
pub fn elite_count(population_size: usize, fraction: f64) -> usize {
    ((population_size as f64 * fraction).floor() as usize).min(population_size)
}

/// Produces the next population from a mating pool.
///
/// Every slot gets a child of two parents drawn uniformly (with
/// replacement) from `pool`, crossed over and mutated. The first
/// `elite_count` slots are then overwritten with `pool[0]`.
pub fn reproduce<R: Rng>(
    pool: &[Vec<usize>],
    mutation_rate: f64,
    elite_fraction: f64,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    let p = pool.len();
    if p == 0 {
        return Vec::new();
    }

    let mut next: Vec<Vec<usize>> = (0..p)
        .map(|_| {
            let father = &pool[rng.random_range(0..p)];
            let mother = &pool[rng.random_range(0..p)];
            let mut child = crossover(father, mother, rng);
            swap_mutation(&mut child, mutation_rate, rng);
            child
        })
        .collect();

    for slot in next.iter_mut().take(elite_count(p, elite_fraction)) {
        slot.clone_from(&pool[0]);
    }
    next
}

// ============================================================================
// Tests
// ============================================================================
