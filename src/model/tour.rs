//! Tour helpers.
//!
//! A tour is a `Vec<usize>` of city indices that visits every city of
//! `0..N` exactly once.

use super::city::City;

/// Checks that `tour` is a permutation of `0..n`.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

/// The identity tour `0, 1, .., n-1`.
pub fn identity_tour(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Coordinates of the cities in visiting order.
///
/// `cities` must be ordered by index.
pub fn open_path(tour: &[usize], cities: &[City]) -> Vec<(f64, f64)> {
    tour.iter().map(|&i| cities[i].position()).collect()
}

/// Coordinates in visiting order with the starting city repeated at the end.
pub fn closed_path(tour: &[usize], cities: &[City]) -> Vec<(f64, f64)> {
    let mut path = open_path(tour, cities);
    if let Some(&start) = path.first() {
        path.push(start);
    }
    path
}

/// Returns the cities sorted by index.
pub(crate) fn sorted_by_index(cities: &[City]) -> Vec<City> {
    let mut sorted = cities.to_vec();
    sorted.sort_by_key(|c| c.index);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cities_from_points;

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(is_permutation(&[], 0));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
    }

    #[test]
    fn test_paths() {
        let cities = cities_from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let tour = [2, 0, 1];
        assert_eq!(
            open_path(&tour, &cities),
            vec![(1.0, 1.0), (0.0, 0.0), (1.0, 0.0)]
        );
        assert_eq!(
            closed_path(&tour, &cities),
            vec![(1.0, 1.0), (0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]
        );
        assert!(closed_path(&[], &cities).is_empty());
    }

    #[test]
    fn test_sorted_by_index() {
        let cities = vec![City::new(1, 5.0, 5.0), City::new(0, 1.0, 1.0)];
        let sorted = sorted_by_index(&cities);
        assert_eq!(sorted[0].index, 0);
        assert_eq!(sorted[1].index, 1);
    }
}
