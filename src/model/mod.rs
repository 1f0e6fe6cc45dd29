//! Shared data model: cities, the distance matrix and tour helpers.
//!
//! Both solvers build a [`DistanceMatrix`] once from the city list and
//! treat it as read-only afterwards.

mod city;
mod distance;
mod tour;

pub use city::{
    cities_from_points, distinct_coordinates, generate_cities, validate_cities, Bounds, City,
};
pub use distance::DistanceMatrix;
pub use tour::{closed_path, identity_tour, is_permutation, open_path};
pub(crate) use tour::sorted_by_index;
