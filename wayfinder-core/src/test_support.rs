//! Graph fixtures shared by unit and behaviour tests.
//!
//! Enabled for this crate's tests and, through the `test-support` feature,
//! for downstream test suites.

use geo::Coord;

use crate::{Catalog, DISTANCE_EPSILON, Edge, Graph, Location, NodeId};

/// Convert string literals into node ids, preserving order.
#[must_use]
pub fn ids(names: &[&str]) -> Vec<NodeId> {
    names.iter().copied().map(NodeId::from).collect()
}

/// Whether two distances agree within [`DISTANCE_EPSILON`].
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "distances are compared within a tolerance"
)]
pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < DISTANCE_EPSILON
}

/// Build edges from `(from, to, distance_km)` triples.
///
/// # Panics
/// Panics when a triple is not a valid edge.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixtures fail loudly on malformed edge literals"
)]
pub fn edges(triples: &[(&str, &str, f64)]) -> Vec<Edge> {
    triples
        .iter()
        .map(|&(from, to, distance_km)| {
            Edge::new(from, to, distance_km).expect("fixture edge should be valid")
        })
        .collect()
}

/// Graph containing exactly the endpoints of `triples`.
#[must_use]
pub fn graph(triples: &[(&str, &str, f64)]) -> Graph {
    Graph::from_edges(Vec::<NodeId>::new(), &edges(triples))
}

/// `A`, `B` and `C` with `A–B = 1`, `B–C = 1` and `A–C = 3`.
#[must_use]
pub fn triangle_graph() -> Graph {
    graph(&[("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 3.0)])
}

/// Catalog version of [`triangle_graph`], with the locations spread over
/// two districts.
///
/// # Panics
/// Panics if the fixture data is inconsistent.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixture data is static and known to be consistent"
)]
pub fn triangle_catalog() -> Catalog {
    let locations = vec![
        Location::new("A", "Alpha", "North", Coord { x: 0.0, y: 0.0 }),
        Location::new("B", "Bravo", "North", Coord { x: 1.0, y: 0.0 }),
        Location::new("C", "Charlie", "South", Coord { x: 2.0, y: 0.0 }),
    ];
    let links = edges(&[("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 3.0)]);
    Catalog::new(locations, links).expect("triangle catalog should be valid")
}
