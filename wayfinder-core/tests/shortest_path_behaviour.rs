//! Behavioural tests for shortest paths and waypoint extraction.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wayfinder_core::test_support::{approx_eq, edges, ids, triangle_graph};
use wayfinder_core::{Graph, NodeId, PathError, ShortestPath, intermediate_points, shortest_path};

#[derive(Debug, Default)]
struct PathWorld {
    graph: RefCell<Option<Graph>>,
    path: RefCell<Vec<NodeId>>,
    outcome: RefCell<Option<Result<ShortestPath, PathError>>>,
    intermediate: RefCell<Vec<NodeId>>,
}

impl PathWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn query(&self, source: &str, target: &str) {
        let outcome = {
            let graph = self.graph.borrow();
            let graph = graph.as_ref().expect("graph should be built first");
            shortest_path(graph, &source.into(), &target.into())
        };
        self.outcome.replace(Some(outcome));
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<ShortestPath, PathError> {
        self.outcome
            .borrow()
            .clone()
            .expect("query should run before assertions")
    }
}

#[fixture]
fn world() -> PathWorld {
    PathWorld::default()
}

#[given("a triangle of locations A, B and C")]
fn given_triangle(world: &PathWorld) {
    world.graph.replace(Some(triangle_graph()));
}

#[given("a graph with an isolated location")]
fn given_isolated(world: &PathWorld) {
    let links = edges(&[("a", "b", 1.0)]);
    world
        .graph
        .replace(Some(Graph::from_edges(ids(&["island"]), &links)));
}

#[given("a resolved path through A, X and B")]
fn given_resolved_path(world: &PathWorld) {
    world.path.replace(ids(&["A", "X", "B"]));
}

#[when("the shortest path from A to C is requested")]
fn when_a_to_c(world: &PathWorld) {
    world.query("A", "C");
}

#[when("the shortest path to the isolated location is requested")]
fn when_to_island(world: &PathWorld) {
    world.query("a", "island");
}

#[when("intermediate points are extracted for selection A and B")]
fn when_extracting(world: &PathWorld) {
    let intermediate = intermediate_points(&world.path.borrow(), &ids(&["A", "B"]));
    world.intermediate.replace(intermediate);
}

#[then("the path visits A, B and C")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_visits_abc(world: &PathWorld) {
    let path = world.expect_outcome().expect("path should resolve");
    assert_eq!(path.nodes, ids(&["A", "B", "C"]));
}

#[then("the path is 2.0 km long")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_two_km(world: &PathWorld) {
    let path = world.expect_outcome().expect("path should resolve");
    assert!(approx_eq(path.distance_km, 2.0));
}

#[then("the location is reported as not reachable")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_not_reachable(world: &PathWorld) {
    let err = world.expect_outcome().expect_err("island is isolated");
    assert!(matches!(err, PathError::NotReachable { .. }));
}

#[then("the only intermediate point is X")]
fn then_only_x(world: &PathWorld) {
    assert_eq!(*world.intermediate.borrow(), ids(&["X"]));
}

#[scenario(path = "tests/features/shortest_path.feature", index = 0)]
fn two_hops_beat_long_edge(world: PathWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/shortest_path.feature", index = 1)]
fn isolated_location(world: PathWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/shortest_path.feature", index = 2)]
fn intermediate_extraction(world: PathWorld) {
    let _ = world;
}
