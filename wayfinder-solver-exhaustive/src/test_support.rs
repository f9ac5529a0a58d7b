//! Scenario graphs for `wayfinder-solver-exhaustive` tests.
//!
//! Available to unit tests and, through the `test-support` feature, to
//! behaviour tests and benches.

use wayfinder_core::test_support::graph;
use wayfinder_core::{Graph, NodeId};

/// `a – b – c` with both legs 5 km long.
///
/// The shortest tour of all three stops is 10 km.
///
/// # Examples
/// ```rust
/// use wayfinder_solver_exhaustive::test_support::line_graph;
///
/// let graph = line_graph();
/// assert_eq!(graph.len(), 3);
/// ```
#[must_use]
pub fn line_graph() -> Graph {
    graph(&[("a", "b", 5.0), ("b", "c", 5.0)])
}

/// A start `s` with a `near` stop 1 km away and a `far` stop 5 km away,
/// and 5 km between `near` and `far`.
#[must_use]
pub fn coverage_graph() -> Graph {
    graph(&[("s", "near", 1.0), ("s", "far", 5.0), ("near", "far", 5.0)])
}

/// A ring `r0 – r1 – … – r{n-1} – r0` of 1 km edges plus 2.5 km chords
/// from `r0` to every other node.
///
/// Every node is reachable and many orderings tie, which exercises the
/// tie-break and pruning paths.
#[must_use]
pub fn ring_graph(size: usize) -> Graph {
    let names: Vec<String> = (0..size).map(|index| format!("r{index}")).collect();
    let mut triples: Vec<(&str, &str, f64)> = Vec::new();
    for (index, name) in names.iter().enumerate() {
        let next = names.get(index + 1).or_else(|| names.first());
        if let Some(next) = next.filter(|next| *next != name) {
            triples.push((name, next, 1.0));
        }
        if index > 1
            && index + 1 < size
            && let Some(hub) = names.first()
        {
            triples.push((hub, name, 2.5));
        }
    }
    graph(&triples)
}

/// Ids `r0..r{count-1}` for [`ring_graph`].
#[must_use]
pub fn ring_ids(count: usize) -> Vec<NodeId> {
    (0..count).map(|index| NodeId::new(format!("r{index}"))).collect()
}
