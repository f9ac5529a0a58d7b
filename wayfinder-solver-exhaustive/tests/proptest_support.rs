//! Proptest strategies for planner property tests.
//!
//! Scenarios pair a small random graph with a request that always passes
//! validation: a start and mandatory marks are drawn only from the selected
//! nodes.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::{Index, subsequence};
use wayfinder_core::{Budget, Edge, Graph, NodeId, PlanRequest, Selection};

/// A graph together with a valid request over it.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Graph to plan over.
    pub graph: Graph,
    /// Request whose nodes all belong to `graph`.
    pub request: PlanRequest,
}

/// Random scenario with up to `max_nodes` nodes and `max_selected` selected.
///
/// Edge weights and budgets are multiples of 0.1 km; budgets reach 15 km.
pub fn scenario_strategy(
    max_nodes: usize,
    max_selected: usize,
) -> impl Strategy<Value = Scenario> {
    (2..=max_nodes).prop_flat_map(move |count| {
        let raw_edges = proptest::collection::vec((0..count, 0..count, 1_u16..=50), 0..count * 3);
        let selected = subsequence((0..count).collect::<Vec<_>>(), 0..=max_selected.min(count));
        (
            Just(count),
            raw_edges,
            selected,
            proptest::option::of(any::<Index>()),
            proptest::collection::vec(any::<bool>(), max_selected),
            proptest::option::of(0_u16..=150),
        )
            .prop_map(|(count, raw, selected, start, marks, budget)| {
                build_scenario(count, &raw, &selected, start, &marks, budget)
            })
    })
}

fn node(index: usize) -> NodeId {
    NodeId::new(format!("n{index}"))
}

#[expect(
    clippy::float_arithmetic,
    reason = "weights and budgets are scaled from tenths of a kilometre"
)]
fn build_scenario(
    count: usize,
    raw: &[(usize, usize, u16)],
    selected: &[usize],
    start: Option<Index>,
    marks: &[bool],
    budget: Option<u16>,
) -> Scenario {
    let mut seen = HashSet::new();
    let edges: Vec<Edge> = raw
        .iter()
        .copied()
        .filter(|&(from, to, _)| from != to)
        .filter(|&(from, to, _)| seen.insert((from.min(to), from.max(to))))
        .filter_map(|(from, to, tenths)| {
            Edge::new(node(from), node(to), f64::from(tenths) / 10.0).ok()
        })
        .collect();
    let graph = Graph::from_edges((0..count).map(node), &edges);

    let stops: Vec<NodeId> = selected.iter().copied().map(node).collect();
    let mandatory: Vec<NodeId> = stops
        .iter()
        .zip(marks)
        .filter(|(_, marked)| **marked)
        .map(|(stop, _)| stop.clone())
        .collect();
    let mut selection = Selection::new(stops.clone()).with_mandatory(mandatory);
    if let Some(index) = start
        && !stops.is_empty()
        && let Some(first) = stops.get(index.index(stops.len()))
    {
        selection = selection.with_start(first.clone());
    }

    let mut request = PlanRequest::new(selection);
    if let Some(tenths) = budget
        && let Ok(budget) = Budget::new(f64::from(tenths) / 10.0)
    {
        request = request.with_budget(budget);
    }
    Scenario { graph, request }
}
