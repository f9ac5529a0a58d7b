#![expect(
    clippy::expect_used,
    reason = "property tests use expect for readable failures"
)]

//! Property-based tests for `ExhaustivePlanner`.
//!
//! # Invariants tested
//!
//! - **Determinism:** identical requests yield identical routes.
//! - **Budget compliance:** a returned route never exceeds the budget.
//! - **Partition:** stops and exceeded nodes split the selection, mandatory
//!   nodes are never exceeded and the start leads the route.
//! - **Path consistency:** the path follows graph edges and sums to the
//!   reported length.
//! - **Optimality:** the route covers as many optional stops as any feasible
//!   ordering, and is the shortest at that coverage.

mod proptest_support;

use std::collections::HashSet;

use proptest::prelude::*;
use wayfinder_core::test_support::approx_eq;
use wayfinder_core::{
    Graph, NodeId, PlanOutcome, PlanRequest, PlanResponse, Planner, shortest_path, total_distance,
};
use wayfinder_solver_exhaustive::ExhaustivePlanner;

use proptest_support::{Scenario, scenario_strategy};

/// Best `(optional stops covered, distance)` over every subset and ordering.
fn reference_best(graph: &Graph, request: &PlanRequest) -> Option<(usize, f64)> {
    let selection = &request.selection;
    let start = selection.start();
    let mandatory = selection.effective_mandatory();
    let optional = selection.optional();
    let mut best: Option<(usize, f64)> = None;
    for mask in 0_u32..(1 << optional.len()) {
        let chosen: Vec<NodeId> = optional
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, stop)| stop.clone())
            .collect();
        let rest: Vec<NodeId> = mandatory
            .iter()
            .chain(&chosen)
            .filter(|stop| Some(*stop) != start)
            .cloned()
            .collect();
        let Some(distance) = shortest_ordering(graph, start, &rest) else {
            continue;
        };
        if request.budget_km.is_some_and(|budget| !budget.allows(distance)) {
            continue;
        }
        let better = best.is_none_or(|(covered, length)| {
            chosen.len() > covered || (chosen.len() == covered && distance < length)
        });
        if better {
            best = Some((chosen.len(), distance));
        }
    }
    best
}

fn shortest_ordering(graph: &Graph, start: Option<&NodeId>, rest: &[NodeId]) -> Option<f64> {
    let mut prefix: Vec<NodeId> = start.cloned().into_iter().collect();
    let mut best = None;
    permute(graph, &mut prefix, rest, &mut best);
    best
}

#[expect(
    clippy::float_arithmetic,
    reason = "ordering lengths sum shortest-path distances"
)]
fn permute(
    graph: &Graph,
    prefix: &mut Vec<NodeId>,
    remaining: &[NodeId],
    best: &mut Option<f64>,
) {
    if remaining.is_empty() {
        if prefix.is_empty() {
            return;
        }
        let mut length = 0.0;
        for pair in prefix.windows(2) {
            let [from, to] = pair else { continue };
            match shortest_path(graph, from, to) {
                Ok(path) => length += path.distance_km,
                Err(_) => return,
            }
        }
        if best.is_none_or(|current| length < current) {
            *best = Some(length);
        }
        return;
    }
    for (position, next) in remaining.iter().enumerate() {
        let mut others = remaining.to_vec();
        others.remove(position);
        prefix.push(next.clone());
        permute(graph, prefix, &others, best);
        prefix.pop();
    }
}

fn plan(scenario: &Scenario) -> PlanResponse {
    ExhaustivePlanner::new(scenario.graph.clone())
        .plan(&scenario.request)
        .expect("generated requests are valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn planning_is_deterministic(scenario in scenario_strategy(6, 5)) {
        let first = plan(&scenario);
        let second = plan(&scenario);
        prop_assert_eq!(first.route, second.route);
        prop_assert_eq!(first.exceeded, second.exceeded);
        prop_assert_eq!(first.outcome, second.outcome);
    }

    #[test]
    fn routes_fit_the_budget(scenario in scenario_strategy(6, 5)) {
        let response = plan(&scenario);
        if let Some(budget) = scenario.request.budget_km
            && response.outcome.has_route()
        {
            prop_assert!(budget.allows(response.route.total_distance_km()));
        }
    }

    #[test]
    fn stops_and_exceeded_partition_the_selection(scenario in scenario_strategy(6, 5)) {
        let response = plan(&scenario);
        prop_assume!(response.outcome.has_route());
        let selection = &scenario.request.selection;
        let stops: HashSet<&NodeId> = response.route.stops().iter().collect();
        let exceeded: HashSet<&NodeId> = response.exceeded.iter().collect();
        prop_assert!(stops.is_disjoint(&exceeded));
        let covered: HashSet<&NodeId> = stops.union(&exceeded).copied().collect();
        let selected: HashSet<&NodeId> = selection.selected().iter().collect();
        prop_assert_eq!(covered, selected);
        for node in selection.effective_mandatory() {
            prop_assert!(!response.exceeded.contains(&node), "mandatory {} exceeded", node);
        }
        if let Some(start) = selection.start() {
            prop_assert_eq!(response.route.stops().first(), Some(start));
        }
    }

    #[test]
    fn paths_follow_edges(scenario in scenario_strategy(6, 5)) {
        let response = plan(&scenario);
        prop_assume!(response.outcome.has_route());
        let walked = total_distance(&scenario.graph, response.route.path())
            .expect("resolved paths follow edges");
        prop_assert!(approx_eq(walked, response.route.total_distance_km()));
        prop_assert_eq!(response.route.path().first(), response.route.stops().first());
        prop_assert_eq!(response.route.path().last(), response.route.stops().last());
    }

    #[test]
    fn routes_are_optimal(scenario in scenario_strategy(6, 4)) {
        let response = plan(&scenario);
        let expected = reference_best(&scenario.graph, &scenario.request);
        match expected {
            None => prop_assert!(!response.outcome.has_route()),
            Some((covered, distance)) => {
                prop_assert!(response.outcome.has_route());
                let mandatory = scenario.request.selection.effective_mandatory().len();
                prop_assert_eq!(response.route.stops().len(), mandatory + covered);
                prop_assert!(approx_eq(response.route.total_distance_km(), distance));
                let outcome = if response.exceeded.is_empty() {
                    PlanOutcome::Complete
                } else {
                    PlanOutcome::PartialCoverage
                };
                prop_assert_eq!(response.outcome, outcome);
            }
        }
    }
}
