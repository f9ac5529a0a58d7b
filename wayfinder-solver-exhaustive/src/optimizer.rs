//! Feasibility-first route optimisation.
//!
//! Coverage comes first: the search tries to keep every optional stop, then
//! every subset one smaller, and so on, stopping at the first size that
//! yields any ordering within the budget. Among orderings at that size the
//! shortest wins. Mandatory stops (and the start) are part of every
//! candidate.

use log::{debug, warn};
use wayfinder_core::{Budget, Graph, NodeId, PlanError, Route, Selection};

use crate::SearchLimits;
use crate::combinations::combinations;
use crate::search::{Ordering, SearchContext};

/// Result of [`find_optimal_route`].
#[derive(Debug, Clone, PartialEq)]
pub struct OptimalRoute {
    /// The chosen route; empty when no ordering fits.
    pub route: Route,
    /// Selected nodes left off the route, in selection order.
    pub exceeded: Vec<NodeId>,
}

impl OptimalRoute {
    fn infeasible(optional: Vec<NodeId>) -> Self {
        Self {
            route: Route::empty(),
            exceeded: optional,
        }
    }
}

/// Find the route covering the most optional stops, then the shortest.
///
/// When `selection` has a start, every candidate begins there. When no
/// ordering of the mandatory stops fits the budget, the returned route is
/// empty and every optional stop is reported as exceeded.
///
/// # Errors
/// Returns [`PlanError::UnknownNode`] for ids outside `graph` and
/// [`PlanError::Interrupted`] when `limits` stop the search.
///
/// # Examples
/// ```
/// use wayfinder_core::{Edge, Graph, NodeId, Selection};
/// use wayfinder_solver_exhaustive::{SearchLimits, find_optimal_route};
///
/// let edges = vec![
///     Edge::new("A", "B", 1.0)?,
///     Edge::new("B", "C", 1.0)?,
///     Edge::new("A", "C", 3.0)?,
/// ];
/// let graph = Graph::from_edges(Vec::<NodeId>::new(), &edges);
/// let stops: Vec<NodeId> = ["A", "B", "C"].into_iter().map(NodeId::from).collect();
/// let selection = Selection::new(stops.clone()).with_start("A");
///
/// let optimal = find_optimal_route(&graph, &selection, None, &SearchLimits::default())?;
/// assert_eq!(optimal.route.path(), stops.as_slice());
/// assert_eq!(optimal.route.total_distance_km(), 2.0);
/// assert!(optimal.exceeded.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn find_optimal_route(
    graph: &Graph,
    selection: &Selection,
    budget: Option<Budget>,
    limits: &SearchLimits,
) -> Result<OptimalRoute, PlanError> {
    let mut context = SearchContext::new(graph, limits);
    optimise_with(&mut context, selection, budget)
}

pub(crate) fn optimise_with(
    context: &mut SearchContext<'_>,
    selection: &Selection,
    budget: Option<Budget>,
) -> Result<OptimalRoute, PlanError> {
    let start = selection.start();
    if selection.is_empty() && start.is_none() {
        debug!("nothing selected; skipping the search");
        return Ok(OptimalRoute::infeasible(Vec::new()));
    }
    let mandatory = selection.effective_mandatory();
    let optional = selection.optional();

    let Some(best) = best_at_highest_coverage(context, start, &mandatory, &optional, budget)?
    else {
        warn!(
            "no ordering of {} mandatory stops fits the budget",
            mandatory.len()
        );
        return Ok(OptimalRoute::infeasible(optional));
    };

    let path = context.resolve_path(&best.stops)?;
    let exceeded: Vec<NodeId> = selection
        .selected()
        .iter()
        .filter(|node| !best.stops.contains(node))
        .cloned()
        .collect();
    if !exceeded.is_empty() {
        warn!("dropped {} optional stops to fit the budget", exceeded.len());
    }
    Ok(OptimalRoute {
        route: Route::new(path, best.distance_km, best.stops),
        exceeded,
    })
}

fn best_at_highest_coverage(
    context: &mut SearchContext<'_>,
    start: Option<&NodeId>,
    mandatory: &[NodeId],
    optional: &[NodeId],
    budget: Option<Budget>,
) -> Result<Option<Ordering>, PlanError> {
    for size in (0..=optional.len()).rev() {
        let mut best = None;
        for subset in combinations(optional, size) {
            let stops: Vec<NodeId> = mandatory.iter().cloned().chain(subset).collect();
            let rest: Vec<NodeId> = stops
                .into_iter()
                .filter(|stop| Some(stop) != start)
                .collect();
            context.best_ordering(start, &rest, budget, &mut best)?;
        }
        if best.is_some() {
            debug!("covered {size} of {} optional stops", optional.len());
            return Ok(best);
        }
        debug!("no ordering fits with {size} optional stops");
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{coverage_graph, line_graph};
    use rstest::rstest;
    use wayfinder_core::test_support::{approx_eq, edges, ids, triangle_graph};

    fn optimise(graph: &Graph, selection: &Selection, budget: Option<f64>) -> OptimalRoute {
        let budget = budget.map(|km| Budget::new(km).expect("valid budget"));
        find_optimal_route(graph, selection, budget, &SearchLimits::default())
            .expect("search completes")
    }

    #[rstest]
    fn visits_all_stops_from_the_start() {
        let selection = Selection::new(ids(&["A", "B", "C"])).with_start("A");
        let optimal = optimise(&triangle_graph(), &selection, None);
        assert_eq!(optimal.route.path(), ids(&["A", "B", "C"]).as_slice());
        assert!(approx_eq(optimal.route.total_distance_km(), 2.0));
        assert!(optimal.exceeded.is_empty());
    }

    #[rstest]
    fn start_is_kept_first_even_when_longer() {
        let selection = Selection::new(ids(&["A", "B", "C"])).with_start("B");
        let optimal = optimise(&triangle_graph(), &selection, None);
        assert_eq!(optimal.route.stops(), ids(&["B", "A", "C"]).as_slice());
        assert_eq!(optimal.route.path(), ids(&["B", "A", "B", "C"]).as_slice());
        assert!(approx_eq(optimal.route.total_distance_km(), 3.0));
    }

    #[rstest]
    fn coverage_beats_distance() {
        // Keeping both optional stops costs more than any single-stop route,
        // yet wins because it covers more.
        let selection = Selection::new(ids(&["s", "near", "far"])).with_start("s");
        let optimal = optimise(&coverage_graph(), &selection, Some(12.0));
        assert_eq!(optimal.route.stops(), ids(&["s", "near", "far"]).as_slice());
        assert!(optimal.exceeded.is_empty());
    }

    #[rstest]
    fn tight_budget_drops_the_far_stop() {
        let selection = Selection::new(ids(&["s", "near", "far"])).with_start("s");
        let optimal = optimise(&coverage_graph(), &selection, Some(3.0));
        assert_eq!(optimal.route.stops(), ids(&["s", "near"]).as_slice());
        assert_eq!(optimal.exceeded, ids(&["far"]));
    }

    #[rstest]
    fn mandatory_stops_are_never_dropped() {
        let selection = Selection::new(ids(&["s", "near", "far"]))
            .with_start("s")
            .with_mandatory(ids(&["far"]));
        let optimal = optimise(&coverage_graph(), &selection, Some(5.5));
        assert_eq!(optimal.route.stops(), ids(&["s", "far"]).as_slice());
        assert_eq!(optimal.exceeded, ids(&["near"]));
    }

    #[rstest]
    fn infeasible_mandatory_tour_yields_empty_route() {
        let selection =
            Selection::new(ids(&["a", "b", "c", "x"])).with_mandatory(ids(&["a", "b", "c"]));
        let network = Graph::from_edges(ids(&["x"]), &edges(&[("a", "b", 5.0), ("b", "c", 5.0)]));
        let optimal = optimise(&network, &selection, Some(5.0));
        assert!(optimal.route.is_empty());
        assert_eq!(optimal.exceeded, ids(&["x"]));
    }

    #[rstest]
    fn single_stop_route_has_zero_length() {
        let selection = Selection::new(ids(&["b"])).with_start("b");
        let optimal = optimise(&line_graph(), &selection, Some(0.0));
        assert_eq!(optimal.route.path(), ids(&["b"]).as_slice());
        assert_eq!(optimal.route.stops(), ids(&["b"]).as_slice());
        assert!(optimal.route.total_distance_km().abs() < f64::EPSILON);
    }

    #[rstest]
    fn without_start_or_mandatory_any_stop_may_lead() {
        let selection = Selection::new(ids(&["c", "a", "b"]));
        let optimal = optimise(&line_graph(), &selection, None);
        assert_eq!(optimal.route.stops(), ids(&["a", "b", "c"]).as_slice());
        assert!(approx_eq(optimal.route.total_distance_km(), 10.0));
    }

    #[rstest]
    fn empty_selection_skips_the_search() {
        let graph = line_graph();
        let limits = SearchLimits::default();
        let mut context = SearchContext::new(&graph, &limits);
        let budget = Budget::new(1.0).expect("valid budget");
        let optimal = optimise_with(&mut context, &Selection::default(), Some(budget))
            .expect("search completes");
        assert!(optimal.route.is_empty());
        assert!(optimal.exceeded.is_empty());
        assert_eq!(context.diagnostics().orderings_evaluated, 0);
    }

    #[rstest]
    fn zero_budget_keeps_a_single_stop() {
        // Without a start, a lone stop is a zero-length route; ties go to `a`.
        let selection = Selection::new(ids(&["a", "c"]));
        let optimal = optimise(&line_graph(), &selection, Some(0.0));
        assert_eq!(optimal.route.stops(), ids(&["a"]).as_slice());
        assert_eq!(optimal.exceeded, ids(&["c"]));
    }
}
