//! Can the mandatory stops be toured at all within the budget?

use log::debug;
use wayfinder_core::{Budget, Graph, NodeId, PlanError};

use crate::SearchLimits;
use crate::search::SearchContext;

/// Result of [`check_mandatory_feasibility`].
#[derive(Debug, Clone, PartialEq)]
pub struct MandatoryFeasibility {
    /// Whether the shortest tour fits the budget.
    pub feasible: bool,
    /// Length of the shortest tour; `None` when some stop is unreachable
    /// from the others.
    pub min_distance_km: Option<f64>,
    /// Stops in the order of the shortest tour; empty when none exists.
    pub best_order: Vec<NodeId>,
}

/// Find the shortest ordering of `mandatory` and compare it to `budget`.
///
/// Every permutation is a candidate, including those that do not begin at the
/// walk's start. With fewer than two stops the answer is trivially feasible
/// at distance zero. Without a budget any tour that exists is feasible.
///
/// # Errors
/// Returns [`PlanError::UnknownNode`] for ids outside `graph` and
/// [`PlanError::Interrupted`] when `limits` stop the search.
///
/// # Examples
/// ```
/// use wayfinder_core::{Budget, Edge, Graph, NodeId};
/// use wayfinder_solver_exhaustive::{SearchLimits, check_mandatory_feasibility};
///
/// let edges = vec![Edge::new("a", "b", 5.0)?, Edge::new("b", "c", 5.0)?];
/// let graph = Graph::from_edges(Vec::<NodeId>::new(), &edges);
/// let mandatory: Vec<NodeId> = ["a", "b", "c"].into_iter().map(NodeId::from).collect();
///
/// let check = check_mandatory_feasibility(
///     &graph,
///     &mandatory,
///     Some(Budget::new(5.0)?),
///     &SearchLimits::default(),
/// )?;
/// assert!(!check.feasible);
/// assert_eq!(check.min_distance_km, Some(10.0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn check_mandatory_feasibility(
    graph: &Graph,
    mandatory: &[NodeId],
    budget: Option<Budget>,
    limits: &SearchLimits,
) -> Result<MandatoryFeasibility, PlanError> {
    let mut context = SearchContext::new(graph, limits);
    check_with(&mut context, mandatory, budget)
}

pub(crate) fn check_with(
    context: &mut SearchContext<'_>,
    mandatory: &[NodeId],
    budget: Option<Budget>,
) -> Result<MandatoryFeasibility, PlanError> {
    if mandatory.len() < 2 {
        return Ok(MandatoryFeasibility {
            feasible: true,
            min_distance_km: Some(0.0),
            best_order: mandatory.to_vec(),
        });
    }

    let mut best = None;
    context.best_ordering(None, mandatory, None, &mut best)?;
    let Some(tour) = best else {
        debug!("no ordering connects the {} mandatory stops", mandatory.len());
        return Ok(MandatoryFeasibility {
            feasible: false,
            min_distance_km: None,
            best_order: Vec::new(),
        });
    };

    let feasible = budget.is_none_or(|budget| budget.allows(tour.distance_km));
    debug!(
        "shortest mandatory tour is {:.3} km (feasible: {feasible})",
        tour.distance_km
    );
    Ok(MandatoryFeasibility {
        feasible,
        min_distance_km: Some(tour.distance_km),
        best_order: tour.stops,
    })
}
