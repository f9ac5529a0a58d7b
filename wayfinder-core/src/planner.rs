//! The planning boundary: requests, responses and the [`Planner`] trait.

use std::collections::HashSet;
use std::time::Duration;

use thiserror::Error;

use crate::{Budget, Graph, NodeId, Route, Selection};

/// A planning request: what the visitor picked and how far they will walk.
///
/// Serialises flat, as `{ "selected", "start", "mandatory", "budget_km" }`.
///
/// # Examples
/// ```
/// use wayfinder_core::{Budget, NodeId, PlanRequest, Selection};
///
/// let selection = Selection::new(vec![NodeId::from("a"), NodeId::from("b")]).with_start("a");
/// let request = PlanRequest::new(selection).with_budget(Budget::new(2.5)?);
///
/// assert_eq!(request.budget_km.map(Budget::kilometres), Some(2.5));
/// # Ok::<(), wayfinder_core::BudgetError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Selected nodes with their start and mandatory marks.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub selection: Selection,
    /// Distance budget; `None` leaves the walk unconstrained.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub budget_km: Option<Budget>,
}

impl PlanRequest {
    /// Request a plan for `selection` without a budget.
    #[must_use]
    pub const fn new(selection: Selection) -> Self {
        Self {
            selection,
            budget_km: None,
        }
    }

    /// Attach a distance budget.
    #[must_use]
    pub const fn with_budget(mut self, budget: Budget) -> Self {
        self.budget_km = Some(budget);
        self
    }

    /// Check the request against `graph` before any search runs.
    ///
    /// Rejects duplicated selections, ids the graph does not know, and start
    /// or mandatory nodes that were never selected.
    ///
    /// # Errors
    /// Returns the first [`PlanRequestValidationError`] found.
    pub fn validate_for(&self, graph: &Graph) -> Result<(), PlanRequestValidationError> {
        let selection = &self.selection;
        let mut seen = HashSet::with_capacity(selection.selected().len());
        for node in selection.selected() {
            if !seen.insert(node) {
                return Err(PlanRequestValidationError::DuplicateSelection(node.clone()));
            }
        }

        let referenced = selection
            .selected()
            .iter()
            .chain(selection.start())
            .chain(selection.mandatory());
        for node in referenced {
            if !graph.contains(node) {
                return Err(PlanRequestValidationError::UnknownNode(node.clone()));
            }
        }

        if let Some(start) = selection.start()
            && !seen.contains(start)
        {
            return Err(PlanRequestValidationError::StartNotSelected(start.clone()));
        }
        if let Some(node) = selection.mandatory().iter().find(|node| !seen.contains(node)) {
            return Err(PlanRequestValidationError::MandatoryNotSelected(
                node.clone(),
            ));
        }
        Ok(())
    }
}

/// Reasons a [`PlanRequest`] is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanRequestValidationError {
    /// The id is not a node of the graph.
    #[error("unknown location {0}")]
    UnknownNode(NodeId),
    /// The same node was selected twice.
    #[error("location {0} is selected more than once")]
    DuplicateSelection(NodeId),
    /// The start must be one of the selected nodes.
    #[error("start location {0} is not selected")]
    StartNotSelected(NodeId),
    /// Mandatory nodes must be selected nodes.
    #[error("mandatory location {0} is not selected")]
    MandatoryNotSelected(NodeId),
}

/// How a plan turned out.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum PlanOutcome {
    /// Every selected node is on the route.
    Complete,
    /// The route fits the budget only after dropping optional nodes.
    PartialCoverage,
    /// No ordering satisfies the mandatory nodes within the budget.
    Infeasible,
    /// Nothing was selected, so there is nothing to plan.
    NothingSelected,
    /// The mandatory nodes alone cannot be toured within the budget.
    MandatoryInfeasible {
        /// Length of the shortest mandatory tour, when one exists at all.
        min_distance_km: Option<f64>,
    },
}

impl PlanOutcome {
    /// Whether the response carries a usable route.
    #[must_use]
    pub const fn has_route(&self) -> bool {
        matches!(self, Self::Complete | Self::PartialCoverage)
    }
}

/// Search statistics recorded for every plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent planning.
    pub search_time: Duration,
    /// Complete stop orderings scored by the search.
    pub orderings_evaluated: u64,
    /// Dijkstra runs performed, cache hits excluded.
    pub shortest_path_queries: u64,
}

/// Result of a successful [`Planner::plan`] call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanResponse {
    /// The chosen route, empty unless [`PlanOutcome::has_route`].
    pub route: Route,
    /// Nodes walked through without having been selected.
    pub intermediate: Vec<NodeId>,
    /// Selected nodes left off the route, in selection order.
    pub exceeded: Vec<NodeId>,
    /// Classification of the result.
    pub outcome: PlanOutcome,
    /// Search statistics.
    pub diagnostics: Diagnostics,
}

impl PlanResponse {
    /// A response without a route.
    #[must_use]
    pub const fn without_route(
        outcome: PlanOutcome,
        exceeded: Vec<NodeId>,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            route: Route::empty(),
            intermediate: Vec::new(),
            exceeded,
            outcome,
            diagnostics,
        }
    }
}

/// Errors returned by [`Planner::plan`].
///
/// An unroutable selection is not an error; it is reported through
/// [`PlanOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The request does not fit the graph.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] PlanRequestValidationError),
    /// The search met a node the graph does not know.
    #[error("unknown location {0}")]
    UnknownNode(NodeId),
    /// The search hit its time limit or was cancelled.
    #[error("search interrupted after {elapsed:?}")]
    Interrupted {
        /// Time spent before the search stopped.
        elapsed: Duration,
    },
}

/// Turn a [`PlanRequest`] into a route.
///
/// Implementations must be `Send + Sync` and must not retain state between
/// calls.
pub trait Planner: Send + Sync {
    /// Plan a route for `request`.
    ///
    /// # Errors
    /// Returns [`PlanError`] for invalid requests and interrupted searches.
    fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError>;
}
