//! `ExhaustivePlanner`: the [`Planner`] built on the exhaustive search.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use log::{info, warn};
use wayfinder_core::{
    Catalog, Graph, NodeId, PlanError, PlanOutcome, PlanRequest, PlanResponse, Planner,
    intermediate_points,
};

use crate::SearchLimits;
use crate::feasibility::check_with;
use crate::optimizer::optimise_with;
use crate::search::SearchContext;

/// Configuration for [`ExhaustivePlanner`].
#[derive(Debug, Clone)]
pub struct ExhaustivePlannerConfig {
    /// Abandon a plan after this long; `None` never times out.
    pub time_limit: Option<Duration>,
    /// Check the mandatory stops against the budget before searching.
    pub precheck_mandatory: bool,
}

impl Default for ExhaustivePlannerConfig {
    fn default() -> Self {
        Self {
            time_limit: None,
            precheck_mandatory: true,
        }
    }
}

/// Planner enumerating every subset and ordering of the selected stops.
///
/// Owns the graph it plans over. Each call to [`Planner::plan`] starts from
/// scratch; no state is kept between requests.
///
/// # Examples
/// ```
/// use wayfinder_core::{Edge, Graph, NodeId, PlanOutcome, PlanRequest, Planner, Selection};
/// use wayfinder_solver_exhaustive::ExhaustivePlanner;
///
/// let edges = vec![Edge::new("A", "B", 1.0)?, Edge::new("B", "C", 1.0)?];
/// let planner = ExhaustivePlanner::new(Graph::from_edges(Vec::<NodeId>::new(), &edges));
/// let selection = Selection::new(vec!["A".into(), "C".into()]).with_start("A");
///
/// let response = planner.plan(&PlanRequest::new(selection))?;
/// assert_eq!(response.outcome, PlanOutcome::Complete);
/// assert_eq!(response.intermediate, vec![NodeId::from("B")]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct ExhaustivePlanner {
    graph: Graph,
    config: ExhaustivePlannerConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl ExhaustivePlanner {
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new(graph: Graph) -> Self {
        Self::with_config(graph, ExhaustivePlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(graph: Graph, config: ExhaustivePlannerConfig) -> Self {
        Self {
            graph,
            config,
            cancel: None,
        }
    }

    /// Construct a planner over every location and edge of `catalog`.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog, config: ExhaustivePlannerConfig) -> Self {
        Self::with_config(Graph::from_catalog(catalog), config)
    }

    /// Interrupt searches once `flag` is set.
    ///
    /// The flag is never cleared by the planner.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The graph searched by this planner.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ExhaustivePlannerConfig {
        &self.config
    }

    fn limits(&self) -> SearchLimits {
        let mut limits = SearchLimits::default();
        if let Some(limit) = self.config.time_limit {
            limits = limits.with_time_limit(limit);
        }
        if let Some(flag) = &self.cancel {
            limits = limits.with_cancel_flag(Arc::clone(flag));
        }
        limits
    }

    fn search(
        &self,
        request: &PlanRequest,
        context: &mut SearchContext<'_>,
    ) -> Result<PlanResponse, PlanError> {
        let selection = &request.selection;
        if selection.is_empty() {
            info!("nothing selected; no route to plan");
            return Ok(PlanResponse::without_route(
                PlanOutcome::NothingSelected,
                Vec::new(),
                context.diagnostics(),
            ));
        }

        let mandatory = selection.effective_mandatory();
        if self.config.precheck_mandatory
            && !mandatory.is_empty()
            && let Some(budget) = request.budget_km
        {
            let feasibility = check_with(context, &mandatory, Some(budget))?;
            if !feasibility.feasible {
                warn!(
                    "mandatory stops need {:?} km against a {} km budget",
                    feasibility.min_distance_km,
                    budget.kilometres()
                );
                return Ok(PlanResponse::without_route(
                    PlanOutcome::MandatoryInfeasible {
                        min_distance_km: feasibility.min_distance_km,
                    },
                    Vec::new(),
                    context.diagnostics(),
                ));
            }
        }

        let optimal = optimise_with(context, selection, request.budget_km)?;
        if optimal.route.is_empty() {
            info!("no route satisfies the mandatory stops");
            return Ok(PlanResponse::without_route(
                PlanOutcome::Infeasible,
                optimal.exceeded,
                context.diagnostics(),
            ));
        }

        let visited: Vec<NodeId> = selection
            .selected()
            .iter()
            .filter(|node| !optimal.exceeded.contains(node))
            .cloned()
            .collect();
        let intermediate = intermediate_points(optimal.route.path(), &visited);
        let outcome = if optimal.exceeded.is_empty() {
            PlanOutcome::Complete
        } else {
            PlanOutcome::PartialCoverage
        };
        info!(
            "planned {} stops over {:.3} km ({outcome:?})",
            optimal.route.stops().len(),
            optimal.route.total_distance_km()
        );
        Ok(PlanResponse {
            route: optimal.route,
            intermediate,
            exceeded: optimal.exceeded,
            outcome,
            diagnostics: context.diagnostics(),
        })
    }
}

impl Planner for ExhaustivePlanner {
    fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError> {
        request.validate_for(&self.graph)?;
        let mut context = SearchContext::new(&self.graph, &self.limits());
        self.search(request, &mut context).inspect_err(|err| {
            if matches!(err, PlanError::Interrupted { .. }) {
                warn!("{err}");
            }
        })
    }
}
