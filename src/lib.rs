//! Facade crate for the Wayfinder route planner.
//!
//! This crate re-exports the core domain types and exposes the exhaustive
//! planner and the bundled Hanoi catalog behind feature flags.
//!
//! # Examples
//! ```
//! # #[cfg(all(feature = "solver-exhaustive", feature = "bundled-catalog"))]
//! # {
//! use wayfinder::{
//!     ExhaustivePlanner, ExhaustivePlannerConfig, PlanOutcome, PlanRequest, Planner, Selection,
//! };
//!
//! let catalog = wayfinder::hanoi_catalog()?;
//! let planner = ExhaustivePlanner::from_catalog(&catalog, ExhaustivePlannerConfig::default());
//! let selection = Selection::new(vec!["hk1".into(), "hk2".into()]).with_start("hk1");
//!
//! let response = planner.plan(&PlanRequest::new(selection))?;
//! assert_eq!(response.outcome, PlanOutcome::Complete);
//! # }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use wayfinder_core::{
    Budget, BudgetError, Catalog, CatalogError, DISTANCE_EPSILON, Diagnostics, DistanceError,
    Edge, EdgeError, Graph, Location, MarkChange, NodeId, PathError, PlanError, PlanOutcome,
    PlanRequest, PlanRequestValidationError, PlanResponse, Planner, Route, Selection,
    SelectionError, ShortestPath, intermediate_points, shortest_path, total_distance,
};

#[cfg(feature = "solver-exhaustive")]
pub use wayfinder_solver_exhaustive::{
    ExhaustivePlanner, ExhaustivePlannerConfig, MandatoryFeasibility, OptimalRoute, SearchLimits,
    check_mandatory_feasibility, find_optimal_route,
};

#[cfg(feature = "bundled-catalog")]
pub use wayfinder_data::{LoadError, hanoi_catalog, load_catalog, load_plan_request};
