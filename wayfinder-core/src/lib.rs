//! Core domain types for the Wayfinder route planner.
//!
//! The crate models a small, static graph of points of interest and the
//! building blocks used to plan a walk through it:
//!
//! - [`Catalog`] holds the injected locations and weighted edges.
//! - [`Graph`] is the immutable adjacency structure derived from a catalog.
//! - [`shortest_path`] runs a deterministic Dijkstra search between two nodes.
//! - [`total_distance`] and [`intermediate_points`] post-process resolved
//!   paths.
//! - [`Selection`], [`Budget`] and [`PlanRequest`] describe what the caller
//!   wants to visit; [`Planner`] implementations turn that into a
//!   [`PlanResponse`].
//!
//! Constructors validate their inputs and return `Result` so invalid data is
//! surfaced before a search starts.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod budget;
mod catalog;
mod distance;
mod graph;
mod location;
mod node;
mod path;
mod planner;
mod route;
mod selection;
mod waypoints;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use budget::{Budget, BudgetError};
pub use catalog::{Catalog, CatalogError, Edge, EdgeError};
pub use distance::{DISTANCE_EPSILON, DistanceError, total_distance};
pub use graph::Graph;
pub use location::Location;
pub use node::NodeId;
pub use path::{PathError, ShortestPath, shortest_path};
pub use planner::{
    Diagnostics, PlanError, PlanOutcome, PlanRequest, PlanRequestValidationError, PlanResponse,
    Planner,
};
pub use route::Route;
pub use selection::{MarkChange, Selection, SelectionError};
pub use waypoints::intermediate_points;
