//! Exhaustive, feasibility-first route planning for Wayfinder.
//!
//! This crate provides [`ExhaustivePlanner`], the default implementation of
//! the [`Planner`](wayfinder_core::Planner) trait, along with the two search
//! operations it composes:
//!
//! - [`check_mandatory_feasibility`] finds the shortest tour of the mandatory
//!   stops and compares it with the budget.
//! - [`find_optimal_route`] keeps as many optional stops as the budget
//!   allows, then picks the shortest ordering among those.
//!
//! Both enumerate subsets and permutations outright, which is practical for
//! the dozen or so stops a walking tour involves. Searches are deterministic:
//! equal-length candidates are resolved by the order of their node ids.
//! [`SearchLimits`] bounds a search by time or by an external cancel flag.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod combinations;
mod feasibility;
mod limits;
mod optimizer;
mod planner;
mod search;
mod segments;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use feasibility::{MandatoryFeasibility, check_mandatory_feasibility};
pub use limits::SearchLimits;
pub use optimizer::{OptimalRoute, find_optimal_route};
pub use planner::{ExhaustivePlanner, ExhaustivePlannerConfig};
