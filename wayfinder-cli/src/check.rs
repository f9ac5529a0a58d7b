//! `check` command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfinder_core::NodeId;
use wayfinder_solver_exhaustive::check_mandatory_feasibility;

use crate::output::write_json;
use crate::request::RequestConfig;
use crate::{ARG_BUDGET_KM, ARG_CATALOG, ARG_TIME_LIMIT_MS, CliError, ENV_CHECK_REQUEST};

/// CLI arguments for the `check` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Find the shortest tour of a request's mandatory locations \
                 (its start included) and report whether it fits the \
                 budget. The tour may begin at any mandatory location.",
    about = "Check the mandatory locations against the budget"
)]
#[ortho_config(prefix = "WAYFINDER")]
pub(crate) struct CheckArgs {
    /// Path to a JSON file containing a plan request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Catalog JSON file; defaults to the bundled Hanoi catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Distance budget in kilometres, replacing the request's budget.
    #[arg(long = ARG_BUDGET_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) budget_km: Option<f64>,
    /// Abandon the search after this many milliseconds.
    #[arg(long = ARG_TIME_LIMIT_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) time_limit_ms: Option<u64>,
}

impl CheckArgs {
    pub(crate) fn into_config(self) -> Result<RequestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RequestConfig::try_from(merged)
    }
}

impl TryFrom<CheckArgs> for RequestConfig {
    type Error = CliError;

    fn try_from(args: CheckArgs) -> Result<Self, Self::Error> {
        Self::resolve(
            args.request_path,
            ENV_CHECK_REQUEST,
            args.catalog,
            args.budget_km,
            args.time_limit_ms,
        )
    }
}

/// Printed result of `check`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct FeasibilityReport {
    /// Whether the shortest mandatory tour fits the budget.
    pub(crate) feasible: bool,
    /// Length of that tour; `null` when the stops are not connected.
    pub(crate) min_distance_km: Option<f64>,
    /// The budget checked against; `null` when unconstrained.
    pub(crate) budget_km: Option<f64>,
    /// Mandatory stops in tour order.
    pub(crate) best_order: Vec<NodeId>,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_check_with(args, &mut stdout)
}

pub(crate) fn run_check_with(args: CheckArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_check(&config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_check(config: &RequestConfig) -> Result<FeasibilityReport, CliError> {
    config.validate_sources()?;
    let prepared = config.prepare()?;
    let request = &prepared.request;
    let feasibility = check_mandatory_feasibility(
        prepared.planner.graph(),
        &request.selection.effective_mandatory(),
        request.budget_km,
        &config.limits(),
    )
    .map_err(|source| CliError::Plan { source })?;
    Ok(FeasibilityReport {
        feasible: feasibility.feasible,
        min_distance_km: feasibility.min_distance_km,
        budget_km: request.budget_km.map(f64::from),
        best_order: feasibility.best_order,
    })
}
