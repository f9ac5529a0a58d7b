//! `plan` command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfinder_core::{PlanResponse, Planner};

use crate::output::write_json;
use crate::request::RequestConfig;
use crate::{ARG_BUDGET_KM, ARG_CATALOG, ARG_TIME_LIMIT_MS, CliError, ENV_PLAN_REQUEST};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a walking route for a JSON plan request. The route \
                 covers as many selected locations as the budget allows, \
                 always includes the mandatory ones, and is the shortest \
                 such route.",
    about = "Plan a route for a request"
)]
#[ortho_config(prefix = "WAYFINDER")]
pub(crate) struct PlanArgs {
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

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<RequestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RequestConfig::try_from(merged)
    }
}

impl TryFrom<PlanArgs> for RequestConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        Self::resolve(
            args.request_path,
            ENV_PLAN_REQUEST,
            args.catalog,
            args.budget_km,
            args.time_limit_ms,
        )
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(crate) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let response = execute_plan(&config)?;
    write_json(writer, &response)
}

pub(crate) fn execute_plan(config: &RequestConfig) -> Result<PlanResponse, CliError> {
    config.validate_sources()?;
    let prepared = config.prepare()?;
    prepared
        .planner
        .plan(&prepared.request)
        .map_err(|source| CliError::Plan { source })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RequestConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RequestConfig::try_from(merged)
}
