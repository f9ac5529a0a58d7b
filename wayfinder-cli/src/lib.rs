//! Command-line interface for the Wayfinder route planner.
//!
//! Three subcommands share one configuration story: every flag can also be
//! supplied by a configuration file or a `WAYFINDER_CMDS_<COMMAND>_<FIELD>`
//! environment variable, layered by `ortho_config`.
//!
//! - `plan` reads a JSON plan request and prints the planned route.
//! - `check` reports whether the request's mandatory stops fit its budget.
//! - `locations` lists the catalog, optionally for one district.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod check;
mod error;
mod locations;
mod output;
mod plan;
mod request;

use check::{CheckArgs, run_check};
use locations::{LocationsArgs, run_locations};
use plan::{PlanArgs, run_plan};

pub use error::CliError;

const ARG_REQUEST: &str = "request";
const ARG_CATALOG: &str = "catalog";
const ARG_BUDGET_KM: &str = "budget-km";
const ARG_TIME_LIMIT_MS: &str = "time-limit-ms";
const ARG_DISTRICT: &str = "district";
const ENV_PLAN_REQUEST: &str = "WAYFINDER_CMDS_PLAN_REQUEST_PATH";
const ENV_CHECK_REQUEST: &str = "WAYFINDER_CMDS_CHECK_REQUEST_PATH";

/// Run the Wayfinder CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or inputs are invalid,
/// or when planning fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
        Command::Check(args) => run_check(args),
        Command::Locations(args) => run_locations(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfinder",
    about = "Plan walking routes through selected points of interest",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan the route covering the most selected locations.
    Plan(PlanArgs),
    /// Check whether the mandatory locations fit the budget.
    Check(CheckArgs),
    /// List catalog locations.
    Locations(LocationsArgs),
}

#[cfg(test)]
mod tests;
