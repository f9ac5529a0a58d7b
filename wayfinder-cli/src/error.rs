//! Error types emitted by the Wayfinder CLI.
//!
//! Keep this error type reasonably small, as every command returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use wayfinder_core::{BudgetError, PlanError, PlanRequestValidationError};
use wayfinder_data::LoadError;

/// Errors emitted by the Wayfinder CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it instead.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that is not a regular file.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The budget override is negative or not a number.
    #[error("invalid --budget-km: {0}")]
    InvalidBudget(#[source] BudgetError),
    /// The catalog could not be read or failed validation.
    #[error("failed to load catalog: {0}")]
    LoadCatalog(#[source] LoadError),
    /// The plan request could not be read or decoded.
    #[error("failed to load plan request: {0}")]
    LoadRequest(#[source] LoadError),
    /// The plan request does not fit the catalog.
    #[error("plan request in {path:?} failed validation: {source}")]
    InvalidRequest {
        /// Request file that was loaded.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: PlanRequestValidationError,
    },
    /// No catalog location belongs to the requested district.
    #[error("unknown district {district:?} (known districts: {known})")]
    UnknownDistrict {
        /// District passed to `--district`.
        district: String,
        /// Comma-separated districts of the catalog.
        known: String,
    },
    /// The planner failed or was interrupted.
    #[error("planning failed: {source}")]
    Plan {
        /// Planner failure.
        source: PlanError,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
