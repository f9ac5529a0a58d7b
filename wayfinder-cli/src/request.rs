//! Inputs shared by the `plan` and `check` commands.
//!
//! Both commands read a JSON plan request, plan over a catalog (the bundled
//! Hanoi catalog unless `--catalog` names a file) and accept the same budget
//! and time-limit overrides.

use std::io::ErrorKind;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use wayfinder_core::{Budget, Catalog, PlanRequest};
use wayfinder_data::fs::file_is_file;
use wayfinder_solver_exhaustive::{ExhaustivePlanner, ExhaustivePlannerConfig, SearchLimits};

use crate::{ARG_CATALOG, ARG_REQUEST, CliError};

/// Resolved request inputs.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RequestConfig {
    /// Path to the JSON plan request.
    pub(crate) request_path: Utf8PathBuf,
    /// Catalog file; `None` selects the bundled catalog.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Budget replacing the one in the request file.
    pub(crate) budget: Option<Budget>,
    /// Abandon the search after this long.
    pub(crate) time_limit: Option<Duration>,
}

/// A request checked against the planner's graph.
#[derive(Debug)]
pub(crate) struct PreparedRequest {
    pub(crate) planner: ExhaustivePlanner,
    pub(crate) request: PlanRequest,
}

impl RequestConfig {
    /// Resolve merged command arguments.
    ///
    /// `env` names the variable that can supply a missing request path.
    pub(crate) fn resolve(
        request_path: Option<Utf8PathBuf>,
        env: &'static str,
        catalog: Option<Utf8PathBuf>,
        budget_km: Option<f64>,
        time_limit_ms: Option<u64>,
    ) -> Result<Self, CliError> {
        let request_path = request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env,
        })?;
        let budget = budget_km
            .map(Budget::new)
            .transpose()
            .map_err(CliError::InvalidBudget)?;
        Ok(Self {
            request_path,
            catalog,
            budget,
            time_limit: time_limit_ms.map(Duration::from_millis),
        })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)?;
        if let Some(catalog) = &self.catalog {
            require_existing(catalog, ARG_CATALOG)?;
        }
        Ok(())
    }

    /// Search limits for direct feasibility checks.
    pub(crate) fn limits(&self) -> SearchLimits {
        self.time_limit.map_or_else(SearchLimits::default, |limit| {
            SearchLimits::default().with_time_limit(limit)
        })
    }

    /// Load the catalog and request, apply overrides and validate.
    pub(crate) fn prepare(&self) -> Result<PreparedRequest, CliError> {
        let catalog = load_catalog(self.catalog.as_deref())?;
        let config = ExhaustivePlannerConfig {
            time_limit: self.time_limit,
            ..ExhaustivePlannerConfig::default()
        };
        let planner = ExhaustivePlanner::from_catalog(&catalog, config);

        let mut request =
            wayfinder_data::load_plan_request(&self.request_path).map_err(CliError::LoadRequest)?;
        if let Some(budget) = self.budget {
            request.budget_km = Some(budget);
        }
        request
            .validate_for(planner.graph())
            .map_err(|source| CliError::InvalidRequest {
                path: self.request_path.clone(),
                source,
            })?;
        Ok(PreparedRequest { planner, request })
    }
}

/// Load the catalog at `path`, or the bundled catalog when `None`.
pub(crate) fn load_catalog(path: Option<&Utf8Path>) -> Result<Catalog, CliError> {
    match path {
        Some(path) => wayfinder_data::load_catalog(path),
        None => wayfinder_data::hanoi_catalog(),
    }
    .map_err(CliError::LoadCatalog)
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == ErrorKind::NotFound => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
