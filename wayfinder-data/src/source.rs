//! JSON loaders for catalogs and plan requests on disk.

use std::io::BufReader;

use camino::Utf8Path;
use log::debug;
use serde::de::DeserializeOwned;
use wayfinder_core::{Catalog, PlanRequest};

use crate::LoadError;
use crate::fs::open_utf8_file;

/// Load and validate a catalog from a JSON file.
///
/// # Errors
/// Returns [`LoadError::Open`] when the file cannot be read and
/// [`LoadError::Parse`] when it is malformed or fails validation.
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, LoadError> {
    let catalog: Catalog = load_json(path)?;
    debug!(
        "loaded {} locations and {} edges from {path}",
        catalog.locations().len(),
        catalog.edges().len()
    );
    Ok(catalog)
}

/// Load a plan request from a JSON file.
///
/// The request is only decoded here; checking it against a graph is the
/// planner's job.
///
/// # Errors
/// Returns [`LoadError::Open`] when the file cannot be read and
/// [`LoadError::Parse`] when it is malformed or holds a negative budget.
pub fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, LoadError> {
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, LoadError> {
    let file = open_utf8_file(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
