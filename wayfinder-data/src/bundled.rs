//! The Hanoi catalog compiled into the crate.

use wayfinder_core::Catalog;

use crate::LoadError;

/// Raw JSON of the bundled Hanoi catalog.
pub const HANOI_CATALOG_JSON: &str = include_str!("../data/hanoi.json");

/// Decode and validate a catalog from JSON text.
///
/// # Errors
/// Returns the decode error for malformed JSON and for catalogs that fail
/// validation (duplicate ids, dangling or repeated edges, bad weights).
pub fn parse_catalog(json: &str) -> Result<Catalog, serde_json::Error> {
    serde_json::from_str(json)
}

/// The bundled Hanoi catalog.
///
/// # Errors
/// Returns [`LoadError::Bundled`] if the embedded JSON is malformed.
///
/// # Examples
/// ```
/// let catalog = wayfinder_data::hanoi_catalog()?;
/// assert_eq!(catalog.locations().len(), 15);
/// assert_eq!(catalog.edges().len(), 82);
/// # Ok::<(), wayfinder_data::LoadError>(())
/// ```
pub fn hanoi_catalog() -> Result<Catalog, LoadError> {
    parse_catalog(HANOI_CATALOG_JSON).map_err(LoadError::Bundled)
}
