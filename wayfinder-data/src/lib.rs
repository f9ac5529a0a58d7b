//! Catalog data for Wayfinder.
//!
//! Provides the bundled Hanoi catalog (15 locations across five districts,
//! linked by 82 walking distances) and loaders for catalog and plan-request
//! JSON files on disk.

#![forbid(unsafe_code)]

mod bundled;
mod error;
pub mod fs;
mod source;

pub use bundled::{HANOI_CATALOG_JSON, hanoi_catalog, parse_catalog};
pub use error::LoadError;
pub use source::{load_catalog, load_plan_request};
