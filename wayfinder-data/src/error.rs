//! Errors raised while loading catalogs and requests.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors returned by the loaders in this crate.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to open {path:?}: {source}")]
    Open {
        /// File that failed to open.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON for the expected shape, or its content
    /// failed validation.
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        /// File that failed to parse.
        path: Utf8PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// The catalog compiled into the crate is malformed.
    #[error("bundled catalog is invalid: {0}")]
    Bundled(#[source] serde_json::Error),
}
