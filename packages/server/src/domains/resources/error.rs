use std::path::PathBuf;

use thiserror::Error;

/// A category label outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Errors raised while loading the catalog.
///
/// `InvalidCategory` and `InvalidDate` are data-integrity failures: the load
/// stops at the first offending record instead of serving it.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("resource {id:?} has unknown category {category:?}")]
    InvalidCategory { id: String, category: String },

    #[error("resource {id:?} has unparseable addedOn {added_on:?}")]
    InvalidDate { id: String, added_on: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sort mode {0:?}, expected featured, popular or newest")]
pub struct InvalidSortMode(pub String);
