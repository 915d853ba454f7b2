//! Resources domain - the curated catalog and its page view
//!
//! - `store`: immutable catalog, category/search accessors, duplicate scan
//! - `view`: filter/search/sort over the catalog for the page

pub mod error;
pub mod models;
pub mod store;
pub mod view;

pub use error::{CatalogError, InvalidSortMode, UnknownCategory};
pub use models::{Category, Resource, ResourceRecord};
pub use store::{ResourceStore, ValidationReport};
pub use view::{apply_view, SortMode, ViewQuery};
