// Frontend Resources - API Core
//
// Curated catalog of frontend-development resources with community likes.
// Catalog rules live in domains/resources, like rules in domains/likes;
// infrastructure sits behind the Base* traits in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
