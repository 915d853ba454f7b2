//! Kernel module - infrastructure seams and their implementations.

pub mod deps;
pub mod like_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::{PostgresLikeStore, SupabaseLikeBackend, TOGGLE_LIKE_FUNCTION};
pub use like_store::InMemoryLikeStore;
pub use test_dependencies::MockLikeBackend;
pub use traits::*;
