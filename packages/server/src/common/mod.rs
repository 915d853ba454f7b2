// Common utilities shared across domains
pub mod utils;
