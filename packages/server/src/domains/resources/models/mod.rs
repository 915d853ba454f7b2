pub mod category;
pub mod resource;

pub use category::Category;
pub use resource::{Resource, ResourceRecord};
