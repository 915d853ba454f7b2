pub mod content;
pub mod dates;

pub use content::*;
pub use dates::*;
