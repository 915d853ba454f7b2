//! Likes domain - community approval of catalog resources
//!
//! - `ledger`: the viewer-side state with optimistic toggles
//! - `models`: the server-side `Like` rows and the wire bodies both sides share
//!
//! The server-side toggle itself lives behind `kernel::BaseLikeStore`.

pub mod error;
pub mod ledger;
pub mod models;

pub use error::LikeError;
pub use ledger::{LikeLedger, LikeState, ToggleOutcome};
pub use models::{Like, LikeStatus};
