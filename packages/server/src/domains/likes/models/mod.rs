pub mod like;
pub mod wire;

pub use like::{Like, LikeStatus};
pub use wire::{ErrorBody, LikeCountRow, ToggleLikeRequest, ToggleLikeResponse, ViewerLikeRow};
