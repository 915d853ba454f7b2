// HTTP routes
pub mod auth;
pub mod health;
pub mod likes;
pub mod resources;

pub use auth::*;
pub use health::*;
pub use likes::*;
pub use resources::*;

use axum::{http::StatusCode, Json};

use crate::domains::likes::models::ErrorBody;

/// Status plus `{"error": ...}` body
pub fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

/// Fallback for unmatched paths
pub async fn not_found_handler() -> (StatusCode, Json<ErrorBody>) {
    error_response(StatusCode::NOT_FOUND, "Not found")
}
