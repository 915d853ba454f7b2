//! Request/response bodies shared by the like backend and its client.

use serde::{Deserialize, Serialize};

use crate::domains::likes::models::LikeStatus;

/// Body of `POST /functions/v1/toggle-like`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleLikeRequest {
    pub resource_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleLikeResponse {
    pub status: LikeStatus,
}

/// Row of `GET /rest/v1/resources?select=id,like_count`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikeCountRow {
    pub id: String,
    /// Null is read as zero
    #[serde(default)]
    pub like_count: Option<i64>,
}

/// Row of `GET /rest/v1/likes?select=resource_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewerLikeRow {
    pub resource_id: String,
}

/// Error body returned by the like endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
