use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::server::app::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub resources: usize,
    pub like_store: LikeStoreHealth,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LikeStoreHealth {
    pub backend: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check endpoint
///
/// Checks:
/// - Catalog is loaded
/// - Like store answers an aggregate read
///
/// Returns 200 OK if all systems are healthy, 503 Service Unavailable otherwise.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let like_store = match tokio::time::timeout(
        std::time::Duration::from_secs(5),
        state.likes.like_counts(),
    )
    .await
    {
        Ok(Ok(_)) => LikeStoreHealth {
            backend: state.likes.backend_name().to_string(),
            status: "ok".to_string(),
            error: None,
        },
        Ok(Err(e)) => LikeStoreHealth {
            backend: state.likes.backend_name().to_string(),
            status: "error".to_string(),
            error: Some(format!("Query failed: {}", e)),
        },
        Err(_) => LikeStoreHealth {
            backend: state.likes.backend_name().to_string(),
            status: "error".to_string(),
            error: Some("Query timeout (>5s)".to_string()),
        },
    };

    let is_healthy = like_store.status == "ok";

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            resources: state.store.len(),
            like_store,
        }),
    )
}
