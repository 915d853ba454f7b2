//! Like endpoints, shaped after the PostgREST tables and the edge function
//! the page calls:
//!
//! - `GET /rest/v1/resources?select=id,like_count`
//! - `GET /rest/v1/likes?select=resource_id&user_id=eq.<viewer>`
//! - `POST /functions/v1/toggle-like`

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::domains::likes::models::{
    ErrorBody, LikeCountRow, LikeStatus, ToggleLikeRequest, ToggleLikeResponse, ViewerLikeRow,
};
use crate::server::app::AppState;
use crate::server::middleware::AuthViewer;
use crate::server::routes::error_response;

type ApiError = (StatusCode, Json<ErrorBody>);

/// One row per catalog resource; resources without likes report zero.
pub async fn like_counts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LikeCountRow>>, ApiError> {
    let counts = state.likes.like_counts().await.map_err(|e| {
        error!(error = %e, "Failed to read like counts");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    let rows = state
        .store
        .get_all()
        .iter()
        .map(|resource| LikeCountRow {
            id: resource.id.clone(),
            like_count: Some(counts.get(&resource.id).copied().unwrap_or(0) as i64),
        })
        .collect();

    Ok(Json(rows))
}

/// Parse a PostgREST `eq.<uuid>` filter value.
fn parse_eq_filter(value: &str) -> Option<Uuid> {
    value.strip_prefix("eq.")?.parse().ok()
}

/// The caller's liked resource ids.
///
/// Row-level access: a `user_id` filter naming another viewer yields no rows.
pub async fn viewer_likes_handler(
    State(state): State<AppState>,
    viewer: Option<Extension<AuthViewer>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<ViewerLikeRow>>, ApiError> {
    let Some(Extension(viewer)) = viewer else {
        return Err(error_response(StatusCode::UNAUTHORIZED, "Not authenticated"));
    };

    if let Some(filter) = params.get("user_id") {
        if parse_eq_filter(filter) != Some(viewer.viewer_id) {
            return Ok(Json(Vec::new()));
        }
    }

    let liked = state.likes.liked_by(viewer.viewer_id).await.map_err(|e| {
        error!(viewer_id = %viewer.viewer_id, error = %e, "Failed to read viewer likes");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(
        liked
            .into_iter()
            .map(|resource_id| ViewerLikeRow { resource_id })
            .collect(),
    ))
}

/// Flip the caller's like. `201` when the like was created, `200` when removed.
pub async fn toggle_like_handler(
    State(state): State<AppState>,
    viewer: Option<Extension<AuthViewer>>,
    Json(request): Json<ToggleLikeRequest>,
) -> Result<(StatusCode, Json<ToggleLikeResponse>), ApiError> {
    let Some(Extension(viewer)) = viewer else {
        return Err(error_response(StatusCode::UNAUTHORIZED, "Not authenticated"));
    };

    if !state.store.contains(&request.resource_id) {
        return Err(error_response(
            StatusCode::NOT_FOUND,
            format!("Unknown resource: {}", request.resource_id),
        ));
    }

    let status = state
        .likes
        .toggle(&request.resource_id, viewer.viewer_id)
        .await
        .map_err(|e| {
            error!(
                resource_id = %request.resource_id,
                viewer_id = %viewer.viewer_id,
                error = %e,
                "Failed to toggle like"
            );
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    info!(
        resource_id = %request.resource_id,
        viewer_id = %viewer.viewer_id,
        status = %status,
        "Like toggled"
    );

    let code = match status {
        LikeStatus::Liked => StatusCode::CREATED,
        LikeStatus::Unliked => StatusCode::OK,
    };

    Ok((code, Json(ToggleLikeResponse { status })))
}
