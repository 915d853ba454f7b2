//! Catalog endpoints
//!
//! - `GET /api/resources`: the full catalog, in catalog order
//! - `GET /api/resources/view`: filtered/sorted page view with like counts
//! - `GET /api/resources/validation`: duplicate scan

use std::collections::HashSet;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domains::likes::models::ErrorBody;
use crate::domains::resources::{
    apply_view, Category, Resource, SortMode, ValidationReport, ViewQuery,
};
use crate::server::app::AppState;
use crate::server::routes::error_response;

/// Query string of the view endpoint. `categories` is comma separated.
#[derive(Debug, Default, Deserialize)]
pub struct ViewParams {
    pub q: Option<String>,
    pub categories: Option<String>,
    pub sort: Option<String>,
}

impl ViewParams {
    pub fn into_view_query(self) -> Result<ViewQuery, String> {
        let categories = self
            .categories
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(|c| c.parse::<Category>().map_err(|e| e.to_string()))
            .collect::<Result<HashSet<_>, _>>()?;

        let sort = match self.sort.as_deref() {
            Some(sort) => sort.parse::<SortMode>().map_err(|e| e.to_string())?,
            None => SortMode::default(),
        };

        Ok(ViewQuery {
            query: self.q.unwrap_or_default(),
            categories,
            sort,
        })
    }
}

/// One entry of the page view
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewItem<'a> {
    #[serde(flatten)]
    pub resource: &'a Resource,
    pub like_count: u64,
}

pub async fn list_resources_handler(State(state): State<AppState>) -> Json<Vec<Resource>> {
    Json(state.store.get_all().to_vec())
}

pub async fn view_resources_handler(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorBody>)> {
    let query = params
        .into_view_query()
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e))?;

    // Counts are decoration here; an unavailable store reads as zero likes
    let like_counts = state.likes.like_counts().await.unwrap_or_else(|e| {
        warn!(error = %e, "Like counts unavailable for view");
        Default::default()
    });

    let view = apply_view(state.store.get_all(), &query, &like_counts);
    debug!(
        query = %query.query,
        sort = %query.sort,
        results = view.len(),
        "Computed resource view"
    );

    let items: Vec<ViewItem<'_>> = view
        .into_iter()
        .map(|resource| ViewItem {
            like_count: like_counts.get(&resource.id).copied().unwrap_or(0),
            resource,
        })
        .collect();

    serde_json::to_value(items)
        .map(Json)
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

pub async fn validation_handler(State(state): State<AppState>) -> Json<ValidationReport> {
    Json(state.store.validate())
}
