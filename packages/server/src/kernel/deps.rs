//! Adapters that put concrete infrastructure behind the kernel traits
//!
//! - `SupabaseLikeBackend`: the page-side like backend, over `SupabaseClient`
//! - `PostgresLikeStore`: the server-side like store, over the `likes` table

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use supabase_client::SupabaseClient;
use uuid::Uuid;

use crate::domains::likes::models::{
    Like, LikeCountRow, LikeStatus, ToggleLikeRequest, ToggleLikeResponse, ViewerLikeRow,
};
use crate::kernel::{BaseLikeBackend, BaseLikeStore, ViewerSession};

/// Edge function that flips a viewer's like.
pub const TOGGLE_LIKE_FUNCTION: &str = "toggle-like";

// =============================================================================
// SupabaseClient Adapter (implements BaseLikeBackend trait)
// =============================================================================

/// Wrapper around SupabaseClient that implements BaseLikeBackend trait
pub struct SupabaseLikeBackend(pub Arc<SupabaseClient>);

impl SupabaseLikeBackend {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseLikeBackend for SupabaseLikeBackend {
    async fn sign_in_anonymously(&self) -> Result<ViewerSession> {
        let session = self.0.sign_in_anonymously().await?;
        Ok(ViewerSession {
            viewer_id: session.user.id,
            access_token: session.access_token,
        })
    }

    async fn fetch_like_counts(&self) -> Result<HashMap<String, u64>> {
        let rows: Vec<LikeCountRow> = self
            .0
            .select("resources", &[("select", "id,like_count")], None)
            .await
            .context("Failed to read like counts")?;

        Ok(rows
            .into_iter()
            .map(|row| (row.id, row.like_count.unwrap_or(0).max(0) as u64))
            .collect())
    }

    async fn fetch_viewer_likes(&self, session: &ViewerSession) -> Result<HashSet<String>> {
        let filter = format!("eq.{}", session.viewer_id);
        let rows: Vec<ViewerLikeRow> = self
            .0
            .select(
                "likes",
                &[("select", "resource_id"), ("user_id", filter.as_str())],
                Some(&session.access_token),
            )
            .await
            .context("Failed to read viewer likes")?;

        Ok(rows.into_iter().map(|row| row.resource_id).collect())
    }

    async fn toggle_like(&self, resource_id: &str, session: &ViewerSession) -> Result<LikeStatus> {
        let request = ToggleLikeRequest {
            resource_id: resource_id.to_string(),
        };
        let response = self
            .0
            .invoke::<_, ToggleLikeResponse>(TOGGLE_LIKE_FUNCTION, &request, &session.access_token)
            .await
            .context("toggle-like function failed")?;

        Ok(response.body.status)
    }
}

// =============================================================================
// Postgres Like Store (implements BaseLikeStore trait)
// =============================================================================

pub struct PostgresLikeStore {
    pool: PgPool,
}

impl PostgresLikeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseLikeStore for PostgresLikeStore {
    async fn toggle(&self, resource_id: &str, viewer_id: Uuid) -> Result<LikeStatus> {
        Like::toggle(resource_id, viewer_id, &self.pool).await
    }

    async fn like_counts(&self) -> Result<HashMap<String, u64>> {
        Like::count_by_resource(&self.pool).await
    }

    async fn liked_by(&self, viewer_id: Uuid) -> Result<Vec<String>> {
        Like::resource_ids_for_viewer(viewer_id, &self.pool).await
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
