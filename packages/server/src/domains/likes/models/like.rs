//! Like model - one viewer's approval of one resource
//!
//! The `likes` table carries a unique constraint on `(resource_id, user_id)`,
//! so a pair can exist at most once no matter how toggles interleave.

use std::collections::HashMap;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Outcome of a toggle, as reported by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LikeStatus {
    Liked,
    Unliked,
}

impl LikeStatus {
    pub fn is_liked(self) -> bool {
        matches!(self, LikeStatus::Liked)
    }
}

impl std::fmt::Display for LikeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LikeStatus::Liked => write!(f, "liked"),
            LikeStatus::Unliked => write!(f, "unliked"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Like {
    pub id: Uuid,
    pub resource_id: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// Delete the pair if present, otherwise insert it
    pub async fn toggle(resource_id: &str, user_id: Uuid, pool: &PgPool) -> Result<LikeStatus> {
        let deleted = sqlx::query("DELETE FROM likes WHERE resource_id = $1 AND user_id = $2")
            .bind(resource_id)
            .bind(user_id)
            .execute(pool)
            .await?
            .rows_affected();

        if deleted > 0 {
            return Ok(LikeStatus::Unliked);
        }

        sqlx::query(
            "INSERT INTO likes (id, resource_id, user_id)
             VALUES ($1, $2, $3)
             ON CONFLICT (resource_id, user_id) DO NOTHING",
        )
        .bind(Uuid::now_v7())
        .bind(resource_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(LikeStatus::Liked)
    }

    /// Like count per resource (resources without likes are absent)
    pub async fn count_by_resource(pool: &PgPool) -> Result<HashMap<String, u64>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT resource_id, COUNT(*) FROM likes GROUP BY resource_id",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(resource_id, count)| (resource_id, count.max(0) as u64))
            .collect())
    }

    /// Resource ids liked by a viewer, oldest first
    pub async fn resource_ids_for_viewer(user_id: Uuid, pool: &PgPool) -> Result<Vec<String>> {
        let ids = sqlx::query_scalar::<_, String>(
            "SELECT resource_id FROM likes WHERE user_id = $1 ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(ids)
    }
}
