//! In-process like store
//!
//! Used when no database is configured and in tests. The whole
//! check-then-insert/delete runs under one lock, which gives the same
//! guarantee as the `(resource_id, user_id)` unique constraint in Postgres.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domains::likes::models::LikeStatus;
use crate::kernel::BaseLikeStore;

#[derive(Default)]
pub struct InMemoryLikeStore {
    // resource_id -> viewers who liked it
    likes: Mutex<BTreeMap<String, HashSet<Uuid>>>,
}

impl InMemoryLikeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, HashSet<Uuid>>> {
        self.likes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl BaseLikeStore for InMemoryLikeStore {
    async fn toggle(&self, resource_id: &str, viewer_id: Uuid) -> Result<LikeStatus> {
        let mut likes = self.lock();
        let viewers = likes.entry(resource_id.to_string()).or_default();

        if viewers.remove(&viewer_id) {
            if viewers.is_empty() {
                likes.remove(resource_id);
            }
            Ok(LikeStatus::Unliked)
        } else {
            viewers.insert(viewer_id);
            Ok(LikeStatus::Liked)
        }
    }

    async fn like_counts(&self) -> Result<HashMap<String, u64>> {
        Ok(self
            .lock()
            .iter()
            .map(|(resource_id, viewers)| (resource_id.clone(), viewers.len() as u64))
            .collect())
    }

    async fn liked_by(&self, viewer_id: Uuid) -> Result<Vec<String>> {
        Ok(self
            .lock()
            .iter()
            .filter(|(_, viewers)| viewers.contains(&viewer_id))
            .map(|(resource_id, _)| resource_id.clone())
            .collect())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
