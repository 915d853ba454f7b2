// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The like rules (optimistic update, zero-state defaults) live in
// domains::likes and only talk to these seams.
//
// Naming convention: Base* for trait names (e.g., BaseLikeBackend, BaseLikeStore)

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domains::likes::models::LikeStatus;

/// Credential of the current viewer, as handed out by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSession {
    pub viewer_id: String,
    pub access_token: String,
}

// =============================================================================
// Like Backend Trait (client side - the remote the page talks to)
// =============================================================================

#[async_trait]
pub trait BaseLikeBackend: Send + Sync {
    /// Create an anonymous viewer identity
    async fn sign_in_anonymously(&self) -> Result<ViewerSession>;

    /// Like count for every resource (absent ids mean zero)
    async fn fetch_like_counts(&self) -> Result<HashMap<String, u64>>;

    /// Resource ids the viewer has liked
    async fn fetch_viewer_likes(&self, session: &ViewerSession) -> Result<HashSet<String>>;

    /// Toggle the viewer's like on a resource
    async fn toggle_like(&self, resource_id: &str, session: &ViewerSession) -> Result<LikeStatus>;
}

// =============================================================================
// Like Store Trait (server side - where like rows live)
// =============================================================================

#[async_trait]
pub trait BaseLikeStore: Send + Sync {
    /// Delete the (resource, viewer) like if present, otherwise insert it
    async fn toggle(&self, resource_id: &str, viewer_id: Uuid) -> Result<LikeStatus>;

    /// Like count per resource (resources without likes may be absent)
    async fn like_counts(&self) -> Result<HashMap<String, u64>>;

    /// Resource ids liked by a viewer
    async fn liked_by(&self, viewer_id: Uuid) -> Result<Vec<String>>;

    /// Short name for health reporting
    fn backend_name(&self) -> &'static str;
}
