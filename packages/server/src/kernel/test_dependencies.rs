// TestDependencies - mock implementations for testing
//
// Provides mock backends that can be injected into LikeLedger for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::Semaphore;

use super::{BaseLikeBackend, ViewerSession};
use crate::domains::likes::models::LikeStatus;

// =============================================================================
// Mock Like Backend
// =============================================================================

/// In-memory stand-in for the remote like backend.
///
/// Keeps its own "server side" copy of counts and of the viewer's likes, so
/// tests can compare the ledger's optimistic state with what the remote holds.
pub struct MockLikeBackend {
    counts: Mutex<HashMap<String, u64>>,
    remote_likes: Mutex<HashSet<String>>,
    auth_disabled: AtomicBool,
    fail_counts: AtomicBool,
    fail_likes: AtomicBool,
    fail_toggle: AtomicBool,
    sign_in_calls: AtomicUsize,
    toggle_calls: Mutex<Vec<String>>,
    // Reads wait for a permit; closed gates are opened by `release_reads`
    read_gate: Semaphore,
}

impl Default for MockLikeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLikeBackend {
    pub fn new() -> Self {
        Self {
            counts: Mutex::new(HashMap::new()),
            remote_likes: Mutex::new(HashSet::new()),
            auth_disabled: AtomicBool::new(false),
            fail_counts: AtomicBool::new(false),
            fail_likes: AtomicBool::new(false),
            fail_toggle: AtomicBool::new(false),
            sign_in_calls: AtomicUsize::new(0),
            toggle_calls: Mutex::new(Vec::new()),
            read_gate: Semaphore::new(Semaphore::MAX_PERMITS),
        }
    }

    /// Seed the aggregate count for a resource
    pub fn with_like_count(self, resource_id: &str, count: u64) -> Self {
        self.counts
            .lock()
            .unwrap()
            .insert(resource_id.to_string(), count);
        self
    }

    /// Seed a like the viewer already has on the remote
    pub fn with_viewer_like(self, resource_id: &str) -> Self {
        self.remote_likes
            .lock()
            .unwrap()
            .insert(resource_id.to_string());
        self
    }

    /// Reject anonymous sign-in, as a project with the provider disabled does
    pub fn with_auth_disabled(self) -> Self {
        self.auth_disabled.store(true, Ordering::SeqCst);
        self
    }

    pub fn with_failing_counts(self) -> Self {
        self.fail_counts.store(true, Ordering::SeqCst);
        self
    }

    pub fn with_failing_likes(self) -> Self {
        self.fail_likes.store(true, Ordering::SeqCst);
        self
    }

    pub fn with_failing_toggle(self) -> Self {
        self.set_toggle_failure(true);
        self
    }

    /// Park both reads until [`MockLikeBackend::release_reads`] is called
    pub fn with_held_reads(mut self) -> Self {
        self.read_gate = Semaphore::new(0);
        self
    }

    pub fn release_reads(&self) {
        self.read_gate.add_permits(2);
    }

    async fn pass_read_gate(&self) -> Result<()> {
        let permit = self.read_gate.acquire().await?;
        permit.forget();
        Ok(())
    }

    /// Switch toggle failures on or off mid-test
    pub fn set_toggle_failure(&self, fail: bool) {
        self.fail_toggle.store(fail, Ordering::SeqCst);
    }

    /// Number of anonymous sign-ins performed
    pub fn sign_in_calls(&self) -> usize {
        self.sign_in_calls.load(Ordering::SeqCst)
    }

    /// Resource ids of every toggle request received, in order
    pub fn toggle_calls(&self) -> Vec<String> {
        self.toggle_calls.lock().unwrap().clone()
    }

    /// Whether the remote currently holds a like for the resource
    pub fn remote_has_like(&self, resource_id: &str) -> bool {
        self.remote_likes.lock().unwrap().contains(resource_id)
    }

    /// Remote aggregate count for the resource
    pub fn remote_count(&self, resource_id: &str) -> u64 {
        self.counts
            .lock()
            .unwrap()
            .get(resource_id)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl BaseLikeBackend for MockLikeBackend {
    async fn sign_in_anonymously(&self) -> Result<ViewerSession> {
        let n = self.sign_in_calls.fetch_add(1, Ordering::SeqCst) + 1;
        // Suspend like a network call would
        tokio::task::yield_now().await;

        if self.auth_disabled.load(Ordering::SeqCst) {
            return Err(anyhow!("anonymous sign-ins are disabled"));
        }

        Ok(ViewerSession {
            viewer_id: format!("viewer-{}", n),
            access_token: format!("token-{}", n),
        })
    }

    async fn fetch_like_counts(&self) -> Result<HashMap<String, u64>> {
        self.pass_read_gate().await?;
        tokio::task::yield_now().await;
        if self.fail_counts.load(Ordering::SeqCst) {
            return Err(anyhow!("resources table unavailable"));
        }
        Ok(self.counts.lock().unwrap().clone())
    }

    async fn fetch_viewer_likes(&self, _session: &ViewerSession) -> Result<HashSet<String>> {
        self.pass_read_gate().await?;
        tokio::task::yield_now().await;
        if self.fail_likes.load(Ordering::SeqCst) {
            return Err(anyhow!("likes table unavailable"));
        }
        Ok(self.remote_likes.lock().unwrap().clone())
    }

    async fn toggle_like(&self, resource_id: &str, _session: &ViewerSession) -> Result<LikeStatus> {
        self.toggle_calls
            .lock()
            .unwrap()
            .push(resource_id.to_string());
        tokio::task::yield_now().await;

        if self.fail_toggle.load(Ordering::SeqCst) {
            return Err(anyhow!("toggle-like function returned 500"));
        }

        let mut likes = self.remote_likes.lock().unwrap();
        let mut counts = self.counts.lock().unwrap();
        let count = counts.entry(resource_id.to_string()).or_insert(0);

        if likes.remove(resource_id) {
            *count = count.saturating_sub(1);
            Ok(LikeStatus::Unliked)
        } else {
            likes.insert(resource_id.to_string());
            *count += 1;
            Ok(LikeStatus::Liked)
        }
    }
}
