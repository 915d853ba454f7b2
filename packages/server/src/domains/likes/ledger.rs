//! LikeLedger - the viewer's view of community likes
//!
//! Holds the per-resource counts and the viewer's liked set for one session.
//! Toggles are applied locally first and then sent to the remote backend;
//! the remote answer is logged but never merged back.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, warn};

use crate::domains::likes::error::LikeError;
use crate::domains::likes::models::LikeStatus;
use crate::kernel::{BaseLikeBackend, ViewerSession};

/// Counts and liked set as currently known to the viewer.
///
/// The `*_loaded` flags tell "not fetched yet" apart from "fetched, empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeState {
    pub like_counts: HashMap<String, u64>,
    pub user_likes: HashSet<String>,
    pub counts_loaded: bool,
    pub likes_loaded: bool,
}

impl LikeState {
    /// Count for a resource; unknown resources have zero likes
    pub fn count(&self, resource_id: &str) -> u64 {
        self.like_counts.get(resource_id).copied().unwrap_or(0)
    }

    pub fn is_liked(&self, resource_id: &str) -> bool {
        self.user_likes.contains(resource_id)
    }

    /// Both remote reads have resolved (successfully or not)
    pub fn is_ready(&self) -> bool {
        self.counts_loaded && self.likes_loaded
    }

    /// Flip the viewer's like locally and return what changed.
    fn apply_toggle(&mut self, resource_id: &str) -> LikeDelta {
        let current = self.count(resource_id);

        if self.user_likes.remove(resource_id) {
            let count = current.saturating_sub(1);
            self.like_counts.insert(resource_id.to_string(), count);
            LikeDelta {
                liked: false,
                count_change: count as i64 - current as i64,
            }
        } else {
            self.user_likes.insert(resource_id.to_string());
            self.like_counts.insert(resource_id.to_string(), current + 1);
            LikeDelta {
                liked: true,
                count_change: 1,
            }
        }
    }

    /// Undo a delta produced by `apply_toggle`.
    fn revert(&mut self, resource_id: &str, delta: LikeDelta) {
        if delta.liked {
            self.user_likes.remove(resource_id);
        } else {
            self.user_likes.insert(resource_id.to_string());
        }

        let current = self.count(resource_id) as i64;
        let restored = (current - delta.count_change).max(0) as u64;
        self.like_counts.insert(resource_id.to_string(), restored);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LikeDelta {
    /// Liked state after the toggle
    liked: bool,
    count_change: i64,
}

/// What a call to [`LikeLedger::toggle`] ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// No identity could be established; nothing was changed or sent.
    Skipped(LikeError),
    /// Local state changed and the remote accepted the toggle.
    Confirmed { liked: bool, remote: LikeStatus },
    /// Local state changed but the remote call failed; local state is kept.
    Unconfirmed { liked: bool, error: LikeError },
    /// The remote call failed and the local change was undone.
    RolledBack(LikeError),
}

impl ToggleOutcome {
    /// Liked state the viewer sees after the toggle, if it changed
    pub fn liked(&self) -> Option<bool> {
        match self {
            ToggleOutcome::Confirmed { liked, .. } | ToggleOutcome::Unconfirmed { liked, .. } => {
                Some(*liked)
            }
            ToggleOutcome::Skipped(_) | ToggleOutcome::RolledBack(_) => None,
        }
    }
}

pub struct LikeLedger {
    backend: Arc<dyn BaseLikeBackend>,
    // Held across the sign-in call so concurrent callers share one identity
    session: tokio::sync::Mutex<Option<ViewerSession>>,
    // Held by `initialize` until both reads have landed; toggles wait on it
    loading: tokio::sync::Mutex<()>,
    // Never held across an await
    state: Mutex<LikeState>,
    rollback_on_failure: bool,
}

impl LikeLedger {
    pub fn new(backend: Arc<dyn BaseLikeBackend>) -> Self {
        Self {
            backend,
            session: tokio::sync::Mutex::new(None),
            loading: tokio::sync::Mutex::new(()),
            state: Mutex::new(LikeState::default()),
            rollback_on_failure: false,
        }
    }

    /// Undo the optimistic change when the remote toggle fails.
    ///
    /// Off by default: a failed toggle leaves the local state diverged from
    /// the remote until the next full reload.
    pub fn with_rollback_on_failure(mut self, enabled: bool) -> Self {
        self.rollback_on_failure = enabled;
        self
    }

    /// Start from an existing viewer session instead of signing in.
    pub fn with_session(self, session: ViewerSession) -> Self {
        Self {
            session: tokio::sync::Mutex::new(Some(session)),
            ..self
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, LikeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the current viewer session, signing in anonymously if there is
    /// none yet. Calling it again returns the same session.
    pub async fn ensure_identity(&self) -> Result<ViewerSession, LikeError> {
        let mut session = self.session.lock().await;
        if let Some(existing) = session.as_ref() {
            return Ok(existing.clone());
        }

        match self.backend.sign_in_anonymously().await {
            Ok(created) => {
                info!(viewer_id = %created.viewer_id, "Signed in anonymously");
                *session = Some(created.clone());
                Ok(created)
            }
            Err(e) => Err(LikeError::AuthUnavailable(format!("{:#}", e))),
        }
    }

    /// Establish identity, then load counts and the viewer's likes.
    ///
    /// The two reads run concurrently and each lands in the state as soon as
    /// it resolves. A failed read resolves to the zero state.
    ///
    /// Reads replace the loaded maps wholesale, so toggles issued while this
    /// runs wait until both reads have landed and then apply on top of them.
    /// Toggles made before `initialize` is called at all are overwritten.
    pub async fn initialize(&self) -> LikeState {
        let _loading = self.loading.lock().await;

        let session = match self.ensure_identity().await {
            Ok(session) => Some(session),
            Err(e) => {
                error!(error = %e, "Error signing in anonymously");
                None
            }
        };

        let load_counts = async {
            let counts = match self.backend.fetch_like_counts().await {
                Ok(counts) => counts,
                Err(e) => {
                    let err = LikeError::RemoteRead(format!("{:#}", e));
                    warn!(error = %err, "Like counts unavailable, defaulting to zero");
                    HashMap::new()
                }
            };
            let mut state = self.lock_state();
            state.like_counts = counts;
            state.counts_loaded = true;
        };

        let load_likes = async {
            let likes = match &session {
                Some(session) => match self.backend.fetch_viewer_likes(session).await {
                    Ok(likes) => likes,
                    Err(e) => {
                        let err = LikeError::RemoteRead(format!("{:#}", e));
                        warn!(error = %err, "Viewer likes unavailable, defaulting to none");
                        HashSet::new()
                    }
                },
                None => HashSet::new(),
            };
            let mut state = self.lock_state();
            state.user_likes = likes;
            state.likes_loaded = true;
        };

        tokio::join!(load_counts, load_likes);

        let state = self.snapshot();
        debug!(
            resources = state.like_counts.len(),
            liked = state.user_likes.len(),
            "Like ledger initialized"
        );
        state
    }

    /// Flip the viewer's like on a resource.
    ///
    /// Order of effects: ensure identity, apply the change locally, then send
    /// one toggle request. Without an identity the toggle is skipped entirely.
    /// While `initialize` is loading, the local change waits for it.
    pub async fn toggle(&self, resource_id: &str) -> ToggleOutcome {
        let session = match self.ensure_identity().await {
            Ok(session) => session,
            Err(e) => {
                error!(resource_id, error = %e, "Like toggle skipped");
                return ToggleOutcome::Skipped(e);
            }
        };

        drop(self.loading.lock().await);

        let delta = self.lock_state().apply_toggle(resource_id);
        debug!(resource_id, liked = delta.liked, "Applied optimistic like toggle");

        match self.backend.toggle_like(resource_id, &session).await {
            Ok(remote) => {
                if remote.is_liked() != delta.liked {
                    warn!(
                        resource_id,
                        local = delta.liked,
                        remote = %remote,
                        "Remote like state differs from local state"
                    );
                }
                ToggleOutcome::Confirmed {
                    liked: delta.liked,
                    remote,
                }
            }
            Err(e) => {
                let err = LikeError::RemoteWrite(format!("{:#}", e));
                error!(resource_id, error = %err, "Error toggling like");

                if self.rollback_on_failure {
                    self.lock_state().revert(resource_id, delta);
                    ToggleOutcome::RolledBack(err)
                } else {
                    ToggleOutcome::Unconfirmed {
                        liked: delta.liked,
                        error: err,
                    }
                }
            }
        }
    }

    pub fn like_count(&self, resource_id: &str) -> u64 {
        self.lock_state().count(resource_id)
    }

    pub fn is_liked(&self, resource_id: &str) -> bool {
        self.lock_state().is_liked(resource_id)
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> LikeState {
        self.lock_state().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_toggle_increments_then_decrements() {
        let mut state = LikeState::default();

        let delta = state.apply_toggle("react");
        assert!(delta.liked);
        assert_eq!(state.count("react"), 1);
        assert!(state.is_liked("react"));

        let delta = state.apply_toggle("react");
        assert!(!delta.liked);
        assert_eq!(state.count("react"), 0);
        assert!(!state.is_liked("react"));
    }

    #[test]
    fn test_unlike_floors_count_at_zero() {
        let mut state = LikeState::default();
        state.user_likes.insert("react".to_string());

        let delta = state.apply_toggle("react");
        assert_eq!(state.count("react"), 0);
        assert_eq!(delta.count_change, 0);
    }

    #[test]
    fn test_revert_restores_previous_state() {
        let mut state = LikeState::default();
        state.like_counts.insert("react".to_string(), 4);
        let before = state.clone();

        let delta = state.apply_toggle("react");
        state.revert("react", delta);
        assert_eq!(state.count("react"), 4);
        assert!(!state.is_liked("react"));
        assert_eq!(state.user_likes, before.user_likes);
    }

    #[test]
    fn test_revert_of_floored_unlike() {
        let mut state = LikeState::default();
        state.user_likes.insert("react".to_string());

        let delta = state.apply_toggle("react");
        state.revert("react", delta);
        assert!(state.is_liked("react"));
        assert_eq!(state.count("react"), 0);
    }
}
