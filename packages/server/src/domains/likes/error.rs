use thiserror::Error;

/// Failures of the like feature. None of these stop the page from rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LikeError {
    /// Anonymous identity could not be established; the like feature is inert.
    #[error("anonymous identity unavailable: {0}")]
    AuthUnavailable(String),

    /// Counts or the viewer's likes could not be read; zero state is used.
    #[error("failed to read likes: {0}")]
    RemoteRead(String),

    /// The toggle call failed; the optimistic local state is kept.
    #[error("failed to toggle like: {0}")]
    RemoteWrite(String),
}
