use thiserror::Error;

pub type Result<T> = std::result::Result<T, SupabaseError>;

#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Supabase API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The project has the anonymous auth provider switched off.
    #[error("anonymous sign-ins are disabled: {0}")]
    AnonymousSignInsDisabled(String),

    #[error("not authenticated: {0}")]
    Unauthorized(String),
}

impl SupabaseError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SupabaseError::Http(e) => e.status().map(|s| s.as_u16()),
            SupabaseError::Api { status, .. } => Some(*status),
            SupabaseError::AnonymousSignInsDisabled(_) => Some(422),
            SupabaseError::Unauthorized(_) => Some(401),
        }
    }
}
