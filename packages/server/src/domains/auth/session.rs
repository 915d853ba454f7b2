//! Anonymous viewer sessions
//!
//! Mirrors GoTrue's anonymous sign-up: every call mints a fresh viewer id and
//! returns a session carrying a signed access token.

use anyhow::Result;
use supabase_client::{Session, User};
use tracing::info;
use uuid::Uuid;

use crate::domains::auth::jwt::{JwtService, TOKEN_TTL_SECONDS};

/// Mint a new anonymous viewer and its session.
pub fn issue_anonymous_session(jwt_service: &JwtService) -> Result<Session> {
    let viewer_id = Uuid::new_v4();
    let access_token = jwt_service.create_anonymous_token(viewer_id)?;

    info!(viewer_id = %viewer_id, "Issued anonymous viewer session");

    Ok(Session {
        access_token,
        token_type: "bearer".to_string(),
        expires_in: TOKEN_TTL_SECONDS,
        refresh_token: None,
        user: User {
            id: viewer_id.to_string(),
            is_anonymous: true,
        },
    })
}
