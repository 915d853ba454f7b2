use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

use crate::domains::auth::JwtService;

/// Viewer named by a verified access token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthViewer {
    pub viewer_id: Uuid,
    pub is_anonymous: bool,
}

/// Attach an [`AuthViewer`] to the request when it carries a valid token.
///
/// Requests without one pass through untouched; handlers that need a viewer
/// answer 401 themselves.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    match viewer_from_request(&request, &jwt_service) {
        Some(viewer) => {
            debug!(viewer_id = %viewer.viewer_id, "Request from known viewer");
            request.extensions_mut().insert(viewer);
        }
        None => debug!("Request without a valid access token"),
    }

    next.run(request).await
}

/// `Authorization: Bearer <jwt>`; a bare token is accepted too.
fn viewer_from_request(request: &Request<Body>, jwt_service: &JwtService) -> Option<AuthViewer> {
    let header = request.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();

    jwt_service
        .verify_token(token)
        .ok()
        .map(|claims| AuthViewer {
            viewer_id: claims.viewer_id,
            is_anonymous: claims.is_anonymous,
        })
}
