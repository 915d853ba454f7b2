//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::domains::resources::ResourceStore;
use crate::kernel::BaseLikeStore;
use crate::server::middleware::{jwt_auth_middleware, rate_limited};
use crate::server::routes::{
    anonymous_signup_handler, health_handler, like_counts_handler, list_resources_handler,
    not_found_handler, toggle_like_handler, validation_handler, view_resources_handler,
    viewer_likes_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ResourceStore,
    pub likes: Arc<dyn BaseLikeStore>,
    pub jwt_service: Arc<JwtService>,
    pub anonymous_sign_ins_enabled: bool,
}

/// Build the Axum application router
///
/// `rate_limit_per_second` throttles the toggle function per client IP; the
/// read endpoints are never limited. A limited router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn build_app(state: AppState, rate_limit_per_second: Option<u64>) -> Result<Router> {
    // CORS configuration - public page, any origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("apikey"),
        ]);

    let jwt_service = state.jwt_service.clone();

    let mut functions =
        Router::new().route("/functions/v1/toggle-like", post(toggle_like_handler));
    if let Some(per_second) = rate_limit_per_second {
        functions = rate_limited(functions, per_second)?;
    }

    let app = Router::new()
        // Catalog
        .route("/api/resources", get(list_resources_handler))
        .route("/api/resources/view", get(view_resources_handler))
        .route("/api/resources/validation", get(validation_handler))
        // Auth + like tables
        .route("/auth/v1/signup", post(anonymous_signup_handler))
        .route("/rest/v1/resources", get(like_counts_handler))
        .route("/rest/v1/likes", get(viewer_likes_handler))
        .merge(functions)
        // Health check (no auth)
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
