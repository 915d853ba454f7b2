//! Anonymous sign-in, served at GoTrue's path so the same client works
//! against this server and a hosted project.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use supabase_client::{AuthErrorBody, ANONYMOUS_PROVIDER_DISABLED};
use tracing::{error, warn};

use crate::domains::auth::issue_anonymous_session;
use crate::server::app::AppState;
use crate::server::routes::error_response;

pub async fn anonymous_signup_handler(State(state): State<AppState>) -> impl IntoResponse {
    if !state.anonymous_sign_ins_enabled {
        warn!("Anonymous sign-in attempted while disabled");
        let body = AuthErrorBody {
            code: Some(422),
            error_code: Some(ANONYMOUS_PROVIDER_DISABLED.to_string()),
            msg: Some("Anonymous sign-ins are disabled".to_string()),
        };
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
    }

    match issue_anonymous_session(&state.jwt_service) {
        Ok(session) => Json(session).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to issue anonymous session");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session")
                .into_response()
        }
    }
}
