use serde::{Deserialize, Serialize};

/// Session returned by `POST /auth/v1/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub is_anonymous: bool,
}

/// Error body returned by the GoTrue auth endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, alias = "message", skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

/// Error code GoTrue uses when the anonymous provider is switched off.
pub const ANONYMOUS_PROVIDER_DISABLED: &str = "anonymous_provider_disabled";

/// Decoded response of an edge function call. Functions signal their outcome
/// through the status code as well as the body (`201` vs `200` for toggles).
#[derive(Debug, Clone)]
pub struct FunctionResponse<T> {
    pub status: u16,
    pub body: T,
}
