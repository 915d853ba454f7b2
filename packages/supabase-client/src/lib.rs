//! Minimal Supabase REST client.
//!
//! Covers the three surfaces a public, anonymous-auth page needs: creating an
//! anonymous session through GoTrue, reading tables through PostgREST, and
//! invoking edge functions with the viewer's access token.
//!
//! # Example
//!
//! ```rust,ignore
//! use supabase_client::SupabaseClient;
//!
//! let client = SupabaseClient::new("https://xyz.supabase.co", "anon-key");
//!
//! let session = client.sign_in_anonymously().await?;
//! let rows: Vec<serde_json::Value> = client
//!     .select("likes", &[("select", "resource_id")], Some(&session.access_token))
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SupabaseError};
pub use types::{AuthErrorBody, FunctionResponse, Session, User, ANONYMOUS_PROVIDER_DISABLED};

use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            anon_key: anon_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create an anonymous user and return its session.
    ///
    /// Fails with [`SupabaseError::AnonymousSignInsDisabled`] when the project
    /// has the anonymous provider turned off.
    pub async fn sign_in_anonymously(&self) -> Result<Session> {
        let url = format!("{}/auth/v1/signup", self.base_url);
        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(classify_auth_failure(status.as_u16(), &body));
        }

        let session: Session = resp.json().await?;
        tracing::debug!(user_id = %session.user.id, "Anonymous session created");
        Ok(session)
    }

    /// Read rows from a table. `filters` are PostgREST query pairs such as
    /// `("select", "id,like_count")` or `("user_id", "eq.<uuid>")`.
    ///
    /// Without an access token the request is authorized with the anon key.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, &str)],
        access_token: Option<&str>,
    ) -> Result<Vec<T>> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let resp = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token.unwrap_or(&self.anon_key))
            .query(filters)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let rows: Vec<T> = resp.json().await?;
        Ok(rows)
    }

    /// Invoke an edge function with a JSON body on behalf of a viewer.
    pub async fn invoke<B, T>(
        &self,
        function: &str,
        body: &B,
        access_token: &str,
    ) -> Result<FunctionResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/functions/v1/{}", self.base_url, function);
        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            let body = resp.text().await.unwrap_or_default();
            return Err(SupabaseError::Unauthorized(body));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: T = resp.json().await?;
        Ok(FunctionResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Map a failed GoTrue response onto an error variant.
pub fn classify_auth_failure(status: u16, body: &str) -> SupabaseError {
    let parsed: AuthErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed.msg.clone().unwrap_or_else(|| body.to_string());

    if parsed.error_code.as_deref() == Some(ANONYMOUS_PROVIDER_DISABLED) {
        return SupabaseError::AnonymousSignInsDisabled(message);
    }

    match status {
        401 | 403 => SupabaseError::Unauthorized(message),
        _ => SupabaseError::Api { status, message },
    }
}
