//! Test harness for router and end-to-end tests.
//!
//! Each harness gets its own in-memory like store, so tests never share
//! like state.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Method, Request, StatusCode},
    Router,
};
use directory_core::domains::auth::JwtService;
use directory_core::domains::resources::ResourceStore;
use directory_core::kernel::InMemoryLikeStore;
use directory_core::server::{build_app, AppState};
use serde_json::Value;
use test_context::AsyncTestContext;
use tower::ServiceExt;

use super::react_and_css_store;

pub const TEST_JWT_SECRET: &str = "test_secret_key";
pub const TEST_JWT_ISSUER: &str = "test_issuer";

/// Install a test-writer subscriber once; respects RUST_LOG.
/// Run tests with: RUST_LOG=debug cargo test -- --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Test harness that owns an application router over a fresh like store.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let (status, body) = ctx.get("/api/resources", None).await;
/// }
/// ```
pub struct TestHarness {
    pub state: AppState,
    pub app: Router,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().expect("Failed to create test harness")
    }

    async fn teardown(self) {
        // Like store is dropped with the state
    }
}

impl TestHarness {
    pub fn new() -> Result<Self> {
        Self::with_store(react_and_css_store(), true)
    }

    /// Harness over a custom catalog, optionally with anonymous sign-ins off.
    pub fn with_store(store: ResourceStore, anonymous_sign_ins_enabled: bool) -> Result<Self> {
        Self::build(store, anonymous_sign_ins_enabled, None)
    }

    /// Harness whose toggle function is limited to `per_second` requests per
    /// client address. Requests must go through [`TestHarness::request_from`].
    pub fn with_rate_limit(per_second: u64) -> Result<Self> {
        Self::build(react_and_css_store(), true, Some(per_second))
    }

    fn build(
        store: ResourceStore,
        anonymous_sign_ins_enabled: bool,
        rate_limit_per_second: Option<u64>,
    ) -> Result<Self> {
        init_tracing();

        let state = AppState {
            store,
            likes: Arc::new(InMemoryLikeStore::new()),
            jwt_service: Arc::new(JwtService::new(
                TEST_JWT_SECRET,
                TEST_JWT_ISSUER.to_string(),
            )),
            anonymous_sign_ins_enabled,
        };
        let app = build_app(state.clone(), rate_limit_per_second)?;

        Ok(Self { state, app })
    }

    /// Send one request through the router and decode the JSON body
    /// (`Value::Null` for an empty body).
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        self.send(None, method, uri, token, body).await
    }

    /// Like [`TestHarness::request`], with the peer address a served
    /// connection would carry.
    pub async fn request_from(
        &self,
        peer: SocketAddr,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        self.send(Some(peer), method, uri, token, body).await
    }

    async fn send(
        &self,
        peer: Option<SocketAddr>,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(peer) = peer {
            builder = builder.extension(ConnectInfo(peer));
        }
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        // Limiter rejections carry a plain-text body
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    /// Sign in anonymously and return (viewer id, access token).
    pub async fn sign_in(&self) -> (String, String) {
        let (status, body) = self
            .post("/auth/v1/signup", None, serde_json::json!({}))
            .await;
        assert_eq!(status, StatusCode::OK, "sign-in failed: {}", body);
        (
            body["user"]["id"].as_str().unwrap_or_default().to_string(),
            body["access_token"].as_str().unwrap_or_default().to_string(),
        )
    }

    /// Serve the router on an ephemeral local port and return its base URL.
    pub async fn spawn_server(&self) -> Result<String> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind test listener")?;
        let addr = listener.local_addr()?;
        let app = self.app.clone();

        tokio::spawn(async move {
            let _ = axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await;
        });

        Ok(format!("http://{}", addr))
    }
}
