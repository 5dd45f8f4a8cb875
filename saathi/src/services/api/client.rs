//! # API Client
//!
//! Single point of contact with the FasalSaathi backend. Every request goes
//! through [`ApiClient::dispatch`], which applies a fixed pipeline:
//!
//! 1. Read the token store; attach `Authorization: Bearer <token>` when a
//!    session exists.
//! 2. Execute via the transport. Transport failures propagate unchanged.
//! 3. Success: decode the JSON body into the expected DTO.
//! 4. 401 on a first attempt: run the injected refresh strategy at most
//!    once; on success store the new token and re-issue the request with
//!    the retry flag set, on failure (or with no strategy) clear the token,
//!    notify the session observer, and fail with
//!    [`ApiError::AuthExpired`].
//! 5. Any other error status — including a 401 on a retried request —
//!    extracts the backend `detail`, logs it, and fails with
//!    [`ApiError::Http`].
//!
//! The retry flag guarantees at most one refresh-and-retry cycle per
//! logical request, so a refreshed token that is itself rejected cannot
//! loop.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use shared::dto::auth::ErrorBody;

use crate::core::config::ClientConfig;
use crate::core::error::{ApiError, Result};
use crate::services::api::transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
use crate::services::credentials::TokenStore;

/// Obtains a fresh session token after a 401.
///
/// The backend's refresh contract is deliberately not assumed here: the
/// strategy is injected, and a client without one treats every 401 as
/// terminal.
#[async_trait]
pub trait RefreshStrategy: Send + Sync {
    async fn refresh(&self) -> Result<String>;
}

/// Receives the session-expired notification (the login-redirect side
/// effect, abstracted away from any particular UI).
pub trait SessionObserver: Send + Sync {
    fn on_session_expired(&self);
}

/// HTTP client for the backend API server.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
    refresh: Option<Arc<dyn RefreshStrategy>>,
    observer: Option<Arc<dyn SessionObserver>>,
}

impl ApiClient {
    /// Create a client over a pooled reqwest transport.
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new(&config)), tokens)
    }

    /// Create a client over an explicit transport (mockable in tests).
    pub fn with_transport(transport: Arc<dyn Transport>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            transport,
            tokens,
            refresh: None,
            observer: None,
        }
    }

    /// Install a token-refresh strategy.
    pub fn with_refresh(mut self, refresh: Arc<dyn RefreshStrategy>) -> Self {
        self.refresh = Some(refresh);
        self
    }

    /// Install a session-expiry observer.
    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The credential store this client reads and maintains.
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Execute a request through the full auth/retry/normalization pipeline
    /// and decode the JSON response.
    pub(crate) async fn dispatch<T: DeserializeOwned>(&self, req: ApiRequest) -> Result<T> {
        let response = self.dispatch_raw(req).await?;
        serde_json::from_slice(&response.body).map_err(|e| {
            tracing::error!(error = %e, "Response parse error");
            ApiError::Decode(e.to_string())
        })
    }

    /// Like [`dispatch`](Self::dispatch) but discards the response body
    /// (delete endpoints).
    pub(crate) async fn dispatch_unit(&self, req: ApiRequest) -> Result<()> {
        self.dispatch_raw(req).await.map(|_| ())
    }

    async fn dispatch_raw(&self, mut req: ApiRequest) -> Result<ApiResponse> {
        req.bearer = self.tokens.get();

        let response = self.transport.send(&req).await?;
        if response.is_success() {
            return Ok(response);
        }

        if response.status == 401 && !req.retry {
            return self.recover_auth(req, response).await;
        }

        Err(self.normalize(&req.path, response))
    }

    /// Single-flight 401 recovery: refresh, store, re-issue once.
    async fn recover_auth(&self, mut req: ApiRequest, original: ApiResponse) -> Result<ApiResponse> {
        let Some(strategy) = self.refresh.clone() else {
            tracing::warn!(path = %req.path, "401 with no refresh strategy, session over");
            self.expire_session();
            return Err(ApiError::AuthExpired);
        };

        match strategy.refresh().await {
            Ok(token) => {
                tracing::debug!(path = %req.path, "Session refreshed, re-issuing request");
                self.tokens.set(&token);
                req.retry = true;
                req.bearer = Some(token);

                let retried = self.transport.send(&req).await?;
                if retried.is_success() {
                    Ok(retried)
                } else {
                    // Retry flag is set: no further recovery, even on 401.
                    Err(self.normalize(&req.path, retried))
                }
            }
            Err(refresh_err) => {
                tracing::warn!(
                    path = %req.path,
                    error = %refresh_err,
                    original_status = original.status,
                    "Token refresh failed, session over"
                );
                self.expire_session();
                Err(ApiError::AuthExpired)
            }
        }
    }

    fn expire_session(&self) {
        self.tokens.clear();
        if let Some(observer) = &self.observer {
            observer.on_session_expired();
        }
    }

    /// Extract the backend `detail`, log it, and build the error callers
    /// receive. Normalization is for logging; the status and detail are
    /// propagated untouched.
    fn normalize(&self, path: &str, response: ApiResponse) -> ApiError {
        let detail = serde_json::from_slice::<ErrorBody>(&response.body)
            .map(|body| body.detail)
            .unwrap_or_else(|_| format!("HTTP {}", response.status));

        tracing::warn!(path = %path, status = response.status, detail = %detail, "Request failed");

        ApiError::Http {
            status: response.status,
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicBool, Ordering};

    use parking_lot::Mutex;

    use crate::services::credentials::MemoryTokenStore;

    /// Scripted transport: pops one canned outcome per call and records
    /// every request it saw.
    struct MockTransport {
        script: Mutex<VecDeque<Result<ApiResponse>>>,
        calls: Mutex<Vec<ApiRequest>>,
    }

    impl MockTransport {
        fn new(script: Vec<Result<ApiResponse>>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.into()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<ApiRequest> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(&self, req: &ApiRequest) -> Result<ApiResponse> {
            self.calls.lock().push(req.clone());
            self.script
                .lock()
                .pop_front()
                .expect("mock transport called more times than scripted")
        }
    }

    struct FixedRefresh {
        token: Option<&'static str>,
    }

    #[async_trait]
    impl RefreshStrategy for FixedRefresh {
        async fn refresh(&self) -> Result<String> {
            match self.token {
                Some(token) => Ok(token.to_string()),
                None => Err(ApiError::AuthExpired),
            }
        }
    }

    #[derive(Default)]
    struct FlagObserver {
        expired: AtomicBool,
    }

    impl SessionObserver for FlagObserver {
        fn on_session_expired(&self) {
            self.expired.store(true, Ordering::SeqCst);
        }
    }

    fn ok_json(status: u16, json: &str) -> Result<ApiResponse> {
        Ok(ApiResponse {
            status,
            body: json.as_bytes().to_vec(),
        })
    }

    #[tokio::test]
    async fn test_bearer_attached_when_token_present() {
        let transport = MockTransport::new(vec![ok_json(200, r#"["Itarsi"]"#)]);
        let tokens = Arc::new(MemoryTokenStore::with_token("jwt-abc"));
        let client = ApiClient::with_transport(transport.clone(), tokens);

        let markets: Vec<String> = client.dispatch(ApiRequest::get("/market/markets")).await.unwrap();
        assert_eq!(markets, vec!["Itarsi".to_string()]);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].bearer.as_deref(), Some("jwt-abc"));
    }

    #[tokio::test]
    async fn test_no_bearer_when_token_absent() {
        let transport = MockTransport::new(vec![ok_json(200, "[]")]);
        let tokens = Arc::new(MemoryTokenStore::new());
        let client = ApiClient::with_transport(transport.clone(), tokens);

        let _: Vec<String> = client.dispatch(ApiRequest::get("/market/markets")).await.unwrap();
        assert_eq!(transport.calls()[0].bearer, None);
    }

    #[tokio::test]
    async fn test_401_without_refresh_strategy_ends_session() {
        let transport = MockTransport::new(vec![ok_json(401, r#"{"detail":"Not authenticated"}"#)]);
        let tokens = Arc::new(MemoryTokenStore::with_token("stale"));
        let observer = Arc::new(FlagObserver::default());
        let client = ApiClient::with_transport(transport.clone(), tokens.clone())
            .with_observer(observer.clone());

        let result: Result<Vec<String>> = client.dispatch(ApiRequest::get("/farms")).await;
        assert!(matches!(result, Err(ApiError::AuthExpired)));

        // Token cleared, observer notified, exactly one attempt made.
        assert_eq!(tokens.get(), None);
        assert!(observer.expired.load(Ordering::SeqCst));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_401_with_refresh_retries_exactly_once() {
        // 401 on the original request, 401 again on the retry: two calls
        // total, then a plain Http error. No third attempt.
        let transport = MockTransport::new(vec![
            ok_json(401, r#"{"detail":"Token expired"}"#),
            ok_json(401, r#"{"detail":"Token expired"}"#),
        ]);
        let tokens = Arc::new(MemoryTokenStore::with_token("stale"));
        let client = ApiClient::with_transport(transport.clone(), tokens.clone())
            .with_refresh(Arc::new(FixedRefresh { token: Some("fresh") }));

        let result: Result<Vec<String>> = client.dispatch(ApiRequest::get("/farms")).await;
        assert!(matches!(result, Err(ApiError::Http { status: 401, .. })));

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert!(!calls[0].retry);
        assert!(calls[1].retry);
        assert_eq!(calls[1].bearer.as_deref(), Some("fresh"));
        // The refreshed token was stored even though the retry failed.
        assert_eq!(tokens.get(), Some("fresh".to_string()));
    }

    #[tokio::test]
    async fn test_401_refresh_success_then_ok() {
        let transport = MockTransport::new(vec![
            ok_json(401, r#"{"detail":"Token expired"}"#),
            ok_json(200, r#"["Itarsi","Indore"]"#),
        ]);
        let tokens = Arc::new(MemoryTokenStore::with_token("stale"));
        let client = ApiClient::with_transport(transport.clone(), tokens.clone())
            .with_refresh(Arc::new(FixedRefresh { token: Some("fresh") }));

        let markets: Vec<String> = client.dispatch(ApiRequest::get("/market/markets")).await.unwrap();
        assert_eq!(markets.len(), 2);
        assert_eq!(tokens.get(), Some("fresh".to_string()));
        assert_eq!(transport.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_failure_clears_token() {
        let transport = MockTransport::new(vec![ok_json(401, r#"{"detail":"Token expired"}"#)]);
        let tokens = Arc::new(MemoryTokenStore::with_token("stale"));
        let observer = Arc::new(FlagObserver::default());
        let client = ApiClient::with_transport(transport.clone(), tokens.clone())
            .with_refresh(Arc::new(FixedRefresh { token: None }))
            .with_observer(observer.clone());

        let result: Result<Vec<String>> = client.dispatch(ApiRequest::get("/farms")).await;
        assert!(matches!(result, Err(ApiError::AuthExpired)));
        assert_eq!(tokens.get(), None);
        assert!(observer.expired.load(Ordering::SeqCst));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_error_detail_extracted_from_body() {
        let transport = MockTransport::new(vec![ok_json(404, r#"{"detail":"Crop not found"}"#)]);
        let client =
            ApiClient::with_transport(transport, Arc::new(MemoryTokenStore::new()));

        let result: Result<Vec<String>> = client.dispatch(ApiRequest::get("/market/trends/99")).await;
        match result {
            Err(ApiError::Http { status, detail }) => {
                assert_eq!(status, 404);
                assert_eq!(detail, "Crop not found");
            }
            other => panic!("expected Http error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_error_detail_falls_back_to_status() {
        let transport = MockTransport::new(vec![ok_json(502, "upstream blew up")]);
        let client =
            ApiClient::with_transport(transport, Arc::new(MemoryTokenStore::new()));

        let result: Result<Vec<String>> = client.dispatch(ApiRequest::get("/farms")).await;
        match result {
            Err(ApiError::Http { status, detail }) => {
                assert_eq!(status, 502);
                assert_eq!(detail, "HTTP 502");
            }
            other => panic!("expected Http error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let transport =
            MockTransport::new(vec![Err(ApiError::Transport("connection refused".into()))]);
        let client =
            ApiClient::with_transport(transport, Arc::new(MemoryTokenStore::new()));

        let result: Result<Vec<String>> = client.dispatch(ApiRequest::get("/farms")).await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[tokio::test]
    async fn test_decode_error_on_malformed_body() {
        let transport = MockTransport::new(vec![ok_json(200, "not json")]);
        let client =
            ApiClient::with_transport(transport, Arc::new(MemoryTokenStore::new()));

        let result: Result<Vec<String>> = client.dispatch(ApiRequest::get("/farms")).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
