//! # HTTP Transport
//!
//! Explicit request descriptors instead of framework interceptor hooks: the
//! client builds an [`ApiRequest`], the [`Transport`] executes it, and the
//! client applies the auth/retry/normalization pipeline to the
//! [`ApiResponse`]. Swapping the transport for a mock makes the whole
//! pipeline testable without a network.

use async_trait::async_trait;

use crate::core::config::ClientConfig;
use crate::core::error::ApiError;

/// HTTP method subset used by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Request payload variants the backend accepts.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    /// JSON body (most POST endpoints).
    Json(serde_json::Value),
    /// Form-encoded body (the OAuth2 token endpoint).
    Form(Vec<(String, String)>),
    /// Multipart file upload (disease detection).
    Multipart {
        field: String,
        file_name: String,
        bytes: Vec<u8>,
    },
}

/// Request descriptor.
///
/// `retry` is the loop guard: a request that has already been re-issued
/// after a 401 never triggers a second refresh cycle.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    pub bearer: Option<String>,
    pub retry: bool,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            bearer: None,
            retry: false,
        }
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }

    pub fn form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Form(fields);
        self
    }

    pub fn multipart(mut self, field: &str, file_name: &str, bytes: Vec<u8>) -> Self {
        self.body = RequestBody::Multipart {
            field: field.to_string(),
            file_name: file_name.to_string(),
            bytes,
        };
        self
    }
}

/// Raw response: status plus body bytes. HTTP error statuses are data here,
/// not errors — classification happens in the client.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single request. Returns `Err` only for transport-level
/// failures where no response was received.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, req: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Production transport over a pooled `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, req: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.base_url, req.path);

        let mut builder = match req.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        if !req.query.is_empty() {
            builder = builder.query(&req.query);
        }

        if let Some(token) = &req.bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match &req.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Form(fields) => builder.form(fields),
            RequestBody::Multipart { field, file_name, bytes } => {
                let part = reqwest::multipart::Part::bytes(bytes.clone())
                    .file_name(file_name.clone());
                builder.multipart(reqwest::multipart::Form::new().part(field.clone(), part))
            }
        };

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, path = %req.path, "Request transport error");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .to_vec();

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = ApiRequest::get("/market/prices/current")
            .query("market", "Itarsi")
            .query("crop_id", 3);

        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/market/prices/current");
        assert_eq!(
            req.query,
            vec![
                ("market".to_string(), "Itarsi".to_string()),
                ("crop_id".to_string(), "3".to_string()),
            ]
        );
        assert!(!req.retry);
        assert!(req.bearer.is_none());
    }

    #[test]
    fn test_response_success_range() {
        assert!(ApiResponse { status: 200, body: vec![] }.is_success());
        assert!(ApiResponse { status: 201, body: vec![] }.is_success());
        assert!(!ApiResponse { status: 401, body: vec![] }.is_success());
        assert!(!ApiResponse { status: 500, body: vec![] }.is_success());
    }
}
