//! # Authentication Endpoints
//!
//! Registration, token issuance, and current-user lookup. Login stores the
//! issued token in the client's token store; logout clears it.

use shared::dto::auth::{RegisterRequest, TokenResponse, UserInfo};

use crate::core::error::{ApiError, Result};
use crate::services::api::transport::ApiRequest;
use super::client::ApiClient;

/// Register a new user.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<UserInfo> {
    let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
    client
        .dispatch(ApiRequest::post("/auth/register").json(body))
        .await
}

/// Exchange credentials for a bearer token and store it.
///
/// The token endpoint is OAuth2 password-form shaped: the email goes in the
/// `username` form field.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<TokenResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let form = vec![
        ("username".to_string(), email.to_string()),
        ("password".to_string(), password.to_string()),
    ];

    let token: TokenResponse = client
        .dispatch(ApiRequest::post("/auth/token").form(form))
        .await?;

    client.tokens().set(&token.access_token);
    tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");

    Ok(token)
}

/// Fetch the authenticated user's profile.
pub async fn me(client: &ApiClient) -> Result<UserInfo> {
    client.dispatch(ApiRequest::get("/auth/me")).await
}

/// Drop the stored session token. Purely local; the backend holds no
/// session state for stateless JWTs.
pub fn logout(client: &ApiClient) {
    client.tokens().clear();
    tracing::info!("Logged out");
}
