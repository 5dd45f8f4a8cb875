use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Registration request (`POST /auth/register`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub phone: String,
    pub full_name: String,
    pub language_preference: String,
    pub password: String,
}

/// Token issuance response (`POST /auth/token`).
///
/// The token endpoint accepts an OAuth2 password form
/// (`username`/`password`, form-encoded), not JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// User information (public, safe to send to client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    pub phone: String,
    pub full_name: String,
    pub language_preference: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Backend error body (FastAPI shape)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}
