//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the FasalSaathi backend.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, token issuance, current-user lookup
//! - [`farm`] - Farm CRUD and soil tests
//! - [`crop`] - Crop catalog, disease detection, recommendations, yield
//! - [`weather`] - Weather observations, forecast, icon resolution
//! - [`market`] - Mandi prices, price history, trend summaries
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: omitted when `None` using
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: implement both `Serialize` and `Deserialize`
//!
//! ## Example Request/Response Pair
//!
//! ```text
//! POST /api/v1/auth/token
//! Content-Type: application/x-www-form-urlencoded
//!
//! username=kisan%40example.com&password=secret
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "token_type": "bearer"
//! }
//! ```

pub mod auth;
pub mod crop;
pub mod farm;
pub mod market;
pub mod weather;

pub use auth::*;
pub use crop::*;
pub use farm::*;
pub use market::*;
pub use weather::*;
