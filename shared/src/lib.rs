//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between FasalSaathi clients and the
//! backend REST API (`/api/v1`). All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Registration, token issuance, and user DTOs
//!   - **[`dto::farm`]**: Farm CRUD and soil-test DTOs
//!   - **[`dto::crop`]**: Crop catalog, disease detection, recommendation,
//!     and yield-prediction DTOs
//!   - **[`dto::weather`]**: Weather observations and icon resolution
//!   - **[`dto::market`]**: Mandi price records and trend summaries
//! - **[`utils`]**: Shared formatting helpers
//!
//! ## Wire Format
//!
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in
//!   JSON by default — matching the backend's Pydantic schemas.
//! - Optional fields are omitted from JSON when `None`
//!   (`#[serde(skip_serializing_if = "Option::is_none")]`).
//! - Datetimes arrive as naive ISO-8601 strings (FastAPI default), so
//!   timestamp fields use `chrono::NaiveDateTime`.
//! - Backend errors carry a single `detail` string ([`dto::auth::ErrorBody`]).

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
