//! # Backend API Client Module
//!
//! HTTP client for communicating with the FasalSaathi FastAPI backend.
//! Handles authentication, farm CRUD, crop advisory, weather, and mandi
//! price queries.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── transport.rs  - Request descriptors and the Transport trait
//! ├── client.rs     - ApiClient and the auth/retry pipeline
//! ├── auth.rs       - Registration, token issuance, current user
//! ├── farms.rs      - Farm CRUD and soil tests
//! ├── crops.rs      - Disease detection, recommendations, yield
//! ├── weather.rs    - Current/forecast/history weather
//! └── market.rs     - Mandi prices, history, trends
//! ```

pub mod auth;
pub mod client;
pub mod crops;
pub mod farms;
pub mod market;
pub mod transport;
pub mod weather;

pub use client::{ApiClient, RefreshStrategy, SessionObserver};
pub use transport::{ApiRequest, ApiResponse, Method, RequestBody, Transport};
