//! # FasalSaathi Client - Library Root
//!
//! Client library for the FasalSaathi farming-advisory platform: a typed
//! HTTP client for the backend REST API, the list filter/sort engine behind
//! the inventory/market/recommendation views, the rule-based "Saathi" chat
//! assistant, and the hi/en/mr translation lookup.
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              saathi (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  Reqwest       - HTTP client                           │
//! │  Tokio         - Async runtime                         │
//! │  serde         - JSON (de)serialization               │
//! │  tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP
//!          ▼
//! ┌─────────────────────────┐
//! │  FasalSaathi backend    │
//! │  (FastAPI, /api/v1)     │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **core**: Configuration, error types, and the [`core::service::ApiService`]
//!   injection trait
//! - **services**: External integrations
//!   - `api`: Backend HTTP client (auth, farms, crops, weather, market)
//!   - `credentials`: Session-token storage abstraction
//! - **engine**: Pure filter/sort/aggregate functions over the in-memory
//!   lists the views display (inventory, mandi prices, recommendations)
//! - **assistant**: Rule-based chat response selection and transcript
//! - **i18n**: Static hi/en/mr string catalog
//!
//! ## Concurrency Model
//!
//! Network calls are the only suspension points; everything else completes
//! synchronously. The session token is the sole cross-request shared mutable
//! state, guarded by a `parking_lot::RwLock` inside the token store. No
//! ordering is guaranteed between independently issued requests; the
//! 401-refresh retry is re-issued only after the failing response has been
//! fully handled, so retry ordering holds per logical request.

pub mod assistant;
pub mod core;
pub mod engine;
pub mod i18n;
pub mod services;
