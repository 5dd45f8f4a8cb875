//! # Services Module
//!
//! External integrations:
//!
//! - [`api`]: Backend HTTP client (auth, farms, crops, weather, market)
//! - [`credentials`]: Session-token storage abstraction

pub mod api;
pub mod credentials;
