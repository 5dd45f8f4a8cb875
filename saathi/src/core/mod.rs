//! # Core Module
//!
//! Cross-cutting concerns shared by every service module:
//!
//! - [`config`]: Base-URL and timeout resolution
//! - [`error`]: The [`error::ApiError`] taxonomy
//! - [`service`]: The [`service::ApiService`] dependency-injection trait

pub mod config;
pub mod error;
pub mod service;
