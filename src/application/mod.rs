//! Application layer services implementing business logic.
//!
//! This layer orchestrates store operations by coordinating validation,
//! alias resolution, and rate-budget bookkeeping. Services consume the
//! [`crate::infrastructure::kv::KeyValueStore`] trait and provide a clean
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Short link creation and resolution
//! - [`services::rate_limit_service::RateLimitService`] - Per-IP request budgets

pub mod services;
