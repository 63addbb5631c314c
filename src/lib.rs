//! # shorturl
//!
//! A fast URL-shortening service built with Axum and Redis.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Key-value store integrations
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - 6-character aliases or caller-chosen custom aliases
//! - Per-client-IP rate limiting with a rolling window, tracked in the store
//! - Self-referential-domain rejection (anti redirect loop)
//! - Mapping expiry via store TTLs
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export REDIS_URL="redis://localhost:6379"
//! export DOMAIN="sho.rt"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RateLimitService, ShortenService};
    pub use crate::error::AppError;
    pub use crate::infrastructure::kv::{KeyValueStore, MemoryStore, Namespace};
    pub use crate::state::AppState;
}
