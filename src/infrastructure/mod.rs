//! Infrastructure layer for external integrations.
//!
//! This layer provides concrete backends for the interfaces the application
//! layer depends on.
//!
//! # Modules
//!
//! - [`kv`] - Key-value store abstractions (Redis and in-memory implementations)

pub mod kv;
