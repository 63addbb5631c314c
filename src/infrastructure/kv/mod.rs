//! Key-value storage layer for URL mappings and rate budgets.
//!
//! Provides a [`KeyValueStore`] trait with two implementations:
//! - [`RedisStore`] - Production Redis-backed store
//! - [`MemoryStore`] - In-process implementation for tests/local development

mod memory_store;
mod redis_store;
mod store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
pub use store::{KeyValueStore, KvError, KvResult, Namespace};

#[cfg(test)]
pub use store::MockKeyValueStore;
