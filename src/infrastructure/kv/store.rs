//! Key-value store trait and error types.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// Errors that can occur during store operations.
#[derive(Debug)]
pub enum KvError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for KvError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Store connection error: {}", e),
            Self::OperationError(e) => write!(f, "Store operation error: {}", e),
        }
    }
}

impl std::error::Error for KvError {}

/// Result type for store operations.
pub type KvResult<T> = Result<T, KvError>;

/// Logical namespaces within the shared store.
///
/// Namespaces are implemented as key prefixes over a single connection
/// rather than separate database indices, so one backend handle serves
/// both concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Alias -> original URL mappings.
    Mappings,
    /// Client IP -> remaining rate budget counters.
    RateLimits,
}

impl Namespace {
    /// Key prefix applied by backends when building the physical key.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Mappings => "url:",
            Self::RateLimits => "rl:",
        }
    }
}

/// Trait for the networked key-value store backing mappings and rate budgets.
///
/// Implementations must be thread-safe. Unlike a cache, errors are propagated
/// to callers: the service layer decides per call site whether a failure is
/// fatal (persisting a mapping) or degradable (the uniqueness pre-check).
///
/// # Implementations
///
/// - [`crate::infrastructure::kv::RedisStore`] - Redis backend with TTL support
/// - [`crate::infrastructure::kv::MemoryStore`] - In-process backend for tests
///   and local development
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retrieves the value stored under `key` in `ns`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` when the key exists
    /// - `Ok(None)` when the key is absent or expired
    ///
    /// # Errors
    ///
    /// Returns [`KvError::OperationError`] when the backend call fails.
    async fn get(&self, ns: Namespace, key: &str) -> KvResult<Option<String>>;

    /// Stores `value` under `key` in `ns` with the given time-to-live.
    ///
    /// Overwrites any existing value and resets its expiry.
    ///
    /// # Errors
    ///
    /// Returns [`KvError::OperationError`] when the backend call fails.
    async fn set(&self, ns: Namespace, key: &str, value: &str, ttl: Duration) -> KvResult<()>;

    /// Atomically decrements the integer stored under `key` by one.
    ///
    /// Follows Redis semantics: a missing key is treated as zero, so the
    /// first decrement of an absent key yields `-1` (and no expiry).
    ///
    /// # Errors
    ///
    /// Returns [`KvError::OperationError`] when the backend call fails or the
    /// stored value is not an integer.
    async fn decr(&self, ns: Namespace, key: &str) -> KvResult<i64>;

    /// Returns the remaining time-to-live for `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(duration))` when the key exists and has an expiry
    /// - `Ok(None)` when the key is absent or persists without expiry
    async fn ttl(&self, ns: Namespace, key: &str) -> KvResult<Option<Duration>>;

    /// Checks if the store backend is reachable.
    ///
    /// Used by the health endpoint to report store status.
    async fn health_check(&self) -> bool;
}
