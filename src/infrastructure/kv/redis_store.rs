//! Redis-backed key-value store implementation.

use super::store::{KeyValueStore, KvError, KvResult, Namespace};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};

/// Redis store implementation for URL mappings and rate budgets.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse; the manager is cloned per operation, so each request acquires and
/// releases its handle within the call.
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    ///
    /// # Errors
    ///
    /// Returns [`KvError::ConnectionError`] if the URL is invalid, the connection
    /// cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> KvResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            KvError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| KvError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| KvError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(ns: Namespace, key: &str) -> String {
        format!("{}{}", ns.prefix(), key)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, ns: Namespace, key: &str) -> KvResult<Option<String>> {
        let key = Self::build_key(ns, key);
        let mut conn = self.client.clone();

        let value: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e| KvError::OperationError(format!("GET {} failed: {}", key, e)))?;

        debug!(
            "GET {}: {}",
            key,
            if value.is_some() { "hit" } else { "miss" }
        );
        Ok(value)
    }

    async fn set(&self, ns: Namespace, key: &str, value: &str, ttl: Duration) -> KvResult<()> {
        let key = Self::build_key(ns, key);
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(&key, value, ttl.as_secs())
            .await
            .map_err(|e| KvError::OperationError(format!("SET {} failed: {}", key, e)))?;

        debug!("SET {} (TTL: {}s)", key, ttl.as_secs());
        Ok(())
    }

    async fn decr(&self, ns: Namespace, key: &str) -> KvResult<i64> {
        let key = Self::build_key(ns, key);
        let mut conn = self.client.clone();

        let remaining: i64 = conn
            .decr(&key, 1)
            .await
            .map_err(|e| KvError::OperationError(format!("DECR {} failed: {}", key, e)))?;

        debug!("DECR {} -> {}", key, remaining);
        Ok(remaining)
    }

    async fn ttl(&self, ns: Namespace, key: &str) -> KvResult<Option<Duration>> {
        let key = Self::build_key(ns, key);
        let mut conn = self.client.clone();

        // TTL returns -2 for a missing key and -1 for a key without expiry.
        let secs: i64 = conn
            .ttl(&key)
            .await
            .map_err(|e| KvError::OperationError(format!("TTL {} failed: {}", key, e)))?;

        if secs < 0 {
            Ok(None)
        } else {
            Ok(Some(Duration::from_secs(secs as u64)))
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
