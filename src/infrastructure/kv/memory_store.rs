//! In-process key-value store for tests and local development.

use super::store::{KeyValueStore, KvError, KvResult, Namespace};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// A stored value with optional expiry.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| deadline <= now)
    }
}

/// A store implementation backed by an in-process map.
///
/// Mirrors the Redis semantics the services rely on: keys expire after their
/// TTL, and decrementing a missing key creates it at `-1` without expiry.
/// Used by the integration-test harness and for running locally without Redis.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn build_key(ns: Namespace, key: &str) -> String {
        format!("{}{}", ns.prefix(), key)
    }

    /// Looks up a live entry, dropping it if its TTL has elapsed.
    fn live_entry(entries: &mut HashMap<String, Entry>, key: &str) -> Option<Entry> {
        let now = Instant::now();
        match entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                entries.remove(key);
                None
            }
            Some(entry) => Some(entry.clone()),
            None => None,
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, ns: Namespace, key: &str) -> KvResult<Option<String>> {
        let key = Self::build_key(ns, key);
        let mut entries = self.entries.lock().expect("store mutex poisoned");

        Ok(Self::live_entry(&mut entries, &key).map(|entry| entry.value))
    }

    async fn set(&self, ns: Namespace, key: &str, value: &str, ttl: Duration) -> KvResult<()> {
        let key = Self::build_key(ns, key);
        let mut entries = self.entries.lock().expect("store mutex poisoned");

        entries.insert(
            key,
            Entry {
                value: value.to_string(),
                expires_at: Some(Instant::now() + ttl),
            },
        );
        Ok(())
    }

    async fn decr(&self, ns: Namespace, key: &str) -> KvResult<i64> {
        let key = Self::build_key(ns, key);
        let mut entries = self.entries.lock().expect("store mutex poisoned");

        match Self::live_entry(&mut entries, &key) {
            Some(entry) => {
                let current: i64 = entry.value.parse().map_err(|_| {
                    KvError::OperationError(format!("DECR {}: value is not an integer", key))
                })?;
                let next = current - 1;
                entries.insert(
                    key,
                    Entry {
                        value: next.to_string(),
                        expires_at: entry.expires_at,
                    },
                );
                Ok(next)
            }
            None => {
                // Redis creates a missing key at zero before decrementing.
                entries.insert(
                    key,
                    Entry {
                        value: "-1".to_string(),
                        expires_at: None,
                    },
                );
                Ok(-1)
            }
        }
    }

    async fn ttl(&self, ns: Namespace, key: &str) -> KvResult<Option<Duration>> {
        let key = Self::build_key(ns, key);
        let mut entries = self.entries.lock().expect("store mutex poisoned");

        let now = Instant::now();
        Ok(Self::live_entry(&mut entries, &key)
            .and_then(|entry| entry.expires_at)
            .map(|deadline| deadline.saturating_duration_since(now)))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
