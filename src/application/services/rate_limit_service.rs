//! Per-client rate budget tracking in the key-value store.

use std::sync::Arc;
use std::time::Duration;

use crate::error::AppError;
use crate::infrastructure::kv::{KeyValueStore, Namespace};
use tracing::warn;

/// A client's budget as observed at check time.
#[derive(Debug, Clone, Copy)]
pub struct BudgetStatus {
    /// Remaining calls before the check, quota included on a fresh window.
    pub remaining: i64,
    /// Time until the current window expires.
    pub reset_in: Duration,
}

/// Service tracking per-client-IP request budgets with a rolling window.
///
/// Budgets live in the store's rate-limit namespace: a counter keyed by
/// client IP, created at the configured quota with the window as its TTL.
/// The check is advisory; the actual decrement happens only after the
/// request fully succeeds, via [`RateLimitService::consume`].
pub struct RateLimitService {
    store: Arc<dyn KeyValueStore>,
    quota: u32,
    window: Duration,
}

impl RateLimitService {
    /// Creates a new rate limit service.
    ///
    /// # Arguments
    ///
    /// - `quota` - Calls allowed per client per window (`API_QUOTA`)
    /// - `window` - Rolling window length (`RATE_LIMIT_WINDOW_SECS`)
    pub fn new(store: Arc<dyn KeyValueStore>, quota: u32, window: Duration) -> Self {
        Self {
            store,
            quota,
            window,
        }
    }

    /// Checks the client's remaining budget without consuming it.
    ///
    /// On the client's first call in a window, creates the budget at the
    /// configured quota with the window as TTL and reports the full quota.
    /// Two concurrent first calls can both observe an absent budget and both
    /// create it; that get-then-set race is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RateLimitExceeded`] when the remaining count is
    /// zero or below, and [`AppError::StoreUnavailable`] when the store
    /// cannot be read or the fresh budget cannot be written.
    pub async fn check_and_reserve(&self, client_ip: &str) -> Result<BudgetStatus, AppError> {
        match self.store.get(Namespace::RateLimits, client_ip).await? {
            Some(value) => {
                // A counter that fails to parse is treated as exhausted
                // rather than crashing the request.
                let remaining: i64 = value.parse().unwrap_or(0);

                let reset_in = self
                    .store
                    .ttl(Namespace::RateLimits, client_ip)
                    .await?
                    .unwrap_or(Duration::ZERO);

                if remaining <= 0 {
                    return Err(AppError::RateLimitExceeded { reset_in });
                }

                Ok(BudgetStatus {
                    remaining,
                    reset_in,
                })
            }
            None => {
                self.store
                    .set(
                        Namespace::RateLimits,
                        client_ip,
                        &self.quota.to_string(),
                        self.window,
                    )
                    .await?;

                Ok(BudgetStatus {
                    remaining: i64::from(self.quota),
                    reset_in: self.window,
                })
            }
        }
    }

    /// Consumes one unit of the client's budget.
    ///
    /// Called only after the request has fully succeeded. Failures here are
    /// logged and swallowed: the mapping is already durably persisted, so an
    /// undercounted budget is an accepted inconsistency rather than a fatal
    /// error.
    ///
    /// If the budget key expires between the check and this call, the
    /// decrement recreates it at `-1` with no TTL, locking the client out
    /// until the key is cleared externally. Like the get-then-set race in
    /// [`RateLimitService::check_and_reserve`], this window is accepted.
    pub async fn consume(&self, client_ip: &str) {
        if let Err(e) = self.store.decr(Namespace::RateLimits, client_ip).await {
            warn!("Failed to consume rate budget for {}: {}", client_ip, e);
        }
    }
}
