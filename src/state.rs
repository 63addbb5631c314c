//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{RateLimitService, ShortenService};
use crate::infrastructure::kv::KeyValueStore;

/// Application state shared across all request handlers.
///
/// Services are injected explicitly rather than reached through process-wide
/// globals; the store handle is kept alongside them for health reporting.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenService>,
    pub rate_limiter: Arc<RateLimitService>,
    pub store: Arc<dyn KeyValueStore>,
    /// When true, the shorten handler reads the client IP from
    /// X-Forwarded-For / X-Real-IP headers. Enable only behind a trusted
    /// reverse proxy.
    pub behind_proxy: bool,
}
