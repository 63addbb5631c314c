#![allow(dead_code)]

use axum::extract::ConnectInfo;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;

use shorturl::application::services::{RateLimitService, ShortenService};
use shorturl::infrastructure::kv::{KeyValueStore, MemoryStore, Namespace};
use shorturl::state::AppState;

/// Domain the test service hands out short links under.
pub const TEST_DOMAIN: &str = "s.example.com";

/// Rate budget window used by the test state.
pub const TEST_WINDOW: Duration = Duration::from_secs(1800);

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    create_test_state_with_quota(10)
}

pub fn create_test_state_with_quota(quota: u32) -> (AppState, Arc<MemoryStore>) {
    let memory = Arc::new(MemoryStore::new());
    let store: Arc<dyn KeyValueStore> = memory.clone();

    let shortener = Arc::new(ShortenService::new(
        store.clone(),
        TEST_DOMAIN.to_string(),
        24,
    ));
    let rate_limiter = Arc::new(RateLimitService::new(store.clone(), quota, TEST_WINDOW));

    let state = AppState {
        shortener,
        rate_limiter,
        store,
        behind_proxy: false,
    };

    (state, memory)
}

pub async fn seed_mapping(store: &MemoryStore, alias: &str, url: &str) {
    store
        .set(Namespace::Mappings, alias, url, Duration::from_secs(3600))
        .await
        .unwrap();
}

pub async fn stored_mapping(store: &MemoryStore, alias: &str) -> Option<String> {
    store.get(Namespace::Mappings, alias).await.unwrap()
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// `TestServer` without a real socket.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
