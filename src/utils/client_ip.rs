//! Client IP resolution from the connection and forwarded headers.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Resolves the client IP used as the rate-limit key.
///
/// By default the peer socket address is used. When `behind_proxy` is set,
/// the `X-Forwarded-For` header (first hop) takes precedence, then
/// `X-Real-IP`. Enable only when the service runs behind a trusted reverse
/// proxy, otherwise clients can spoof their rate-limit identity.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy {
        if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
            let first_hop = forwarded.split(',').next().unwrap_or("").trim();
            if !first_hop.is_empty() {
                return first_hop.to_string();
            }
        }

        if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
            let real_ip = real_ip.trim();
            if !real_ip.is_empty() {
                return real_ip.to_string();
            }
        }
    }

    peer.ip().to_string()
}
