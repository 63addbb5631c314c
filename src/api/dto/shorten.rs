//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    pub url: String,

    /// Optional caller-chosen alias. Used verbatim when non-empty.
    #[serde(default)]
    pub custom_short: Option<String>,

    /// Mapping lifetime in hours. Zero or absent means "no explicit expiry",
    /// which maps to the configured default.
    #[serde(default)]
    pub expiry: u64,
}

/// Response for a successfully created mapping.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// The normalized original URL as persisted.
    pub url: String,

    /// Fully-qualified short link (configured domain + alias).
    pub custom_short: String,

    /// Effective lifetime of the mapping in hours.
    pub expiry: u64,

    /// Budget remaining for this client after this call.
    pub rate_limit: i64,

    /// Whole minutes until the client's budget window resets.
    pub rate_limit_reset: u64,
}
