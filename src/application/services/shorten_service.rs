//! Short link creation and resolution service.

use std::sync::Arc;
use std::time::Duration;

use crate::error::AppError;
use crate::infrastructure::kv::{KeyValueStore, Namespace};
use crate::utils::code_generator::mint_alias;
use crate::utils::url_validator::{enforce_https, is_self_referential, is_valid_url};
use tracing::warn;

/// A successfully created mapping.
#[derive(Debug, Clone)]
pub struct ShortLink {
    /// The normalized original URL as persisted.
    pub url: String,
    /// Fully-qualified short link (configured domain + alias).
    pub short_url: String,
    /// Effective lifetime of the mapping in hours.
    pub expiry_hours: u64,
}

/// Service for creating and resolving shortened URLs.
///
/// Handles URL validation, self-referential-domain rejection, scheme
/// normalization, alias resolution, and persistence into the mapping
/// namespace.
pub struct ShortenService {
    store: Arc<dyn KeyValueStore>,
    domain: String,
    default_expiry_hours: u64,
}

impl ShortenService {
    /// Creates a new shorten service.
    ///
    /// # Arguments
    ///
    /// - `domain` - Prefix used to build full short URLs (`DOMAIN`)
    /// - `default_expiry_hours` - Mapping lifetime applied when the request
    ///   supplies no expiry (`DEFAULT_EXPIRY_HOURS`)
    pub fn new(store: Arc<dyn KeyValueStore>, domain: String, default_expiry_hours: u64) -> Self {
        Self {
            store,
            domain,
            default_expiry_hours,
        }
    }

    /// Creates a mapping from an alias to the given URL.
    ///
    /// # Pipeline
    ///
    /// 1. Syntactic URL validation
    /// 2. Self-referential-domain rejection
    /// 3. Scheme normalization (`https://` prepended when absent)
    /// 4. Alias resolution (custom alias verbatim, or a minted 6-character one)
    /// 5. Uniqueness check against the mapping namespace
    /// 6. Persistence with TTL = effective expiry hours
    ///
    /// The uniqueness check-then-set is not atomic against concurrent requests
    /// for the same alias; that race is accepted. A store read failure during
    /// the check degrades to "not found" and proceeds.
    ///
    /// # Errors
    ///
    /// - [`AppError::BadRequest`] - the URL fails syntactic validation, or the
    ///   requested expiry does not fit in a seconds-denominated TTL
    /// - [`AppError::SelfReferential`] - the URL targets the shortener itself
    /// - [`AppError::AliasTaken`] - the alias already maps to a URL
    /// - [`AppError::StoreUnavailable`] - persistence failed
    pub async fn create(
        &self,
        url: &str,
        custom: Option<&str>,
        expiry_hours: u64,
    ) -> Result<ShortLink, AppError> {
        if !is_valid_url(url) {
            return Err(AppError::BadRequest);
        }

        if is_self_referential(url, &self.domain) {
            return Err(AppError::SelfReferential);
        }

        let normalized = enforce_https(url);
        let alias = mint_alias(custom);

        match self.store.get(Namespace::Mappings, &alias).await {
            Ok(Some(_)) => return Err(AppError::AliasTaken),
            Ok(None) => {}
            // Degrading to "not found" here is a documented sharp edge: a
            // concurrent writer may win the alias anyway, see module docs.
            Err(e) => warn!("Uniqueness check for '{}' failed, proceeding: {}", alias, e),
        }

        let expiry_hours = if expiry_hours == 0 {
            self.default_expiry_hours
        } else {
            expiry_hours
        };
        // Reject expiries whose TTL in seconds would not fit in a u64.
        let ttl_secs = expiry_hours.checked_mul(3600).ok_or(AppError::BadRequest)?;
        let ttl = Duration::from_secs(ttl_secs);

        self.store
            .set(Namespace::Mappings, &alias, &normalized, ttl)
            .await?;

        Ok(ShortLink {
            url: normalized,
            short_url: format!("{}/{}", self.domain.trim_end_matches('/'), alias),
            expiry_hours,
        })
    }

    /// Resolves an alias back to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for the alias.
    /// Returns [`AppError::StoreUnavailable`] on store errors.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        self.store
            .get(Namespace::Mappings, alias)
            .await?
            .ok_or(AppError::NotFound)
    }
}
