//! URL validation and normalization helpers.
//!
//! Pure functions used by the shorten pipeline: syntactic URL classification,
//! self-referential-domain detection, and scheme normalization.

use url::Url;

/// Classifies whether a string is a syntactically valid target URL.
///
/// # Rules
///
/// 1. **Scheme**: when present, only HTTP and HTTPS are accepted; dangerous
///    schemes like `javascript:` or `file:` are rejected outright
/// 2. **Scheme-less input**: accepted when it parses as a URL after an
///    `https://` prefix is assumed (e.g., `example.com/page`)
/// 3. **Host**: must be present and look like a hostname (contain a dot),
///    an IP address, or `localhost`
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://example.com"));
/// assert!(is_valid_url("example.com/page"));
/// assert!(!is_valid_url("ftp://example.com"));
/// assert!(!is_valid_url("not a url"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }

    match Url::parse(input) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https") && has_plausible_host(&parsed)
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            // No scheme supplied; validate against the form it will be stored in.
            match Url::parse(&format!("https://{}", input)) {
                Ok(parsed) => has_plausible_host(&parsed),
                Err(_) => false,
            }
        }
        Err(_) => false,
    }
}

/// Requires a host that resembles a reachable target, not a bare word.
fn has_plausible_host(url: &Url) -> bool {
    match url.host() {
        Some(url::Host::Domain(domain)) => domain.contains('.') || domain == "localhost",
        Some(url::Host::Ipv4(_)) | Some(url::Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Detects whether a URL targets the shortener's own domain.
///
/// Compares the raw input and its host part (scheme and a leading `www.`
/// stripped) against the configured domain, preventing redirect loops and
/// self-referential abuse.
pub fn is_self_referential(input: &str, own_domain: &str) -> bool {
    if input.eq_ignore_ascii_case(own_domain) {
        return true;
    }

    let stripped = input
        .strip_prefix("http://")
        .or_else(|| input.strip_prefix("https://"))
        .unwrap_or(input);
    let stripped = stripped.strip_prefix("www.").unwrap_or(stripped);

    let host = stripped.split('/').next().unwrap_or(stripped);

    host.eq_ignore_ascii_case(own_domain)
}

/// Ensures the URL carries an explicit scheme.
///
/// Prepends `https://` when neither `http://` nor `https://` is present.
/// Already-schemed URLs are returned unchanged.
pub fn enforce_https(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}
