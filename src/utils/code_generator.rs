//! Short alias generation.

use uuid::Uuid;

/// Length of generated aliases.
const ALIAS_LENGTH: usize = 6;

/// Resolves the alias for a new mapping.
///
/// A non-empty caller-supplied alias is returned verbatim; no length or
/// charset constraint is enforced beyond the uniqueness check performed at
/// persistence time. Otherwise a fresh identifier is minted from a UUIDv4
/// rendered without hyphens and truncated to 6 characters. Collision
/// probability at that length is treated as negligible beyond the explicit
/// uniqueness check.
pub fn mint_alias(custom: Option<&str>) -> String {
    match custom {
        Some(alias) if !alias.is_empty() => alias.to_string(),
        _ => {
            let id = Uuid::new_v4().simple().to_string();
            id[..ALIAS_LENGTH].to_string()
        }
    }
}
