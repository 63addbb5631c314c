//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization with explicit
//! required vs. optional fields.

pub mod health;
pub mod shorten;
