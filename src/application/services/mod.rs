//! Business logic services for the application layer.

pub mod rate_limit_service;
pub mod shorten_service;

pub use rate_limit_service::{BudgetStatus, RateLimitService};
pub use shorten_service::{ShortLink, ShortenService};
