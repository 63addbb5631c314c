//! Handler for short URL resolution.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Issues a 308 Permanent Redirect to the stored URL.
///
/// # Errors
///
/// Returns 404 Not Found if no mapping exists for the alias.
/// Returns 500 Internal Server Error on store failures.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let url = state.shortener.resolve(&alias).await?;

    debug!("Resolved {} -> {}", alias, url);

    Ok(Redirect::permanent(&url))
}
