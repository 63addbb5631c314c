//! Handler for the shorten endpoint.

use axum::{
    Json,
    extract::{ConnectInfo, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use std::net::SocketAddr;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Creates a short alias for a long URL.
///
/// # Endpoint
///
/// `POST /api/v1`
///
/// # Request Flow
///
/// 1. Parse the JSON body (malformed bodies map to 400)
/// 2. Check the client's rate budget; no mutation happens here
/// 3. Validate, normalize, and persist the mapping
/// 4. Consume one unit of the budget (best-effort after success)
/// 5. Respond 201 with the short link and remaining budget
///
/// The reported `rate_limit` is derived as `remaining - 1` from the check in
/// step 2 rather than re-read after the decrement.
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "custom_short": "my-alias",  // optional
///   "expiry": 12                 // optional, hours
/// }
/// ```
///
/// # Errors
///
/// - 400 - malformed body or invalid URL
/// - 429 - rate budget exhausted, body carries `rate_limit_reset` in minutes
/// - 403 - alias already exists
/// - 503 - URL targets the shortener's own domain
/// - 500 - store write failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(request) = payload.map_err(|_| AppError::BadRequest)?;

    let ip = client_ip(&headers, addr, state.behind_proxy);

    let budget = state.rate_limiter.check_and_reserve(&ip).await?;

    let link = state
        .shortener
        .create(&request.url, request.custom_short.as_deref(), request.expiry)
        .await?;

    state.rate_limiter.consume(&ip).await;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            url: link.url,
            custom_short: link.short_url,
            expiry: link.expiry_hours,
            rate_limit: budget.remaining - 1,
            rate_limit_reset: budget.reset_in.as_secs() / 60,
        }),
    ))
}
