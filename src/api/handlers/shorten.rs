//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{info, warn};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "q3Xz_9aB" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with a plain-text message if the body is not valid
/// JSON, the URL is not absolute, or the store rejects the write.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected shorten request body: {}", rejection);
        AppError::invalid_input("Invalid request")
    })?;

    let short_code = state.url_service.shorten(request.url).await?;
    info!("Created short code {}", short_code);

    Ok(Json(ShortenResponse {
        short_url: short_code,
    }))
}
