//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response
///
/// `301 Moved Permanently` with the original URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found with body `URL not found` if the code is unknown.
/// Store errors and stored URLs that cannot be sent as a `Location` header are
/// logged and reported the same way.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let original_url = state
        .url_service
        .resolve(&code)
        .await
        .map_err(|e| match e {
            AppError::NotFound => {
                debug!("Unknown short code {}", code);
                AppError::NotFound
            }
            other => {
                error!("Failed to resolve {}: {}", code, other);
                AppError::NotFound
            }
        })?;

    let location = HeaderValue::from_str(&original_url).map_err(|e| {
        error!("Stored URL for {} is not a valid Location: {}", code, e);
        AppError::NotFound
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
