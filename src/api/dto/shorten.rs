//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be absolute).
    pub url: String,
}

/// Response carrying the generated short code.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
