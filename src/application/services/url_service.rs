//! Short link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::ShortenedUrl;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use tracing::debug;

/// Service for shortening URLs and resolving short codes.
///
/// Holds the repository chosen at startup. Handlers call this service directly.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Validates `original_url`, generates a short code and stores the mapping.
    ///
    /// A generated code that already exists overwrites the earlier mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL is not absolute; nothing is stored.
    /// Returns [`AppError::StorageFailure`] if the write fails.
    pub async fn shorten(&self, original_url: String) -> Result<String, AppError> {
        let url = ShortenedUrl::new(original_url, generate_code())?;

        self.repository.save(&url).await?;
        debug!("Shortened {} as {}", url.original_url, url.short_code);

        Ok(url.short_code)
    }

    /// Returns the original URL for `short_code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::StorageFailure`] on store errors.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        let url = self.repository.find_by_short_code(short_code).await?;
        Ok(url.original_url)
    }

    /// Reports whether the underlying store is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}
