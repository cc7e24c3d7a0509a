//! Repository trait for short code mappings.

use crate::domain::entities::ShortenedUrl;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage capability for short code mappings.
///
/// The concrete implementation is chosen at startup and handed to
/// [`crate::application::services::UrlService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedisUrlRepository`] - Redis implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - Process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a mapping, overwriting any existing entry for the same code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageFailure`] if the store rejects the write.
    async fn save(&self, url: &ShortenedUrl) -> Result<(), AppError>;

    /// Looks up the mapping for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is absent.
    /// Returns [`AppError::StorageFailure`] on any other store error.
    async fn find_by_short_code(&self, short_code: &str) -> Result<ShortenedUrl, AppError>;

    /// Checks whether the store is reachable.
    async fn health_check(&self) -> bool;
}
