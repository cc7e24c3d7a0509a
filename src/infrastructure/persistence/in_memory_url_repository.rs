//! Process-local implementation of [`UrlRepository`].

use crate::domain::entities::ShortenedUrl;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Repository backed by a `HashMap`, with the same overwrite and lookup
/// semantics as [`super::RedisUrlRepository`].
///
/// Contents are lost when the process exits. Used by tests and local tooling.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    urls: RwLock<HashMap<String, String>>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.urls.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.urls.read().await.is_empty()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn save(&self, url: &ShortenedUrl) -> Result<(), AppError> {
        self.urls
            .write()
            .await
            .insert(url.short_code.clone(), url.original_url.clone());

        debug!("SET {} -> {}", url.short_code, url.original_url);
        Ok(())
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<ShortenedUrl, AppError> {
        self.urls
            .read()
            .await
            .get(short_code)
            .map(|original_url| ShortenedUrl::from_stored(short_code, original_url.as_str()))
            .ok_or(AppError::NotFound)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(code: &str, url: &str) -> ShortenedUrl {
        ShortenedUrl::from_stored(code, url)
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryUrlRepository::new();
        repo.save(&mapping("abc123", "https://example.com"))
            .await
            .unwrap();

        let found = repo.find_by_short_code("abc123").await.unwrap();
        assert_eq!(found.original_url, "https://example.com");
        assert_eq!(found.short_code, "abc123");
    }

    #[tokio::test]
    async fn test_find_missing_is_not_found() {
        let repo = InMemoryUrlRepository::new();
        let result = repo.find_by_short_code("missing").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_code() {
        let repo = InMemoryUrlRepository::new();
        repo.save(&mapping("abc123", "https://first.com"))
            .await
            .unwrap();
        repo.save(&mapping("abc123", "https://second.com"))
            .await
            .unwrap();

        let found = repo.find_by_short_code("abc123").await.unwrap();
        assert_eq!(found.original_url, "https://second.com");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_health_check() {
        let repo = InMemoryUrlRepository::new();
        assert!(repo.health_check().await);
        assert!(repo.is_empty().await);
    }
}
