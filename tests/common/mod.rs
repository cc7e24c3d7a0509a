#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use redis_shortener::AppError;
use redis_shortener::domain::entities::ShortenedUrl;
use redis_shortener::domain::repositories::UrlRepository;
use redis_shortener::infrastructure::persistence::InMemoryUrlRepository;
use redis_shortener::state::AppState;

/// Repository whose every operation fails as if the store were down.
pub struct FailingRepository;

#[async_trait]
impl UrlRepository for FailingRepository {
    async fn save(&self, _url: &ShortenedUrl) -> Result<(), AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn find_by_short_code(&self, _short_code: &str) -> Result<ShortenedUrl, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repo = Arc::new(InMemoryUrlRepository::new());
    let state = AppState::new(repo.clone());

    (state, repo)
}

pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(FailingRepository))
}

pub async fn create_test_link(repo: &InMemoryUrlRepository, code: &str, url: &str) {
    repo.save(&ShortenedUrl::from_stored(code, url))
        .await
        .unwrap();
}

pub fn is_url_safe_code(code: &str) -> bool {
    code.len() == 8
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
