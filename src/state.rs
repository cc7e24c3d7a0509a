//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::domain::repositories::UrlRepository;

/// Handler state, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    /// Builds state around the repository selected at startup.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(repository)),
        }
    }
}
