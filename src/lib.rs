//! # Redis Shortener
//!
//! A minimal URL shortening service built with Axum and Redis.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `ShortenedUrl` entity and the `UrlRepository` trait
//! - **Application Layer** ([`application`]) - `UrlService`: validation, code generation, persistence
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory repositories
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /shorten` with `{"url": "..."}` returns `{"short_url": "<code>"}`
//! - `GET /{code}` redirects with `301 Moved Permanently`
//! - `GET /health` reports store reachability
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::ShortenedUrl;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
