//! Redis implementation of [`UrlRepository`].

use crate::domain::entities::ShortenedUrl;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use tracing::{debug, error, info};

/// Redis-backed repository storing each mapping as a plain string key.
///
/// The key is the short code itself and the value is the original URL.
/// Writes use `SET` without expiry; reads use `GET`.
///
/// `ConnectionManager` reconnects transparently and is cheap to clone, so every
/// call works on its own clone of the handle.
#[derive(Clone)]
pub struct RedisUrlRepository {
    client: ConnectionManager,
}

impl RedisUrlRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ConnectionFailure`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)
            .map_err(|e| AppError::connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| AppError::connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| AppError::connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl UrlRepository for RedisUrlRepository {
    async fn save(&self, url: &ShortenedUrl) -> Result<(), AppError> {
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(&url.short_code, &url.original_url)
            .await
            .map_err(|e| {
                error!("Redis SET error for {}: {}", url.short_code, e);
                AppError::from(e)
            })?;

        debug!("SET {} -> {}", url.short_code, url.original_url);
        Ok(())
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<ShortenedUrl, AppError> {
        let mut conn = self.client.clone();
        let reply = conn.get::<_, Option<String>>(short_code).await;

        lookup_result(short_code, reply)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

/// Translates a `GET` reply into the repository contract.
///
/// A nil reply is [`AppError::NotFound`]; any transport or server error is
/// [`AppError::StorageFailure`].
fn lookup_result(
    short_code: &str,
    reply: Result<Option<String>, RedisError>,
) -> Result<ShortenedUrl, AppError> {
    match reply {
        Ok(Some(original_url)) => {
            debug!("GET HIT {} -> {}", short_code, original_url);
            Ok(ShortenedUrl::from_stored(short_code, original_url))
        }
        Ok(None) => {
            debug!("GET MISS {}", short_code);
            Err(AppError::NotFound)
        }
        Err(e) => {
            error!("Redis GET error for {}: {}", short_code, e);
            Err(e.into())
        }
    }
}
