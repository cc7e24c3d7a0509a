//! Repository implementations.

mod in_memory_url_repository;
mod redis_url_repository;

pub use in_memory_url_repository::InMemoryUrlRepository;
pub use redis_url_repository::RedisUrlRepository;
