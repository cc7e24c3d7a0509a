//! Core domain entities.
//!
//! - [`ShortenedUrl`] - A short code mapped to its original URL

pub mod shortened_url;

pub use shortened_url::ShortenedUrl;
