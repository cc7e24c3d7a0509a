//! HTTP API layer.
//!
//! Translates HTTP requests into service calls and service results into
//! responses.
//!
//! - [`dto`] - Request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
