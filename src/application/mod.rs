//! Application layer services implementing business logic.
//!
//! Services orchestrate validation, code generation and repository calls, and
//! provide the API that HTTP handlers and the admin CLI consume.
//!
//! - [`services::url_service::UrlService`] - Short link creation and resolution

pub mod services;
