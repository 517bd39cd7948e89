//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose a small API to HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortening_service::ShorteningService`] - Idempotent shortening and resolution

pub mod services;
