//! # snaplink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `Mapping` entity, the repository trait and typed errors
//! - **Application Layer** ([`application`]) - The shortening engine
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - JSON endpoints, redirects and middleware
//! - **Web Layer** ([`web`]) - HTML pages
//!
//! ## Behavior
//!
//! - Shortening the same URL twice yields the same code
//! - Codes are random, fixed-length strings over a configurable alphabet
//!   (6 Latin letters by default) and are case-sensitive
//! - Collisions are retried a bounded number of times
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"
//! export PUBLIC_BASE_URL="http://localhost:8080"
//!
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
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShorteningService;
    pub use crate::domain::entities::{Mapping, NewMapping};
    pub use crate::domain::errors::{ShortenerError, StoreError};
    pub use crate::domain::repositories::MappingRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteMappingRepository;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::CodeGenerator;
}
