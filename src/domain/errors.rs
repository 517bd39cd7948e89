//! Typed errors for the mapping store and the shortening engine.
//!
//! Callers distinguish client mistakes, server faults and exhausted code
//! space by matching on variants, never by inspecting messages.

use thiserror::Error;

/// Failures reported by a [`crate::domain::repositories::MappingRepository`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The short code is already taken by another mapping.
    #[error("short code `{0}` is already taken")]
    DuplicateCode(String),

    /// The underlying database could not serve the request.
    #[error("mapping store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    /// Schema creation failed during startup.
    #[error("mapping store schema initialization failed: {0}")]
    Schema(#[from] sqlx::migrate::MigrateError),
}

/// Failures returned by [`crate::application::services::ShorteningService`].
#[derive(Debug, Error)]
pub enum ShortenerError {
    /// The submitted URL was empty.
    #[error("original URL must not be empty")]
    InvalidInput,

    /// Every generated candidate collided with an existing code.
    ///
    /// Widen the code length or alphabet when this shows up.
    #[error("no free short code found after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },

    #[error("mapping store unavailable")]
    StoreUnavailable(#[from] StoreError),
}

impl ShortenerError {
    /// Returns true for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput)
    }
}
