//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`errors`] - Typed store and engine errors
//!
//! The domain layer has no dependencies on the HTTP or web layers. Business
//! logic lives in [`crate::application::services`].

pub mod entities;
pub mod errors;
pub mod repositories;

pub use errors::{ShortenerError, StoreError};
