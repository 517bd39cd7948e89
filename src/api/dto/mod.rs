//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for serialization and validator for input limits.

pub mod health;
pub mod shorten;
