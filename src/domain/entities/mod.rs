//! Core domain entities.
//!
//! The service has a single entity, [`Mapping`], plus the [`NewMapping`]
//! input used when inserting one. Entities are plain data without behavior.

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
