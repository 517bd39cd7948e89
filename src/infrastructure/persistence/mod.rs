//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with an
//! embedded SQLite database.
//!
//! # Repositories
//!
//! - [`SqliteMappingRepository`] - Mapping storage and lookup

pub mod sqlite_mapping_repository;

pub use sqlite_mapping_repository::{SqliteMappingRepository, StoreSettings};
