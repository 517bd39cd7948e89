//! Repository trait for mapping persistence.

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Repository interface for the durable table of URL mappings.
///
/// Implementations must enforce short-code uniqueness themselves: the
/// shortening engine relies on [`StoreError::DuplicateCode`] from
/// [`MappingRepository::insert`] to detect collisions that slip past its own
/// lookup.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds a mapping by its exact original URL.
    ///
    /// When several rows share the URL, the oldest one (lowest id) is returned.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<Mapping>, StoreError>;

    /// Finds a mapping by its short code. Comparison is case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Mapping>, StoreError>;

    /// Appends a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCode`] if the short code already exists.
    /// Returns [`StoreError::Unavailable`] on other database errors.
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError>;

    /// Counts persisted mappings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn count(&self) -> Result<i64, StoreError>;
}
