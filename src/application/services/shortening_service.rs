//! Short code allocation and resolution.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::entities::NewMapping;
use crate::domain::errors::{ShortenerError, StoreError};
use crate::domain::repositories::MappingRepository;
use crate::utils::code_generator::{CodeGenerator, DEFAULT_MAX_ATTEMPTS};

/// Service for shortening URLs and resolving short codes.
///
/// Shortening is idempotent: a URL that already has a mapping gets its
/// existing code back. New codes are drawn at random and retried on
/// collision a bounded number of times.
///
/// # Concurrency
///
/// Every [`Self::shorten`] call runs its lookup, generation and insert while
/// holding one lock owned by the service, so two requests for the same new
/// URL can never both miss the lookup and insert two rows. Resolution takes
/// no lock and relies on the store for read safety.
pub struct ShorteningService<R: MappingRepository> {
    repository: Arc<R>,
    generator: CodeGenerator,
    max_attempts: usize,
    shorten_lock: Mutex<()>,
}

impl<R: MappingRepository> ShorteningService<R> {
    /// Creates a service with the default retry budget.
    pub fn new(repository: Arc<R>, generator: CodeGenerator) -> Self {
        Self::with_max_attempts(repository, generator, DEFAULT_MAX_ATTEMPTS)
    }

    /// Creates a service that tries at most `max_attempts` candidate codes per
    /// shorten call. A budget of zero is raised to one.
    pub fn with_max_attempts(
        repository: Arc<R>,
        generator: CodeGenerator,
        max_attempts: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            max_attempts: max_attempts.max(1),
            shorten_lock: Mutex::new(()),
        }
    }

    /// Returns the short code for `original_url`, creating a mapping if needed.
    ///
    /// The URL is treated as opaque text; only emptiness is checked.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::InvalidInput`] if `original_url` is empty
    /// - [`ShortenerError::CodeSpaceExhausted`] if every candidate collided
    /// - [`ShortenerError::StoreUnavailable`] on store failures
    pub async fn shorten(&self, original_url: &str) -> Result<String, ShortenerError> {
        if original_url.is_empty() {
            return Err(ShortenerError::InvalidInput);
        }

        let _guard = self.shorten_lock.lock().await;

        if let Some(existing) = self
            .repository
            .find_by_original_url(original_url)
            .await?
        {
            return Ok(existing.short_code);
        }

        self.insert_with_unique_code(original_url).await
    }

    /// Looks up the original URL behind `code`.
    ///
    /// An unknown code is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::StoreUnavailable`] on store failures.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, ShortenerError> {
        let mapping = self.repository.find_by_short_code(code).await?;

        Ok(mapping.map(|m| m.original_url))
    }

    /// Number of mappings currently persisted.
    pub async fn mapping_count(&self) -> Result<i64, ShortenerError> {
        Ok(self.repository.count().await?)
    }

    pub fn generator(&self) -> &CodeGenerator {
        &self.generator
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Draws candidates until one is inserted or the budget runs out.
    ///
    /// A candidate is skipped when the lookup already knows it, and again when
    /// the insert reports it as a duplicate. Callers must hold `shorten_lock`.
    async fn insert_with_unique_code(&self, original_url: &str) -> Result<String, ShortenerError> {
        for _ in 0..self.max_attempts {
            let candidate = self.generator.generate();

            if self
                .repository
                .find_by_short_code(&candidate)
                .await?
                .is_some()
            {
                continue;
            }

            match self
                .repository
                .insert(NewMapping::new(original_url, candidate))
                .await
            {
                Ok(mapping) => return Ok(mapping.short_code),
                Err(StoreError::DuplicateCode(_)) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(ShortenerError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }
}
