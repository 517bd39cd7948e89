//! SQLite implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::errors::StoreError;
use crate::domain::repositories::MappingRepository;
use crate::utils::db_error::is_unique_violation_on_code;

/// Connection settings for the SQLite store.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    /// SQLx connection string, e.g. `sqlite://urls.db`.
    pub database_url: String,
    pub max_connections: u32,
    /// Upper bound on waiting for a pooled connection.
    pub acquire_timeout: Duration,
    /// How long SQLite waits on a locked database before failing a statement.
    pub busy_timeout: Duration,
}

#[derive(sqlx::FromRow)]
struct MappingRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
}

impl From<MappingRow> for Mapping {
    fn from(row: MappingRow) -> Self {
        Mapping::new(row.id, row.original_url, row.short_code, row.created_at)
    }
}

/// SQLite repository for URL mappings.
///
/// The pool is opened once and shared; schema creation runs on connect and
/// is safe to repeat on every start.
pub struct SqliteMappingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMappingRepository {
    /// Wraps an existing pool. The caller is responsible for schema setup.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Opens the database file (creating it if missing) and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the database cannot be opened and
    /// [`StoreError::Schema`] if migrations fail.
    pub async fn connect(settings: &StoreSettings) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&settings.database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(settings.busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect_with(options)
            .await?;

        let repository = Self::new(Arc::new(pool));
        repository.init_schema().await?;

        Ok(repository)
    }

    /// Opens a private in-memory database with the schema applied.
    ///
    /// Every SQLite connection to `:memory:` sees its own database, so the
    /// pool is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let repository = Self::new(Arc::new(pool));
        repository.init_schema().await?;

        Ok(repository)
    }

    /// Creates the `urls` table and its indexes if they do not exist yet.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(self.pool.as_ref()).await?;
        tracing::debug!("Mapping store schema is up to date");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        self.pool.as_ref()
    }

    /// Closes every pooled connection. Pending queries finish first.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<Mapping>, StoreError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, original_url, short_code, created_at
            FROM urls
            WHERE original_url = ?1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Mapping>, StoreError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, original_url, short_code, created_at
            FROM urls
            WHERE short_code = ?1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO urls (original_url, short_code, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, original_url, short_code, created_at
            "#,
        )
        .bind(new_mapping.original_url.as_str())
        .bind(new_mapping.short_code.as_str())
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                StoreError::DuplicateCode(new_mapping.short_code.clone())
            } else {
                StoreError::Unavailable(e)
            }
        })?;

        Ok(row.into())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
