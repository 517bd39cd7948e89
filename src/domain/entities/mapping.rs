//! Mapping entity representing a shortened URL.

use chrono::{DateTime, Utc};

/// A persisted association between an original URL and its short code.
///
/// Mappings are immutable once stored. The `id` is assigned by the store and
/// carries no business meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
        }
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub original_url: String,
    pub short_code: String,
}

impl NewMapping {
    pub fn new(original_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: short_code.into(),
        }
    }
}
