//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShorteningService;
use crate::infrastructure::persistence::SqliteMappingRepository;
use crate::utils::short_link::short_link;

/// The shortening engine wired to the SQLite store.
pub type Shortener = ShorteningService<SqliteMappingRepository>;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<Shortener>,
    pub public_base_url: Arc<str>,
}

impl AppState {
    pub fn new(shortener: Arc<Shortener>, public_base_url: impl Into<Arc<str>>) -> Self {
        Self {
            shortener,
            public_base_url: public_base_url.into(),
        }
    }

    /// Public short link for `code`.
    pub fn short_url(&self, code: &str) -> String {
        short_link(&self.public_base_url, code)
    }
}
