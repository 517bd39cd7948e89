//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

/// Template for the shortening form.
///
/// Renders `templates/index.html`; the form is submitted by
/// `static/shorten.js` to `POST /api`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub public_base_url: String,
}

/// Renders the shortening form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        public_base_url: state.public_base_url.to_string(),
    }
}
