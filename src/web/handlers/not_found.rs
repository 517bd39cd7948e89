//! Page shown for unknown short codes.

use askama::Template;
use askama_web::WebTemplate;

/// Renders `templates/not_found.html` for a code that resolves to nothing.
///
/// Returned by [`crate::api::handlers::redirect_handler`] with a 404 status.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub code: String,
}
