//! Handler for the submission form page.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the submission form.
///
/// Renders `templates/form.html` with an optional message line above the
/// form: empty on the landing page, the allocated ID after a submission, or
/// a no-match notice after a failed lookup.
#[derive(Template, WebTemplate)]
#[template(path = "form.html")]
pub struct FormPage {
    pub message: String,
}

impl FormPage {
    /// The landing page, with no message.
    pub fn blank() -> Self {
        Self {
            message: String::new(),
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Renders the submission form.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    FormPage::blank()
}
