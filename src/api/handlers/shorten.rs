//! Handler for link submission.

use axum::{Form, extract::State};
use axum::response::IntoResponse;

use crate::api::dto::shorten::ShortenForm;
use crate::api::handlers::home::FormPage;
use crate::state::AppState;

/// Allocates (or reuses) a short ID for the submitted URL.
///
/// # Endpoint
///
/// `POST /` with form field `url`
///
/// # Behavior
///
/// Surrounding whitespace is trimmed; the remainder is stored verbatim.
/// Submitting a URL that already has an ID returns the existing one, so the
/// confirmation page is stable across repeated submissions. No URL
/// validation is performed by design.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> impl IntoResponse {
    let url = form.url.trim();
    let id = state.links.shorten(url);

    tracing::debug!("Shortened submission to ID {id}");

    FormPage::with_message(format!("ID: {id}"))
}
