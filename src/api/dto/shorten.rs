//! DTOs for the link submission form.

use serde::Deserialize;

/// Form payload for submitting a URL to shorten.
///
/// Deliberately not validated: any string, including the empty one, is
/// accepted and allocated an ID. Surrounding whitespace is trimmed by the
/// handler before allocation.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
}
