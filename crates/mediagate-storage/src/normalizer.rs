//! Provider response normalization
//!
//! Collapses provider responses into a binary outcome. Error bodies are never inspected.

use http::StatusCode;
use mediagate_core::models::UploadOutcome;

use crate::traits::{ProviderDestroyResponse, ProviderUploadResponse};

/// Map an upload response to an outcome, or `None` when the upload did not succeed.
///
/// A response counts as successful only with status 200, a public id and a URL.
/// The secure URL wins over the plain one when both are present.
pub fn normalize_upload(response: Option<ProviderUploadResponse>) -> Option<UploadOutcome> {
    let response = response?;
    if response.status_code != StatusCode::OK {
        return None;
    }

    let public_id = non_empty(response.public_id)?;
    let url = non_empty(response.secure_url).or_else(|| non_empty(response.url))?;

    Some(UploadOutcome { public_id, url })
}

/// `true` iff the provider answered 200 with a result of "ok" (any case).
pub fn normalize_destroy(response: Option<ProviderDestroyResponse>) -> bool {
    match response {
        Some(response) if response.status_code == StatusCode::OK => response
            .result
            .map(|result| result.eq_ignore_ascii_case("ok"))
            .unwrap_or(false),
        _ => false,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
