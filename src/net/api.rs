//! Profile document fetch.
//!
//! Client-side (csr): a one-shot `gloo-net` request that bypasses the HTTP
//! cache. Native builds return [`ProfileError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` instead of a panic so a missing or malformed
//! document degrades to the fallback message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Profile;

/// Relative path of the profile document.
pub const PROFILE_PATH: &str = "data/profile.json";

/// Why the profile document could not be loaded.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("profile request failed: {0}")]
    Request(String),
    #[error("profile request returned status {0}")]
    Status(u16),
    #[error("profile document is invalid: {0}")]
    Parse(String),
    #[error("profile fetch is only available in the browser")]
    Unavailable,
}

/// Parse a profile document body.
///
/// # Errors
///
/// Returns [`ProfileError::Parse`] if the body is not a JSON object matching
/// the profile shape.
pub fn parse_profile(body: &str) -> Result<Profile, ProfileError> {
    serde_json::from_str(body).map_err(|e| ProfileError::Parse(e.to_string()))
}

/// Map a response status to an error when it is not a success code.
#[cfg(any(test, feature = "csr"))]
fn check_status(status: u16) -> Result<(), ProfileError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ProfileError::Status(status))
    }
}

/// Fetch [`PROFILE_PATH`] with `cache: no-store` and parse it.
///
/// # Errors
///
/// Returns an error on transport failure, a non-success status, or an
/// unparseable body.
pub async fn fetch_profile() -> Result<Profile, ProfileError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(PROFILE_PATH)
            .cache(web_sys::RequestCache::NoStore)
            .send()
            .await
            .map_err(|e| ProfileError::Request(e.to_string()))?;
        check_status(resp.status())?;
        let body = resp
            .text()
            .await
            .map_err(|e| ProfileError::Request(e.to_string()))?;
        parse_profile(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ProfileError::Unavailable)
    }
}
