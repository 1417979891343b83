//! Profile load state for the resume page.
//!
//! DESIGN
//! ======
//! The document is fetched once per page load. Failures collapse into a
//! single static message; the underlying error only goes to the log.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::api::ProfileError;
use crate::net::types::Profile;

/// Message shown in place of the resume when the document cannot be loaded.
pub const FALLBACK_MESSAGE: &str = "تعذّر تحميل بيانات السيرة الذاتية.";

/// Shared profile state, provided via context.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            profile: None,
            loading: true,
            error: None,
        }
    }
}

impl ProfileState {
    /// Record the outcome of the fetch. Replaces any earlier outcome.
    pub fn finish(&mut self, result: Result<Profile, ProfileError>) {
        self.loading = false;
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                self.error = None;
            }
            Err(_) => {
                self.profile = None;
                self.error = Some(FALLBACK_MESSAGE.to_owned());
            }
        }
    }

    /// Messages to render in the error slot. At most one.
    pub fn error_messages(&self) -> Vec<String> {
        self.error.iter().cloned().collect()
    }
}
