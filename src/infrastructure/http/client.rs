// SPDX-License-Identifier: MPL-2.0
//! Shared HTTP client construction.

use crate::config::{ApiConfig, USER_AGENT};
use crate::error::Result;

/// Builds the HTTP client used by every adapter.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client(api: &ApiConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT);

    if let Some(timeout) = api.timeout() {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

/// Joins a base URL and an absolute path without doubling the slash.
pub(super) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_trailing_slash() {
        assert_eq!(
            join_url("http://localhost:3000/", "/api/images"),
            "http://localhost:3000/api/images"
        );
        assert_eq!(
            join_url("http://localhost:3000", "/api/images"),
            "http://localhost:3000/api/images"
        );
    }

    #[test]
    fn join_url_keeps_base_path_prefix() {
        assert_eq!(
            join_url("https://example.com/gallery", "/api/images"),
            "https://example.com/gallery/api/images"
        );
    }

    #[test]
    fn client_builds_with_default_config() {
        assert!(build_client(&ApiConfig::default()).is_ok());
    }
}
