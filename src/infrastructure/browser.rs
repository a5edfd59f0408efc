// SPDX-License-Identifier: MPL-2.0
//! Opening links in the system browser.
//!
//! URLs come from the backend, so only `http(s)` addresses are handed to the
//! platform opener. The `open` crate passes the URL as a single argument (no
//! shell on Windows) and reaps the helper process it spawns.

use crate::error::{Error, Result};

/// Returns whether `url` is a web address this application is willing to open.
#[must_use]
pub fn is_openable(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

/// Opens `url` with the platform's default handler without waiting for it.
///
/// # Errors
///
/// Returns [`Error::UnsupportedUrl`] for non-web URLs, or an I/O error if
/// the opener cannot be launched.
pub fn open_url(url: &str) -> Result<()> {
    if !is_openable(url) {
        return Err(Error::UnsupportedUrl(url.to_string()));
    }

    open::that_detached(url.trim())?;
    log::info!("Opened {url} in the system browser");
    Ok(())
}
