// SPDX-License-Identifier: MPL-2.0
//! Gallery backend port definition.
//!
//! This module defines the [`GalleryApi`] trait for the REST backend that
//! stores image records. The HTTP adapter lives in
//! [`crate::infrastructure::http`].

use super::PortFuture;
use crate::domain::gallery::{ImageMetadataPayload, ImagePage};
use thiserror::Error;

// =============================================================================
// ApiError
// =============================================================================

/// Errors returned by the gallery backend.
///
/// The upload form collapses all of them into a single user-visible message;
/// the distinction only matters for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, connection reset, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

// =============================================================================
// GalleryApi
// =============================================================================

/// Access to the gallery backend.
pub trait GalleryApi: Send + Sync {
    /// Creates an image record (`POST /api/images`).
    ///
    /// # Errors
    ///
    /// Any transport failure or non-success status.
    fn create_image(&self, payload: ImageMetadataPayload) -> PortFuture<Result<(), ApiError>>;

    /// Lists image records, starting after `after` when given.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-success status, or malformed body.
    fn list_images(&self, after: Option<String>) -> PortFuture<Result<ImagePage, ApiError>>;

    /// Downloads the raw bytes of an image for display.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-success status.
    fn fetch_image(&self, url: String) -> PortFuture<Result<Vec<u8>, ApiError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        assert_eq!(ApiError::Status(500).to_string(), "server returned HTTP 500");
        assert!(ApiError::Transport("reset".into())
            .to_string()
            .contains("reset"));
    }
}
