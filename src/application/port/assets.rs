// SPDX-License-Identifier: MPL-2.0
//! Asset storage port definition.
//!
//! Phase two of image acquisition: once a local file has passed validation,
//! its bytes are handed to an [`AssetUploader`] which answers with the
//! durable URL the gallery record will point to.

use super::PortFuture;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while uploading an asset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("upload transport error: {0}")]
    Transport(String),

    #[error("upload rejected with HTTP {0}")]
    Status(u16),

    #[error("invalid upload response: {0}")]
    Decode(String),

    /// The storage service answered successfully but without a URL.
    #[error("upload response did not contain a URL")]
    MissingUrl,

    /// No storage endpoint is configured.
    #[error("asset upload endpoint is not configured")]
    NotConfigured,
}

/// A validated local file ready to be uploaded.
#[derive(Clone)]
pub struct LocalAsset {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
}

impl fmt::Debug for LocalAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalAsset")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Turns a local file into a durable remote URL.
pub trait AssetUploader: Send + Sync {
    /// Uploads the asset and returns its public URL.
    ///
    /// # Errors
    ///
    /// Any transport failure, rejected upload, or response without a URL.
    fn upload(&self, asset: LocalAsset) -> PortFuture<Result<String, UploadError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_omits_payload_bytes() {
        let asset = LocalAsset {
            file_name: "sunset.png".into(),
            mime_type: "image/png".into(),
            bytes: Arc::from(vec![0_u8; 4096]),
        };
        let debug = format!("{asset:?}");
        assert!(debug.contains("sunset.png"));
        assert!(debug.contains("4096"));
    }
}
