// SPDX-License-Identifier: MPL-2.0
//! Reading a locally picked image.
//!
//! The MIME type is sniffed from the file content and falls back to the
//! extension. Files at or above the size ceiling are not read into memory:
//! they are going to be rejected anyway, and only their metadata is needed
//! to say so.

use crate::domain::validation::{ImageFile, MAX_IMAGE_BYTES};
use crate::error::Result;
use image_rs::ImageFormat;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Extensions offered by the file dialog's image filter.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// MIME type reported when neither content nor extension is recognized.
pub const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// A picked file with everything the upload form needs.
#[derive(Clone)]
pub struct PickedImage {
    pub path: PathBuf,
    pub file: ImageFile,
    /// File content; `None` when the file was too large to be worth reading.
    pub bytes: Option<Arc<[u8]>>,
}

impl std::fmt::Debug for PickedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickedImage")
            .field("path", &self.path)
            .field("file", &self.file)
            .field("loaded", &self.bytes.is_some())
            .finish()
    }
}

/// Opens the native file dialog and returns the chosen path.
pub async fn pick_image_path(title: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Reads a picked file.
///
/// # Errors
///
/// Returns an error if the file metadata or content cannot be read.
pub async fn read_image(path: PathBuf) -> Result<PickedImage> {
    let size_bytes = tokio::fs::metadata(&path).await?.len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if size_bytes >= MAX_IMAGE_BYTES {
        let mime_type = mime_from_extension(&path);
        return Ok(PickedImage {
            file: ImageFile::new(name, size_bytes, mime_type),
            path,
            bytes: None,
        });
    }

    let bytes = tokio::fs::read(&path).await?;
    let mime_type = sniff_mime_type(&bytes, &path);
    Ok(PickedImage {
        file: ImageFile::new(name, bytes.len() as u64, mime_type),
        path,
        bytes: Some(Arc::from(bytes)),
    })
}

/// Detects the MIME type from magic bytes, then from the extension.
#[must_use]
pub fn sniff_mime_type(bytes: &[u8], path: &Path) -> &'static str {
    match image_rs::guess_format(bytes) {
        Ok(format) => format.to_mime_type(),
        Err(_) => mime_from_extension(path),
    }
}

fn mime_from_extension(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_MIME_TYPE)
}
