// SPDX-License-Identifier: MPL-2.0
//! Upload form messages and events.

use crate::application::port::{ApiError, UploadError};
use crate::error::Error;
use crate::infrastructure::files::PickedImage;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    DescriptionChanged(String),
    /// Opens the native file dialog.
    PickImage,
    /// The dialog closed; `None` when the user cancelled.
    ImagePathChosen(Option<PathBuf>),
    ImageRead(Result<PickedImage, Error>),
    AssetUploaded {
        generation: u64,
        result: Result<String, UploadError>,
    },
    Submit,
    /// The backend answered submission `submission`.
    SubmitFinished {
        submission: u64,
        result: Result<(), ApiError>,
    },
}

/// Signals for the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The submission completed (either way) and the hosting modal should close.
    Close,
}
