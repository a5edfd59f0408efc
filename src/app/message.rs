// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::ApiError;
use crate::application::query::FetchTicket;
use crate::domain::gallery::ImagePage;
use crate::error::Error;
use crate::ui::{gallery, image_viewer, notifications, upload_form};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    UploadForm(upload_form::Message),
    Viewer(image_viewer::Message),
    Notification(notifications::NotificationMessage),
    /// Backdrop click, close button or Escape on the add-image modal.
    CloseAddModal,
    /// A page of the gallery listing arrived.
    ImagesLoaded {
        ticket: FetchTicket,
        /// Whether the page extends the cached list instead of replacing it.
        append: bool,
        result: Result<ImagePage, ApiError>,
    },
    /// Image bytes for a card or the viewer arrived.
    ImageFetched {
        url: String,
        result: Result<Vec<u8>, ApiError>,
    },
    LinkOpened(Result<(), Error>),
    EscapePressed,
    /// Drives toast expiry and spinners.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional backend base URL, overriding `[api].base_url`.
    pub api_url: Option<String>,
}
