// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the thin wrappers around system services the UI
//! needs (file reading, opening links).
//!
//! # Available Adapters
//!
//! - [`http`]: Gallery backend and asset storage over HTTP (implements
//!   [`GalleryApi`] and [`AssetUploader`])
//! - [`files`]: Reading a picked image file and sniffing its MIME type
//! - [`browser`]: Opening URLs in the system browser
//!
//! [`GalleryApi`]: crate::application::port::GalleryApi
//! [`AssetUploader`]: crate::application::port::AssetUploader

pub mod browser;
pub mod files;
pub mod http;

// Re-export main types for convenience
pub use http::{HttpAssetUploader, HttpGalleryApi};
