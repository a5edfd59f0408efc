// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`gallery`]: Gallery backend (create, list, fetch image bytes)
//! - [`assets`]: External asset storage turning a local file into a durable URL
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so adapters can be shared behind an `Arc`
//! - Methods return a boxed `'static` future so callers can hand it to
//!   Iced's `Task::perform` without borrowing the adapter
//!
//! # Example
//!
//! ```ignore
//! use iced_gallery::application::port::GalleryApi;
//! use iced_gallery::domain::gallery::ImageMetadataPayload;
//! use std::sync::Arc;
//!
//! fn create(api: Arc<dyn GalleryApi>, payload: ImageMetadataPayload) -> iced::Task<Message> {
//!     iced::Task::perform(api.create_image(payload), Message::Created)
//! }
//! ```

pub mod assets;
pub mod gallery;

use futures_util::future::BoxFuture;

/// Future returned by port methods.
pub type PortFuture<T> = BoxFuture<'static, T>;

// Re-export main types for convenience
pub use assets::{AssetUploader, LocalAsset, UploadError};
pub use gallery::{ApiError, GalleryApi};
