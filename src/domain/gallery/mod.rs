// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Records served by the gallery backend, the payload used to create them,
//! and the keys under which fetched records are cached client-side.

pub mod types;

pub use types::{GalleryImage, ImageMetadataPayload, ImagePage, QueryKey};
