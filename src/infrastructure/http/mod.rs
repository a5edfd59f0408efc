// SPDX-License-Identifier: MPL-2.0
//! HTTP adapters built on `reqwest`.
//!
//! Both adapters share one [`reqwest::Client`] (it is internally reference
//! counted) configured from the `[api]` section: user agent and optional
//! timeout. Without a configured timeout the client default applies.

mod assets;
mod client;
mod dto;
mod gallery;

pub use assets::HttpAssetUploader;
pub use client::build_client;
pub use gallery::HttpGalleryApi;
