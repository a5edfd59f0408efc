// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Client-side query cache (read-side)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use iced_gallery::application::port::GalleryApi;
//! use iced_gallery::application::query::QueryCache;
//! use iced_gallery::domain::gallery::{ImagePage, QueryKey};
//!
//! // Infrastructure implements the port trait
//! struct HttpGalleryApi { /* ... */ }
//! impl GalleryApi for HttpGalleryApi { /* ... */ }
//!
//! // Fetched pages are cached per key
//! let mut cache: QueryCache<ImagePage> = QueryCache::new();
//! let ticket = cache.begin_fetch(&QueryKey::IMAGES);
//! ```

pub mod port;
pub mod query;
