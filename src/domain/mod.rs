// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity. Wire formats live in
//! [`crate::infrastructure`].
//!
//! # Modules
//!
//! - [`gallery`]: Gallery records and payloads ([`GalleryImage`](gallery::GalleryImage),
//!   [`ImageMetadataPayload`](gallery::ImageMetadataPayload), [`QueryKey`](gallery::QueryKey))
//! - [`validation`]: Upload form rules ([`ValidationRuleSet`](validation::ValidationRuleSet),
//!   [`ValidationError`](validation::ValidationError))

pub mod gallery;
pub mod validation;
