// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Gallery backend location
//! - **Assets**: External asset storage endpoint

// ==========================================================================
// API Defaults
// ==========================================================================

/// Default gallery backend base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Path of the image collection on the backend.
pub const IMAGES_ENDPOINT: &str = "/api/images";

/// Upper bound accepted for `[api] timeout_secs`.
pub const MAX_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Asset Storage Defaults
// ==========================================================================

/// Default asset storage upload endpoint.
pub const DEFAULT_ASSET_UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));
