// SPDX-License-Identifier: MPL-2.0
//! Client-side query cache (read-side).
//!
//! Results fetched from the backend are kept per [`QueryKey`]. Mutations do
//! not touch cached data directly; they send an invalidation signal through
//! [`CacheInvalidator`] and the owner of the cache schedules a refetch.
//!
//! # Available Services
//!
//! - [`cache`]: Keyed cache with stale tracking (`QueryCache`)
//!
//! [`QueryKey`]: crate::domain::gallery::QueryKey

pub mod cache;

// Re-export main types
pub use cache::{CacheInvalidator, FetchTicket, QueryCache, QueryStatus};
