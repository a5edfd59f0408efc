// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: they
//! receive what they render through a view context and report back through
//! messages and events, leaving side effects to the parent.
//!
//! # Screens and overlays
//!
//! - [`gallery`] - Grid of gallery cards with paging
//! - [`upload_form`] - Add-image form with two-phase upload
//! - [`image_viewer`] - Modal showing one image and a link to the original
//! - [`modal`] - Backdrop and dialog helpers shared by the overlays
//!
//! # Shared infrastructure
//!
//! - [`image_store`] - Decoded images keyed by URL
//! - [`notifications`] - Toast notifications
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod gallery;
pub mod image_store;
pub mod image_viewer;
pub mod modal;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod upload_form;
pub mod widgets;
