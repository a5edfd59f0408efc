// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a desktop client for a small image gallery service,
//! built with the Iced GUI framework.
//!
//! It lists the gallery's images, shows them in a viewer with a link to the
//! original, and adds new ones through a validated form that first uploads
//! the file to external asset storage.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
