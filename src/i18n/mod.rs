// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. The `.ftl` files under
//! `assets/i18n/` are embedded into the binary at build time.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Language-only fallback (`pt` resolves to `pt-BR`)
//! - Variable interpolation via [`fluent::I18n::tr_with_args`]
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
