// SPDX-License-Identifier: MPL-2.0
//! Upload form validation.
//!
//! The form is an explicit, finite set of named [`Field`]s. Each field has a
//! pure validation function (see [`rules`]) mapping its value to pass or a
//! [`ValidationError`]. Messages are resolved through i18n keys so the rules
//! stay free of presentation concerns.

pub mod rules;

pub use rules::{
    ImageRule, TextRule, ValidationRuleSet, ACCEPTED_IMAGE_TYPES, MAX_IMAGE_BYTES, RULES,
};

use std::fmt;

/// The fields of the upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Image,
    Title,
    Description,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Image, Field::Title, Field::Description];

    /// Stable lowercase name, used as the i18n key segment.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::Image => "image",
            Field::Title => "title",
            Field::Description => "description",
        }
    }
}

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    TooShort { min: usize },
    TooLong { max: usize },
    TooLarge { max_bytes: u64 },
    UnsupportedType,
}

impl ValidationError {
    /// Returns the i18n message key for this error on the given field.
    #[must_use]
    pub fn i18n_key(&self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Image, ValidationError::Required) => "form-image-required",
            (Field::Image, ValidationError::TooLarge { .. }) => "form-image-too-large",
            (Field::Image, ValidationError::UnsupportedType) => "form-image-unsupported-type",
            (Field::Title, ValidationError::Required) => "form-title-required",
            (Field::Title, ValidationError::TooShort { .. }) => "form-title-too-short",
            (Field::Title, ValidationError::TooLong { .. }) => "form-title-too-long",
            (Field::Description, ValidationError::Required) => "form-description-required",
            (Field::Description, ValidationError::TooLong { .. }) => "form-description-too-long",
            _ => "form-field-invalid",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "value is required"),
            ValidationError::TooShort { min } => write!(f, "shorter than {min} characters"),
            ValidationError::TooLong { max } => write!(f, "longer than {max} characters"),
            ValidationError::TooLarge { max_bytes } => {
                write!(f, "file must be smaller than {max_bytes} bytes")
            }
            ValidationError::UnsupportedType => write!(f, "unsupported file type"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A locally selected image, as far as validation is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Display name (file name without directories).
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl ImageFile {
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }
}
