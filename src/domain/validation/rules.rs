// SPDX-License-Identifier: MPL-2.0
//! Static constraint table for the upload form.

use super::{Field, ImageFile, ValidationError};

/// Largest accepted upload, exclusive (files of exactly this size are rejected).
pub const MAX_IMAGE_BYTES: u64 = 10_000_000;

/// MIME types accepted by the gallery.
pub const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif"];

/// Constraints on a free-text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRule {
    pub required: bool,
    /// Minimum length in characters, inclusive.
    pub min_len: Option<usize>,
    /// Maximum length in characters, inclusive.
    pub max_len: Option<usize>,
}

impl TextRule {
    /// Checks a value against this rule.
    ///
    /// Length is measured in Unicode scalar values and the value is taken as
    /// typed: surrounding whitespace counts.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return if self.required {
                Err(ValidationError::Required)
            } else {
                Ok(())
            };
        }

        let len = value.chars().count();
        if let Some(min) = self.min_len {
            if len < min {
                return Err(ValidationError::TooShort { min });
            }
        }
        if let Some(max) = self.max_len {
            if len > max {
                return Err(ValidationError::TooLong { max });
            }
        }
        Ok(())
    }
}

/// Constraints on the selected image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRule {
    pub required: bool,
    /// Exclusive size ceiling in bytes.
    pub max_bytes: u64,
    pub accepted_types: &'static [&'static str],
}

impl ImageRule {
    /// Checks a selection against this rule. Size is checked before type.
    pub fn check(&self, file: Option<&ImageFile>) -> Result<(), ValidationError> {
        let Some(file) = file else {
            return if self.required {
                Err(ValidationError::Required)
            } else {
                Ok(())
            };
        };

        if file.size_bytes >= self.max_bytes {
            return Err(ValidationError::TooLarge {
                max_bytes: self.max_bytes,
            });
        }
        if !self.accepts(&file.mime_type) {
            return Err(ValidationError::UnsupportedType);
        }
        Ok(())
    }

    /// Returns whether a MIME type is in the accepted set.
    #[must_use]
    pub fn accepts(&self, mime_type: &str) -> bool {
        self.accepted_types.contains(&mime_type)
    }
}

/// Per-field constraints of the upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRuleSet {
    pub image: ImageRule,
    pub title: TextRule,
    pub description: TextRule,
}

/// The rule set applied by the upload form.
pub const RULES: ValidationRuleSet = ValidationRuleSet {
    image: ImageRule {
        required: true,
        max_bytes: MAX_IMAGE_BYTES,
        accepted_types: ACCEPTED_IMAGE_TYPES,
    },
    title: TextRule {
        required: true,
        min_len: Some(2),
        max_len: Some(20),
    },
    description: TextRule {
        required: true,
        min_len: None,
        max_len: Some(65),
    },
};

impl ValidationRuleSet {
    #[must_use]
    pub fn text_rule(&self, field: Field) -> Option<&TextRule> {
        match field {
            Field::Title => Some(&self.title),
            Field::Description => Some(&self.description),
            Field::Image => None,
        }
    }

    pub fn validate_title(&self, title: &str) -> Result<(), ValidationError> {
        self.title.check(title)
    }

    pub fn validate_description(&self, description: &str) -> Result<(), ValidationError> {
        self.description.check(description)
    }

    pub fn validate_image(&self, file: Option<&ImageFile>) -> Result<(), ValidationError> {
        self.image.check(file)
    }
}
