// SPDX-License-Identifier: MPL-2.0
//! Form data and the submission state machine.

use crate::domain::gallery::ImageMetadataPayload;
use crate::domain::validation::{Field, ImageFile, ValidationError, RULES};
use crate::infrastructure::files::PickedImage;
use iced::widget::image;
use std::sync::Arc;

/// Where phase two (the remote upload) stands for the selected file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadPhase {
    /// Nothing selected, or the selection failed local validation.
    #[default]
    Idle,
    Uploading,
    Uploaded { url: String },
    Failed,
}

/// The locally selected file.
#[derive(Clone)]
pub struct SelectedImage {
    pub file: ImageFile,
    pub bytes: Option<Arc<[u8]>>,
    /// Decodable preview, only built for files that passed local validation.
    pub preview: Option<image::Handle>,
}

impl std::fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedImage")
            .field("file", &self.file)
            .field("has_preview", &self.preview.is_some())
            .finish()
    }
}

/// Outcome of pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    /// A submission is already in flight.
    Ignored,
    /// At least one field failed; errors are now visible.
    Invalid,
    /// Fields are valid but the remote URL is not known yet.
    MissingRemoteUrl,
    /// The request should be sent.
    Send(ImageMetadataPayload),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pub(super) title: String,
    pub(super) description: String,
    pub(super) image: Option<SelectedImage>,
    pub(super) upload: UploadPhase,
    /// Bumped on every new selection and on reset; upload results carry the
    /// generation they were started for.
    pub(super) generation: u64,
    /// Id of the latest submission; survives resets so a late result can be
    /// told apart from the one currently in flight.
    pub(super) submission: u64,
    pub(super) submitting: bool,
    pub(super) submit_attempted: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn image_file(&self) -> Option<&ImageFile> {
        self.image.as_ref().map(|selected| &selected.file)
    }

    #[must_use]
    pub fn upload_phase(&self) -> &UploadPhase {
        &self.upload
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Id of the latest submission sent to the backend.
    #[must_use]
    pub fn submission(&self) -> u64 {
        self.submission
    }

    #[must_use]
    pub fn remote_url(&self) -> Option<&str> {
        match &self.upload {
            UploadPhase::Uploaded { url } => Some(url),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    /// Validates one field against the current values.
    pub fn validate(&self, field: Field) -> Result<(), ValidationError> {
        match field {
            Field::Image => RULES.validate_image(self.image_file()),
            Field::Title => RULES.validate_title(&self.title),
            Field::Description => RULES.validate_description(&self.description),
        }
    }

    #[must_use]
    pub fn all_valid(&self) -> bool {
        Field::ALL.iter().all(|field| self.validate(*field).is_ok())
    }

    /// Error to display next to `field`.
    ///
    /// Text fields only show errors after the first submit attempt. The
    /// image field also shows them as soon as a file has been picked.
    #[must_use]
    pub fn visible_error(&self, field: Field) -> Option<ValidationError> {
        let shown = self.submit_attempted || (field == Field::Image && self.image.is_some());
        if shown {
            self.validate(field).err()
        } else {
            None
        }
    }

    /// Whether the submit button is enabled: never while a submission is in
    /// flight, and after the first attempt only when every field passes.
    /// Before that attempt an invalid form stays submittable so pressing the
    /// button reveals the inline errors.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.submitting && (!self.submit_attempted || self.all_valid())
    }

    /// Records a newly picked file and returns the generation to upload it
    /// under, or `None` when it failed local validation.
    pub fn select_image(&mut self, picked: PickedImage) -> Option<u64> {
        self.generation += 1;
        let passes = RULES.validate_image(Some(&picked.file)).is_ok();
        let preview = picked
            .bytes
            .as_ref()
            .filter(|_| passes)
            .map(|bytes| image::Handle::from_bytes(bytes.to_vec()));

        self.image = Some(SelectedImage {
            file: picked.file,
            bytes: picked.bytes,
            preview,
        });

        if passes && self.image.as_ref().is_some_and(|i| i.bytes.is_some()) {
            self.upload = UploadPhase::Uploading;
            Some(self.generation)
        } else {
            self.upload = UploadPhase::Idle;
            None
        }
    }

    /// Drops the current selection, e.g. after a read failure.
    pub fn clear_image(&mut self) {
        self.generation += 1;
        self.image = None;
        self.upload = UploadPhase::Idle;
    }

    /// Applies an upload result (`None` on failure). Returns `false` when
    /// it was stale and ignored.
    pub fn finish_upload(&mut self, generation: u64, url: Option<String>) -> bool {
        if generation != self.generation || self.upload != UploadPhase::Uploading {
            return false;
        }
        self.upload = match url {
            Some(url) => UploadPhase::Uploaded { url },
            None => UploadPhase::Failed,
        };
        true
    }

    /// Runs the submission algorithm up to the network call.
    pub fn submit(&mut self) -> SubmitStep {
        if self.submitting {
            return SubmitStep::Ignored;
        }
        self.submit_attempted = true;

        if !self.all_valid() {
            return SubmitStep::Invalid;
        }

        let payload = self.remote_url().and_then(|url| {
            ImageMetadataPayload::new(url, self.title.clone(), self.description.clone())
        });
        match payload {
            Some(payload) => {
                self.submission += 1;
                self.submitting = true;
                SubmitStep::Send(payload)
            }
            None => SubmitStep::MissingRemoteUrl,
        }
    }

    /// Ends submission `submission`. The form returns to its initial state,
    /// whether the request succeeded or not.
    ///
    /// Returns `false` and changes nothing when that submission is no longer
    /// the one in flight.
    pub fn finish_submit(&mut self, submission: u64) -> bool {
        if !self.submitting || submission != self.submission {
            return false;
        }
        self.reset();
        true
    }

    /// Restores the initial state. In-flight uploads become stale.
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            submission: self.submission,
            ..Self::default()
        };
    }
}
