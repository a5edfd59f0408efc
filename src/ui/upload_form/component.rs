// SPDX-License-Identifier: MPL-2.0
//! Message handling for the upload form.

use super::effects::apply_completion;
use super::messages::{Event, Message};
use super::state::{State, SubmitStep};
use crate::application::port::{AssetUploader, GalleryApi, LocalAsset};
use crate::application::query::CacheInvalidator;
use crate::i18n::fluent::I18n;
use crate::infrastructure::files;
use crate::ui::notifications::{Notification, Notifier};
use iced::Task;
use std::sync::Arc;

/// What the form needs from its host to process a message.
pub struct UpdateContext<'a> {
    pub gallery: &'a Arc<dyn GalleryApi>,
    pub assets: &'a Arc<dyn AssetUploader>,
    pub i18n: &'a I18n,
    pub cache: &'a mut dyn CacheInvalidator,
    pub notifier: &'a mut dyn Notifier,
}

impl State {
    /// Handles a message, returning follow-up work and an event for the parent.
    pub fn update(&mut self, message: Message, ctx: UpdateContext<'_>) -> (Task<Message>, Event) {
        match message {
            Message::TitleChanged(title) => self.set_title(title),
            Message::DescriptionChanged(description) => self.set_description(description),
            Message::PickImage => {
                if !self.submitting {
                    let dialog_title = ctx.i18n.tr("form-image-pick");
                    return (
                        Task::perform(files::pick_image_path(dialog_title), Message::ImagePathChosen),
                        Event::None,
                    );
                }
            }
            Message::ImagePathChosen(Some(path)) => {
                return (
                    Task::perform(files::read_image(path), Message::ImageRead),
                    Event::None,
                );
            }
            Message::ImagePathChosen(None) => {}
            Message::ImageRead(Ok(picked)) => {
                let asset = picked.bytes.clone().map(|bytes| LocalAsset {
                    file_name: picked.file.name.clone(),
                    mime_type: picked.file.mime_type.clone(),
                    bytes,
                });
                if let (Some(generation), Some(asset)) = (self.select_image(picked), asset) {
                    log::info!("Uploading {} to asset storage", asset.file_name);
                    return (
                        Task::perform(ctx.assets.upload(asset), move |result| {
                            Message::AssetUploaded { generation, result }
                        }),
                        Event::None,
                    );
                }
            }
            Message::ImageRead(Err(err)) => {
                log::warn!("Could not read the selected image: {err}");
                self.clear_image();
                ctx.notifier
                    .notify(Notification::error("notification-file-read-error"));
            }
            Message::AssetUploaded { generation, result } => {
                let failure = result.as_ref().err().cloned();
                if !self.finish_upload(generation, result.ok()) {
                    log::debug!("Ignoring upload result for stale selection {generation}");
                } else if let Some(err) = failure {
                    log::warn!("Asset upload failed: {err}");
                    ctx.notifier
                        .notify(Notification::error("notification-asset-upload-error"));
                }
            }
            Message::Submit => match self.submit() {
                SubmitStep::Ignored => log::debug!("Submission already in flight"),
                SubmitStep::Invalid => log::debug!("Submission blocked by validation"),
                SubmitStep::MissingRemoteUrl => {
                    ctx.notifier
                        .notify(Notification::error("notification-upload-url-missing"));
                }
                SubmitStep::Send(payload) => {
                    let submission = self.submission;
                    log::info!("Submitting image \"{}\" ({submission})", payload.title());
                    return (
                        Task::perform(ctx.gallery.create_image(payload), move |result| {
                            Message::SubmitFinished { submission, result }
                        }),
                        Event::None,
                    );
                }
            },
            Message::SubmitFinished { submission, result } => {
                let event = apply_completion(&result, ctx.cache, ctx.notifier);
                if self.finish_submit(submission) {
                    return (Task::none(), event);
                }
                // The form was dismissed while this request was in flight
                log::debug!("Submission {submission} finished after its form was dismissed");
            }
        }
        (Task::none(), Event::None)
    }
}
