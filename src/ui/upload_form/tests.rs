// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::application::port::{
    ApiError, AssetUploader, GalleryApi, LocalAsset, PortFuture, UploadError,
};
use crate::application::query::CacheInvalidator;
use crate::domain::gallery::{ImageMetadataPayload, ImagePage, QueryKey};
use crate::domain::validation::{Field, ImageFile, ValidationError, MAX_IMAGE_BYTES};
use crate::i18n::fluent::I18n;
use crate::infrastructure::files::PickedImage;
use crate::ui::notifications::{Notification, Notifier, Severity};
use std::path::PathBuf;
use std::sync::Arc;

const REMOTE_URL: &str = "https://cdn.example/cat.png";

#[derive(Default)]
struct RecordingCache {
    invalidated: Vec<QueryKey>,
}

impl CacheInvalidator for RecordingCache {
    fn invalidate(&mut self, key: &QueryKey) {
        self.invalidated.push(key.clone());
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notifications: Vec<Notification>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

impl RecordingNotifier {
    fn keys(&self) -> Vec<&str> {
        self.notifications.iter().map(Notification::message_key).collect()
    }
}

struct IdleApi;

impl GalleryApi for IdleApi {
    fn create_image(&self, _payload: ImageMetadataPayload) -> PortFuture<Result<(), ApiError>> {
        Box::pin(async { Ok(()) })
    }

    fn list_images(&self, _after: Option<String>) -> PortFuture<Result<ImagePage, ApiError>> {
        Box::pin(async { Ok(ImagePage::default()) })
    }

    fn fetch_image(&self, _url: String) -> PortFuture<Result<Vec<u8>, ApiError>> {
        Box::pin(async { Ok(Vec::new()) })
    }
}

struct IdleUploader;

impl AssetUploader for IdleUploader {
    fn upload(&self, _asset: LocalAsset) -> PortFuture<Result<String, UploadError>> {
        Box::pin(async { Ok(REMOTE_URL.to_string()) })
    }
}

struct Harness {
    gallery: Arc<dyn GalleryApi>,
    assets: Arc<dyn AssetUploader>,
    i18n: I18n,
    cache: RecordingCache,
    notifier: RecordingNotifier,
}

impl Harness {
    fn new() -> Self {
        Self {
            gallery: Arc::new(IdleApi),
            assets: Arc::new(IdleUploader),
            i18n: I18n::default(),
            cache: RecordingCache::default(),
            notifier: RecordingNotifier::default(),
        }
    }

    fn send(&mut self, form: &mut State, message: Message) -> Event {
        let ctx = UpdateContext {
            gallery: &self.gallery,
            assets: &self.assets,
            i18n: &self.i18n,
            cache: &mut self.cache,
            notifier: &mut self.notifier,
        };
        let (_task, event) = form.update(message, ctx);
        event
    }
}

fn picked(name: &str, size_bytes: u64, mime_type: &str) -> PickedImage {
    let bytes = (size_bytes < MAX_IMAGE_BYTES).then(|| Arc::from(vec![0_u8; 8]));
    PickedImage {
        path: PathBuf::from(name),
        file: ImageFile::new(name, size_bytes, mime_type),
        bytes,
    }
}

fn filled_form() -> State {
    let mut form = State::new();
    form.set_title("Cat".into());
    form.set_description("A cat".into());
    let generation = form
        .select_image(picked("cat.png", 1_000, "image/png"))
        .expect("valid image starts an upload");
    assert!(form.finish_upload(generation, Some(REMOTE_URL.into())));
    form
}

#[test]
fn fresh_form_allows_first_submit_and_hides_errors() {
    let form = State::new();
    assert!(form.can_submit());
    for field in Field::ALL {
        assert_eq!(form.visible_error(field), None);
    }
}

#[test]
fn empty_submit_reveals_errors_and_disables_button() {
    let mut form = State::new();
    assert_eq!(form.submit(), SubmitStep::Invalid);

    assert_eq!(form.visible_error(Field::Image), Some(ValidationError::Required));
    assert_eq!(form.visible_error(Field::Title), Some(ValidationError::Required));
    assert_eq!(
        form.visible_error(Field::Description),
        Some(ValidationError::Required)
    );
    assert!(!form.can_submit());
    assert!(!form.is_submitting());
}

#[test]
fn fixing_fields_re_enables_submit() {
    let mut form = State::new();
    let _ = form.submit();
    assert!(!form.can_submit());

    form.set_title("Ab".into());
    form.set_description("x".into());
    let generation = form.select_image(picked("a.gif", 10, "image/gif"));
    assert!(generation.is_some());
    assert!(form.can_submit());
}

#[test]
fn short_title_is_reported_after_attempt() {
    let mut form = filled_form();
    form.set_title("A".into());
    assert_eq!(form.submit(), SubmitStep::Invalid);
    assert_eq!(
        form.visible_error(Field::Title),
        Some(ValidationError::TooShort { min: 2 })
    );
}

#[test]
fn oversized_image_fails_locally_and_is_not_uploaded() {
    let mut form = State::new();
    let generation = form.select_image(picked("big.png", MAX_IMAGE_BYTES, "image/png"));

    assert_eq!(generation, None);
    assert_eq!(*form.upload_phase(), UploadPhase::Idle);
    assert_eq!(
        form.visible_error(Field::Image),
        Some(ValidationError::TooLarge {
            max_bytes: MAX_IMAGE_BYTES
        })
    );
    assert!(form.image.as_ref().is_some_and(|s| s.preview.is_none()));
}

#[test]
fn unsupported_type_fails_locally() {
    let mut form = State::new();
    assert_eq!(form.select_image(picked("a.webp", 10, "image/webp")), None);
    assert_eq!(
        form.visible_error(Field::Image),
        Some(ValidationError::UnsupportedType)
    );
}

#[test]
fn valid_image_gets_preview_and_starts_upload() {
    let mut form = State::new();
    let generation = form.select_image(picked("cat.jpg", 10, "image/jpeg"));

    assert_eq!(generation, Some(form.generation()));
    assert_eq!(*form.upload_phase(), UploadPhase::Uploading);
    assert!(form.image.as_ref().is_some_and(|s| s.preview.is_some()));
    assert_eq!(form.remote_url(), None);
}

#[test]
fn stale_upload_result_is_ignored() {
    let mut form = State::new();
    let first = form
        .select_image(picked("one.png", 10, "image/png"))
        .expect("upload");
    let second = form
        .select_image(picked("two.png", 10, "image/png"))
        .expect("upload");

    assert!(!form.finish_upload(first, Some("https://cdn/one.png".into())));
    assert_eq!(form.remote_url(), None);

    assert!(form.finish_upload(second, Some("https://cdn/two.png".into())));
    assert_eq!(form.remote_url(), Some("https://cdn/two.png"));
}

#[test]
fn failed_upload_leaves_remote_url_empty() {
    let mut form = State::new();
    let generation = form
        .select_image(picked("cat.png", 10, "image/png"))
        .expect("upload");
    assert!(form.finish_upload(generation, None));
    assert_eq!(*form.upload_phase(), UploadPhase::Failed);
    assert_eq!(form.remote_url(), None);
}

#[test]
fn valid_fields_without_remote_url_do_not_send() {
    let mut form = State::new();
    form.set_title("Cat".into());
    form.set_description("A cat".into());
    let generation = form
        .select_image(picked("cat.png", 10, "image/png"))
        .expect("upload");
    assert!(form.finish_upload(generation, None));

    assert_eq!(form.submit(), SubmitStep::MissingRemoteUrl);
    assert!(!form.is_submitting());
    assert_eq!(form.title(), "Cat");
    assert!(form.image_file().is_some());
}

#[test]
fn valid_submit_builds_payload_and_blocks_double_submission() {
    let mut form = filled_form();

    let step = form.submit();
    assert_eq!(
        step,
        SubmitStep::Send(
            ImageMetadataPayload::new(REMOTE_URL, "Cat", "A cat").expect("url is present")
        )
    );
    assert!(form.is_submitting());
    assert!(!form.can_submit());
    assert_eq!(form.submit(), SubmitStep::Ignored);
}

#[test]
fn finish_submit_resets_everything() {
    let mut form = filled_form();
    let before = form.generation();
    let _ = form.submit();
    assert!(form.finish_submit(form.submission()));

    assert_eq!(form.title(), "");
    assert_eq!(form.description(), "");
    assert!(form.image_file().is_none());
    assert_eq!(form.remote_url(), None);
    assert!(!form.is_submitting());
    assert!(!form.submit_attempted());
    assert!(form.generation() > before);
}

#[test]
fn reset_makes_in_flight_upload_stale() {
    let mut form = State::new();
    let generation = form
        .select_image(picked("cat.png", 10, "image/png"))
        .expect("upload");
    form.reset();
    assert!(!form.finish_upload(generation, Some(REMOTE_URL.into())));
    assert!(form.image_file().is_none());
}

#[test]
fn completion_success_invalidates_once_and_notifies_once() {
    let mut cache = RecordingCache::default();
    let mut notifier = RecordingNotifier::default();

    let event = apply_completion(&Ok(()), &mut cache, &mut notifier);

    assert_eq!(event, Event::Close);
    assert_eq!(cache.invalidated, vec![QueryKey::IMAGES]);
    assert_eq!(notifier.notifications.len(), 1);
    let toast = &notifier.notifications[0];
    assert_eq!(toast.severity(), Severity::Success);
    assert_eq!(toast.title_key(), Some("notification-upload-success-title"));
    assert_eq!(toast.message_key(), "notification-upload-success");
}

#[test]
fn completion_failure_notifies_without_invalidating() {
    let mut cache = RecordingCache::default();
    let mut notifier = RecordingNotifier::default();

    let event = apply_completion(&Err(ApiError::Status(500)), &mut cache, &mut notifier);

    assert_eq!(event, Event::Close);
    assert!(cache.invalidated.is_empty());
    assert_eq!(notifier.keys(), vec!["notification-upload-error"]);
    assert_eq!(notifier.notifications[0].severity(), Severity::Error);
}

#[test]
fn update_reports_missing_remote_url() {
    let mut harness = Harness::new();
    let mut form = State::new();
    harness.send(&mut form, Message::TitleChanged("Cat".into()));
    harness.send(&mut form, Message::DescriptionChanged("A cat".into()));
    harness.send(
        &mut form,
        Message::ImageRead(Ok(picked("cat.png", 10, "image/png"))),
    );

    let event = harness.send(&mut form, Message::Submit);

    assert_eq!(event, Event::None);
    assert_eq!(harness.notifier.keys(), vec!["notification-upload-url-missing"]);
    assert_eq!(form.title(), "Cat");
}

#[test]
fn update_walks_the_full_success_path() {
    let mut harness = Harness::new();
    let mut form = State::new();
    harness.send(&mut form, Message::TitleChanged("Cat".into()));
    harness.send(&mut form, Message::DescriptionChanged("A cat".into()));
    harness.send(
        &mut form,
        Message::ImageRead(Ok(picked("cat.png", 10, "image/png"))),
    );
    let generation = form.generation();
    harness.send(
        &mut form,
        Message::AssetUploaded {
            generation,
            result: Ok(REMOTE_URL.into()),
        },
    );
    assert_eq!(form.remote_url(), Some(REMOTE_URL));

    assert_eq!(harness.send(&mut form, Message::Submit), Event::None);
    assert!(form.is_submitting());

    let submission = form.submission();
    let event = harness.send(
        &mut form,
        Message::SubmitFinished {
            submission,
            result: Ok(()),
        },
    );
    assert_eq!(event, Event::Close);
    assert_eq!(harness.cache.invalidated, vec![QueryKey::IMAGES]);
    assert_eq!(harness.notifier.keys(), vec!["notification-upload-success"]);
    assert_eq!(form.title(), "");
}

#[test]
fn update_upload_failure_notifies() {
    let mut harness = Harness::new();
    let mut form = State::new();
    harness.send(
        &mut form,
        Message::ImageRead(Ok(picked("cat.png", 10, "image/png"))),
    );
    let generation = form.generation();
    harness.send(
        &mut form,
        Message::AssetUploaded {
            generation,
            result: Err(UploadError::Status(400)),
        },
    );

    assert_eq!(*form.upload_phase(), UploadPhase::Failed);
    assert_eq!(harness.notifier.keys(), vec!["notification-asset-upload-error"]);
}

#[test]
fn update_read_failure_clears_selection() {
    let mut harness = Harness::new();
    let mut form = State::new();
    harness.send(
        &mut form,
        Message::ImageRead(Err(crate::error::Error::Io("denied".into()))),
    );

    assert!(form.image_file().is_none());
    assert_eq!(harness.notifier.keys(), vec!["notification-file-read-error"]);
}

#[test]
fn late_result_after_dismissal_still_reports_but_does_not_close() {
    let mut harness = Harness::new();
    let mut form = filled_form();
    let _ = form.submit();
    let submission = form.submission();
    form.reset();

    let event = harness.send(
        &mut form,
        Message::SubmitFinished {
            submission,
            result: Ok(()),
        },
    );
    assert_eq!(event, Event::None);
    assert_eq!(harness.cache.invalidated.len(), 1);
}

#[test]
fn earlier_result_does_not_finish_a_newer_submission() {
    let mut harness = Harness::new();
    let mut form = filled_form();
    assert!(matches!(form.submit(), SubmitStep::Send(_)));
    let first = form.submission();
    form.reset();

    form.set_title("Dog".into());
    form.set_description("A dog".into());
    let generation = form
        .select_image(picked("dog.png", 1_000, "image/png"))
        .expect("valid image starts an upload");
    assert!(form.finish_upload(generation, Some(REMOTE_URL.into())));
    assert!(matches!(form.submit(), SubmitStep::Send(_)));
    let second = form.submission();
    assert_ne!(first, second);

    let event = harness.send(
        &mut form,
        Message::SubmitFinished {
            submission: first,
            result: Ok(()),
        },
    );
    assert_eq!(event, Event::None);
    assert!(form.is_submitting());
    assert!(!form.can_submit());
    assert_eq!(form.title(), "Dog");

    let event = harness.send(
        &mut form,
        Message::SubmitFinished {
            submission: second,
            result: Ok(()),
        },
    );
    assert_eq!(event, Event::Close);
    assert!(!form.is_submitting());
    assert_eq!(form.title(), "");
    assert_eq!(harness.cache.invalidated.len(), 2);
}

#[test]
fn finish_submit_ignores_unknown_submission() {
    let mut form = filled_form();
    let _ = form.submit();
    assert!(!form.finish_submit(form.submission() + 1));
    assert!(form.is_submitting());
}
