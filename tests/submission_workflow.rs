// SPDX-License-Identifier: MPL-2.0
//! The add-image workflow driven through the upload form's public API, with
//! the real query cache and notification manager as collaborators.

mod common;

use common::{FakeGallery, FakeStorage};
use iced_gallery::application::port::{
    ApiError, AssetUploader, GalleryApi, LocalAsset, UploadError,
};
use iced_gallery::application::query::QueryCache;
use iced_gallery::config::Config;
use iced_gallery::domain::gallery::{ImagePage, QueryKey};
use iced_gallery::domain::validation::ImageFile;
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::infrastructure::files::PickedImage;
use iced_gallery::ui::notifications::{Manager, Severity};
use iced_gallery::ui::upload_form::{Event, Message, State, UpdateContext, UploadPhase};
use std::path::PathBuf;
use std::sync::Arc;

const REMOTE_URL: &str = "https://i.example/cat.png";

struct World {
    gallery: FakeGallery,
    gallery_port: Arc<dyn GalleryApi>,
    storage: Arc<dyn AssetUploader>,
    i18n: I18n,
    cache: QueryCache<ImagePage>,
    notifications: Manager,
    form: State,
}

impl World {
    fn new(gallery: FakeGallery, upload_result: Result<String, UploadError>) -> Self {
        Self {
            gallery_port: Arc::new(gallery.clone()),
            gallery,
            storage: Arc::new(FakeStorage {
                result: upload_result,
            }),
            i18n: I18n::new(Some("en-US".into()), &Config::default()),
            cache: QueryCache::new(),
            notifications: Manager::new(),
            form: State::new(),
        }
    }

    fn send(&mut self, message: Message) -> Event {
        let (_task, event) = self.form.update(
            message,
            UpdateContext {
                gallery: &self.gallery_port,
                assets: &self.storage,
                i18n: &self.i18n,
                cache: &mut self.cache,
                notifier: &mut self.notifications,
            },
        );
        event
    }

    /// Picks a small PNG and completes its asset upload.
    async fn pick_and_upload(&mut self) {
        let bytes: Arc<[u8]> = Arc::from(b"\x89PNG\r\n\x1a\nfake".to_vec());
        let picked = PickedImage {
            path: PathBuf::from("/tmp/cat.png"),
            file: ImageFile::new("cat.png", bytes.len() as u64, "image/png"),
            bytes: Some(Arc::clone(&bytes)),
        };
        self.send(Message::ImageRead(Ok(picked)));
        assert_eq!(self.form.upload_phase(), &UploadPhase::Uploading);

        let result = self
            .storage
            .upload(LocalAsset {
                file_name: "cat.png".into(),
                mime_type: "image/png".into(),
                bytes,
            })
            .await;
        let generation = self.form.generation();
        self.send(Message::AssetUploaded { generation, result });
    }

    fn fill_text(&mut self) {
        self.send(Message::TitleChanged("Cat".into()));
        self.send(Message::DescriptionChanged("A sleepy cat".into()));
    }

    /// Submits and feeds the backend's answer back into the form.
    async fn submit(&mut self) -> Event {
        assert_eq!(self.send(Message::Submit), Event::None);
        assert_eq!(self.gallery.created().len(), 1, "exactly one record is sent");
        let result = self.gallery.create_result.clone();
        let submission = self.form.submission();
        self.send(Message::SubmitFinished { submission, result })
    }

    fn toasts(&self) -> Vec<(Severity, String)> {
        self.notifications
            .visible()
            .map(|n| (n.severity(), n.message_key().to_string()))
            .collect()
    }
}

#[tokio::test]
async fn successful_submission_closes_and_refreshes_once() {
    let mut world = World::new(FakeGallery::accepting(), Ok(REMOTE_URL.into()));
    world.pick_and_upload().await;
    world.fill_text();

    let event = world.submit().await;

    assert_eq!(event, Event::Close);
    let created = world.gallery.created();
    assert_eq!(created[0].url(), REMOTE_URL);
    assert_eq!(created[0].title(), "Cat");
    assert_eq!(created[0].description(), "A sleepy cat");
    assert_eq!(world.cache.take_pending(), vec![QueryKey::IMAGES]);
    assert!(world.cache.take_pending().is_empty());
    assert_eq!(
        world.toasts(),
        vec![(Severity::Success, "notification-upload-success".to_string())]
    );
    assert_eq!(world.form.title(), "");
    assert!(world.form.image_file().is_none());
    assert!(!world.form.is_submitting());
}

#[tokio::test]
async fn rejected_submission_closes_without_refresh() {
    let mut world = World::new(
        FakeGallery::failing(ApiError::Status(500)),
        Ok(REMOTE_URL.into()),
    );
    world.pick_and_upload().await;
    world.fill_text();

    let event = world.submit().await;

    assert_eq!(event, Event::Close);
    assert!(!world.cache.has_pending());
    assert_eq!(
        world.toasts(),
        vec![(Severity::Error, "notification-upload-error".to_string())]
    );
    assert!(world.form.image_file().is_none());
}

#[tokio::test]
async fn upload_without_url_blocks_the_request() {
    let mut world = World::new(FakeGallery::accepting(), Err(UploadError::MissingUrl));
    world.pick_and_upload().await;
    world.fill_text();
    assert_eq!(world.form.upload_phase(), &UploadPhase::Failed);

    assert_eq!(world.send(Message::Submit), Event::None);

    assert!(world.gallery.created().is_empty());
    assert!(!world.form.is_submitting());
    // Newest toast first
    let keys: Vec<String> = world.toasts().into_iter().map(|(_, key)| key).collect();
    assert_eq!(
        keys,
        vec![
            "notification-upload-url-missing".to_string(),
            "notification-asset-upload-error".to_string(),
        ]
    );
}

#[tokio::test]
async fn invalid_fields_never_reach_the_backend() {
    let mut world = World::new(FakeGallery::accepting(), Ok(REMOTE_URL.into()));
    world.pick_and_upload().await;
    world.send(Message::TitleChanged("C".into()));

    assert_eq!(world.send(Message::Submit), Event::None);

    assert!(world.gallery.created().is_empty());
    assert!(world.form.submit_attempted());
    assert!(!world.form.can_submit());
    assert!(world.toasts().is_empty());

    world.fill_text();
    assert!(world.form.can_submit());
}
