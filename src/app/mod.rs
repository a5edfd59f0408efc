// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the gallery screen, the add-image modal and the
//! image viewer to the backend ports, and translates their messages into
//! side effects such as network requests, cache refreshes and toasts.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{AssetUploader, GalleryApi};
use crate::application::query::QueryCache;
use crate::config;
use crate::domain::gallery::{GalleryImage, ImagePage, QueryKey};
use crate::i18n::fluent::I18n;
use crate::infrastructure::http::{build_client, HttpAssetUploader, HttpGalleryApi};
use crate::ui::image_store::ImageStore;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::upload_form::{self, UploadPhase};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    gallery_api: Arc<dyn GalleryApi>,
    assets: Arc<dyn AssetUploader>,
    cache: QueryCache<ImagePage>,
    images: ImageStore,
    notifications: notifications::Manager,
    form: upload_form::State,
    add_modal_open: bool,
    /// Image shown in the viewer modal.
    viewer: Option<GalleryImage>,
    spinner_rotation: f32,
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("add_modal_open", &self.add_modal_open)
            .field("viewer", &self.viewer.as_ref().map(|image| &image.url))
            .field("images_status", &self.cache.status(&QueryKey::IMAGES))
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application around the given backend ports.
    pub fn with_ports(
        i18n: I18n,
        theme_mode: ThemeMode,
        gallery_api: Arc<dyn GalleryApi>,
        assets: Arc<dyn AssetUploader>,
    ) -> Self {
        Self {
            i18n,
            theme_mode,
            gallery_api,
            assets,
            cache: QueryCache::new(),
            images: ImageStore::new(),
            notifications: notifications::Manager::new(),
            form: upload_form::State::new(),
            add_modal_open: false,
            viewer: None,
            spinner_rotation: 0.0,
            last_tick: None,
        }
    }

    /// Loads configuration, builds the HTTP adapters and requests the first page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(api_url) = flags.api_url {
            config.api.base_url = api_url;
        }
        let i18n = I18n::new(flags.lang, &config);

        let client = build_client(&config.api).unwrap_or_else(|err| {
            log::error!("Falling back to a default HTTP client: {err}");
            reqwest::Client::new()
        });
        log::info!("Using gallery backend at {}", config.api.base_url);

        let gallery_api = Arc::new(HttpGalleryApi::new(client.clone(), config.api.base_url));
        let assets = Arc::new(HttpAssetUploader::new(
            client,
            config.assets.upload_url,
            config.assets.api_key,
        ));

        let mut app = Self::with_ports(i18n, config.general.theme_mode, gallery_api, assets);
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let task = app.refresh_images();
        (app, task)
    }

    /// Requests the first page of the listing.
    pub fn refresh_images(&mut self) -> Task<Message> {
        update::fetch_images(&mut self.update_context(), false)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    /// Whether anything on screen needs periodic redraws.
    fn is_animating(&self) -> bool {
        let form_busy = self.form.is_submitting()
            || *self.form.upload_phase() == UploadPhase::Uploading;
        self.notifications.has_notifications()
            || form_busy
            || self.cache.is_loading(&QueryKey::IMAGES)
            || self.images.any_loading()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.is_animating()),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            gallery_api: &self.gallery_api,
            assets: &self.assets,
            cache: &mut self.cache,
            images: &mut self.images,
            notifications: &mut self.notifications,
            form: &mut self.form,
            add_modal_open: &mut self.add_modal_open,
            viewer: &mut self.viewer,
            spinner_rotation: &mut self.spinner_rotation,
            last_tick: &mut self.last_tick,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Gallery(message) => update::handle_gallery_message(&mut ctx, message),
            Message::UploadForm(message) => update::handle_upload_form_message(&mut ctx, message),
            Message::Viewer(message) => update::handle_viewer_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::CloseAddModal => {
                update::close_add_modal(&mut ctx);
                Task::none()
            }
            Message::ImagesLoaded {
                ticket,
                append,
                result,
            } => update::handle_images_loaded(&mut ctx, &ticket, append, result),
            Message::ImageFetched { url, result } => {
                update::handle_image_fetched(&mut ctx, &url, result)
            }
            Message::LinkOpened(result) => update::handle_link_opened(&mut ctx, result),
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            page: self.cache.get(&QueryKey::IMAGES),
            status: self.cache.status(&QueryKey::IMAGES),
            images: &self.images,
            form: &self.form,
            add_modal_open: self.add_modal_open,
            viewer: self.viewer.as_ref(),
            notifications: &self.notifications,
            spinner_rotation: self.spinner_rotation,
        })
    }

    #[must_use]
    pub fn is_add_modal_open(&self) -> bool {
        self.add_modal_open
    }

    #[must_use]
    pub fn viewer_image(&self) -> Option<&GalleryImage> {
        self.viewer.as_ref()
    }

    #[must_use]
    pub fn form(&self) -> &upload_form::State {
        &self.form
    }

    #[must_use]
    pub fn images(&self) -> Option<&ImagePage> {
        self.cache.get(&QueryKey::IMAGES)
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}
