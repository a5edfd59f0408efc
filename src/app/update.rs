// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::application::port::{ApiError, AssetUploader, GalleryApi};
use crate::application::query::{FetchTicket, QueryCache};
use crate::domain::gallery::{GalleryImage, ImagePage, QueryKey};
use crate::i18n::fluent::I18n;
use crate::infrastructure::browser;
use crate::ui::image_store::ImageStore;
use crate::ui::notifications::{self, Notification};
use crate::ui::widgets::animated_spinner;
use crate::ui::{gallery, image_viewer, upload_form};
use iced::Task;
use std::sync::Arc;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub gallery_api: &'a Arc<dyn GalleryApi>,
    pub assets: &'a Arc<dyn AssetUploader>,
    pub cache: &'a mut QueryCache<ImagePage>,
    pub images: &'a mut ImageStore,
    pub notifications: &'a mut notifications::Manager,
    pub form: &'a mut upload_form::State,
    pub add_modal_open: &'a mut bool,
    pub viewer: &'a mut Option<GalleryImage>,
    pub spinner_rotation: &'a mut f32,
    pub last_tick: &'a mut Option<Instant>,
}

/// Requests a page of the listing: the first page, or the one after the
/// cached cursor when `append` is set.
pub fn fetch_images(ctx: &mut UpdateContext<'_>, append: bool) -> Task<Message> {
    let after = if append {
        let cursor = ctx
            .cache
            .get(&QueryKey::IMAGES)
            .and_then(|page| page.after.clone());
        if cursor.is_none() {
            return Task::none();
        }
        cursor
    } else {
        None
    };

    let ticket = ctx.cache.begin_fetch(&QueryKey::IMAGES);
    log::info!(
        "Fetching images ({})",
        after.as_deref().map_or("first page".to_string(), |c| format!("after {c}"))
    );
    Task::perform(ctx.gallery_api.list_images(after), move |result| {
        Message::ImagesLoaded {
            ticket,
            append,
            result,
        }
    })
}

/// Starts one refetch per key invalidated since the last call.
pub fn refetch_pending(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mut tasks = Vec::new();
    for key in ctx.cache.take_pending() {
        if key == QueryKey::IMAGES {
            log::info!("Refreshing invalidated query \"{key}\"");
            tasks.push(fetch_images(ctx, false));
        } else {
            log::debug!("No fetcher registered for query \"{key}\"");
        }
    }
    Task::batch(tasks)
}

/// Downloads an image unless it is already cached or in flight.
fn fetch_image(ctx: &mut UpdateContext<'_>, url: String) -> Task<Message> {
    if !ctx.images.request(&url) {
        return Task::none();
    }
    log::debug!("Downloading {url}");
    Task::perform(ctx.gallery_api.fetch_image(url.clone()), move |result| {
        Message::ImageFetched { url, result }
    })
}

pub fn handle_images_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: &FetchTicket,
    append: bool,
    result: Result<ImagePage, ApiError>,
) -> Task<Message> {
    let outcome = result.map_err(|err| {
        log::warn!("Loading images failed: {err}");
        err.to_string()
    });

    let applied = if append {
        ctx.cache.complete_with(ticket, outcome, |cached, fresh| match cached {
            Some(cached) => cached.followed_by(fresh),
            None => fresh,
        })
    } else {
        ctx.cache.complete(ticket, outcome)
    };
    if !applied {
        log::debug!("Dropping superseded image page");
        return Task::none();
    }

    let urls: Vec<String> = ctx
        .cache
        .get(&QueryKey::IMAGES)
        .map(|page| page.data.iter().map(|image| image.url.clone()).collect())
        .unwrap_or_default();

    if !append {
        let viewer_url = ctx.viewer.as_ref().map(|image| image.url.as_str());
        ctx.images
            .retain(urls.iter().map(String::as_str).chain(viewer_url));
    }

    let tasks: Vec<Task<Message>> = urls.into_iter().map(|url| fetch_image(ctx, url)).collect();
    Task::batch(tasks)
}

pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    url: &str,
    result: Result<Vec<u8>, ApiError>,
) -> Task<Message> {
    let failed = match &result {
        Ok(_) => false,
        Err(err) => {
            log::warn!("Downloading {url} failed: {err}");
            true
        }
    };
    ctx.images.finish(url, result.ok());

    if failed && ctx.viewer.as_ref().is_some_and(|image| image.url == url) {
        ctx.notifications
            .push(Notification::error("notification-image-load-error"));
    }
    Task::none()
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match message {
        gallery::Message::AddImage => {
            *ctx.add_modal_open = true;
            Task::none()
        }
        gallery::Message::Open(image) => {
            let task = fetch_image(ctx, image.url.clone());
            *ctx.viewer = Some(image);
            task
        }
        gallery::Message::LoadMore => {
            if ctx.cache.is_loading(&QueryKey::IMAGES) {
                Task::none()
            } else {
                fetch_images(ctx, true)
            }
        }
        gallery::Message::Retry => fetch_images(ctx, false),
    }
}

pub fn handle_upload_form_message(
    ctx: &mut UpdateContext<'_>,
    message: upload_form::Message,
) -> Task<Message> {
    let (task, event) = ctx.form.update(
        message,
        upload_form::UpdateContext {
            gallery: ctx.gallery_api,
            assets: ctx.assets,
            i18n: ctx.i18n,
            cache: &mut *ctx.cache,
            notifier: &mut *ctx.notifications,
        },
    );

    if event == upload_form::Event::Close {
        close_add_modal(ctx);
    }

    Task::batch([task.map(Message::UploadForm), refetch_pending(ctx)])
}

/// Hides the add-image modal and returns the form to its initial state.
pub fn close_add_modal(ctx: &mut UpdateContext<'_>) {
    *ctx.add_modal_open = false;
    ctx.form.reset();
}

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: image_viewer::Message,
) -> Task<Message> {
    match message {
        image_viewer::Message::Close => {
            *ctx.viewer = None;
            Task::none()
        }
        image_viewer::Message::OpenOriginal(url) => {
            Task::perform(async move { browser::open_url(&url) }, Message::LinkOpened)
        }
    }
}

pub fn handle_link_opened(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), crate::error::Error>,
) -> Task<Message> {
    if let Err(err) = result {
        log::warn!("Could not open link: {err}");
        ctx.notifications
            .push(Notification::error("notification-open-link-error"));
    }
    Task::none()
}

/// Escape closes the topmost overlay.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.viewer.is_some() {
        *ctx.viewer = None;
    } else if *ctx.add_modal_open {
        close_add_modal(ctx);
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);
    if let Some(previous) = ctx.last_tick.replace(now) {
        *ctx.spinner_rotation = animated_spinner::advance(
            *ctx.spinner_rotation,
            now.saturating_duration_since(previous),
        );
    }
    Task::none()
}
