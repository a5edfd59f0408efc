// SPDX-License-Identifier: MPL-2.0
//! View composition: gallery screen plus the overlays stacked above it.

use super::Message;
use crate::application::query::QueryStatus;
use crate::domain::gallery::{GalleryImage, ImagePage};
use crate::i18n::fluent::I18n;
use crate::ui::image_store::ImageStore;
use crate::ui::image_viewer::{self, ViewerProps};
use crate::ui::notifications::{self, Toast};
use crate::ui::{gallery, modal, upload_form};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: Option<&'a ImagePage>,
    pub status: QueryStatus,
    pub images: &'a ImageStore,
    pub form: &'a upload_form::State,
    pub add_modal_open: bool,
    pub viewer: Option<&'a GalleryImage>,
    pub notifications: &'a notifications::Manager,
    pub spinner_rotation: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let home = gallery::view(gallery::ViewContext {
        i18n,
        page: ctx.page,
        status: ctx.status,
        images: ctx.images,
        spinner_rotation: ctx.spinner_rotation,
    })
    .map(Message::Gallery);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Container::new(home).width(Length::Fill).height(Length::Fill));

    if ctx.add_modal_open {
        let form = ctx
            .form
            .view(upload_form::ViewContext {
                i18n,
                spinner_rotation: ctx.spinner_rotation,
            })
            .map(Message::UploadForm);
        layers = layers.push(modal::layer(
            modal::dialog(i18n.tr("upload-modal-title"), form, Message::CloseAddModal),
            Message::CloseAddModal,
        ));
    }

    if let Some(selected) = ctx.viewer {
        let props = ViewerProps {
            visible: true,
            image_url: &selected.url,
            image: ctx.images.handle(&selected.url),
        };
        layers = layers.push(
            image_viewer::view(
                props,
                image_viewer::ViewContext {
                    i18n,
                    spinner_rotation: ctx.spinner_rotation,
                },
            )
            .map(Message::Viewer),
        );
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification))
        .into()
}
