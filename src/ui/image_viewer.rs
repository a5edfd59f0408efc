// SPDX-License-Identifier: MPL-2.0
//! Modal that shows one gallery image with a link to the full-size original.
//!
//! The viewer owns no state. Visibility, the image address and the decoded
//! image all come from the parent, which also decides what closing means.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::modal;
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, image, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Backdrop click or Escape.
    Close,
    /// The "open original" link was activated.
    OpenOriginal(String),
}

/// Inputs supplied by the parent on every render.
#[derive(Debug, Clone, Copy)]
pub struct ViewerProps<'a> {
    pub visible: bool,
    pub image_url: &'a str,
    /// Decoded image, `None` while the parent is still downloading it.
    pub image: Option<&'a image::Handle>,
}

impl<'a> ViewerProps<'a> {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            image_url: "",
            image: None,
        }
    }
}

/// Returns where the "open original" link points, if it is shown.
#[must_use]
pub fn link_target<'a>(props: &ViewerProps<'a>) -> Option<&'a str> {
    (props.visible && !props.image_url.is_empty()).then_some(props.image_url)
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub spinner_rotation: f32,
}

pub fn view<'a>(props: ViewerProps<'a>, ctx: ViewContext<'a>) -> Element<'a, Message> {
    if !props.visible {
        return Space::new().width(Length::Shrink).height(Length::Shrink).into();
    }

    let picture: Element<'a, Message> = match props.image {
        Some(handle) => Container::new(
            image(handle.clone())
                .width(Length::Fill)
                .content_fit(ContentFit::Cover),
        )
        .width(Length::Fill)
        .max_height(sizing::VIEWER_MAX_IMAGE_HEIGHT)
        .into(),
        None => Container::new(
            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation).into_element())
                .push(Text::new(ctx.i18n.tr("viewer-loading")).size(typography::BODY_SM)),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .into(),
    };

    let mut footer = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Space::new().width(Length::Fill));
    if let Some(url) = link_target(&props) {
        footer = footer.push(
            button(Text::new(ctx.i18n.tr("viewer-open-original")).size(typography::BODY))
                .on_press(Message::OpenOriginal(url.to_string()))
                .padding(spacing::XXS)
                .style(styles::button::link),
        );
    }

    let card = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(picture)
            .push(footer),
    )
    .max_width(sizing::VIEWER_MAX_WIDTH)
    .padding(spacing::SM)
    .style(styles::container::panel);

    modal::layer(card, Message::Close)
}
