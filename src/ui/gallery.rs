// SPDX-License-Identifier: MPL-2.0
//! Home screen: the grid of gallery cards.

use crate::application::query::QueryStatus;
use crate::domain::gallery::{GalleryImage, ImagePage};
use crate::i18n::fluent::I18n;
use crate::ui::image_store::ImageStore;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use chrono::{DateTime, Local};
use iced::widget::{button, image, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Font, Length};

#[derive(Debug, Clone)]
pub enum Message {
    AddImage,
    Open(GalleryImage),
    LoadMore,
    Retry,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: Option<&'a ImagePage>,
    pub status: QueryStatus,
    pub images: &'a ImageStore,
    pub spinner_rotation: f32,
}

/// Formats a creation timestamp (microseconds since the epoch) in local time.
#[must_use]
pub fn format_timestamp(ts_micros: i64) -> Option<String> {
    DateTime::from_timestamp_micros(ts_micros)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("gallery-title"))
                .size(typography::TITLE_LG)
                .width(Length::Fill),
        )
        .push(
            button(Text::new(ctx.i18n.tr("gallery-add-button")).size(typography::BODY))
                .on_press(Message::AddImage)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    let body: Element<'a, Message> = match (ctx.page, &ctx.status) {
        (None, QueryStatus::Failed(_)) => load_error(ctx.i18n),
        (None, _) => centered_spinner(ctx.spinner_rotation, ctx.i18n.tr("gallery-loading")),
        (Some(page), _) if page.data.is_empty() => {
            Container::new(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY_LG))
                .center_x(Length::Fill)
                .padding(spacing::XXL)
                .into()
        }
        (Some(page), status) => {
            let cards: Vec<Element<'a, Message>> = page
                .data
                .iter()
                .map(|item| card(item, &ctx))
                .collect();

            let mut column = Column::new().spacing(spacing::LG).push(
                Row::with_children(cards)
                    .spacing(spacing::MD)
                    .wrap()
                    .vertical_spacing(spacing::MD),
            );

            if *status == QueryStatus::Loading {
                column = column.push(
                    Container::new(
                        AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation)
                            .size(sizing::ICON_LG)
                            .into_element(),
                    )
                    .center_x(Length::Fill),
                );
            } else if let QueryStatus::Failed(_) = status {
                column = column.push(load_error(ctx.i18n));
            } else if page.has_more() {
                column = column.push(
                    Container::new(
                        button(Text::new(ctx.i18n.tr("gallery-load-more")))
                            .on_press(Message::LoadMore)
                            .padding([spacing::XS, spacing::LG])
                            .style(styles::button::primary),
                    )
                    .center_x(Length::Fill),
                );
            }
            column.into()
        }
    };

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header)
        .push(scrollable(body).height(Length::Fill))
        .into()
}

fn card<'a>(item: &'a GalleryImage, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match ctx.images.handle(&item.url) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(
            AnimatedSpinner::new(palette::GRAY_400, ctx.spinner_rotation)
                .size(sizing::ICON_MD)
                .into_element(),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .into(),
    };

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .padding(spacing::SM)
        .push(
            Text::new(item.title.as_str())
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: iced::font::Weight::Bold,
                    ..Font::DEFAULT
                }),
        )
        .push(Text::new(item.description.as_str()).size(typography::BODY));
    if let Some(date) = format_timestamp(item.ts) {
        details = details.push(
            Text::new(ctx.i18n.tr_with_args("gallery-card-date", &[("date", date.as_str())]))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    button(Column::new().push(thumbnail).push(details))
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(0.0)
        .on_press(Message::Open(item.clone()))
        .style(styles::button::card)
        .into()
}

fn centered_spinner<'a>(rotation: f32, label: String) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(AnimatedSpinner::new(palette::PRIMARY_500, rotation).into_element())
            .push(Text::new(label).size(typography::BODY)),
    )
    .center_x(Length::Fill)
    .padding(spacing::XXL)
    .into()
}

fn load_error<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(i18n.tr("gallery-load-error"))
                    .size(typography::BODY)
                    .color(palette::ERROR_500),
            )
            .push(
                button(Text::new(i18n.tr("gallery-retry")))
                    .on_press(Message::Retry)
                    .style(styles::button::primary),
            )
            .push(Space::new().height(Length::Fixed(spacing::XS))),
    )
    .center_x(Length::Fill)
    .padding(spacing::XL)
    .into()
}
