// SPDX-License-Identifier: MPL-2.0
//! Upload form layout.

use super::messages::Message;
use super::state::{State, UploadPhase};
use crate::domain::validation::Field;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, image, text, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub spinner_rotation: f32,
}

pub fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let title_input = text_input(&i18n.tr("form-title-placeholder"), state.title())
        .size(typography::BODY)
        .padding(spacing::XS);
    let description_input =
        text_input(&i18n.tr("form-description-placeholder"), state.description())
            .size(typography::BODY)
            .padding(spacing::XS);

    // Inputs are frozen while a submission is in flight
    let (title_input, description_input) = if state.is_submitting() {
        (title_input, description_input)
    } else {
        (
            title_input
                .on_input(Message::TitleChanged)
                .on_submit(Message::Submit),
            description_input
                .on_input(Message::DescriptionChanged)
                .on_submit(Message::Submit),
        )
    };

    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(image_field(state, &ctx))
        .push(field_block(title_input.into(), state, Field::Title, i18n))
        .push(field_block(description_input.into(), state, Field::Description, i18n))
        .push(submit_button(state, &ctx))
        .into()
}

fn image_field<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let selected = state.image.as_ref();

    let placeholder_key = if selected.is_some() {
        "form-image-change"
    } else {
        "form-image-pick"
    };
    let preview: Element<'a, Message> = match selected.and_then(|s| s.preview.clone()) {
        Some(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Text::new(i18n.tr(placeholder_key)).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(sizing::PREVIEW_HEIGHT))
            .into(),
    };

    let mut layers = Stack::new().push(preview);
    if *state.upload_phase() == UploadPhase::Uploading {
        layers = layers.push(
            Container::new(
                AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation).into_element(),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fixed(sizing::PREVIEW_HEIGHT)),
        );
    }

    let mut picker = button(layers).padding(0.0).width(Length::Fill);
    if !state.is_submitting() {
        picker = picker.on_press(Message::PickImage);
    }
    let has_error = state.visible_error(Field::Image).is_some();
    let picker = Container::new(picker.style(button::text))
        .padding(spacing::XXS)
        .style(styles::container::picker(has_error));

    let status_key = match state.upload_phase() {
        UploadPhase::Uploading => Some("form-image-uploading"),
        UploadPhase::Uploaded { .. } => Some("form-image-uploaded"),
        UploadPhase::Failed => Some("form-image-upload-failed"),
        UploadPhase::Idle => None,
    };

    let mut column = Column::new().spacing(spacing::XXS).push(picker);
    if let Some(file) = state.image_file() {
        let mut line = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(file.name.clone()).size(typography::CAPTION).width(Length::Fill));
        if let Some(key) = status_key {
            let color = if *state.upload_phase() == UploadPhase::Failed {
                palette::ERROR_500
            } else {
                palette::GRAY_400
            };
            line = line.push(Text::new(i18n.tr(key)).size(typography::CAPTION).color(color));
        }
        column = column.push(line);
    }
    if let Some(error) = state.visible_error(Field::Image) {
        column = column.push(error_text(i18n.tr(error.i18n_key(Field::Image))));
    }
    column.into()
}

fn field_block<'a>(
    input: Element<'a, Message>,
    state: &State,
    field: Field,
    i18n: &I18n,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS).push(input);
    if let Some(error) = state.visible_error(field) {
        column = column.push(error_text(i18n.tr(error.i18n_key(field))));
    }
    column.into()
}

fn error_text<'a>(message: String) -> Text<'a> {
    text(message).size(typography::CAPTION).color(palette::ERROR_500)
}

fn submit_button<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label: Element<'a, Message> = if state.is_submitting() {
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                AnimatedSpinner::new(palette::WHITE, ctx.spinner_rotation)
                    .size(sizing::ICON_SM)
                    .into_element(),
            )
            .push(Text::new(ctx.i18n.tr("form-submitting")))
            .into()
    } else {
        Text::new(ctx.i18n.tr("form-submit")).into()
    };

    let content = Container::new(label)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::BUTTON_HEIGHT));

    let mut submit = button(content)
        .width(Length::Fill)
        .padding([0.0, spacing::MD])
        .style(styles::button::primary);
    if state.can_submit() {
        submit = submit.on_press(Message::Submit);
    }
    submit.into()
}
