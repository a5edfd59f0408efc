// SPDX-License-Identifier: MPL-2.0
//! Modal layers drawn above the main screen.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, mouse_area, opaque, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Dims everything below and centers `content`.
///
/// Clicks that land on the dimmed area emit `on_blur`; clicks inside
/// `content` never reach the layers underneath.
pub fn layer<'a, Message>(
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    opaque(
        mouse_area(center(opaque(content)).style(styles::container::backdrop)).on_press(on_blur),
    )
}

/// Titled card with a close button, as used for the add-image dialog.
pub fn dialog<'a, Message>(
    title: String,
    body: impl Into<Element<'a, Message>>,
    on_close: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new(title).size(typography::TITLE_SM).width(Length::Fill))
        .push(
            button(text("×").size(typography::TITLE_SM))
                .on_press(on_close)
                .padding([0.0, spacing::XS])
                .style(styles::button::ghost),
        );

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(body),
    )
    .width(Length::Fixed(sizing::FORM_MODAL_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}
