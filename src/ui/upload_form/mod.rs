// SPDX-License-Identifier: MPL-2.0
//! Form for adding a new image to the gallery.
//!
//! Acquiring the image happens in two phases. Picking a file validates it
//! locally and shows a preview right away; only a file that passes is then
//! uploaded to asset storage, whose URL becomes part of the record. Pressing
//! submit validates every field, sends the record to the backend and, once
//! the backend answers, reports the outcome and asks the parent to close.
//!
//! State flows down through [`ViewContext`]; changes flow up as [`Event`]s.

mod component;
mod effects;
mod messages;
mod state;
mod view;

pub use component::UpdateContext;
pub use effects::apply_completion;
pub use messages::{Event, Message};
pub use state::{SelectedImage, State, SubmitStep, UploadPhase};
pub use view::ViewContext;

use iced::Element;

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::render(self, ctx)
    }
}

#[cfg(test)]
mod tests;
