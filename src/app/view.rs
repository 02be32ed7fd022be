// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::demo;
use crate::ui::notifications::{Manager, Toast};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub notifications: &'a Manager,
    pub top_inset: f32,
}

/// Renders the demo screen with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = demo::view().map(Message::Demo);
    let overlay = Toast::view_overlay(ctx.notifications, ctx.top_inset);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(screen)
        .push(overlay)
        .into()
}
