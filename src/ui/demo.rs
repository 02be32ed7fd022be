// SPDX-License-Identifier: MPL-2.0
//! Pop-up toast demo screen.
//!
//! A column of buttons that raise toasts through the registration bridge.
//! The screen never touches the toast manager directly.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::{Bridge, Category};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Color, Element, Length};

pub const SUCCESS_MESSAGE: &str = "✅ Success! completed successfully. 🎉";
pub const ERROR_MESSAGE: &str = "⚠️ Error! Something went wrong. 🚨";
pub const INFO_MESSAGE: &str = "ℹ️ Heads up! This is a neutral message.";

/// Number of toasts raised by the burst button.
pub const BURST_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ShowSuccess,
    ShowError,
    ShowInfo,
    /// Several identical toasts in one go; each one runs its own lifecycle.
    ShowBurst,
}

/// Forwards a button press to the bridge.
pub fn update(message: Message, bridge: &Bridge) {
    match message {
        Message::ShowSuccess => bridge.notify(SUCCESS_MESSAGE, Category::Success),
        Message::ShowError => bridge.notify(ERROR_MESSAGE, Category::Error),
        Message::ShowInfo => bridge.notify(INFO_MESSAGE, Category::Default),
        Message::ShowBurst => {
            for _ in 0..BURST_SIZE {
                bridge.notify(SUCCESS_MESSAGE, Category::Success);
            }
        }
    }
}

pub fn view<'a>() -> Element<'a, Message> {
    let title = Text::new("Pop-up Toast").size(typography::TITLE_LG);

    let buttons = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(demo_button("Show Success Toast", palette::TOAST_SUCCESS, Message::ShowSuccess))
        .push(demo_button("Show Error Toast", palette::TOAST_ERROR, Message::ShowError))
        .push(demo_button("Show Info Toast", palette::TOAST_DEFAULT, Message::ShowInfo))
        .push(demo_button(
            "Show Three At Once",
            palette::GRAY_700,
            Message::ShowBurst,
        ));

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(buttons);

    Container::new(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn demo_button<'a>(label: &'a str, fill: Color, message: Message) -> Element<'a, Message> {
    let label = Container::new(Text::new(label).size(typography::BODY_LG))
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    button(label)
        .width(Length::Fixed(sizing::BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press(message)
        .style(styles::button_raised(fill))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Manager;

    #[test]
    fn buttons_reach_the_mounted_manager() {
        let bridge = Bridge::new();
        let mut manager = Manager::new();
        manager.mount(&bridge);

        update(Message::ShowSuccess, &bridge);
        update(Message::ShowError, &bridge);
        update(Message::ShowInfo, &bridge);
        manager.pump();

        let categories: Vec<Category> = manager
            .active()
            .map(|entry| entry.notification().category())
            .collect();
        assert_eq!(
            categories,
            [Category::Success, Category::Error, Category::Default]
        );
    }

    #[test]
    fn burst_produces_distinct_entries() {
        let bridge = Bridge::new();
        let mut manager = Manager::new();
        manager.mount(&bridge);

        update(Message::ShowBurst, &bridge);

        assert_eq!(manager.pump(), BURST_SIZE);
    }

    #[test]
    fn presses_without_manager_are_dropped() {
        let bridge = Bridge::new();
        update(Message::ShowError, &bridge);

        let mut manager = Manager::new();
        manager.mount(&bridge);
        assert_eq!(manager.pump(), 0);
    }

    #[test]
    fn view_builds() {
        let _ = view();
    }
}
