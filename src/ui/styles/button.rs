// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, GRAY_200, GRAY_400, WHITE},
    radius, shadow, sizing,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Solid button with a hard, unblurred drop shadow.
///
/// Pressing the button collapses the shadow so it appears to sink into place.
pub fn raised(fill: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let hard_shadow = Shadow {
            color: BLACK,
            offset: Vector::new(sizing::BUTTON_SHADOW_OFFSET, sizing::BUTTON_SHADOW_OFFSET),
            blur_radius: 0.0,
        };

        let (background, shadow) = match status {
            button::Status::Active => (fill, hard_shadow),
            button::Status::Hovered => (
                Color {
                    a: opacity::OVERLAY_HOVER,
                    ..fill
                },
                hard_shadow,
            ),
            button::Status::Pressed => (
                Color {
                    a: opacity::OVERLAY_PRESSED,
                    ..fill
                },
                shadow::NONE,
            ),
            button::Status::Disabled => (GRAY_200, shadow::NONE),
        };

        let text_color = if status == button::Status::Disabled {
            GRAY_400
        } else {
            WHITE
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::NONE.into(),
                ..Border::default()
            },
            shadow,
            snap: true,
        }
    }
}
