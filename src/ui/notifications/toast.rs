// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering active notifications.
//!
//! Toasts are colored cards stacked from the top of the window. Each card drops
//! in from above while fading in and rises back out on exit. Opacity and drop
//! offset come straight from each entry's lifecycle, so the view holds no
//! animation state of its own.

use super::lifecycle::Visual;
use super::manager::{Entry, Manager};
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Shadow, Theme};

/// Vertical distance travelled during the enter and exit phases.
///
/// Each card sits in a slot this much taller than itself, so a moving card
/// never shifts its neighbours.
const DROP_DISTANCE: f32 = spacing::MD;

/// Opacity of the card shadow when the toast is fully visible.
const SHADOW_ALPHA: f32 = 0.27;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view<'a, M: 'a>(entry: &'a Entry) -> Element<'a, M> {
        let notification = entry.notification();
        let category = notification.category();
        let visual = entry.visual();
        let foreground = faded(palette::WHITE, visual.opacity);

        let glyph = Text::new(category.glyph())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(foreground),
            });

        let message = Text::new(notification.message())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(foreground),
            });

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(Container::new(message).center_x(Length::Fill));

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::MD)
            .style(move |_theme: &Theme| toast_container_style(category.color(), visual));

        Container::new(card).padding(slot_padding(visual)).into()
    }

    /// Renders every active toast, in insertion order, stacked downward from
    /// `top_inset` pixels below the top edge.
    ///
    /// Insets smaller than the drop distance rest at the drop distance.
    pub fn view_overlay<'a, M: 'a>(manager: &'a Manager, top_inset: f32) -> Element<'a, M> {
        let toasts: Vec<Element<'a, M>> = manager.active().map(|entry| Self::view(entry)).collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts).align_x(alignment::Horizontal::Center);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Top)
            .padding(Padding {
                top: overlay_top(top_inset),
                right: spacing::MD,
                bottom: 0.0,
                left: spacing::MD,
            })
            .into()
    }
}

/// Splits the drop distance around a card: all above it at rest, all below
/// it when hidden.
fn slot_padding(visual: Visual) -> Padding {
    let lifted = visual.offset.clamp(0.0, 1.0) * DROP_DISTANCE;
    Padding {
        top: DROP_DISTANCE - lifted,
        bottom: lifted,
        ..Padding::ZERO
    }
}

fn overlay_top(top_inset: f32) -> f32 {
    (top_inset - DROP_DISTANCE).max(0.0)
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(background: Color, visual: Visual) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(Background::Color(faded(background, visual.opacity))),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: faded(palette::BLACK, SHADOW_ALPHA * visual.opacity),
            ..shadow::MD
        },
        text_color: Some(faded(palette::WHITE, visual.opacity)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Category;

    #[test]
    fn toast_container_style_uses_category_color() {
        let accent = Category::Error.color();
        let style = toast_container_style(accent, Visual::RESTING);

        assert_eq!(style.background, Some(Background::Color(accent)));
    }

    #[test]
    fn hidden_toast_is_transparent() {
        let style = toast_container_style(Category::Success.color(), Visual::HIDDEN);

        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 0.0),
            other => panic!("expected color background, got {other:?}"),
        }
        assert_eq!(style.shadow.color.a, 0.0);
    }

    #[test]
    fn faded_clamps_opacity() {
        assert_eq!(faded(palette::WHITE, 2.0).a, 1.0);
        assert_eq!(faded(palette::WHITE, -1.0).a, 0.0);
    }

    #[test]
    fn hidden_card_is_lifted_above_its_resting_place() {
        let hidden = slot_padding(Visual::HIDDEN);
        let resting = slot_padding(Visual::RESTING);

        assert_eq!(hidden.top, 0.0);
        assert_eq!(resting.top, DROP_DISTANCE);
        assert_eq!(resting.bottom, 0.0);
    }

    #[test]
    fn slot_height_is_constant_while_moving() {
        for offset in [0.0, 0.25, 0.5, 1.0] {
            let padding = slot_padding(Visual {
                opacity: 1.0,
                offset,
            });
            assert_eq!(padding.top + padding.bottom, DROP_DISTANCE);
            assert_eq!(padding.left, 0.0);
        }
    }

    #[test]
    fn resting_card_lands_on_top_inset() {
        let top_inset = 20.0;
        let resting_top = overlay_top(top_inset) + slot_padding(Visual::RESTING).top;
        assert_eq!(resting_top, top_inset);

        assert_eq!(overlay_top(0.0), 0.0);
    }

    #[test]
    fn overlay_renders_with_and_without_toasts() {
        let mut manager = Manager::new();
        {
            let _empty: Element<'_, ()> = Toast::view_overlay(&manager, 20.0);
        }

        manager.enqueue("hello", Category::Success);
        let _filled: Element<'_, ()> = Toast::view_overlay(&manager, 20.0);
    }
}
