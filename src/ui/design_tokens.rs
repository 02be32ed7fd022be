// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants shared by every screen.

## Organization

- **Palette**: Base colors and toast category colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use toast_showcase::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let pressed = Color {
    a: opacity::OVERLAY_PRESSED,
    ..palette::TOAST_SUCCESS
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Toast categories
    pub const TOAST_SUCCESS: Color = Color::from_rgb(0.322, 0.318, 0.965); // #5251F6
    pub const TOAST_ERROR: Color = Color::from_rgb(0.957, 0.263, 0.212); // #F44336
    pub const TOAST_DEFAULT: Color = Color::from_rgb(0.298, 0.686, 0.314); // #4CAF50
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element sizes
    pub const BUTTON_HEIGHT: f32 = 44.0;
    pub const BUTTON_WIDTH: f32 = 260.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 360.0;

    /// Offset of the hard drop shadow under demo buttons.
    pub const BUTTON_SHADOW_OFFSET: f32 = 8.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Screen headings
    pub const TITLE_LG: f32 = 30.0;

    /// Large body - Buttons, toast messages
    pub const BODY_LG: f32 = 16.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 3.0 },
        blur_radius: 4.65,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_HOVER < opacity::OVERLAY_PRESSED);
    assert!(opacity::OVERLAY_PRESSED < 1.0);

    assert!(typography::TITLE_LG > typography::BODY_LG);

    assert!(sizing::TOAST_WIDTH > sizing::BUTTON_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn toast_palette_is_distinct() {
        assert_ne!(palette::TOAST_SUCCESS, palette::TOAST_ERROR);
        assert_ne!(palette::TOAST_SUCCESS, palette::TOAST_DEFAULT);
        assert_ne!(palette::TOAST_ERROR, palette::TOAST_DEFAULT);
    }
}
