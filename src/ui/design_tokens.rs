// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared constants for the gallery screens, the add-image dialog, the viewer
and the toasts. Styles in [`crate::ui::styles`] and the views read their
colors and measurements from here instead of hard-coding them.

## Example

```
use iced_gallery::ui::design_tokens::{opacity, palette, sizing};
use iced::Color;

// Dimmed backdrop behind the viewer
let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};
assert!(sizing::VIEWER_MAX_WIDTH > sizing::CARD_WIDTH);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Secondary text: dates, file names, upload status.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    /// Disabled button background.
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Toast accents and inline errors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    /// Hover tint on ghost buttons.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Modal backdrop, pressed ghost buttons.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Dialog and viewer panels.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing (4px steps)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    // Spinner sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    /// Gallery card, also the thumbnail width.
    pub const CARD_WIDTH: f32 = 290.0;
    pub const FORM_MODAL_WIDTH: f32 = 450.0;
    /// Picker preview in the upload form.
    pub const PREVIEW_HEIGHT: f32 = 180.0;

    pub const VIEWER_MAX_WIDTH: f32 = 900.0;
    /// The original stays reachable through the viewer's link.
    pub const VIEWER_MAX_IMAGE_HEIGHT: f32 = 600.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Gallery header.
    pub const TITLE_LG: f32 = 30.0;
    /// Dialog and card titles.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// Dates, file names, inline errors.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Borders
// ============================================================================

pub mod border {
    /// Picker and card outlines.
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast outline in the severity color.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Resting buttons and cards.
    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Hovered primary button, toast.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Dialog and viewer panels.
    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::MD < spacing::LG);
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::SURFACE < 1.0);
    assert!(sizing::VIEWER_MAX_WIDTH > sizing::FORM_MODAL_WIDTH);
    assert!(sizing::FORM_MODAL_WIDTH > sizing::CARD_WIDTH);
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};
