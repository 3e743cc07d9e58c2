// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Named constants for every color, size and spacing the screens use, so the
upload card, toasts and edit page stay visually consistent.

## Organization

- **Palette**: grays, the violet brand scale and the four severity colors
- **Opacity**: alpha levels for hovered, pressed and translucent surfaces
- **Spacing**: paddings and gaps on a 4px step
- **Sizing**: fixed widths and heights of the upload and edit layouts
- **Typography**: font sizes from screen titles down to error hints
- **Border**, **Radius**, **Shadow**: card and button outlines

## Examples

```
use spotnxt::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let hovered_brand = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::PRIMARY_500
};
let card_padding = spacing::XL;
```

The compile-time block at the bottom rejects edits that break the ordering
of a scale.
"#]

use iced::Color;

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Violet brand scale; `PRIMARY_500` is the Generate button.
    pub const PRIMARY_100: Color = Color::from_rgb(0.93, 0.9, 1.0);
    pub const PRIMARY_400: Color = Color::from_rgb(0.62, 0.5, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.49, 0.36, 0.93);
    pub const PRIMARY_600: Color = Color::from_rgb(0.4, 0.27, 0.84);
    pub const PRIMARY_700: Color = Color::from_rgb(0.32, 0.2, 0.7);

    // Toast severities
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    /// Hovered toast dismiss button.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Pressed toast dismiss button.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Upload card over the window background.
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const PROGRESS_BAR_HEIGHT: f32 = 12.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    pub const CARD_WIDTH: f32 = 560.0;
    pub const URL_INPUT_WIDTH: f32 = 360.0;
    pub const EMAIL_INPUT_WIDTH: f32 = 320.0;

    pub const DROP_ZONE_HEIGHT: f32 = 220.0;

    /// Thumbnail preview bounds; larger images are scaled down to fit.
    pub const THUMBNAIL_MAX_WIDTH: f32 = 480.0;
    pub const THUMBNAIL_MAX_HEIGHT: f32 = 360.0;
}

pub mod typography {
    /// Screen headings ("Upload your video", "Coming Soon").
    pub const TITLE_LG: f32 = 30.0;
    /// Result heading above the thumbnail.
    pub const TITLE_SM: f32 = 18.0;
    /// Primary actions and the drop hint.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Inline error under the upload affordance.
    pub const BODY_SM: f32 = 13.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Drop zone and toast accent.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::CARD_WIDTH > sizing::THUMBNAIL_MAX_WIDTH);
    assert!(sizing::CARD_WIDTH > sizing::URL_INPUT_WIDTH);
    assert!(sizing::DROP_ZONE_HEIGHT > sizing::PROGRESS_BAR_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::LG > radius::MD && radius::MD > radius::SM);
};
