// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface holding a screen's content.
///
/// Derived from the active theme background with slight transparency so it
/// reads in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Drop target; highlighted while files hover over the window.
pub fn drop_zone(dragging: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let (background, border_color) = if dragging {
            (colors.brand_secondary, colors.brand_primary)
        } else {
            (colors.surface_secondary, palette::GRAY_400)
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            text_color: Some(colors.text_primary),
            ..Default::default()
        }
    }
}

/// Frame around the generated thumbnail.
pub fn thumbnail_frame(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
