// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the custom styles read on top of the Iced theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub brand_primary: Color,
    pub brand_secondary: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_100,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_700,
        }
    }

    /// Scheme matching the effective brightness of `theme`.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// System mode asks the OS and falls back to dark when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        assert!(ColorScheme::light().surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        assert!(ColorScheme::dark().surface_primary.r < 0.2);
    }

    #[test]
    fn both_schemes_use_violet_brand() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!(scheme.brand_primary.b > scheme.brand_primary.r);
            assert!(scheme.brand_primary.b > scheme.brand_primary.g);
        }
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        assert!(!ThemeMode::Light.is_dark());
        // System depends on the host; only check it does not panic.
        let _ = ThemeMode::System.iced_theme();
    }

    #[test]
    fn scheme_follows_theme_brightness() {
        assert!(ColorScheme::for_theme(&Theme::Dark).surface_primary.r < 0.2);
        assert!(ColorScheme::for_theme(&Theme::Light).surface_primary.r > 0.9);
    }
}
