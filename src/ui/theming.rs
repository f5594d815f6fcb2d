// SPDX-License-Identifier: MPL-2.0
//! Theme mode resolution and the application color scheme.
//!
//! `ThemeMode` is what the config stores; `AppTheme` resolves it once into a
//! concrete `ColorScheme` and produces the Iced theme the whole UI renders
//! with. System detection happens at resolution time, not per frame.

use crate::ui::design_tokens::palette;
use dark_light;
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface: Color,
    pub text: Color,
    pub brand: Color,
    pub accent: Color,
    pub success: Color,
    pub danger: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::SURFACE,
            text: palette::CHARCOAL,
            brand: palette::BLUE_ACCENT,
            accent: palette::AMBER,
            success: palette::SUCCESS_500,
            danger: palette::ERROR_500,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::SURFACE_DARK,
            text: palette::GRAY_100,
            brand: palette::BLUE_LIGHT,
            accent: palette::AMBER,
            success: palette::SUCCESS_500,
            danger: palette::ERROR_500,
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
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }
}

/// A theme mode resolved to a concrete scheme.
///
/// Construction queries the system exactly once for `ThemeMode::System`;
/// callers cache the result rather than re-resolving.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, dark }
    }

    /// Builds the Iced theme the application renders with.
    ///
    /// Style functions recover the light/dark split later through
    /// `extended_palette().is_dark`.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        let name = if self.dark { "Vitae Dark" } else { "Vitae Light" };

        Theme::custom(
            name.to_owned(),
            Palette {
                background: self.colors.surface,
                text: self.colors.text,
                primary: self.colors.brand,
                success: self.colors.success,
                warning: self.colors.accent,
                danger: self.colors.danger,
            },
        )
    }
}
