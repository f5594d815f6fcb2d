// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Alternating page block backgrounds. Even-indexed blocks use the primary
/// surface, odd-indexed ones the secondary, so neighbouring sections read
/// as distinct bands the way the source layout alternates white and gray.
pub fn block(alt: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let bg = match (theme.extended_palette().is_dark, alt) {
            (false, false) => palette::SURFACE,
            (false, true) => palette::SURFACE_ALT,
            (true, false) => palette::SURFACE_DARK,
            (true, true) => palette::SURFACE_DARK_ALT,
        };

        container::Style {
            background: Some(Background::Color(bg)),
            ..Default::default()
        }
    }
}

/// Card surface for education entries, projects, publications and awards.
pub fn card(theme: &Theme) -> container::Style {
    let bg = if theme.extended_palette().is_dark {
        palette::SURFACE_DARK_ALT
    } else {
        palette::WHITE
    };

    container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::MUTED
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Fixed navigation bar surface.
pub fn navbar(theme: &Theme) -> container::Style {
    let bg = if theme.extended_palette().is_dark {
        palette::SURFACE_DARK
    } else {
        palette::WHITE
    };

    container::Style {
        background: Some(Background::Color(bg)),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Dimming backdrop behind the lightbox image.
pub fn lightbox_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Neutral placeholder drawn where a bundled image is missing.
pub fn image_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
