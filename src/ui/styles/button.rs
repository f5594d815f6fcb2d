// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (Download CV, Get in touch).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::BLUE_ACCENT)),
            text_color: WHITE,
            border: Border {
                color: palette::DEEP_INDIGO,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::BLUE_LIGHT)),
            text_color: WHITE,
            border: Border {
                color: palette::BLUE_ACCENT,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Outline button used next to the primary action in the hero block.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let text = if theme.extended_palette().is_dark {
        palette::GRAY_100
    } else {
        palette::CHARCOAL
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::BLUE_ACCENT
            })),
            text_color: text,
            border: Border {
                color: palette::BLUE_ACCENT,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: text,
            border: Border {
                color: palette::MUTED,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Navigation link in the fixed navbar. The active link is tinted with
/// the brand color; an underline is drawn separately in the navbar view.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = if theme.extended_palette().is_dark {
            palette::GRAY_100
        } else {
            palette::CHARCOAL
        };
        let text_color = if active || matches!(status, button::Status::Hovered) {
            palette::BLUE_ACCENT
        } else {
            base
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Carousel arrow buttons layered over the gallery image.
pub fn carousel_arrow() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            button::Status::Pressed => opacity::OVERLAY_HOVER,
            _ => opacity::OVERLAY_MEDIUM,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Carousel indicator dot. The dot matching the current image is filled
/// with the brand color, the rest stay muted.
pub fn indicator_dot(current: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = if current {
            palette::BLUE_ACCENT
        } else if matches!(status, button::Status::Hovered) {
            palette::GRAY_200
        } else {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_200
            }
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Light;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::BLUE_ACCENT);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn active_nav_link_is_tinted() {
        let theme = Theme::Light;
        let active = nav_link(true)(&theme, button::Status::Active);
        let idle = nav_link(false)(&theme, button::Status::Active);

        assert_eq!(active.text_color, palette::BLUE_ACCENT);
        assert_ne!(idle.text_color, palette::BLUE_ACCENT);
    }

    #[test]
    fn carousel_arrow_alpha_changes_on_hover() {
        let theme = Theme::Light;
        let style_fn = carousel_arrow();

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn current_dot_is_filled_with_brand_color() {
        let theme = Theme::Light;
        let current = indicator_dot(true)(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = current.background {
            assert_eq!(bg, palette::BLUE_ACCENT);
        } else {
            panic!("Expected background color");
        }
    }
}
