// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_vitae::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a lightbox backdrop color
let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
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
    pub const CHARCOAL: Color = Color::from_rgb(0.145, 0.153, 0.173);
    pub const MUTED: Color = Color::from_rgb(0.42, 0.44, 0.48);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.89, 0.9);

    // Surfaces
    pub const SURFACE: Color = Color::from_rgb(0.98, 0.98, 0.99);
    pub const SURFACE_ALT: Color = Color::from_rgb(0.945, 0.953, 0.965);
    pub const SURFACE_DARK: Color = Color::from_rgb(0.1, 0.11, 0.13);
    pub const SURFACE_DARK_ALT: Color = Color::from_rgb(0.14, 0.15, 0.18);

    // Brand colors
    pub const BLUE_ACCENT: Color = Color::from_rgb(0.23, 0.45, 0.85);
    pub const BLUE_LIGHT: Color = Color::from_rgb(0.55, 0.7, 0.95);
    pub const DEEP_INDIGO: Color = Color::from_rgb(0.16, 0.2, 0.42);
    pub const AMBER: Color = Color::from_rgb(0.93, 0.69, 0.23);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Lightbox backdrop dimming the page behind the enlarged image
    pub const BACKDROP: f32 = 0.85;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the fixed navigation bar
    pub const NAVBAR_HEIGHT: f32 = 56.0;

    /// Carousel indicator dot diameter
    pub const DOT_SIZE: f32 = 10.0;

    /// Carousel arrow button size
    pub const ARROW_SIZE: f32 = 40.0;

    /// Maximum content column width inside a page block
    pub const CONTENT_WIDTH: f32 = 960.0;

    /// Carousel image height inside the gallery block
    pub const CAROUSEL_HEIGHT: f32 = 440.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero heading
    pub const DISPLAY: f32 = 42.0;

    /// Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Card titles, animated counters
    pub const TITLE_MD: f32 = 20.0;

    /// Sub-headings inside cards
    pub const TITLE_SM: f32 = 18.0;

    /// Emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Badges, timestamps, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;

    /// Underline thickness for the active nav link
    pub const NAV_UNDERLINE: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
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

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::BLUE_ACCENT.r >= 0.0 && palette::BLUE_ACCENT.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
