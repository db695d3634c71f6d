// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the landing page design tokens.

## Organization

- **Palette**: Base colors, including the brand gradient stops
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_landing::ui::design_tokens::{palette, spacing};

let accent = palette::BRAND_BLUE;
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
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.04, 0.04, 0.05);
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.33);
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.63);
    pub const GRAY_200: Color = Color::from_rgb(0.85, 0.85, 0.87);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.95, 0.96);

    // Brand gradient (#0070f3 -> #7928ca)
    pub const BRAND_BLUE: Color = Color::from_rgb(0.0, 0.439, 0.953);
    pub const BRAND_PURPLE: Color = Color::from_rgb(0.475, 0.157, 0.792);

    // Counter demo window dots
    pub const DOT_RED: Color = Color::from_rgb(1.0, 0.373, 0.341);
    pub const DOT_YELLOW: Color = Color::from_rgb(0.996, 0.737, 0.18);
    pub const DOT_GREEN: Color = Color::from_rgb(0.157, 0.784, 0.251);

    // Code hint syntax colors
    pub const CODE_FUNCTION: Color = Color::from_rgb(0.486, 0.227, 0.929);
    pub const CODE_FIELD: Color = Color::from_rgb(0.133, 0.773, 0.369);
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
    pub const XXL: f32 = 64.0; // 8 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Square brand mark in the header.
    pub const BRAND_MARK: f32 = 28.0;
    /// Maximum width of the header toolbar.
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
    /// Maximum width of the hero column.
    pub const HERO_MAX_WIDTH: f32 = 900.0;
    /// Width of the counter demo card.
    pub const DEMO_CARD_WIDTH: f32 = 360.0;
    /// Diameter of the window dots on the demo card.
    pub const DOT: f32 = 10.0;
    /// Width of the counter +/- buttons.
    pub const COUNTER_BUTTON: f32 = 40.0;
    /// Width of the language switcher.
    pub const SWITCHER_WIDTH: f32 = 140.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const DISPLAY: f32 = 48.0;
    /// Hero subtitle and counter value.
    pub const TITLE_MD: f32 = 20.0;
    /// Standard body text.
    pub const BODY: f32 = 14.0;
    /// Badges, code hints.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(typography::DISPLAY > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
};
