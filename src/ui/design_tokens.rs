// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (zinc neutrals)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Breakpoint**: Window widths where the layout changes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Translucent header background
let header_bg = Color {
    a: opacity::SURFACE,
    ..palette::WHITE
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

Page layout heights are derived from these values. Changing a size here
moves section offsets and scroll targets with it.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Zinc neutrals
    pub const ZINC_50: Color = Color::from_rgb(0.980, 0.980, 0.980);
    pub const ZINC_100: Color = Color::from_rgb(0.957, 0.957, 0.961);
    pub const ZINC_200: Color = Color::from_rgb(0.894, 0.894, 0.906);
    pub const ZINC_300: Color = Color::from_rgb(0.831, 0.831, 0.847);
    pub const ZINC_400: Color = Color::from_rgb(0.631, 0.631, 0.667);
    pub const ZINC_500: Color = Color::from_rgb(0.443, 0.443, 0.478);
    pub const ZINC_600: Color = Color::from_rgb(0.322, 0.322, 0.357);
    pub const ZINC_700: Color = Color::from_rgb(0.247, 0.247, 0.275);
    pub const ZINC_800: Color = Color::from_rgb(0.153, 0.153, 0.165);
    pub const ZINC_900: Color = Color::from_rgb(0.094, 0.094, 0.106);
    pub const ZINC_950: Color = Color::from_rgb(0.035, 0.035, 0.043);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Sticky header and floating panels
    pub const SURFACE: f32 = 0.8;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;

    /// Vertical padding of a page section on wide windows
    pub const SECTION: f32 = 96.0;
    /// Vertical padding of a page section on narrow windows
    pub const SECTION_COMPACT: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_XS: f32 = 14.0;
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 24.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;
    pub const TEXT_AREA_HEIGHT: f32 = 120.0;

    /// Sticky header height
    pub const HEADER_HEIGHT: f32 = 64.0;

    /// Widest the centered page content grows
    pub const CONTENT_MAX_WIDTH: f32 = 1024.0;

    /// Round portrait in the hero section
    pub const PORTRAIT: f32 = 280.0;

    // Floating widgets
    pub const FLOATING_BUTTON: f32 = 48.0;
    pub const CHAT_WIDTH: f32 = 320.0;
    pub const CHAT_HEIGHT: f32 = 420.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Breakpoints
// ============================================================================

pub mod breakpoint {
    /// Card grids switch from one to two columns.
    pub const SM: f32 = 640.0;
    /// Navigation collapses into a menu below this width.
    pub const MD: f32 = 768.0;
    /// Card grids switch from two to three columns.
    pub const LG: f32 = 1024.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero name
    //! - Titles: section and card headings
    //! - Body: primary content text
    //! - Caption: dates, tags, secondary info

    /// Hero name
    pub const DISPLAY: f32 = 48.0;

    /// Section headings
    pub const TITLE_LG: f32 = 36.0;

    /// Card headings, brand name
    pub const TITLE_MD: f32 = 20.0;

    /// Sub-headings
    pub const TITLE_SM: f32 = 18.0;

    /// Lead paragraphs
    pub const BODY_LG: f32 = 18.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Badges, timestamps
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Cards, inputs, separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Toast accents, focused inputs
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 6.0;
    pub const LG: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.1,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::SECTION_COMPACT);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(breakpoint::SM < breakpoint::MD);
    assert!(breakpoint::MD < breakpoint::LG);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::INPUT_HEIGHT >= sizing::BUTTON_HEIGHT);
    assert!(typography::DISPLAY > typography::TITLE_LG);
};
