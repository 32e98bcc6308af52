// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants of the island.

## Organization

- **Palette**: Base colors
- **Opacity**: Surface opacity per backdrop
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Icon and action sizes
- **Typography**: Font size scale
- **Radius**: Corner radii
- **Shadow**: Elevation to shadow mapping

## Examples

```
use iced_island::ui::design_tokens::{palette, opacity};
use iced::Color;

let surface = Color {
    a: opacity::SURFACE_SOLID,
    ..palette::SURFACE
};
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
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.63);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.82);

    /// Island background, near black so it reads as part of the screen edge.
    pub const SURFACE: Color = Color::from_rgb(0.04, 0.04, 0.05);

    /// Action chips.
    pub const CHIP: Color = Color::from_rgb(0.17, 0.17, 0.19);

    /// Monogram disc shown when an app has no icon.
    pub const ACCENT: Color = Color::from_rgb(0.4, 0.7, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Surface over a blurred backdrop.
    pub const SURFACE_FROSTED: f32 = 0.72;
    /// Surface when nothing behind it is blurred.
    pub const SURFACE_SOLID: f32 = 0.96;
    pub const BORDER: f32 = 0.08;
    pub const SHADOW: f32 = 0.45;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// App icon in the collapsed pill.
    pub const ICON_SM: f32 = 20.0;
    /// App icon in the expanded card.
    pub const ICON_LG: f32 = 36.0;
    pub const ACTION_HEIGHT: f32 = 30.0;

    /// Room around the island inside its window, so shadows and overshoot
    /// are not clipped.
    pub const WINDOW_MARGIN: f32 = 32.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Expanded headline.
    pub const TITLE: f32 = 16.0;
    /// Collapsed headline and expanded body.
    pub const BODY: f32 = 14.0;
    /// App label, age and action labels.
    pub const CAPTION: f32 = 11.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const CHIP: f32 = 15.0;
    /// Expanded card corners.
    pub const CARD: f32 = 28.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    /// Shadow for a surface raised by `elevation` logical pixels.
    #[must_use]
    pub fn elevated(elevation: f32) -> Shadow {
        Shadow {
            color: Color {
                a: opacity::SHADOW,
                ..palette::BLACK
            },
            offset: Vector {
                x: 0.0,
                y: elevation / 3.0,
            },
            blur_radius: elevation,
        }
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::SURFACE_FROSTED < opacity::SURFACE_SOLID);
    assert!(opacity::SURFACE_SOLID <= opacity::OPAQUE);

    assert!(sizing::ICON_LG > sizing::ICON_SM);
    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }

    #[test]
    fn higher_elevation_casts_larger_shadow() {
        let low = shadow::elevated(12.0);
        let high = shadow::elevated(16.0);
        assert!(high.blur_radius > low.blur_radius);
        assert!(high.offset.y > low.offset.y);
    }
}
