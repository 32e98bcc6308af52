// SPDX-License-Identifier: MPL-2.0
//! View frames: everything the compositor needs to place and draw the island.

use super::motion::{mix, Lerp};

// =============================================================================
// Geometry
// =============================================================================

/// Fixed island geometry, in logical pixels.
pub mod geometry {
    use super::Size;

    /// Size of the compact pill.
    pub const COLLAPSED: Size = Size::new(140.0, 40.0);
    /// Size of the expanded card.
    pub const EXPANDED: Size = Size::new(340.0, 160.0);
    /// Distance between the top edge of the display and the island.
    pub const TOP_OFFSET: f32 = 12.0;
}

/// Width and height in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Lerp for Size {
    fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            width: mix(self.width, to.width, t),
            height: mix(self.height, to.height, t),
        }
    }
}

// =============================================================================
// Appearance
// =============================================================================

/// Scale and opacity applied on top of the size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub scale: f32,
    pub opacity: f32,
}

impl Appearance {
    /// Fully shown.
    pub const VISIBLE: Self = Self {
        scale: 1.0,
        opacity: 1.0,
    };

    /// Start of the entrance and end of the exit.
    pub const RECEDED: Self = Self {
        scale: 0.8,
        opacity: 0.0,
    };
}

impl Default for Appearance {
    fn default() -> Self {
        Self::VISIBLE
    }
}

impl Lerp for Appearance {
    fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            scale: mix(self.scale, to.scale, t),
            // Overshooting curves may leave the unit range; opacity must not.
            opacity: mix(self.opacity, to.opacity, t).clamp(0.0, 1.0),
        }
    }
}

// =============================================================================
// Layout, variant, backdrop
// =============================================================================

/// Which sub-view is visible inside the island.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Collapsed,
    Expanded,
}

/// Cosmetic variant of the island surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Collapsed,
    Expanded,
}

impl Variant {
    /// Shadow elevation for this variant.
    #[must_use]
    pub fn elevation(self) -> f32 {
        match self {
            Variant::Collapsed => 12.0,
            Variant::Expanded => 16.0,
        }
    }
}

/// Background treatment behind the island.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backdrop {
    /// Translucent, relies on the compositor blurring what is behind.
    Frosted,
    /// Opaque fallback when blur is not available.
    #[default]
    Solid,
}

// =============================================================================
// ViewFrame
// =============================================================================

/// Complete visual description of the island at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFrame {
    pub size: Size,
    pub appearance: Appearance,
    pub layout: Layout,
    pub variant: Variant,
    pub backdrop: Backdrop,
    /// Vertical offset from the top of the display; the island is always
    /// horizontally centered.
    pub top_offset: f32,
}

impl ViewFrame {
    /// The frame a freshly attached island starts from.
    #[must_use]
    pub fn collapsed(backdrop: Backdrop) -> Self {
        Self {
            size: geometry::COLLAPSED,
            appearance: Appearance::VISIBLE,
            layout: Layout::Collapsed,
            variant: Variant::Collapsed,
            backdrop,
            top_offset: geometry::TOP_OFFSET,
        }
    }

    /// Size after scale is applied.
    #[must_use]
    pub fn scaled_size(&self) -> Size {
        Size::new(
            self.size.width * self.appearance.scale,
            self.size.height * self.appearance.scale,
        )
    }
}

impl Default for ViewFrame {
    fn default() -> Self {
        Self::collapsed(Backdrop::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn collapsed_frame_uses_fixed_geometry() {
        let frame = ViewFrame::collapsed(Backdrop::Solid);
        assert_eq!(frame.size, geometry::COLLAPSED);
        assert_eq!(frame.layout, Layout::Collapsed);
        assert_relative_eq!(frame.top_offset, 12.0);
    }

    #[test]
    fn size_lerp_is_componentwise() {
        let mid = geometry::COLLAPSED.lerp(geometry::EXPANDED, 0.5);
        assert_relative_eq!(mid.width, 240.0);
        assert_relative_eq!(mid.height, 100.0);
    }

    #[test]
    fn appearance_opacity_stays_in_unit_range() {
        let over = Appearance::RECEDED.lerp(Appearance::VISIBLE, 1.2);
        assert_relative_eq!(over.opacity, 1.0);
        assert!(over.scale > 1.0);
    }

    #[test]
    fn expanded_variant_is_elevated() {
        assert!(Variant::Expanded.elevation() > Variant::Collapsed.elevation());
    }

    #[test]
    fn scaled_size_applies_scale() {
        let mut frame = ViewFrame::default();
        frame.appearance.scale = 0.5;
        assert_relative_eq!(frame.scaled_size().width, 70.0);
        assert_relative_eq!(frame.scaled_size().height, 20.0);
    }
}
