// SPDX-License-Identifier: MPL-2.0
//! Styles for the island surface and its action chips.

use crate::domain::overlay::{Backdrop, ViewFrame};
use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Applies the frame's opacity to a color.
fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn surface_alpha(backdrop: Backdrop) -> f32 {
    match backdrop {
        Backdrop::Frosted => opacity::SURFACE_FROSTED,
        Backdrop::Solid => opacity::SURFACE_SOLID,
    }
}

/// Container style for the island body at the given frame.
///
/// Corner radius follows the layout: a full pill while collapsed, a rounded
/// card while expanded.
pub fn surface(frame: ViewFrame, corner: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let alpha = frame.appearance.opacity;
        let mut cast = shadow::elevated(frame.variant.elevation());
        cast.color = faded(cast.color, alpha);
        container::Style {
            background: Some(Background::Color(faded(
                Color {
                    a: surface_alpha(frame.backdrop),
                    ..palette::SURFACE
                },
                alpha,
            ))),
            text_color: Some(faded(palette::WHITE, alpha)),
            border: Border {
                color: faded(
                    Color {
                        a: opacity::BORDER,
                        ..palette::WHITE
                    },
                    alpha,
                ),
                width: 1.0,
                radius: corner.into(),
            },
            shadow: cast,
            ..Default::default()
        }
    }
}

/// Secondary text (app label, age) at the given opacity.
#[must_use]
pub fn secondary_text(alpha: f32) -> Color {
    faded(palette::GRAY_400, alpha)
}

/// Body text at the given opacity.
#[must_use]
pub fn body_text(alpha: f32) -> Color {
    faded(palette::GRAY_200, alpha)
}

/// Style for a quick-action chip. Chips show a label only.
pub fn action_chip(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(palette::CHIP, alpha))),
        text_color: Some(faded(palette::WHITE, alpha)),
        border: Border {
            radius: radius::CHIP.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
