// SPDX-License-Identifier: MPL-2.0
//! Island widget: the collapsed pill and the expanded card.
//!
//! The widget is stateless. It renders whatever frame and content the
//! compositor last received and reports pointer presses and releases; the
//! state machine decides what they mean.

use crate::domain::notification::IconSource;
use crate::domain::overlay::{IslandContent, Layout, ViewFrame};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, image, mouse_area, svg, text, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Pointer events reported by the island.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Pointer went down on the island.
    Pressed,
    /// Pointer was released over the island.
    Released,
}

/// Renders the island inside its window.
///
/// The island is centered horizontally and sits `frame.top_offset` below the
/// top edge of the window.
pub fn view<'a>(frame: &ViewFrame, content: &'a IslandContent) -> Element<'a, Message> {
    let size = frame.scaled_size();
    let alpha = frame.appearance.opacity;

    let (body, corner) = match frame.layout {
        Layout::Collapsed => (collapsed(content, alpha), radius::FULL),
        Layout::Expanded => (expanded(content, alpha), radius::CARD.min(size.height / 2.0)),
    };

    let surface = Container::new(body)
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .style(styles::island::surface(*frame, corner));

    let interactive = mouse_area(surface)
        .on_press(Message::Pressed)
        .on_release(Message::Released);

    Container::new(interactive)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .padding(iced::Padding {
            top: frame.top_offset,
            ..iced::Padding::ZERO
        })
        .into()
}

/// `[icon] [headline .......... age]`
fn collapsed(content: &IslandContent, alpha: f32) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::XS)
        .padding([0.0, spacing::SM])
        .align_y(alignment::Vertical::Center)
        .push(icon(content, sizing::ICON_SM, alpha))
        .push(
            Container::new(single_line(&content.headline, typography::BODY))
                .width(Length::Fill)
                .clip(true),
        )
        .push(
            Text::new(content.age_label.as_str())
                .size(typography::CAPTION)
                .color(styles::island::secondary_text(alpha)),
        )
        .into()
}

/// Header row with icon, app label, headline and age; then body and actions.
fn expanded(content: &IslandContent, alpha: f32) -> Element<'_, Message> {
    let titles = Column::new()
        .spacing(2.0)
        .push(
            Text::new(content.app_label.as_str())
                .size(typography::CAPTION)
                .color(styles::island::secondary_text(alpha)),
        )
        .push(single_line(&content.headline, typography::TITLE));

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icon(content, sizing::ICON_LG, alpha))
        .push(Container::new(titles).width(Length::Fill).clip(true))
        .push(
            Text::new(content.age_label.as_str())
                .size(typography::CAPTION)
                .color(styles::island::secondary_text(alpha)),
        );

    let mut card = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(header);

    if !content.body.is_empty() {
        card = card.push(
            Container::new(
                Text::new(content.body.as_str())
                    .size(typography::BODY)
                    .color(styles::island::body_text(alpha)),
            )
            .height(Length::Fill)
            .clip(true),
        );
    } else {
        card = card.push(Space::new().height(Length::Fill));
    }

    if content.has_actions() {
        let actions = content.actions.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, label| {
                row.push(
                    Container::new(Text::new(label.as_str()).size(typography::CAPTION))
                        .padding([0.0, spacing::SM])
                        .height(Length::Fixed(sizing::ACTION_HEIGHT))
                        .align_y(alignment::Vertical::Center)
                        .style(styles::island::action_chip(alpha)),
                )
            },
        );
        card = card.push(actions);
    }

    card.into()
}

fn single_line(value: &str, size: f32) -> Text<'_> {
    Text::new(value)
        .size(size)
        .wrapping(text::Wrapping::None)
}

/// App icon, or a monogram disc when none could be resolved.
fn icon<'a>(content: &'a IslandContent, side: f32, alpha: f32) -> Element<'a, Message> {
    match &content.icon {
        Some(IconSource::Vector(path)) => svg(svg::Handle::from_path(path))
            .width(Length::Fixed(side))
            .height(Length::Fixed(side))
            .opacity(alpha)
            .into(),
        Some(IconSource::Raster(path)) => image(image::Handle::from_path(path))
            .width(Length::Fixed(side))
            .height(Length::Fixed(side))
            .opacity(alpha)
            .into(),
        None => monogram(&content.app_label, side, alpha),
    }
}

fn monogram<'a>(label: &str, side: f32, alpha: f32) -> Element<'a, Message> {
    let initial = label.chars().next().unwrap_or('?').to_string();
    let disc = Color {
        a: alpha,
        ..palette::ACCENT
    };
    container(
        Text::new(initial)
            .size(side * 0.5)
            .color(Color {
                a: alpha,
                ..palette::BLACK
            }),
    )
    .width(Length::Fixed(side))
    .height(Length::Fixed(side))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(disc)),
        border: iced::Border {
            radius: (side / 2.0).into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
