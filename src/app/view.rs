// SPDX-License-Identifier: MPL-2.0
//! Window views.

use super::compositor::WindowCompositor;
use super::Message;
use crate::ui::island;
use iced::widget::Space;
use iced::{window, Element};

/// Renders the window with the given id.
///
/// Only the island window has content; a window that is still closing after
/// a detach renders empty.
pub fn view(compositor: &WindowCompositor, id: window::Id) -> Element<'_, Message> {
    if compositor.window() == Some(id) {
        island::view(compositor.frame(), compositor.content()).map(Message::Island)
    } else {
        Space::new().into()
    }
}
