// SPDX-License-Identifier: MPL-2.0
//! Compositor backed by an Iced window.
//!
//! Iced window operations are [`Task`]s, so this adapter records what the
//! state machine asked for and queues the tasks; `App::update` hands them to
//! the runtime after every message. The view reads the last frame and content
//! back from here.

use super::Message;
use crate::application::port::{Compositor, CompositorFault};
use crate::domain::overlay::{geometry, IslandContent, Layout, ViewFrame};
use crate::ui::design_tokens::sizing;
use iced::window::{self, Level, Position};
use iced::{Point, Size, Task};
use std::fmt;

/// Window settings for the island: undecorated, transparent, always on top,
/// pinned to the top center of the display.
#[must_use]
pub fn island_window_settings(size: Size) -> window::Settings {
    window::Settings {
        size,
        position: Position::SpecificWith(top_center),
        resizable: false,
        decorations: false,
        transparent: true,
        level: Level::AlwaysOnTop,
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Window size needed to draw `frame` plus a margin.
///
/// The window only covers the pill while collapsed so the rest of the top
/// edge keeps receiving pointer input. It grows to the card size as soon as
/// the island starts expanding and shrinks once it has settled back.
#[must_use]
pub fn window_size_for(frame: &ViewFrame) -> Size {
    let island = if frame.layout == Layout::Expanded
        || frame.size.width > geometry::COLLAPSED.width + 0.5
        || frame.size.height > geometry::COLLAPSED.height + 0.5
    {
        geometry::EXPANDED
    } else {
        geometry::COLLAPSED
    };
    Size::new(
        island.width + 2.0 * sizing::WINDOW_MARGIN,
        island.height + geometry::TOP_OFFSET + sizing::WINDOW_MARGIN,
    )
}

fn top_center(window: Size, monitor: Size) -> Point {
    Point::new(((monitor.width - window.width) / 2.0).max(0.0), 0.0)
}

/// Compositor that drives one Iced window.
pub struct WindowCompositor {
    window: Option<window::Id>,
    window_size: Size,
    frame: ViewFrame,
    content: IslandContent,
    pending: Vec<Task<Message>>,
    display: bool,
}

impl fmt::Debug for WindowCompositor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowCompositor")
            .field("window", &self.window)
            .field("window_size", &self.window_size)
            .field("frame", &self.frame)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl WindowCompositor {
    /// `display` tells whether a display server is reachable at all.
    #[must_use]
    pub fn new(display: bool) -> Self {
        Self {
            window: None,
            window_size: window_size_for(&ViewFrame::default()),
            frame: ViewFrame::default(),
            content: IslandContent::default(),
            pending: Vec::new(),
            display,
        }
    }

    #[must_use]
    pub fn window(&self) -> Option<window::Id> {
        self.window
    }

    /// Size the island window was last opened or resized to.
    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window_size
    }

    #[must_use]
    pub fn frame(&self) -> &ViewFrame {
        &self.frame
    }

    #[must_use]
    pub fn content(&self) -> &IslandContent {
        &self.content
    }

    /// Returns true if window tasks are waiting to be handed to the runtime.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drains queued window tasks into one.
    pub fn take_tasks(&mut self) -> Task<Message> {
        Task::batch(std::mem::take(&mut self.pending))
    }
}

impl Compositor for WindowCompositor {
    fn attach_view(&mut self, frame: &ViewFrame) -> Result<(), CompositorFault> {
        if !self.display {
            return Err(CompositorFault::PermissionRevoked);
        }
        if self.window.is_some() {
            return Err(CompositorFault::Rejected("island window already open".into()));
        }
        let size = window_size_for(frame);
        let (id, open) = window::open(island_window_settings(size));
        self.pending.push(open.map(Message::WindowOpened));
        self.window = Some(id);
        self.window_size = size;
        self.frame = *frame;
        Ok(())
    }

    fn update_geometry(&mut self, frame: &ViewFrame) -> Result<(), CompositorFault> {
        let Some(id) = self.window else {
            return Err(CompositorFault::NotAttached);
        };
        let size = window_size_for(frame);
        if size != self.window_size {
            tracing::trace!(?id, width = size.width, height = size.height, "resizing island window");
            self.pending.push(window::resize(id, size));
            self.pending
                .push(window::monitor_size(id).then(move |monitor| match monitor {
                    Some(monitor) => window::move_to(id, top_center(size, monitor)),
                    None => Task::none(),
                }));
            self.window_size = size;
        }
        self.frame = *frame;
        Ok(())
    }

    fn bind_content(&mut self, content: &IslandContent) -> Result<(), CompositorFault> {
        if self.window.is_none() {
            return Err(CompositorFault::NotAttached);
        }
        self.content = content.clone();
        Ok(())
    }

    fn detach_view(&mut self) -> Result<(), CompositorFault> {
        if let Some(id) = self.window.take() {
            self.pending.push(window::close(id));
        }
        Ok(())
    }
}
