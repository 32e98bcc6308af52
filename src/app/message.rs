// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::ListenerEvent;
use crate::ui::island;
use iced::window;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Something happened on the notification listener.
    Listener(ListenerEvent),
    /// Periodic tick driving transitions and the auto-hide deadline.
    Tick(Instant),
    /// Time to look for edits to the settings file.
    SettingsPoll(Instant),
    /// Pointer input on the island.
    Island(island::Message),
    /// The compositor finished opening the island window.
    WindowOpened(window::Id),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Inject a sample notification once the listener is up.
    pub demo: bool,
}
