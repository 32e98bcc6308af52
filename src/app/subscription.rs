// SPDX-License-Identifier: MPL-2.0
//! Subscriptions feeding the application: the notification listener, the
//! frame ticks and the settings poll.

use super::config::{ANIMATION_TICK_MS, IDLE_TICK_MS, SETTINGS_POLL_SECS};
use super::Message;
use crate::application::port::NotificationSource;
use crate::infrastructure::DbusSource;
use futures_util::stream::{BoxStream, StreamExt};
use iced::{time, Subscription};
use std::time::Duration;

/// Listens on the session bus for the whole lifetime of the daemon.
pub fn create_listener_subscription() -> Subscription<Message> {
    Subscription::run(listener_stream)
}

fn listener_stream() -> BoxStream<'static, Message> {
    DbusSource.subscribe().map(Message::Listener).boxed()
}

/// Checks the settings file for edits made by `--enable`, `--exclude` and friends.
pub fn create_settings_subscription() -> Subscription<Message> {
    time::every(Duration::from_secs(SETTINGS_POLL_SECS)).map(Message::SettingsPoll)
}

/// Picks the tick rate from what the island is doing.
///
/// Transitions need a smooth frame rate; a pending auto-hide deadline only
/// needs to be noticed. With neither, nothing ticks.
pub fn create_tick_subscription(animating: bool, deadline_pending: bool) -> Subscription<Message> {
    match tick_interval(animating, deadline_pending) {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}

fn tick_interval(animating: bool, deadline_pending: bool) -> Option<Duration> {
    if animating {
        Some(Duration::from_millis(ANIMATION_TICK_MS))
    } else if deadline_pending {
        Some(Duration::from_millis(IDLE_TICK_MS))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_wins_over_idle_deadline() {
        assert_eq!(
            tick_interval(true, true),
            Some(Duration::from_millis(ANIMATION_TICK_MS))
        );
        assert_eq!(
            tick_interval(false, true),
            Some(Duration::from_millis(IDLE_TICK_MS))
        );
        assert_eq!(tick_interval(false, false), None);
    }
}
