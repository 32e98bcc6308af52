// SPDX-License-Identifier: MPL-2.0
//! Notification listener port definition.
//!
//! The listener is the island's only inbound channel: it reports when it
//! starts and stops receiving, and every posted or removed notification.
//! Once connected it hands out a [`RetirementSender`] so the island can tell
//! the source when it is done with a notification.

use crate::domain::notification::{CloseReason, NotificationEvent, NotificationId};
use futures_util::stream::BoxStream;
use tokio::sync::mpsc;

/// A notification the island no longer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retirement {
    pub id: NotificationId,
    pub reason: CloseReason,
}

/// Sending half of the channel from the island back to the source.
#[derive(Debug, Clone)]
pub struct RetirementSender(mpsc::UnboundedSender<Retirement>);

impl RetirementSender {
    /// Creates a connected sender and receiver pair.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Retirement>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self(sender), receiver)
    }

    /// Reports a retirement. Returns false if the source is gone.
    pub fn send(&self, retirement: Retirement) -> bool {
        self.0.send(retirement).is_ok()
    }
}

impl PartialEq for RetirementSender {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_channel(&other.0)
    }
}

/// Events produced by a notification source.
#[derive(Debug, Clone, PartialEq)]
pub enum ListenerEvent {
    /// The listener is registered and will deliver notifications.
    Connected(RetirementSender),
    /// A notification was posted or replaced.
    Posted(NotificationEvent),
    /// A notification was dismissed or cleared by someone else.
    Removed { id: NotificationId, package: String },
    /// The listener stopped; no more events will follow.
    Disconnected { reason: String },
}

/// Port for subscribing to notification events.
pub trait NotificationSource {
    /// Starts listening and returns the event stream.
    ///
    /// The stream begins with [`ListenerEvent::Connected`] on success and
    /// ends with [`ListenerEvent::Disconnected`]. A source that cannot start
    /// ends immediately without yielding anything.
    fn subscribe(self) -> BoxStream<'static, ListenerEvent>;
}
