// SPDX-License-Identifier: MPL-2.0
//! `org.freedesktop.Notifications` server object.

use crate::application::port::ListenerEvent;
use crate::domain::notification::{CloseReason, NativeAction, NotificationEvent, NotificationId};
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::sync::{mpsc, Mutex};
use zbus::zvariant::Value;
use zbus::{dbus_interface, SignalContext};

/// Action key the sender uses for "the notification itself was clicked".
const DEFAULT_ACTION: &str = "default";

/// Most notifications remembered for `CloseNotification`; the oldest ids go first.
pub const MAX_LIVE: usize = 256;

/// Notification server that forwards everything it receives as listener events.
pub struct NotificationServer {
    events: mpsc::UnboundedSender<ListenerEvent>,
    next_id: AtomicU32,
    /// Live notifications: id to package, so closes can be reported with their package.
    live: Mutex<BTreeMap<u32, String>>,
}

impl NotificationServer {
    pub fn new(events: mpsc::UnboundedSender<ListenerEvent>) -> Self {
        Self {
            events,
            next_id: AtomicU32::new(1),
            live: Mutex::new(BTreeMap::new()),
        }
    }

    fn allocate_id(&self) -> u32 {
        loop {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            // Zero means "no notification" on the wire.
            if id != 0 {
                return id;
            }
        }
    }

    /// Forgets a notification the island is done with.
    ///
    /// Returns false if it was already closed or never known, in which case
    /// no `NotificationClosed` signal is due.
    pub async fn forget(&self, id: u32) -> bool {
        self.live.lock().await.remove(&id).is_some()
    }

    async fn remember(&self, id: u32, package: String) {
        let mut live = self.live.lock().await;
        live.insert(id, package);
        while live.len() > MAX_LIVE {
            if let Some((evicted, _)) = live.pop_first() {
                tracing::trace!(id = evicted, "live notification evicted");
            }
        }
    }

    fn forward(&self, event: ListenerEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!("listener gone, dropping notification event");
        }
    }
}

#[dbus_interface(name = "org.freedesktop.Notifications")]
impl NotificationServer {
    async fn get_capabilities(&self) -> Vec<String> {
        vec!["body".to_string(), "actions".to_string(), "icon-static".to_string()]
    }

    async fn get_server_information(&self) -> (String, String, String, String) {
        (
            "iced_island".to_string(),
            "Bawycle".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            "1.2".to_string(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    async fn notify(
        &self,
        app_name: String,
        replaces_id: u32,
        app_icon: String,
        summary: String,
        body: String,
        actions: Vec<String>,
        hints: HashMap<String, Value<'_>>,
        expire_timeout: i32,
    ) -> u32 {
        let id = if replaces_id == 0 {
            self.allocate_id()
        } else {
            replaces_id
        };
        let event = build_event(
            NotificationId::new(id),
            &app_name,
            &app_icon,
            &summary,
            &body,
            &actions,
            &hints,
        );
        tracing::debug!(id, package = %event.package, expire_timeout, "notify");

        self.remember(id, event.package.clone()).await;
        self.forward(ListenerEvent::Posted(event));
        id
    }

    async fn close_notification(
        &self,
        id: u32,
        #[zbus(signal_context)] ctxt: SignalContext<'_>,
    ) -> zbus::fdo::Result<()> {
        let Some(package) = self.live.lock().await.remove(&id) else {
            tracing::debug!(id, "close for unknown notification ignored");
            return Ok(());
        };
        self.forward(ListenerEvent::Removed {
            id: NotificationId::new(id),
            package,
        });
        Self::notification_closed(&ctxt, id, CloseReason::Closed.code()).await?;
        Ok(())
    }

    #[dbus_interface(signal)]
    pub async fn notification_closed(ctxt: &SignalContext<'_>, id: u32, reason: u32) -> zbus::Result<()>;
}

/// Translates the arguments of a `Notify` call into a notification event.
///
/// The `desktop-entry` hint names the package when present, otherwise the
/// application name does. `resident` notifications count as not dismissible.
pub fn build_event(
    id: NotificationId,
    app_name: &str,
    app_icon: &str,
    summary: &str,
    body: &str,
    actions: &[String],
    hints: &HashMap<String, Value<'_>>,
) -> NotificationEvent {
    let package = string_hint(hints, "desktop-entry")
        .filter(|entry| !entry.is_empty())
        .unwrap_or_else(|| app_name.to_string());

    let mut event = NotificationEvent::new(id, package, Utc::now());
    if !summary.is_empty() {
        event = event.with_title(summary);
    }
    if !body.is_empty() {
        event = event.with_text(body);
    }
    if bool_hint(hints, "resident") {
        event = event.ongoing();
    }

    event.actions = actions
        .chunks_exact(2)
        .filter(|pair| pair[0] != DEFAULT_ACTION)
        .map(|pair| NativeAction {
            key: pair[0].clone(),
            label: Some(pair[1].clone()).filter(|label| !label.is_empty()),
        })
        .collect();

    event.icon_hint = Some(app_icon.to_string())
        .filter(|icon| !icon.is_empty())
        .or_else(|| string_hint(hints, "image-path"));

    event
}

fn string_hint(hints: &HashMap<String, Value<'_>>, key: &str) -> Option<String> {
    match hints.get(key) {
        Some(Value::Str(value)) => Some(value.as_str().to_string()),
        _ => None,
    }
}

fn bool_hint(hints: &HashMap<String, Value<'_>>, key: &str) -> bool {
    matches!(hints.get(key), Some(Value::Bool(true)))
}
