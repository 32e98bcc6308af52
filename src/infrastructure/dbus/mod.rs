// SPDX-License-Identifier: MPL-2.0
//! Session bus notification listener.
//!
//! The island becomes the desktop's notification server: it claims
//! `org.freedesktop.Notifications` and turns every `Notify` and
//! `CloseNotification` call into a [`ListenerEvent`]. If another server
//! already owns the name, the listener stays inactive and the stream ends
//! without ever connecting.
//!
//! Records the island retires come back through the [`RetirementSender`]
//! handed out with [`ListenerEvent::Connected`]; the server forgets them and
//! emits `NotificationClosed`.

mod server;

pub use server::{build_event, NotificationServer};

use crate::application::port::{ListenerEvent, NotificationSource, Retirement, RetirementSender};
use crate::error::Result;
use futures_util::stream::{self, BoxStream, StreamExt};
use tokio::sync::mpsc;

/// Well-known bus name of the notification service.
pub const BUS_NAME: &str = "org.freedesktop.Notifications";

/// Object path the server is exported at.
pub const OBJECT_PATH: &str = "/org/freedesktop/Notifications";

/// Listener backed by a notification server on the session bus.
#[derive(Debug, Default, Clone, Copy)]
pub struct DbusSource;

enum Phase {
    Connecting,
    Serving {
        connection: zbus::Connection,
        events: mpsc::UnboundedReceiver<ListenerEvent>,
        retirements: mpsc::UnboundedReceiver<Retirement>,
    },
    Finished,
}

enum Wake {
    Event(Option<ListenerEvent>),
    Retired(Retirement),
}

impl NotificationSource for DbusSource {
    fn subscribe(self) -> BoxStream<'static, ListenerEvent> {
        stream::unfold(Phase::Connecting, |phase| async move {
            match phase {
                Phase::Connecting => {
                    let (sender, events) = mpsc::unbounded_channel();
                    match serve(sender).await {
                        Ok(connection) => {
                            tracing::info!(name = BUS_NAME, "notification listener connected");
                            let (feedback, retirements) = RetirementSender::channel();
                            Some((
                                ListenerEvent::Connected(feedback),
                                Phase::Serving {
                                    connection,
                                    events,
                                    retirements,
                                },
                            ))
                        }
                        Err(err) => {
                            tracing::error!(%err, "notification listener unavailable");
                            None
                        }
                    }
                }
                Phase::Serving {
                    connection,
                    mut events,
                    mut retirements,
                } => loop {
                    let wake = tokio::select! {
                        event = events.recv() => Wake::Event(event),
                        Some(retirement) = retirements.recv() => Wake::Retired(retirement),
                    };
                    match wake {
                        Wake::Event(Some(event)) => {
                            return Some((
                                event,
                                Phase::Serving {
                                    connection,
                                    events,
                                    retirements,
                                },
                            ));
                        }
                        Wake::Event(None) => {
                            return Some((
                                ListenerEvent::Disconnected {
                                    reason: "notification server dropped".to_string(),
                                },
                                Phase::Finished,
                            ));
                        }
                        Wake::Retired(retirement) => {
                            if let Err(err) = report_closed(&connection, retirement).await {
                                tracing::warn!(%err, id = %retirement.id, "could not report closed notification");
                            }
                        }
                    }
                },
                Phase::Finished => None,
            }
        })
        .boxed()
    }
}

/// Drops a retired notification from the server and signals `NotificationClosed`.
async fn report_closed(connection: &zbus::Connection, retirement: Retirement) -> Result<()> {
    let server = connection
        .object_server()
        .interface::<_, NotificationServer>(OBJECT_PATH)
        .await?;
    let id = retirement.id.value();
    if server.get().await.forget(id).await {
        NotificationServer::notification_closed(server.signal_context(), id, retirement.reason.code())
            .await?;
        tracing::debug!(id, reason = ?retirement.reason, "notification closed");
    }
    Ok(())
}

async fn serve(sender: mpsc::UnboundedSender<ListenerEvent>) -> Result<zbus::Connection> {
    let connection = zbus::ConnectionBuilder::session()?
        .name(BUS_NAME)?
        .serve_at(OBJECT_PATH, NotificationServer::new(sender))?
        .build()
        .await?;
    Ok(connection)
}

/// Returns true if some process currently owns the notification bus name.
///
/// # Errors
///
/// Returns an error if the session bus is unreachable.
pub async fn name_has_owner() -> Result<bool> {
    let connection = zbus::Connection::session().await?;
    let proxy = zbus::fdo::DBusProxy::new(&connection).await?;
    let name = zbus::names::BusName::try_from(BUS_NAME).map_err(zbus::Error::from)?;
    Ok(proxy.name_has_owner(name).await?)
}
