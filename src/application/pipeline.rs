// SPDX-License-Identifier: MPL-2.0
//! Routing from listener events to host commands.
//!
//! Posted notifications go through the filter and the extractor; listener
//! lifecycle events become start and stop.

use crate::application::extract::extract_resolved;
use crate::application::filter::should_display;
use crate::application::host::HostCommand;
use crate::application::port::{AppResolver, ListenerEvent};
use crate::domain::settings::Settings;

/// Turns listener events into host commands under the current settings.
pub struct Pipeline<R> {
    resolver: R,
    settings: Settings,
}

impl<R: AppResolver> Pipeline<R> {
    pub fn new(resolver: R, settings: Settings) -> Self {
        Self { resolver, settings }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Maps one listener event; `None` means nothing to do.
    pub fn route(&self, event: ListenerEvent) -> Option<HostCommand> {
        match event {
            ListenerEvent::Connected(_) => {
                if self.settings.service_enabled {
                    Some(HostCommand::Start)
                } else {
                    tracing::info!("listener connected but the service is disabled");
                    None
                }
            }
            ListenerEvent::Posted(event) => {
                if !should_display(&event, &self.settings) {
                    tracing::trace!(id = %event.id, package = %event.package, "filtered out");
                    return None;
                }
                Some(HostCommand::Show(extract_resolved(&event, &self.resolver)))
            }
            ListenerEvent::Removed { id, package } => Some(HostCommand::Removed { id, package }),
            ListenerEvent::Disconnected { reason } => {
                tracing::warn!(%reason, "listener disconnected");
                Some(HostCommand::Stop)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{AppIdentity, ResolveError, RetirementSender};
    use crate::domain::notification::{IconSource, NotificationEvent, NotificationId};
    use chrono::Utc;

    struct NoApps;

    impl AppResolver for NoApps {
        fn resolve(&self, package: &str) -> Result<AppIdentity, ResolveError> {
            Err(ResolveError::NotFound(package.into()))
        }

        fn resolve_icon(&self, _hint: &str) -> Option<IconSource> {
            None
        }
    }

    fn pipeline(enabled: bool) -> Pipeline<NoApps> {
        Pipeline::new(
            NoApps,
            Settings {
                service_enabled: enabled,
                ..Settings::default()
            },
        )
    }

    #[test]
    fn connect_starts_only_when_enabled() {
        let (sender, _receiver) = RetirementSender::channel();
        let connected = ListenerEvent::Connected(sender);
        assert_eq!(pipeline(true).route(connected.clone()), Some(HostCommand::Start));
        assert_eq!(pipeline(false).route(connected), None);
    }

    #[test]
    fn disconnect_stops() {
        let command = pipeline(true).route(ListenerEvent::Disconnected {
            reason: "bus closed".into(),
        });
        assert_eq!(command, Some(HostCommand::Stop));
    }

    #[test]
    fn eligible_post_becomes_show() {
        let event = NotificationEvent::new(NotificationId::new(3), "org.example.Mail", Utc::now())
            .with_title("New mail");
        match pipeline(true).route(ListenerEvent::Posted(event)) {
            Some(HostCommand::Show(record)) => {
                assert_eq!(record.app_name, "Mail");
                assert_eq!(record.headline(), "New mail");
            }
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn blank_post_is_dropped() {
        let event = NotificationEvent::new(NotificationId::new(4), "org.example.Mail", Utc::now());
        assert_eq!(pipeline(true).route(ListenerEvent::Posted(event)), None);
    }

    #[test]
    fn removal_is_forwarded() {
        let command = pipeline(true).route(ListenerEvent::Removed {
            id: NotificationId::new(5),
            package: "org.example.Mail".into(),
        });
        assert_eq!(
            command,
            Some(HostCommand::Removed {
                id: NotificationId::new(5),
                package: "org.example.Mail".into(),
            })
        );
    }
}
