// SPDX-License-Identifier: MPL-2.0
//! Conversion of raw events into display records.

use crate::application::port::AppResolver;
use crate::domain::notification::{
    package_label, IconSource, NotificationEvent, NotificationRecord, QuickAction,
};

/// App name used when neither the resolver nor the package yields one.
pub const UNKNOWN_APP_NAME: &str = "Notification";

/// Builds a record from an event and whatever identity could be resolved.
///
/// A missing app name falls back to the last segment of the package, and to
/// [`UNKNOWN_APP_NAME`] when the package is empty. Actions
/// without a label use their invocation key as label. Never fails.
#[must_use]
pub fn extract(
    event: &NotificationEvent,
    app_name: Option<String>,
    icon: Option<IconSource>,
) -> NotificationRecord {
    let app_name = app_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| package_label(&event.package));
    let app_name = if app_name.trim().is_empty() {
        UNKNOWN_APP_NAME.to_string()
    } else {
        app_name
    };

    let actions = event
        .actions
        .iter()
        .map(|action| QuickAction {
            label: action
                .label
                .clone()
                .filter(|label| !label.trim().is_empty())
                .unwrap_or_else(|| action.key.clone()),
            key: action.key.clone(),
        })
        .collect();

    NotificationRecord {
        id: event.id,
        package: event.package.clone(),
        app_name,
        icon,
        title: event.extras.title.clone(),
        content: event.extras.text.clone(),
        long_content: event.extras.big_text.clone(),
        posted_at: event.posted_at,
        actions,
    }
}

/// Resolves the app identity through `resolver`, then extracts.
///
/// An icon supplied by the sender wins over the application icon.
pub fn extract_resolved(event: &NotificationEvent, resolver: &impl AppResolver) -> NotificationRecord {
    let (app_name, app_icon) = match resolver.resolve(&event.package) {
        Ok(identity) => (Some(identity.name), identity.icon),
        Err(err) => {
            tracing::debug!(package = %event.package, %err, "falling back to package label");
            (None, None)
        }
    };

    let hinted_icon = event
        .icon_hint
        .as_deref()
        .filter(|hint| !hint.is_empty())
        .and_then(|hint| resolver.resolve_icon(hint));

    extract(event, app_name, hinted_icon.or(app_icon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{AppIdentity, ResolveError};
    use crate::domain::notification::{NativeAction, NotificationId};
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    struct FixedResolver;

    impl AppResolver for FixedResolver {
        fn resolve(&self, package: &str) -> Result<AppIdentity, ResolveError> {
            if package == "org.example.Mail" {
                Ok(AppIdentity {
                    name: "Mail".into(),
                    icon: Some(IconSource::Raster(PathBuf::from("/icons/mail.png"))),
                })
            } else {
                Err(ResolveError::NotFound(package.into()))
            }
        }

        fn resolve_icon(&self, hint: &str) -> Option<IconSource> {
            (hint == "sender").then(|| IconSource::Vector(PathBuf::from("/icons/sender.svg")))
        }
    }

    fn event(package: &str) -> NotificationEvent {
        let posted = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        NotificationEvent::new(NotificationId::new(42), package, posted)
            .with_title("Meeting moved")
            .with_text("Now at 3pm")
            .with_big_text("Now at 3pm in room B")
    }

    #[test]
    fn copies_text_fields_and_timestamp() {
        let source = event("org.example.Mail");
        let record = extract(&source, Some("Mail".into()), None);
        assert_eq!(record.id, NotificationId::new(42));
        assert_eq!(record.title.as_deref(), Some("Meeting moved"));
        assert_eq!(record.content.as_deref(), Some("Now at 3pm"));
        assert_eq!(record.long_content.as_deref(), Some("Now at 3pm in room B"));
        assert_eq!(record.posted_at, source.posted_at);
    }

    #[test]
    fn missing_app_name_falls_back_to_package_label() {
        let record = extract(&event("com.example.calendar"), None, None);
        assert_eq!(record.app_name, "calendar");
        assert!(record.icon.is_none());
    }

    #[test]
    fn unusable_package_never_yields_an_empty_name() {
        let trailing = extract(&event("org.example."), None, None);
        assert_eq!(trailing.app_name, "org.example.");

        let mut untitled = event("");
        untitled.extras.title = None;
        let record = extract(&untitled, None, None);
        assert_eq!(record.app_name, UNKNOWN_APP_NAME);
        assert_eq!(record.headline(), UNKNOWN_APP_NAME);
    }

    #[test]
    fn actions_keep_key_and_use_key_when_unlabelled() {
        let mut source = event("org.example.Mail").with_action("reply", "Reply");
        source.actions.push(NativeAction {
            key: "archive".into(),
            label: None,
        });
        let record = extract(&source, None, None);
        let labels: Vec<_> = record.visible_action_labels().collect();
        assert_eq!(labels, ["Reply", "archive"]);
        assert_eq!(record.actions[0].key, "reply");
    }

    #[test]
    fn resolver_supplies_name_and_icon() {
        let record = extract_resolved(&event("org.example.Mail"), &FixedResolver);
        assert_eq!(record.app_name, "Mail");
        assert_eq!(
            record.icon,
            Some(IconSource::Raster(PathBuf::from("/icons/mail.png")))
        );
    }

    #[test]
    fn sender_icon_takes_priority() {
        let source = event("org.example.Mail").with_icon_hint("sender");
        let record = extract_resolved(&source, &FixedResolver);
        assert_eq!(
            record.icon,
            Some(IconSource::Vector(PathBuf::from("/icons/sender.svg")))
        );
    }

    #[test]
    fn resolution_failure_degrades() {
        let record = extract_resolved(&event("com.unknown.thing"), &FixedResolver);
        assert_eq!(record.app_name, "thing");
        assert!(record.icon.is_none());
    }
}
