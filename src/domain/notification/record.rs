// SPDX-License-Identifier: MPL-2.0
//! Normalized notification records.

use chrono::{DateTime, Utc};
use std::fmt;
use std::path::PathBuf;

/// Number of quick actions the island ever renders.
pub const MAX_VISIBLE_ACTIONS: usize = 2;

/// Identifier assigned by the notification source, unique per live notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u32);

impl NotificationId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an application icon can be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// A raster image (PNG, JPEG...).
    Raster(PathBuf),
    /// A vector image (SVG).
    Vector(PathBuf),
}

impl IconSource {
    /// Classifies an icon file by extension.
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg") || ext.eq_ignore_ascii_case("svgz"));
        if is_svg {
            IconSource::Vector(path)
        } else {
            IconSource::Raster(path)
        }
    }

    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            IconSource::Raster(path) | IconSource::Vector(path) => path,
        }
    }
}

/// A label-only quick action.
///
/// The invocation key is kept so a caller could forward the action back to
/// the sender, but the island itself only renders the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAction {
    pub label: String,
    pub key: String,
}

/// Display-ready representation of one notification.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRecord {
    pub id: NotificationId,
    pub package: String,
    pub app_name: String,
    pub icon: Option<IconSource>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub long_content: Option<String>,
    pub posted_at: DateTime<Utc>,
    pub actions: Vec<QuickAction>,
}

impl NotificationRecord {
    /// Text for the headline slot: the title, or the app name when untitled.
    #[must_use]
    pub fn headline(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.app_name)
    }

    /// Text for the body slot: short content first, long content as fallback.
    #[must_use]
    pub fn body(&self) -> &str {
        self.content
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .or(self.long_content.as_deref())
            .unwrap_or("")
    }

    /// Labels of the actions that are actually rendered.
    pub fn visible_action_labels(&self) -> impl Iterator<Item = &str> {
        self.actions
            .iter()
            .take(MAX_VISIBLE_ACTIONS)
            .map(|action| action.label.as_str())
    }

    /// Returns true if this record came from the given notification.
    #[must_use]
    pub fn matches(&self, id: NotificationId, package: &str) -> bool {
        self.id == id && self.package == package
    }
}

/// Fallback display label for a package: its last dot-separated segment.
///
/// `com.example.mail` becomes `mail`; a package without dots, or whose last
/// segment is empty, is returned whole.
#[must_use]
pub fn package_label(package: &str) -> String {
    match package.rsplit('.').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => package.to_string(),
    }
}

/// Why a notification stopped being shown, as reported back to its sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Hidden by the auto-hide timer or superseded by a newer notification.
    Expired,
    /// Dismissed by the user.
    Dismissed,
    /// Withdrawn by the sender.
    Closed,
    /// Anything else: an explicit hide or shutdown.
    Undefined,
}

impl CloseReason {
    /// Reason code of the `NotificationClosed` signal.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            CloseReason::Expired => 1,
            CloseReason::Dismissed => 2,
            CloseReason::Closed => 3,
            CloseReason::Undefined => 4,
        }
    }
}

/// Formats the age of a notification the way the island shows it.
///
/// Under a minute reads `now`, then whole minutes (`5m`), hours (`3h`) and
/// days (`2d`). Timestamps in the future count as `now`.
#[must_use]
pub fn format_relative_age(posted_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(posted_at);
    if age.num_minutes() < 1 {
        "now".to_string()
    } else if age.num_hours() < 1 {
        format!("{}m", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{}h", age.num_hours())
    } else {
        format!("{}d", age.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn record() -> NotificationRecord {
        NotificationRecord {
            id: NotificationId::new(7),
            package: "com.example.chat".to_string(),
            app_name: "Chat".to_string(),
            icon: None,
            title: Some("Alice".to_string()),
            content: Some("Lunch?".to_string()),
            long_content: None,
            posted_at: Utc.timestamp_millis_opt(0).unwrap(),
            actions: vec![
                QuickAction {
                    label: "Reply".into(),
                    key: "reply".into(),
                },
                QuickAction {
                    label: "Mute".into(),
                    key: "mute".into(),
                },
                QuickAction {
                    label: "Archive".into(),
                    key: "archive".into(),
                },
            ],
        }
    }

    #[test]
    fn package_label_takes_last_segment() {
        assert_eq!(package_label("com.example.mail"), "mail");
        assert_eq!(package_label("firefox"), "firefox");
        assert_eq!(package_label("trailing."), "trailing.");
        assert_eq!(package_label(""), "");
    }

    #[test]
    fn headline_falls_back_to_app_name() {
        let mut r = record();
        assert_eq!(r.headline(), "Alice");
        r.title = Some("  ".into());
        assert_eq!(r.headline(), "Chat");
        r.title = None;
        assert_eq!(r.headline(), "Chat");
    }

    #[test]
    fn body_prefers_short_content() {
        let mut r = record();
        r.long_content = Some("A much longer message".into());
        assert_eq!(r.body(), "Lunch?");
        r.content = None;
        assert_eq!(r.body(), "A much longer message");
        r.long_content = None;
        assert_eq!(r.body(), "");
    }

    #[test]
    fn only_two_actions_are_visible() {
        let r = record();
        let labels: Vec<&str> = r.visible_action_labels().collect();
        assert_eq!(labels, vec!["Reply", "Mute"]);
    }

    #[test]
    fn close_reason_codes_follow_the_notification_protocol() {
        assert_eq!(CloseReason::Expired.code(), 1);
        assert_eq!(CloseReason::Dismissed.code(), 2);
        assert_eq!(CloseReason::Closed.code(), 3);
        assert_eq!(CloseReason::Undefined.code(), 4);
    }

    #[test]
    fn relative_age_buckets() {
        let posted = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let at = |d: Duration| format_relative_age(posted, posted + d);

        assert_eq!(at(Duration::seconds(59)), "now");
        assert_eq!(at(Duration::minutes(5)), "5m");
        assert_eq!(at(Duration::minutes(59)), "59m");
        assert_eq!(at(Duration::hours(3)), "3h");
        assert_eq!(at(Duration::days(2)), "2d");
        assert_eq!(at(Duration::seconds(-30)), "now");
    }

    #[test]
    fn icon_source_classifies_by_extension() {
        assert!(matches!(
            IconSource::from_path(PathBuf::from("/icons/app.svg")),
            IconSource::Vector(_)
        ));
        assert!(matches!(
            IconSource::from_path(PathBuf::from("/icons/app.PNG")),
            IconSource::Raster(_)
        ));
    }

    #[test]
    fn matches_requires_id_and_package() {
        let r = record();
        assert!(r.matches(NotificationId::new(7), "com.example.chat"));
        assert!(!r.matches(NotificationId::new(8), "com.example.chat"));
        assert!(!r.matches(NotificationId::new(7), "com.example.other"));
    }
}
