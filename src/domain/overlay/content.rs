// SPDX-License-Identifier: MPL-2.0
//! Text and icon bound into the island's widgets.

use crate::domain::notification::{format_relative_age, IconSource, NotificationRecord};
use chrono::{DateTime, Utc};

/// Every field the island renders, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IslandContent {
    pub icon: Option<IconSource>,
    /// Title, or the app name for untitled notifications.
    pub headline: String,
    /// App name as shown above the headline in the expanded layout.
    pub app_label: String,
    pub body: String,
    /// Relative age such as `now` or `5m`.
    pub age_label: String,
    /// Zero to two action labels.
    pub actions: Vec<String>,
}

impl IslandContent {
    /// Formats a record for display at `now`.
    #[must_use]
    pub fn from_record(record: &NotificationRecord, now: DateTime<Utc>) -> Self {
        Self {
            icon: record.icon.clone(),
            headline: record.headline().to_string(),
            app_label: record.app_name.to_uppercase(),
            body: record.body().to_string(),
            age_label: format_relative_age(record.posted_at, now),
            actions: record
                .visible_action_labels()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Returns true if the action row should be shown at all.
    #[must_use]
    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }
}
