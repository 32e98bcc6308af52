// SPDX-License-Identifier: MPL-2.0
//! Raw inbound notification events.

use super::NotificationId;
use chrono::{DateTime, Utc};

/// Structured text fields of a notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationExtras {
    pub title: Option<String>,
    pub text: Option<String>,
    pub big_text: Option<String>,
}

impl NotificationExtras {
    /// Returns true if neither the title nor the text carries visible characters.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        let blank = |field: &Option<String>| field.as_deref().is_none_or(|s| s.trim().is_empty());
        blank(&self.title) && blank(&self.text)
    }
}

/// An action as the sender declared it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeAction {
    /// Invocation key reported back to the sender when the action fires.
    pub key: String,
    /// Human-readable label, absent for some senders.
    pub label: Option<String>,
}

/// A notification exactly as the source reported it.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEvent {
    pub id: NotificationId,
    pub package: String,
    /// Whether the user is allowed to dismiss it (ongoing notifications are not).
    pub dismissible: bool,
    pub extras: NotificationExtras,
    pub actions: Vec<NativeAction>,
    pub posted_at: DateTime<Utc>,
    /// Icon name or path supplied by the sender.
    pub icon_hint: Option<String>,
}

impl NotificationEvent {
    /// Creates a dismissible event with no text, actions or icon.
    pub fn new(id: NotificationId, package: impl Into<String>, posted_at: DateTime<Utc>) -> Self {
        Self {
            id,
            package: package.into(),
            dismissible: true,
            extras: NotificationExtras::default(),
            actions: Vec::new(),
            posted_at,
            icon_hint: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.extras.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.extras.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_big_text(mut self, text: impl Into<String>) -> Self {
        self.extras.big_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_action(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.actions.push(NativeAction {
            key: key.into(),
            label: Some(label.into()),
        });
        self
    }

    #[must_use]
    pub fn with_icon_hint(mut self, hint: impl Into<String>) -> Self {
        self.icon_hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn ongoing(mut self) -> Self {
        self.dismissible = false;
        self
    }
}
