// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! A [`NotificationEvent`] is what the notification source hands us, more or
//! less verbatim. A [`NotificationRecord`] is the normalized, display-ready
//! form produced by the content extractor.

mod event;
mod record;

pub use event::{NativeAction, NotificationEvent, NotificationExtras};
pub use record::{
    format_relative_age, package_label, CloseReason, IconSource, NotificationId, NotificationRecord,
    QuickAction, MAX_VISIBLE_ACTIONS,
};
