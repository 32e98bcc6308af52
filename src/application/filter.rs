// SPDX-License-Identifier: MPL-2.0
//! Eligibility rules for inbound notifications.

use crate::domain::notification::NotificationEvent;
use crate::domain::settings::Settings;

/// Packages whose notifications are never surfaced, whatever the user settings say.
///
/// Shell UI, app store, core OS and the first-party services framework, plus
/// the island itself.
pub const SYSTEM_EXCLUSIONS: [&str; 5] = [
    "com.android.systemui",
    "com.android.vending",
    "android",
    "com.google.android.gms",
    crate::APP_ID,
];

/// Returns true if the package is in the fixed exclusion set.
#[must_use]
pub fn is_system_package(package: &str) -> bool {
    SYSTEM_EXCLUSIONS.contains(&package)
}

/// Decides whether an event may reach the island.
///
/// Rejected when the service is disabled, the package is excluded (system or
/// user list), the notification cannot be dismissed, or it has neither a
/// title nor a text.
#[must_use]
pub fn should_display(event: &NotificationEvent, settings: &Settings) -> bool {
    settings.service_enabled
        && !is_system_package(&event.package)
        && !settings.is_excluded(&event.package)
        && event.dismissible
        && !event.extras.is_blank()
}
