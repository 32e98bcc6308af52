// SPDX-License-Identifier: MPL-2.0
//! Settings domain types.
//!
//! This module contains the read-only view of user preferences the core
//! consults, independent of how they are persisted.

pub mod newtypes;

pub use newtypes::{duration_bounds, DisplayDuration};

use std::collections::BTreeSet;

/// Snapshot of user preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Master switch; nothing is displayed while off.
    pub service_enabled: bool,
    /// Reserved: persisted but not consulted by the transitions.
    pub auto_expand: bool,
    /// Dwell time before the island collapses or hides.
    pub display_duration: DisplayDuration,
    /// Packages the user chose to silence.
    pub excluded_packages: BTreeSet<String>,
    /// Reserved: persisted but not consulted by the transitions.
    pub vibration_enabled: bool,
}

impl Settings {
    /// Returns true if the user excluded this package.
    #[must_use]
    pub fn is_excluded(&self, package: &str) -> bool {
        self.excluded_packages.contains(package)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_enabled: false,
            auto_expand: true,
            display_duration: DisplayDuration::default(),
            excluded_packages: BTreeSet::new(),
            vibration_enabled: true,
        }
    }
}
