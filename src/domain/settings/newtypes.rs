// SPDX-License-Identifier: MPL-2.0
//! Settings newtypes.
//!
//! This module provides type-safe wrappers for setting values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Display Duration Bounds
// =============================================================================

/// Display duration bounds (1 to 30 seconds, in milliseconds).
pub mod duration_bounds {
    /// Minimum display duration in milliseconds.
    pub const MIN_MS: u64 = 1_000;
    /// Maximum display duration in milliseconds.
    pub const MAX_MS: u64 = 30_000;
    /// Default display duration in milliseconds.
    pub const DEFAULT_MS: u64 = 4_000;
}

// =============================================================================
// DisplayDuration
// =============================================================================

/// How long the island dwells before collapsing or hiding.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–30 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplayDuration(u64);

impl DisplayDuration {
    /// Creates a new display duration, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(duration_bounds::MIN_MS, duration_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the duration as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= duration_bounds::MIN_MS
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= duration_bounds::MAX_MS
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(duration_bounds::DEFAULT_MS)
    }
}
