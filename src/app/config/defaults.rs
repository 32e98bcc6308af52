// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Service**: Whether the island runs at all
//! - **Display**: Dwell time and reserved display options
//! - **Feedback**: Reserved haptic option
//! - **Frame pacing**: Tick intervals of the event loop and settings polling

use crate::domain::settings::duration_bounds;

// ==========================================================================
// Service Defaults
// ==========================================================================

/// The service must be switched on explicitly.
pub const DEFAULT_SERVICE_ENABLED: bool = false;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default dwell before the island auto-hides (in milliseconds).
pub const DEFAULT_DISPLAY_DURATION_MS: u64 = duration_bounds::DEFAULT_MS;

/// Minimum dwell (in milliseconds).
pub const MIN_DISPLAY_DURATION_MS: u64 = duration_bounds::MIN_MS;

/// Maximum dwell (in milliseconds).
pub const MAX_DISPLAY_DURATION_MS: u64 = duration_bounds::MAX_MS;

/// Reserved: persisted but not consulted by any transition.
pub const DEFAULT_AUTO_EXPAND: bool = true;

// ==========================================================================
// Feedback Defaults
// ==========================================================================

/// Reserved: persisted but not consulted by any transition.
pub const DEFAULT_VIBRATION: bool = true;

// ==========================================================================
// Frame Pacing
// ==========================================================================

/// Tick interval while a transition is running (in milliseconds).
pub const ANIMATION_TICK_MS: u64 = 16;

/// Tick interval while only the auto-hide deadline is pending (in milliseconds).
pub const IDLE_TICK_MS: u64 = 100;

/// Interval between checks of `settings.toml` for outside edits (in seconds).
pub const SETTINGS_POLL_SECS: u64 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_default_is_within_bounds() {
        assert!(DEFAULT_DISPLAY_DURATION_MS >= MIN_DISPLAY_DURATION_MS);
        assert!(DEFAULT_DISPLAY_DURATION_MS <= MAX_DISPLAY_DURATION_MS);
    }

    #[test]
    fn animation_ticks_faster_than_idle() {
        assert!(ANIMATION_TICK_MS < IDLE_TICK_MS);
    }
}
