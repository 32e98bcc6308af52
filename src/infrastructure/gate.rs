// SPDX-License-Identifier: MPL-2.0
//! Desktop permission gate.

use crate::application::port::PermissionGate;

/// Gate for a desktop session.
///
/// The listener flag follows the notification source; drawing is possible
/// whenever a Wayland or X11 display is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DesktopGate {
    listener: bool,
    display: bool,
}

impl DesktopGate {
    /// Probes the display from the environment; the listener starts inactive.
    #[must_use]
    pub fn from_environment() -> Self {
        Self::new(display_reachable())
    }

    /// A gate with an inactive listener and the given display availability.
    #[must_use]
    pub const fn new(display: bool) -> Self {
        Self {
            listener: false,
            display,
        }
    }

    pub fn set_listener_active(&mut self, active: bool) {
        self.listener = active;
    }
}

impl PermissionGate for DesktopGate {
    fn listener_active(&self) -> bool {
        self.listener
    }

    fn can_draw_overlay(&self) -> bool {
        self.display
    }
}

/// Returns true if a Wayland or X11 display is advertised.
#[must_use]
pub fn display_reachable() -> bool {
    ["WAYLAND_DISPLAY", "DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|value| !value.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_flag_is_toggled_explicitly() {
        let mut gate = DesktopGate::default();
        assert!(!gate.listener_active());
        gate.set_listener_active(true);
        assert!(gate.listener_active());
    }
}
