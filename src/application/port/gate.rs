// SPDX-License-Identifier: MPL-2.0
//! Permission gate port definition.

/// The two permissions the island needs before touching the screen.
pub trait PermissionGate {
    /// Returns true if the notification listener is registered and receiving.
    fn listener_active(&self) -> bool;

    /// Returns true if floating views may be drawn over other windows.
    fn can_draw_overlay(&self) -> bool;

    /// Returns true if both permissions are granted.
    fn permits_display(&self) -> bool {
        self.listener_active() && self.can_draw_overlay()
    }
}
