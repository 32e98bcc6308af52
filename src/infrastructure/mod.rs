// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap the session bus, the XDG data
//! directories and the process environment.
//!
//! # Available Adapters
//!
//! - [`dbus`]: Notification server on the session bus (implements [`NotificationSource`])
//! - [`desktop_entry`]: App names and icons from `.desktop` files (implements [`AppResolver`])
//! - [`gate`]: Listener and display availability (implements [`PermissionGate`])
//! - [`memory`]: Recording compositor and fixed gate, for headless use
//!
//! The window compositor lives with the Iced application in `app`, since it
//! only exists inside the event loop.
//!
//! [`NotificationSource`]: crate::application::port::NotificationSource
//! [`AppResolver`]: crate::application::port::AppResolver
//! [`PermissionGate`]: crate::application::port::PermissionGate

pub mod dbus;
pub mod desktop_entry;
pub mod gate;
pub mod memory;

// Re-export main types for convenience
pub use dbus::DbusSource;
pub use desktop_entry::DesktopEntryResolver;
pub use gate::DesktopGate;
