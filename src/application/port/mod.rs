// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`compositor`]: Attaching, updating and detaching the floating view
//! - [`gate`]: Listener and overlay permissions
//! - [`listener`]: Notification event subscription
//! - [`resolver`]: Application name and icon lookup
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no D-Bus types)
//! - Compositor and gate calls are synchronous and made from the UI loop
//! - The listener is the only async port; it yields a stream of events
//!
//! # Example
//!
//! ```ignore
//! use iced_island::application::port::{Compositor, PermissionGate};
//! use iced_island::domain::overlay::ViewFrame;
//!
//! fn try_attach(compositor: &mut impl Compositor, gate: &impl PermissionGate) -> bool {
//!     gate.permits_display() && compositor.attach_view(&ViewFrame::default()).is_ok()
//! }
//! ```

pub mod compositor;
pub mod gate;
pub mod listener;
pub mod resolver;

// Re-export main types for convenience
pub use compositor::{Compositor, CompositorFault};
pub use gate::PermissionGate;
pub use listener::{ListenerEvent, NotificationSource, Retirement, RetirementSender};
pub use resolver::{AppIdentity, AppResolver, ResolveError};
