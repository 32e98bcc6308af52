// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and rules with no framework dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `chrono` for wall-clock timestamps it only depends on `std`, so
//! everything here can be tested without a display or a session bus.
//!
//! # Modules
//!
//! - [`notification`]: Inbound events and normalized records
//!   ([`NotificationEvent`](notification::NotificationEvent),
//!   [`NotificationRecord`](notification::NotificationRecord))
//! - [`overlay`]: Overlay phase, view frames, easing curves and transitions
//!   ([`Phase`](overlay::Phase), [`ViewFrame`](overlay::ViewFrame),
//!   [`Transition`](overlay::Transition))
//! - [`settings`]: User preferences as seen by the core
//!   ([`Settings`](settings::Settings), [`DisplayDuration`](settings::DisplayDuration))

pub mod notification;
pub mod overlay;
pub mod settings;
