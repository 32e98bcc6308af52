// SPDX-License-Identifier: MPL-2.0
//! `iced_island` shows desktop notifications as a floating island built with
//! the Iced GUI framework.
//!
//! It owns `org.freedesktop.Notifications` on the session bus, filters and
//! normalizes incoming notifications, and presents the latest one as a pill
//! pinned to the top of the screen. Clicking the pill expands it into a card;
//! after a configurable delay it collapses and then fades out.
//!
//! The crate is split the same way as the application:
//!
//! - [`domain`]: records, frames, transitions and settings
//! - [`application`]: filter, extraction, the island state machine and its ports
//! - [`infrastructure`]: session bus, desktop entries and environment adapters
//! - [`app`] and [`ui`]: the Iced daemon and the island widget

#![doc(html_root_url = "https://docs.rs/iced_island/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

/// Identifier of this application.
///
/// Notifications carrying it are never displayed, so the island does not
/// react to its own messages.
pub const APP_ID: &str = "dev.iced_island";
