// SPDX-License-Identifier: MPL-2.0
//! Overlay domain types.
//!
//! This module contains the vocabulary of the presentation state machine:
//! the [`Phase`] it is in, the [`ViewFrame`] it asks the compositor to show,
//! the time-driven [`Transition`]s that move one frame to another, and the
//! [`IslandContent`] bound into its widgets.

mod content;
mod frame;
mod motion;
mod phase;

pub use content::IslandContent;
pub use frame::{geometry, Appearance, Backdrop, Layout, Size, Variant, ViewFrame};
pub use motion::{timing, Easing, Lerp, Transition};
pub use phase::Phase;
