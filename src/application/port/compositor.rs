// SPDX-License-Identifier: MPL-2.0
//! Compositor port definition.
//!
//! This module defines the [`Compositor`] trait: the window system as seen by
//! the presentation state machine. It attaches one floating view, moves and
//! resizes it, binds content into it and detaches it again.
//!
//! # Design Notes
//!
//! - Every call may fail (permission revoked mid-session, parameters
//!   rejected); callers log and carry on, they never retry
//! - Detaching a view that was never attached must be a harmless no-op
//! - Blur is a queried capability, not an operation

use crate::domain::overlay::{IslandContent, ViewFrame};
use std::fmt;

// =============================================================================
// CompositorFault
// =============================================================================

/// Errors reported by the compositor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositorFault {
    /// Drawing over other windows is not (or no longer) permitted.
    PermissionRevoked,

    /// The compositor refused the request.
    Rejected(String),

    /// The operation needs an attached view and there is none.
    NotAttached,
}

impl fmt::Display for CompositorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositorFault::PermissionRevoked => write!(f, "overlay permission revoked"),
            CompositorFault::Rejected(msg) => write!(f, "compositor rejected request: {msg}"),
            CompositorFault::NotAttached => write!(f, "no view attached"),
        }
    }
}

impl std::error::Error for CompositorFault {}

// =============================================================================
// Compositor Trait
// =============================================================================

/// Port for the window system hosting the island.
pub trait Compositor {
    /// Attaches the floating view with the given initial frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the view could not be created; no view exists
    /// afterwards.
    fn attach_view(&mut self, frame: &ViewFrame) -> Result<(), CompositorFault>;

    /// Applies a new frame (size, scale, opacity, layout, variant) to the view.
    ///
    /// # Errors
    ///
    /// Returns an error if the update was rejected; the view keeps its
    /// previous frame.
    fn update_geometry(&mut self, frame: &ViewFrame) -> Result<(), CompositorFault>;

    /// Replaces the text and icon shown by the view.
    ///
    /// # Errors
    ///
    /// Returns an error if the view could not be updated.
    fn bind_content(&mut self, content: &IslandContent) -> Result<(), CompositorFault>;

    /// Removes the view.
    ///
    /// # Errors
    ///
    /// Returns an error if the compositor refused; the view is then still on
    /// screen.
    fn detach_view(&mut self) -> Result<(), CompositorFault>;

    /// Returns true if the compositor can blur what is behind the view.
    fn blur_available(&self) -> bool {
        false
    }
}
