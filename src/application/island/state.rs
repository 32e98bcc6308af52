// SPDX-License-Identifier: MPL-2.0
//! Mutable state owned by the island.

use crate::domain::notification::NotificationRecord;
use crate::domain::overlay::{Appearance, Backdrop, Phase, Size, Transition, ViewFrame};
use std::time::{Duration, Instant};

/// Single-slot auto-hide deadline.
///
/// Scheduling replaces whatever was pending, so at most one deadline exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoHideTimer {
    deadline: Option<Instant>,
}

impl AutoHideTimer {
    pub fn schedule(&mut self, now: Instant, dwell: Duration) {
        self.deadline = Some(now + dwell);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Clears and returns the deadline if it has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if deadline <= now => self.deadline.take(),
            _ => None,
        }
    }
}

/// What to do once a transition reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFinish {
    Nothing,
    /// Swap the expanded layout out after the shrink completes.
    RevealCollapsedLayout,
    /// Remove the view and reset the state.
    Detach,
}

/// A transition plus its completion action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion<T> {
    pub transition: Transition<T>,
    pub on_finish: OnFinish,
}

impl<T> Motion<T> {
    pub fn new(transition: Transition<T>, on_finish: OnFinish) -> Self {
        Self {
            transition,
            on_finish,
        }
    }
}

/// Everything the island knows about what is on screen.
///
/// Passed into [`Island::new`](super::Island::new) so callers (and tests) can
/// start from any state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayState {
    pub phase: Phase,
    pub current: Option<NotificationRecord>,
    pub auto_hide: AutoHideTimer,
    pub frame: ViewFrame,
    /// In-flight size animation.
    pub resize: Option<Motion<Size>>,
    /// In-flight scale/opacity animation.
    pub fade: Option<Motion<Appearance>>,
}

impl OverlayState {
    /// Back to a hidden island with collapsed geometry and nothing pending.
    pub fn reset(&mut self, backdrop: Backdrop) {
        *self = Self {
            frame: ViewFrame::collapsed(backdrop),
            ..Self::default()
        };
    }

    /// Returns true while the exit animation is running.
    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.fade
            .is_some_and(|motion| motion.on_finish == OnFinish::Detach)
    }
}
