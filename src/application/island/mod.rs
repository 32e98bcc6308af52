// SPDX-License-Identifier: MPL-2.0
//! Presentation state machine for the floating island.
//!
//! The island moves through `Hidden → Collapsed ⇄ Expanded → Hidden`. It owns
//! the single auto-hide deadline and every in-flight transition, and it is the
//! only thing that talks to the [`Compositor`].
//!
//! All operations take the current [`Instant`]; nothing reads the clock
//! behind the caller's back except the relative-age label. [`Island::tick`]
//! advances transitions and fires the deadline, so the host decides how often
//! time moves.
//!
//! Compositor faults are logged and swallowed. The phase always reflects what
//! actually happened: a failed attach leaves the island hidden, a failed
//! detach leaves it visible.
//!
//! Records the island is done with are queued as [`Retirement`]s for the
//! host to report back to the source. A record withdrawn by its sender is
//! not reported again.

mod state;

pub use state::{AutoHideTimer, Motion, OnFinish, OverlayState};

use crate::application::port::{Compositor, PermissionGate, Retirement};
use crate::domain::notification::{CloseReason, NotificationId, NotificationRecord};
use crate::domain::overlay::{
    geometry, timing, Appearance, Backdrop, Easing, IslandContent, Layout, Phase, Transition,
    Variant, ViewFrame,
};
use crate::domain::settings::DisplayDuration;
use chrono::Utc;
use std::time::Instant;

/// Result of [`Island::show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    /// The island was hidden and is now on screen.
    Shown,
    /// The island was already visible; its content was replaced.
    Updated,
    /// A permission is missing; nothing changed.
    Denied,
    /// The compositor refused the view; the island stays hidden.
    AttachFailed,
}

/// The overlay presentation state machine.
pub struct Island<C, G> {
    state: OverlayState,
    compositor: C,
    gate: G,
    dwell: DisplayDuration,
    backdrop: Backdrop,
    /// Why the running exit started; `None` when the sender withdrew the record.
    exit_reason: Option<CloseReason>,
    retired: Vec<Retirement>,
}

impl<C: Compositor, G: PermissionGate> Island<C, G> {
    /// Creates an island from an initial state.
    ///
    /// The backdrop is decided once: frosted if the compositor can blur,
    /// solid otherwise.
    pub fn new(mut state: OverlayState, compositor: C, gate: G, dwell: DisplayDuration) -> Self {
        let backdrop = if compositor.blur_available() {
            Backdrop::Frosted
        } else {
            Backdrop::Solid
        };
        state.frame.backdrop = backdrop;
        Self {
            state,
            compositor,
            gate,
            dwell,
            backdrop,
            exit_reason: None,
            retired: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn current(&self) -> Option<&NotificationRecord> {
        self.state.current.as_ref()
    }

    #[must_use]
    pub fn frame(&self) -> &ViewFrame {
        &self.state.frame
    }

    #[must_use]
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    #[must_use]
    pub fn auto_hide_deadline(&self) -> Option<Instant> {
        self.state.auto_hide.deadline()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.resize.is_some() || self.state.fade.is_some()
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.state.is_exiting()
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    #[must_use]
    pub fn next_wakeup(&self) -> Option<Instant> {
        let resize = self.state.resize.map(|m| m.transition.ends_at());
        let fade = self.state.fade.map(|m| m.transition.ends_at());
        [resize, fade, self.state.auto_hide.deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    #[must_use]
    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    pub fn compositor_mut(&mut self) -> &mut C {
        &mut self.compositor
    }

    #[must_use]
    pub fn gate(&self) -> &G {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut G {
        &mut self.gate
    }

    #[must_use]
    pub fn display_duration(&self) -> DisplayDuration {
        self.dwell
    }

    /// Changes the dwell used by the next scheduling; a pending deadline is kept.
    pub fn set_display_duration(&mut self, dwell: DisplayDuration) {
        self.dwell = dwell;
    }

    /// Drains the records retired since the last call.
    pub fn take_retired(&mut self) -> Vec<Retirement> {
        std::mem::take(&mut self.retired)
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Presents `record`, replacing whatever was shown.
    pub fn show(&mut self, record: NotificationRecord, now: Instant) -> ShowOutcome {
        if !self.gate.permits_display() {
            tracing::debug!(id = %record.id, "display not permitted, dropping notification");
            return ShowOutcome::Denied;
        }

        self.state.auto_hide.cancel();

        let was_hidden = self.state.phase == Phase::Hidden;
        if was_hidden {
            let frame = ViewFrame {
                appearance: Appearance::RECEDED,
                ..ViewFrame::collapsed(self.backdrop)
            };
            if let Err(fault) = self.compositor.attach_view(&frame) {
                tracing::warn!(%fault, "could not attach island view");
                return ShowOutcome::AttachFailed;
            }
            self.state.frame = frame;
            self.state.phase = Phase::Collapsed;
        }

        let interrupted_exit = self.state.is_exiting();
        let exit_reason = self.exit_reason.take();
        if let Some(previous) = self.state.current.take() {
            let reason = if interrupted_exit {
                exit_reason
            } else {
                Some(CloseReason::Expired)
            };
            if previous.id != record.id {
                if let Some(reason) = reason {
                    self.retire(previous.id, reason);
                }
            }
        }

        let content = IslandContent::from_record(&record, Utc::now());
        if let Err(fault) = self.compositor.bind_content(&content) {
            tracing::warn!(%fault, "could not bind island content");
        }
        tracing::debug!(id = %record.id, package = %record.package, "showing notification");
        self.state.current = Some(record);

        if self.state.is_exiting() {
            tracing::debug!("new notification interrupts exit");
            self.settle_geometry();
        }
        if was_hidden || self.needs_entrance() {
            self.play_entrance(now);
        }

        self.schedule_auto_hide(now);

        if was_hidden {
            ShowOutcome::Shown
        } else {
            ShowOutcome::Updated
        }
    }

    /// Switches between the collapsed and expanded layouts.
    ///
    /// Returns false when there is nothing to toggle (hidden or exiting).
    pub fn toggle_expand(&mut self, now: Instant) -> bool {
        if self.state.is_exiting() {
            return false;
        }
        match self.state.phase {
            Phase::Hidden => return false,
            Phase::Collapsed => self.expand(now),
            Phase::Expanded => self.collapse(now),
        }
        self.push_frame();
        self.schedule_auto_hide(now);
        true
    }

    /// Pointer went down on the island: hold it on screen.
    pub fn touch_down(&mut self) {
        self.state.auto_hide.cancel();
    }

    /// Starts the exit animation. Does nothing if hidden or already exiting.
    pub fn hide(&mut self, now: Instant) {
        self.begin_exit(now, Some(CloseReason::Undefined));
    }

    fn begin_exit(&mut self, now: Instant, reason: Option<CloseReason>) {
        if self.state.phase == Phase::Hidden || self.state.is_exiting() {
            return;
        }
        self.exit_reason = reason;
        self.state.auto_hide.cancel();
        self.state.resize = None;
        let exit = Transition::new(
            self.state.frame.appearance,
            Appearance::RECEDED,
            now,
            timing::EXIT,
            Easing::AccelerateDecelerate,
        );
        self.state.fade = Some(Motion::new(exit, OnFinish::Detach));
        tracing::debug!(phase = %self.state.phase, "island exiting");
    }

    /// The source withdrew a notification.
    ///
    /// Hides whatever is shown, even if it is a different notification.
    pub fn external_removal(&mut self, id: NotificationId, package: &str, now: Instant) {
        let matches_current = self
            .state
            .current
            .as_ref()
            .is_some_and(|record| record.matches(id, package));
        tracing::debug!(%id, package, matches_current, "notification removed externally");
        let reason = if matches_current {
            None
        } else {
            Some(CloseReason::Undefined)
        };
        self.begin_exit(now, reason);
    }

    /// Advances time: fires the auto-hide deadline and samples transitions.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.state.auto_hide.take_due(now) {
            self.auto_hide_fired(deadline);
        }

        let mut changed = false;

        if let Some(motion) = self.state.resize {
            self.state.frame.size = motion.transition.sample(now);
            changed = true;
            if motion.transition.is_finished(now) {
                self.state.resize = None;
                if motion.on_finish == OnFinish::RevealCollapsedLayout {
                    self.state.frame.layout = Layout::Collapsed;
                }
            }
        }

        if let Some(motion) = self.state.fade {
            self.state.frame.appearance = motion.transition.sample(now);
            changed = true;
            if motion.transition.is_finished(now) {
                self.state.fade = None;
                if motion.on_finish == OnFinish::Detach {
                    self.finish_exit();
                    return;
                }
            }
        }

        if changed {
            self.push_frame();
        }
    }

    /// Releases the view and the deadline; used when the host stops.
    pub fn shutdown(&mut self) {
        let reason = if self.state.is_exiting() {
            self.exit_reason.take()
        } else {
            Some(CloseReason::Undefined)
        };
        let current = self.state.current.as_ref().map(|record| record.id);
        if let (Some(reason), Some(id)) = (reason, current) {
            self.retire(id, reason);
        }
        self.exit_reason = None;
        self.state.auto_hide.cancel();
        self.state.resize = None;
        self.state.fade = None;
        if self.state.phase.is_visible() {
            if let Err(fault) = self.compositor.detach_view() {
                tracing::warn!(%fault, "could not detach island view on shutdown");
            }
        }
        self.state.reset(self.backdrop);
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn auto_hide_fired(&mut self, at: Instant) {
        match self.state.phase {
            Phase::Hidden => {}
            Phase::Expanded => {
                tracing::debug!("auto-hide: collapsing");
                self.collapse(at);
                self.push_frame();
                self.schedule_auto_hide(at);
            }
            Phase::Collapsed => {
                tracing::debug!("auto-hide: hiding");
                self.begin_exit(at, Some(CloseReason::Expired));
            }
        }
    }

    fn expand(&mut self, now: Instant) {
        self.state.frame.layout = Layout::Expanded;
        self.state.frame.variant = Variant::Expanded;
        let grow = Transition::new(
            self.state.frame.size,
            geometry::EXPANDED,
            now,
            timing::EXPAND,
            Easing::Overshoot {
                tension: timing::EXPAND_TENSION,
            },
        );
        self.state.resize = Some(Motion::new(grow, OnFinish::Nothing));
        self.state.phase = Phase::Expanded;
    }

    fn collapse(&mut self, now: Instant) {
        self.state.frame.variant = Variant::Collapsed;
        let shrink = Transition::new(
            self.state.frame.size,
            geometry::COLLAPSED,
            now,
            timing::COLLAPSE,
            Easing::AccelerateDecelerate,
        );
        self.state.resize = Some(Motion::new(shrink, OnFinish::RevealCollapsedLayout));
        self.state.phase = Phase::Collapsed;
    }

    fn play_entrance(&mut self, now: Instant) {
        let enter = Transition::new(
            self.state.frame.appearance,
            Appearance::VISIBLE,
            now,
            timing::ENTER,
            Easing::OVERSHOOT,
        );
        self.state.fade = Some(Motion::new(enter, OnFinish::Nothing));
    }

    /// True if the view is not (and is not heading to be) fully visible.
    fn needs_entrance(&self) -> bool {
        match self.state.fade {
            Some(motion) => motion.transition.target() != Appearance::VISIBLE,
            None => self.state.frame.appearance != Appearance::VISIBLE,
        }
    }

    /// Snaps size, layout and variant to what the phase expects.
    fn settle_geometry(&mut self) {
        let frame = &mut self.state.frame;
        if self.state.phase == Phase::Expanded {
            frame.size = geometry::EXPANDED;
            frame.layout = Layout::Expanded;
            frame.variant = Variant::Expanded;
        } else {
            frame.size = geometry::COLLAPSED;
            frame.layout = Layout::Collapsed;
            frame.variant = Variant::Collapsed;
        }
        self.state.resize = None;
    }

    fn schedule_auto_hide(&mut self, now: Instant) {
        self.state.auto_hide.schedule(now, self.dwell.as_duration());
    }

    fn push_frame(&mut self) {
        if !self.state.phase.is_visible() {
            return;
        }
        if let Err(fault) = self.compositor.update_geometry(&self.state.frame) {
            tracing::warn!(%fault, "could not update island geometry");
        }
    }

    fn retire(&mut self, id: NotificationId, reason: CloseReason) {
        tracing::trace!(%id, ?reason, "record retired");
        self.retired.push(Retirement { id, reason });
    }

    fn finish_exit(&mut self) {
        match self.compositor.detach_view() {
            Ok(()) => {
                tracing::debug!("island hidden");
                let reason = self.exit_reason.take();
                let current = self.state.current.as_ref().map(|record| record.id);
                if let (Some(reason), Some(id)) = (reason, current) {
                    self.retire(id, reason);
                }
                self.state.reset(self.backdrop);
            }
            Err(fault) => {
                tracing::warn!(%fault, "could not detach island view, keeping it");
                self.exit_reason = None;
                self.push_frame();
            }
        }
    }
}

#[cfg(test)]
mod tests;
