// SPDX-License-Identifier: MPL-2.0
//! In-memory adapters.
//!
//! A compositor that records what it is asked to do and a gate with fixed
//! answers, for driving the island without a display.

use crate::application::port::{Compositor, CompositorFault, PermissionGate};
use crate::domain::overlay::{IslandContent, ViewFrame};

/// One call received by [`RecordingCompositor`].
#[derive(Debug, Clone, PartialEq)]
pub enum CompositorCall {
    Attach(ViewFrame),
    Update(ViewFrame),
    Bind(IslandContent),
    Detach,
}

/// Compositor operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultPoint {
    Attach,
    Update,
    Bind,
    Detach,
}

/// Compositor that keeps a log instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingCompositor {
    calls: Vec<CompositorCall>,
    attached: bool,
    frame: Option<ViewFrame>,
    content: Option<IslandContent>,
    failing: Vec<FaultPoint>,
    blur: bool,
}

impl RecordingCompositor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A compositor that reports blur support.
    #[must_use]
    pub fn with_blur() -> Self {
        Self {
            blur: true,
            ..Self::default()
        }
    }

    /// Makes every subsequent call at `point` fail until [`heal`](Self::heal).
    pub fn fail_at(&mut self, point: FaultPoint) {
        if !self.failing.contains(&point) {
            self.failing.push(point);
        }
    }

    pub fn heal(&mut self) {
        self.failing.clear();
    }

    #[must_use]
    pub fn calls(&self) -> &[CompositorCall] {
        &self.calls
    }

    /// True between a successful attach and the next detach.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[must_use]
    pub fn frame(&self) -> Option<&ViewFrame> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn content(&self) -> Option<&IslandContent> {
        self.content.as_ref()
    }

    pub fn count(&self, matches: impl Fn(&CompositorCall) -> bool) -> usize {
        self.calls.iter().filter(|call| matches(call)).count()
    }

    fn check(&self, point: FaultPoint) -> Result<(), CompositorFault> {
        if self.failing.contains(&point) {
            Err(CompositorFault::Rejected(format!("{point:?} disabled")))
        } else {
            Ok(())
        }
    }
}

impl Compositor for RecordingCompositor {
    fn attach_view(&mut self, frame: &ViewFrame) -> Result<(), CompositorFault> {
        self.check(FaultPoint::Attach)?;
        if self.attached {
            return Err(CompositorFault::Rejected("view already attached".into()));
        }
        self.calls.push(CompositorCall::Attach(*frame));
        self.attached = true;
        self.frame = Some(*frame);
        Ok(())
    }

    fn update_geometry(&mut self, frame: &ViewFrame) -> Result<(), CompositorFault> {
        self.check(FaultPoint::Update)?;
        if !self.attached {
            return Err(CompositorFault::NotAttached);
        }
        self.calls.push(CompositorCall::Update(*frame));
        self.frame = Some(*frame);
        Ok(())
    }

    fn bind_content(&mut self, content: &IslandContent) -> Result<(), CompositorFault> {
        self.check(FaultPoint::Bind)?;
        if !self.attached {
            return Err(CompositorFault::NotAttached);
        }
        self.calls.push(CompositorCall::Bind(content.clone()));
        self.content = Some(content.clone());
        Ok(())
    }

    fn detach_view(&mut self) -> Result<(), CompositorFault> {
        self.check(FaultPoint::Detach)?;
        self.calls.push(CompositorCall::Detach);
        self.attached = false;
        self.frame = None;
        self.content = None;
        Ok(())
    }

    fn blur_available(&self) -> bool {
        self.blur
    }
}

/// Gate with settable answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticGate {
    pub listener: bool,
    pub overlay: bool,
}

impl StaticGate {
    #[must_use]
    pub fn granted() -> Self {
        Self {
            listener: true,
            overlay: true,
        }
    }

    #[must_use]
    pub fn denied() -> Self {
        Self {
            listener: false,
            overlay: false,
        }
    }
}

impl PermissionGate for StaticGate {
    fn listener_active(&self) -> bool {
        self.listener
    }

    fn can_draw_overlay(&self) -> bool {
        self.overlay
    }
}
