// SPDX-License-Identifier: MPL-2.0
//! Lifecycle host: the command surface around the island.
//!
//! The host keeps the island alive between notifications and translates
//! commands into island operations. It refuses to show anything before it
//! has been started and tears the island down on stop.

use crate::application::island::{Island, ShowOutcome};
use crate::application::port::{Compositor, PermissionGate, RetirementSender};
use crate::domain::notification::{NotificationId, NotificationRecord};
use std::time::Instant;

/// Commands accepted by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    Start,
    Show(NotificationRecord),
    Hide,
    /// Release the view and the timer, then exit.
    Stop,
    Removed {
        id: NotificationId,
        package: String,
    },
}

/// What the caller should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostFlow {
    Continue,
    Exit,
}

/// Owns the island and applies commands to it.
pub struct Host<C, G> {
    island: Island<C, G>,
    started: bool,
    /// Where retired notifications are reported; set once the listener connects.
    retirements: Option<RetirementSender>,
}

impl<C: Compositor, G: PermissionGate> Host<C, G> {
    pub fn new(island: Island<C, G>) -> Self {
        Self {
            island,
            started: false,
            retirements: None,
        }
    }

    /// Routes future retirements to the connected source.
    pub fn connect_source(&mut self, retirements: RetirementSender) {
        self.retirements = Some(retirements);
    }

    /// Advances the island and reports whatever it finished with.
    pub fn tick(&mut self, now: Instant) {
        self.island.tick(now);
        self.flush_retired();
    }

    /// Sends pending retirements to the source, or drops them if none is connected.
    pub fn flush_retired(&mut self) {
        let retired = self.island.take_retired();
        let Some(sender) = &self.retirements else {
            return;
        };
        for retirement in retired {
            if !sender.send(retirement) {
                tracing::debug!(id = %retirement.id, "source gone, retirement dropped");
                self.retirements = None;
                return;
            }
        }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn island(&self) -> &Island<C, G> {
        &self.island
    }

    pub fn island_mut(&mut self) -> &mut Island<C, G> {
        &mut self.island
    }

    pub fn handle(&mut self, command: HostCommand, now: Instant) -> HostFlow {
        let flow = self.apply(command, now);
        self.flush_retired();
        flow
    }

    fn apply(&mut self, command: HostCommand, now: Instant) -> HostFlow {
        match command {
            HostCommand::Start => {
                if !self.started {
                    tracing::info!("island host started");
                }
                self.started = true;
            }
            HostCommand::Show(record) => {
                if !self.started {
                    tracing::warn!(id = %record.id, "show received before start, ignoring");
                    return HostFlow::Continue;
                }
                match self.island.show(record, now) {
                    ShowOutcome::Shown | ShowOutcome::Updated => {}
                    ShowOutcome::Denied => tracing::info!("notification not shown: permission missing"),
                    ShowOutcome::AttachFailed => tracing::info!("notification not shown: no view"),
                }
            }
            HostCommand::Hide => self.island.hide(now),
            HostCommand::Removed { id, package } => {
                self.island.external_removal(id, &package, now);
            }
            HostCommand::Stop => {
                tracing::info!("island host stopping");
                self.island.shutdown();
                self.started = false;
                return HostFlow::Exit;
            }
        }
        HostFlow::Continue
    }
}
