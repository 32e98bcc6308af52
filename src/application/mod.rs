// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`filter`]: Which notifications may reach the island
//! - [`extract`]: Raw events to display records
//! - [`island`]: The overlay presentation state machine
//! - [`host`]: Lifecycle commands around the island
//! - [`pipeline`]: Listener events to host commands
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the host and renders the island frame
//!
//! # Example
//!
//! ```ignore
//! use iced_island::application::host::{Host, HostCommand};
//! use iced_island::application::island::{Island, OverlayState};
//! use iced_island::domain::settings::DisplayDuration;
//! use iced_island::infrastructure::memory::{RecordingCompositor, StaticGate};
//!
//! let island = Island::new(
//!     OverlayState::default(),
//!     RecordingCompositor::new(),
//!     StaticGate::granted(),
//!     DisplayDuration::default(),
//! );
//! let mut host = Host::new(island);
//! host.handle(HostCommand::Start, std::time::Instant::now());
//! ```

pub mod extract;
pub mod filter;
pub mod host;
pub mod island;
pub mod pipeline;
pub mod port;
