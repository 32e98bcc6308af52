// SPDX-License-Identifier: MPL-2.0
//! Application root: runs the island as an Iced daemon.
//!
//! The daemon has no main window. The island window is opened and closed by
//! [`compositor::WindowCompositor`] as the state machine attaches and detaches
//! the view, and every message ends by handing the queued window tasks to the
//! runtime. Edits to the settings file are picked up while running.

pub mod autostart;
pub mod compositor;
pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::{demo_event, DEMO_PACKAGE};

use crate::application::host::Host;
use crate::application::island::{Island, OverlayState};
use crate::application::pipeline::Pipeline;
use crate::infrastructure::{DesktopEntryResolver, DesktopGate};
use compositor::WindowCompositor;
use iced::{window, Color, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root daemon state.
pub struct App {
    host: Host<WindowCompositor, DesktopGate>,
    pipeline: Pipeline<DesktopEntryResolver>,
    /// Set by `--demo`; cleared once the sample notification was routed.
    demo_pending: bool,
    settings_watcher: config::SettingsWatcher,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.host.island().phase())
            .field("started", &self.host.is_started())
            .field("demo_pending", &self.demo_pending)
            .finish()
    }
}

/// Builds and runs the daemon.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        (App::new(flags), Task::none())
    };

    iced::daemon(boot, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .style(App::style)
        .run()
}

impl App {
    fn new(flags: Flags) -> Self {
        let (config, warning) = config::load();
        if let Some(warning) = warning {
            tracing::warn!("{warning}");
        }
        let settings = config.to_settings();

        let gate = DesktopGate::from_environment();
        let compositor = WindowCompositor::new(crate::infrastructure::gate::display_reachable());
        let island = Island::new(
            OverlayState::default(),
            compositor,
            gate,
            settings.display_duration,
        );

        tracing::info!(
            enabled = settings.service_enabled,
            dwell_ms = settings.display_duration.millis(),
            excluded = settings.excluded_packages.len(),
            "island ready"
        );

        Self {
            host: Host::new(island),
            pipeline: Pipeline::new(DesktopEntryResolver::from_environment(), settings),
            demo_pending: flags.demo,
            settings_watcher: config::SettingsWatcher::at_config_path(),
        }
    }

    fn title(&self, _window: window::Id) -> String {
        String::from("Iced Island")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Listener(event) => {
                let mut ctx = update::UpdateContext {
                    host: &mut self.host,
                    pipeline: &mut self.pipeline,
                    demo_pending: &mut self.demo_pending,
                };
                update::handle_listener_event(&mut ctx, event, now)
            }
            Message::SettingsPoll(_) => {
                let Some(config) = self.settings_watcher.poll() else {
                    return Task::none();
                };
                let mut ctx = update::UpdateContext {
                    host: &mut self.host,
                    pipeline: &mut self.pipeline,
                    demo_pending: &mut self.demo_pending,
                };
                update::handle_settings_changed(&mut ctx, config.to_settings(), now)
            }
            Message::Tick(at) => update::handle_tick(&mut self.host, at),
            Message::Island(island_message) => {
                update::handle_island_message(&mut self.host, island_message, now)
            }
            Message::WindowOpened(id) => update::handle_window_opened(id),
        }
    }

    fn view(&self, id: window::Id) -> Element<'_, Message> {
        view::view(self.host.island().compositor(), id)
    }

    fn subscription(&self) -> Subscription<Message> {
        let island = self.host.island();
        Subscription::batch([
            subscription::create_listener_subscription(),
            subscription::create_settings_subscription(),
            subscription::create_tick_subscription(
                island.is_animating(),
                island.auto_hide_deadline().is_some(),
            ),
        ])
    }

    fn style(&self, theme: &Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: Color::TRANSPARENT,
            text_color: theme.palette().text,
        }
    }
}
