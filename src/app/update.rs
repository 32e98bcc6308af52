// SPDX-License-Identifier: MPL-2.0
//! Message handlers.
//!
//! Every handler ends by draining the window tasks the compositor queued, so
//! the window system sees island changes in the same update.

use super::compositor::WindowCompositor;
use super::Message;
use crate::application::host::{Host, HostCommand, HostFlow};
use crate::application::pipeline::Pipeline;
use crate::application::port::{AppResolver, ListenerEvent, PermissionGate};
use crate::domain::notification::{NotificationEvent, NotificationId};
use crate::domain::settings::Settings;
use crate::infrastructure::DesktopGate;
use crate::ui::island;
use chrono::Utc;
use iced::{window, Task};
use std::time::Instant;

/// Package used by the sample notification of `--demo`.
pub const DEMO_PACKAGE: &str = "dev.iced_island.demo";

/// Mutable state the handlers work on.
pub struct UpdateContext<'a, R> {
    pub host: &'a mut Host<WindowCompositor, DesktopGate>,
    pub pipeline: &'a mut Pipeline<R>,
    pub demo_pending: &'a mut bool,
}

/// Routes a listener event through the pipeline into the host.
pub fn handle_listener_event<R: AppResolver>(
    ctx: &mut UpdateContext<'_, R>,
    event: ListenerEvent,
    now: Instant,
) -> Task<Message> {
    match &event {
        ListenerEvent::Connected(retirements) => {
            ctx.host.island_mut().gate_mut().set_listener_active(true);
            ctx.host.connect_source(retirements.clone());
        }
        ListenerEvent::Disconnected { .. } => {
            ctx.host.island_mut().gate_mut().set_listener_active(false);
        }
        ListenerEvent::Posted(_) | ListenerEvent::Removed { .. } => {}
    }

    let Some(command) = ctx.pipeline.route(event) else {
        return drain(ctx.host);
    };
    let starting = command == HostCommand::Start;

    if ctx.host.handle(command, now) == HostFlow::Exit {
        return Task::batch([drain(ctx.host), iced::exit()]);
    }

    if starting && std::mem::take(ctx.demo_pending) {
        tracing::info!("posting demo notification");
        if let Some(command) = ctx.pipeline.route(ListenerEvent::Posted(demo_event())) {
            ctx.host.handle(command, now);
        } else {
            tracing::info!("demo notification filtered out");
        }
    }

    drain(ctx.host)
}

/// Applies settings edited while running.
///
/// Enabling the service starts the host if the listener is already up;
/// disabling it hides whatever is shown. The dwell applies from the next
/// scheduled deadline.
pub fn handle_settings_changed<R: AppResolver>(
    ctx: &mut UpdateContext<'_, R>,
    settings: Settings,
    now: Instant,
) -> Task<Message> {
    let was_enabled = ctx.pipeline.settings().service_enabled;
    let enabled = settings.service_enabled;

    ctx.host
        .island_mut()
        .set_display_duration(settings.display_duration);
    ctx.pipeline.set_settings(settings);

    if enabled && !was_enabled {
        if ctx.host.island().gate().listener_active() {
            ctx.host.handle(HostCommand::Start, now);
        }
    } else if was_enabled && !enabled {
        tracing::info!("service disabled, hiding the island");
        ctx.host.handle(HostCommand::Hide, now);
    }

    drain(ctx.host)
}

/// Advances the island to `now`.
pub fn handle_tick(host: &mut Host<WindowCompositor, DesktopGate>, now: Instant) -> Task<Message> {
    host.tick(now);
    drain(host)
}

/// Pointer down holds the island, pointer up toggles its layout.
pub fn handle_island_message(
    host: &mut Host<WindowCompositor, DesktopGate>,
    message: island::Message,
    now: Instant,
) -> Task<Message> {
    match message {
        island::Message::Pressed => host.island_mut().touch_down(),
        island::Message::Released => {
            host.island_mut().toggle_expand(now);
        }
    }
    drain(host)
}

pub fn handle_window_opened(id: window::Id) -> Task<Message> {
    tracing::debug!(?id, "island window opened");
    Task::none()
}

fn drain(host: &mut Host<WindowCompositor, DesktopGate>) -> Task<Message> {
    host.flush_retired();
    host.island_mut().compositor_mut().take_tasks()
}

/// The sample notification shown by `--demo`.
#[must_use]
pub fn demo_event() -> NotificationEvent {
    NotificationEvent::new(NotificationId::new(u32::MAX), DEMO_PACKAGE, Utc::now())
        .with_title("Hello from the island")
        .with_text("Click to expand. New notifications will show up here.")
        .with_action("open", "Open")
        .with_action("dismiss", "Dismiss")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::filter::should_display;
    use crate::application::island::{Island, OverlayState};
    use crate::application::port::RetirementSender;
    use crate::domain::overlay::Phase;
    use crate::domain::settings::DisplayDuration;
    use crate::infrastructure::DesktopEntryResolver;
    use std::time::Duration;

    fn enabled() -> Settings {
        Settings {
            service_enabled: true,
            ..Settings::default()
        }
    }

    fn host() -> Host<WindowCompositor, DesktopGate> {
        Host::new(Island::new(
            OverlayState::default(),
            WindowCompositor::new(true),
            DesktopGate::new(true),
            DisplayDuration::default(),
        ))
    }

    fn pipeline(settings: Settings) -> Pipeline<DesktopEntryResolver> {
        Pipeline::new(DesktopEntryResolver::with_roots(Vec::new()), settings)
    }

    fn connect(
        host: &mut Host<WindowCompositor, DesktopGate>,
        pipeline: &mut Pipeline<DesktopEntryResolver>,
        now: Instant,
    ) {
        let (feedback, _retired) = RetirementSender::channel();
        let mut demo = false;
        let mut ctx = UpdateContext {
            host,
            pipeline,
            demo_pending: &mut demo,
        };
        let _ = handle_listener_event(&mut ctx, ListenerEvent::Connected(feedback), now);
    }

    #[test]
    fn demo_event_passes_the_filter_when_enabled() {
        assert!(should_display(&demo_event(), &enabled()));
        assert!(!should_display(&demo_event(), &Settings::default()));
    }

    #[test]
    fn enabling_while_connected_starts_the_host() {
        let mut host = host();
        let mut pipeline = pipeline(Settings::default());
        let now = Instant::now();
        connect(&mut host, &mut pipeline, now);
        assert!(!host.is_started());

        let mut demo = false;
        let mut ctx = UpdateContext {
            host: &mut host,
            pipeline: &mut pipeline,
            demo_pending: &mut demo,
        };
        let dwell = DisplayDuration::from_millis(9000);
        let settings = Settings {
            display_duration: dwell,
            ..enabled()
        };
        let _ = handle_settings_changed(&mut ctx, settings, now);

        assert!(host.is_started());
        assert_eq!(host.island().display_duration(), dwell);
        assert!(pipeline.settings().service_enabled);
    }

    #[test]
    fn enabling_before_the_listener_connects_waits_for_it() {
        let mut host = host();
        let mut pipeline = pipeline(Settings::default());
        let mut demo = false;
        let mut ctx = UpdateContext {
            host: &mut host,
            pipeline: &mut pipeline,
            demo_pending: &mut demo,
        };
        let _ = handle_settings_changed(&mut ctx, enabled(), Instant::now());
        assert!(!host.is_started());
    }

    #[test]
    fn disabling_hides_the_shown_notification() {
        let mut host = host();
        let mut pipeline = pipeline(enabled());
        let t0 = Instant::now();
        connect(&mut host, &mut pipeline, t0);
        assert!(host.is_started());

        let mut demo = false;
        let mut ctx = UpdateContext {
            host: &mut host,
            pipeline: &mut pipeline,
            demo_pending: &mut demo,
        };
        let posted = ListenerEvent::Posted(
            NotificationEvent::new(NotificationId::new(3), "org.example.chat", Utc::now())
                .with_title("Ping"),
        );
        let _ = handle_listener_event(&mut ctx, posted, t0);
        assert_eq!(ctx.host.island().phase(), Phase::Collapsed);

        let _ = handle_settings_changed(&mut ctx, Settings::default(), t0);
        assert!(ctx.host.island().is_exiting());
        let _ = handle_tick(ctx.host, t0 + Duration::from_millis(250));
        assert_eq!(ctx.host.island().phase(), Phase::Hidden);

        let again = ListenerEvent::Posted(
            NotificationEvent::new(NotificationId::new(4), "org.example.chat", Utc::now())
                .with_title("Ping"),
        );
        let _ = handle_listener_event(&mut ctx, again, t0 + Duration::from_millis(300));
        assert_eq!(ctx.host.island().phase(), Phase::Hidden);
    }
}
