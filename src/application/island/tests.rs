// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::application::port::Retirement;
use crate::domain::notification::QuickAction;
use crate::domain::overlay::Size;
use crate::infrastructure::memory::{CompositorCall, FaultPoint, RecordingCompositor, StaticGate};
use approx::assert_relative_eq;
use std::time::Duration;

type TestIsland = Island<RecordingCompositor, StaticGate>;

fn island() -> TestIsland {
    Island::new(
        OverlayState::default(),
        RecordingCompositor::new(),
        StaticGate::granted(),
        DisplayDuration::default(),
    )
}

fn record(id: u32, title: &str) -> NotificationRecord {
    NotificationRecord {
        id: NotificationId::new(id),
        package: "com.example.chat".into(),
        app_name: "Chat".into(),
        icon: None,
        title: Some(title.into()),
        content: Some("hello".into()),
        long_content: None,
        posted_at: Utc::now(),
        actions: vec![
            QuickAction {
                label: "Reply".into(),
                key: "reply".into(),
            },
            QuickAction {
                label: "Mute".into(),
                key: "mute".into(),
            },
            QuickAction {
                label: "Block".into(),
                key: "block".into(),
            },
        ],
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn show_from_hidden_attaches_collapsed_and_enters() {
    let mut island = island();
    let t0 = Instant::now();

    assert_eq!(island.show(record(1, "Hi"), t0), ShowOutcome::Shown);

    assert_eq!(island.phase(), Phase::Collapsed);
    let attached = island.compositor().calls()[0].clone();
    match attached {
        CompositorCall::Attach(frame) => {
            assert_eq!(frame.size, geometry::COLLAPSED);
            assert_relative_eq!(frame.top_offset, 12.0);
            assert_eq!(frame.appearance, Appearance::RECEDED);
        }
        other => panic!("expected attach, got {other:?}"),
    }
    assert!(island.is_animating());
    assert_eq!(island.auto_hide_deadline(), Some(t0 + ms(4000)));

    island.tick(t0 + ms(300));
    assert_eq!(island.frame().appearance, Appearance::VISIBLE);
    assert!(!island.is_animating());
}

#[test]
fn bound_content_renders_two_actions() {
    let mut island = island();
    island.show(record(1, "Hi"), Instant::now());
    let content = island.compositor().content().cloned().unwrap_or_default();
    assert_eq!(content.headline, "Hi");
    assert_eq!(content.actions, ["Reply", "Mute"]);
    assert_eq!(content.app_label, "CHAT");
    assert_eq!(content.age_label, "now");
}

#[test]
fn show_is_denied_without_permission() {
    let mut island = Island::new(
        OverlayState::default(),
        RecordingCompositor::new(),
        StaticGate {
            listener: true,
            overlay: false,
        },
        DisplayDuration::default(),
    );
    assert_eq!(island.show(record(1, "Hi"), Instant::now()), ShowOutcome::Denied);
    assert_eq!(island.phase(), Phase::Hidden);
    assert!(island.compositor().calls().is_empty());
    assert_eq!(island.auto_hide_deadline(), None);
}

#[test]
fn show_is_denied_while_listener_is_inactive() {
    let mut island = Island::new(
        OverlayState::default(),
        RecordingCompositor::new(),
        StaticGate {
            listener: false,
            overlay: true,
        },
        DisplayDuration::default(),
    );
    assert_eq!(island.show(record(1, "Hi"), Instant::now()), ShowOutcome::Denied);
    assert_eq!(island.phase(), Phase::Hidden);
    assert!(island.compositor().calls().is_empty());
    assert!(island.current().is_none());
}

#[test]
fn attach_failure_stays_hidden() {
    let mut compositor = RecordingCompositor::new();
    compositor.fail_at(FaultPoint::Attach);
    let mut island = Island::new(
        OverlayState::default(),
        compositor,
        StaticGate::granted(),
        DisplayDuration::default(),
    );

    assert_eq!(island.show(record(1, "Hi"), Instant::now()), ShowOutcome::AttachFailed);
    assert_eq!(island.phase(), Phase::Hidden);
    assert!(island.current().is_none());
    assert_eq!(island.auto_hide_deadline(), None);
}

#[test]
fn second_show_replaces_record_without_reattaching() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "First"), t0);
    island.tick(t0 + ms(300));

    assert_eq!(island.show(record(2, "Second"), t0 + ms(1000)), ShowOutcome::Updated);

    assert_eq!(island.current().map(|r| r.id), Some(NotificationId::new(2)));
    assert_eq!(
        island.compositor().count(|c| matches!(c, CompositorCall::Attach(_))),
        1
    );
    // Already visible: no second entrance.
    assert!(!island.is_animating());
    assert_eq!(island.auto_hide_deadline(), Some(t0 + ms(5000)));
}

#[test]
fn expand_then_collapse_round_trip() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "Hi"), t0);
    island.tick(t0 + ms(300));

    assert!(island.toggle_expand(t0 + ms(500)));
    assert_eq!(island.phase(), Phase::Expanded);
    assert_eq!(island.frame().layout, Layout::Expanded);
    assert_eq!(island.frame().variant, Variant::Expanded);

    island.tick(t0 + ms(850));
    assert_eq!(island.frame().size, geometry::EXPANDED);

    assert!(island.toggle_expand(t0 + ms(1000)));
    assert_eq!(island.phase(), Phase::Collapsed);
    // Layout swaps back only once the shrink completes.
    assert_eq!(island.frame().layout, Layout::Expanded);
    island.tick(t0 + ms(1150));
    assert_eq!(island.frame().layout, Layout::Expanded);
    island.tick(t0 + ms(1300));
    assert_eq!(island.frame().layout, Layout::Collapsed);
    assert_eq!(island.frame().size, geometry::COLLAPSED);
    assert_eq!(island.current().map(|r| r.id), Some(NotificationId::new(1)));
}

#[test]
fn expansion_overshoots_target() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "Hi"), t0);
    island.tick(t0 + ms(300));
    island.toggle_expand(t0 + ms(300));

    let mut widest = 0.0_f32;
    for step in 1..35 {
        island.tick(t0 + ms(300 + step * 10));
        widest = widest.max(island.frame().size.width);
    }
    assert!(widest > geometry::EXPANDED.width);
}

#[test]
fn toggle_while_hidden_does_nothing() {
    let mut island = island();
    assert!(!island.toggle_expand(Instant::now()));
    assert_eq!(island.phase(), Phase::Hidden);
    assert!(island.compositor().calls().is_empty());
}

#[test]
fn touch_down_holds_the_island() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "Hi"), t0);
    island.touch_down();
    assert_eq!(island.auto_hide_deadline(), None);

    island.tick(t0 + ms(60_000));
    assert_eq!(island.phase(), Phase::Collapsed);
}

#[test]
fn show_while_held_leaves_one_deadline_after_release() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "Hi"), t0);

    island.touch_down();
    assert_eq!(island.auto_hide_deadline(), None);

    island.show(record(2, "Again"), t0 + ms(500));
    assert_eq!(island.auto_hide_deadline(), Some(t0 + ms(4500)));
    assert_eq!(island.current().map(|r| r.id), Some(NotificationId::new(2)));

    assert!(island.toggle_expand(t0 + ms(800)));
    assert_eq!(island.phase(), Phase::Expanded);
    assert_eq!(island.auto_hide_deadline(), Some(t0 + ms(4800)));

    island.tick(t0 + ms(4799));
    assert_eq!(island.phase(), Phase::Expanded);
    island.tick(t0 + ms(4800));
    assert_eq!(island.phase(), Phase::Collapsed);
    assert_eq!(island.auto_hide_deadline(), Some(t0 + ms(8800)));
}

#[test]
fn superseded_record_is_retired_as_expired() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "Hi"), t0);
    island.show(record(1, "Hi again"), t0 + ms(100));
    assert!(island.take_retired().is_empty());

    island.show(record(2, "Other"), t0 + ms(200));
    assert_eq!(
        island.take_retired(),
        vec![Retirement {
            id: NotificationId::new(1),
            reason: CloseReason::Expired,
        }]
    );
    assert!(island.take_retired().is_empty());
}

#[test]
fn withdrawn_record_is_not_retired_even_when_replaced_mid_exit() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "Hi"), t0);
    island.external_removal(NotificationId::new(1), "com.example.chat", t0 + ms(100));
    island.show(record(2, "Next"), t0 + ms(150));
    assert!(island.take_retired().is_empty());

    island.hide(t0 + ms(400));
    island.tick(t0 + ms(650));
    assert_eq!(
        island.take_retired(),
        vec![Retirement {
            id: NotificationId::new(2),
            reason: CloseReason::Undefined,
        }]
    );
}

#[test]
fn failed_detach_retires_nothing() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "Hi"), t0);
    island.compositor_mut().fail_at(FaultPoint::Detach);
    island.hide(t0 + ms(100));
    island.tick(t0 + ms(350));
    assert_eq!(island.phase(), Phase::Collapsed);
    assert!(island.take_retired().is_empty());
}

#[test]
fn hide_runs_exit_then_detaches() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "Hi"), t0);
    island.tick(t0 + ms(300));

    island.hide(t0 + ms(1000));
    assert!(island.is_exiting());
    assert_eq!(island.phase(), Phase::Collapsed);
    assert_eq!(island.auto_hide_deadline(), None);

    island.tick(t0 + ms(1100));
    let mid = island.frame().appearance;
    assert!(mid.opacity < 1.0 && mid.opacity > 0.0);

    island.tick(t0 + ms(1250));
    assert_eq!(island.phase(), Phase::Hidden);
    assert!(island.current().is_none());
    assert!(!island.compositor().is_attached());
}

#[test]
fn hide_twice_starts_one_exit() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "Hi"), t0);
    island.hide(t0 + ms(400));
    island.hide(t0 + ms(500));
    island.tick(t0 + ms(650));
    assert_eq!(island.phase(), Phase::Hidden);
    assert_eq!(island.compositor().count(|c| *c == CompositorCall::Detach), 1);
}

#[test]
fn show_during_exit_cancels_it() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "First"), t0);
    island.tick(t0 + ms(300));
    island.hide(t0 + ms(1000));
    island.tick(t0 + ms(1100));

    assert_eq!(island.show(record(2, "Second"), t0 + ms(1100)), ShowOutcome::Updated);
    assert!(!island.is_exiting());
    assert!(island.is_animating());

    island.tick(t0 + ms(1400));
    assert_eq!(island.phase(), Phase::Collapsed);
    assert_eq!(island.frame().appearance, Appearance::VISIBLE);
    assert_eq!(island.compositor().count(|c| *c == CompositorCall::Detach), 0);
}

#[test]
fn failed_detach_keeps_island_visible() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "Hi"), t0);
    island.compositor_mut().fail_at(FaultPoint::Detach);

    island.hide(t0 + ms(300));
    island.tick(t0 + ms(550));

    assert_eq!(island.phase(), Phase::Collapsed);
    assert!(island.compositor().is_attached());

    island.compositor_mut().heal();
    island.hide(t0 + ms(600));
    island.tick(t0 + ms(850));
    assert_eq!(island.phase(), Phase::Hidden);
}

#[test]
fn geometry_faults_do_not_change_phase() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "Hi"), t0);
    island.compositor_mut().fail_at(FaultPoint::Update);

    assert!(island.toggle_expand(t0 + ms(100)));
    island.tick(t0 + ms(450));
    assert_eq!(island.phase(), Phase::Expanded);
    assert_eq!(island.frame().size, geometry::EXPANDED);
}

#[test]
fn removal_resets_geometry_for_next_show() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "Hi"), t0);
    island.toggle_expand(t0 + ms(300));
    island.tick(t0 + ms(400));

    island.external_removal(NotificationId::new(99), "com.other", t0 + ms(400));
    island.tick(t0 + ms(650));
    assert_eq!(island.phase(), Phase::Hidden);
    assert_eq!(island.frame().size, geometry::COLLAPSED);
    assert_eq!(island.frame().layout, Layout::Collapsed);
}

#[test]
fn shutdown_releases_everything() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "Hi"), t0);
    island.shutdown();
    assert_eq!(island.phase(), Phase::Hidden);
    assert_eq!(island.auto_hide_deadline(), None);
    assert!(!island.is_animating());
    assert!(!island.compositor().is_attached());
}

#[test]
fn shutdown_while_hidden_does_not_touch_compositor() {
    let mut island = island();
    island.shutdown();
    assert!(island.compositor().calls().is_empty());
}

#[test]
fn blur_capability_selects_frosted_backdrop() {
    let mut island = Island::new(
        OverlayState::default(),
        RecordingCompositor::with_blur(),
        StaticGate::granted(),
        DisplayDuration::default(),
    );
    island.show(record(1, "Hi"), Instant::now());
    assert_eq!(island.frame().backdrop, Backdrop::Frosted);

    let plain = self::island();
    assert_eq!(plain.frame().backdrop, Backdrop::Solid);
}

#[test]
fn next_wakeup_tracks_earliest_event() {
    let mut island = island();
    let t0 = Instant::now();
    assert_eq!(island.next_wakeup(), None);
    island.show(record(1, "Hi"), t0);
    assert_eq!(island.next_wakeup(), Some(t0 + ms(300)));
    island.tick(t0 + ms(300));
    assert_eq!(island.next_wakeup(), Some(t0 + ms(4000)));
}

#[test]
fn scaled_size_follows_entrance() {
    let mut island = island();
    let t0 = Instant::now();
    island.show(record(1, "Hi"), t0);
    island.tick(t0 + ms(10));
    let Size { width, .. } = island.frame().scaled_size();
    assert!(width < geometry::COLLAPSED.width);
}
