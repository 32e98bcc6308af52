// SPDX-License-Identifier: MPL-2.0
//! Easing curves and time-driven transitions.
//!
//! A [`Transition`] is a pure value: it knows where it started, where it is
//! going and over how long. Sampling it at an instant yields the intermediate
//! value; nothing runs in the background, so cancelling a transition is just
//! dropping it.

use std::f32::consts::PI;
use std::time::{Duration, Instant};

/// Durations of the island's animations.
pub mod timing {
    use std::time::Duration;

    /// Entrance: scale and fade in.
    pub const ENTER: Duration = Duration::from_millis(300);
    /// Growth from pill to card.
    pub const EXPAND: Duration = Duration::from_millis(350);
    /// Shrink from card back to pill.
    pub const COLLAPSE: Duration = Duration::from_millis(300);
    /// Exit: scale and fade out.
    pub const EXIT: Duration = Duration::from_millis(250);
    /// Overshoot tension used when expanding.
    pub const EXPAND_TENSION: f32 = 0.8;
}

/// Linear interpolation between two values of the same type.
pub trait Lerp: Copy {
    /// Returns the value `t` of the way from `self` to `to`.
    ///
    /// `t` is not clamped, so overshooting curves can extrapolate.
    fn lerp(self, to: Self, t: f32) -> Self;
}

pub(crate) fn mix(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Timing curve mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Slow start, fast middle, slow end.
    AccelerateDecelerate,
    /// Flings past the target then settles back.
    Overshoot { tension: f32 },
}

impl Easing {
    /// Overshoot with the default tension.
    pub const OVERSHOOT: Self = Easing::Overshoot { tension: 2.0 };

    /// Maps progress in `[0, 1]` to eased progress.
    ///
    /// Always returns exactly 0 at 0 and 1 at 1.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Easing::Overshoot { tension } => {
                let t = t - 1.0;
                t * t * ((tension + 1.0) * t + tension) + 1.0
            }
        }
    }
}

/// An in-flight animation of one property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<T> {
    from: T,
    to: T,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl<T: Lerp> Transition<T> {
    #[must_use]
    pub fn new(from: T, to: T, started_at: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
        }
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Value at `now`. Returns the exact target once finished.
    #[must_use]
    pub fn sample(&self, now: Instant) -> T {
        let progress = self.progress(now);
        if progress >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, self.easing.apply(progress))
        }
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Instant at which the transition reaches its target.
    #[must_use]
    pub fn ends_at(&self) -> Instant {
        self.started_at + self.duration
    }

    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        mix(self, to, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn easings_hit_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::AccelerateDecelerate,
            Easing::OVERSHOOT,
            Easing::Overshoot {
                tension: timing::EXPAND_TENSION,
            },
        ] {
            assert_abs_diff_eq!(easing.apply(0.0), 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(easing.apply(1.0), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn accelerate_decelerate_is_symmetric_at_midpoint() {
        assert_abs_diff_eq!(Easing::AccelerateDecelerate.apply(0.5), 0.5, epsilon = 1e-5);
        assert!(Easing::AccelerateDecelerate.apply(0.1) < 0.1);
    }

    #[test]
    fn overshoot_passes_the_target() {
        let peak = (1..100)
            .map(|i| Easing::OVERSHOOT.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn transition_samples_over_time() {
        let start = Instant::now();
        let t = Transition::new(0.0_f32, 100.0, start, Duration::from_millis(200), Easing::Linear);

        assert_abs_diff_eq!(t.sample(start), 0.0);
        assert_abs_diff_eq!(t.sample(start + Duration::from_millis(50)), 25.0, epsilon = 1e-3);
        assert!(!t.is_finished(start + Duration::from_millis(199)));
        assert!(t.is_finished(start + Duration::from_millis(200)));
        assert_abs_diff_eq!(t.sample(start + Duration::from_secs(5)), 100.0);
        assert_eq!(t.ends_at(), start + Duration::from_millis(200));
    }

    #[test]
    fn zero_duration_transition_is_immediately_done() {
        let start = Instant::now();
        let t = Transition::new(1.0_f32, 2.0, start, Duration::ZERO, Easing::OVERSHOOT);
        assert!(t.is_finished(start));
        assert_abs_diff_eq!(t.sample(start), 2.0);
    }

    #[test]
    fn sampling_before_start_stays_at_origin() {
        let start = Instant::now() + Duration::from_secs(1);
        let t = Transition::new(3.0_f32, 9.0, start, Duration::from_millis(100), Easing::Linear);
        assert_abs_diff_eq!(t.sample(Instant::now()), 3.0);
    }
}
