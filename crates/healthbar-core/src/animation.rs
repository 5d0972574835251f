/// Value-change animation.
///
/// The animator is a two-state machine (`Idle` / `Animating`) driven by the
/// host: every frame the host passes the elapsed wall-clock time to
/// [`ValueAnimator::advance`], which returns the interpolated value and
/// whether the run has finished. No timers or threads are owned here, so the
/// same controller works under an egui frame loop, a fixed-rate ticker or a
/// test that advances time by hand.
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default length of a full-range traversal.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(4000);

/// Interpolation curve applied to normalised time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    /// Slow start, fast middle, slow finish: `0.5 - cos(pi * t) / 2`.
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Map normalised time `t` in `[0, 1]` to interpolation progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => 0.5 - (std::f64::consts::PI * t).cos() / 2.0,
        }
    }
}

/// Current phase of the animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationState {
    Idle,
    Animating {
        from: f64,
        to: f64,
        duration: Duration,
        elapsed: Duration,
    },
}

/// One interpolation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub value: f64,
    pub done: bool,
}

/// Scalar interpolator with explicit time advancement and cancellation.
#[derive(Debug, Clone)]
pub struct ValueAnimator {
    state: AnimationState,
    easing: Easing,
}

impl ValueAnimator {
    pub fn new(easing: Easing) -> Self {
        Self {
            state: AnimationState::Idle,
            easing,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Animating { .. })
    }

    /// Begin interpolating from `from` to `to` over `duration`.
    ///
    /// A zero duration (or a zero-length move) finishes immediately: the
    /// returned frame is already `done` and the animator stays idle.
    pub fn start(&mut self, from: f64, to: f64, duration: Duration) -> Frame {
        if duration.is_zero() || from == to {
            self.state = AnimationState::Idle;
            return Frame {
                value: to,
                done: true,
            };
        }

        tracing::debug!(from, to, duration_ms = duration.as_millis() as u64, "Animation started");
        self.state = AnimationState::Animating {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        };
        Frame {
            value: from,
            done: false,
        }
    }

    /// Advance by `dt`. Returns `None` while idle.
    pub fn advance(&mut self, dt: Duration) -> Option<Frame> {
        let AnimationState::Animating {
            from,
            to,
            duration,
            elapsed,
        } = self.state
        else {
            return None;
        };

        let elapsed = elapsed.saturating_add(dt);
        if elapsed >= duration {
            self.state = AnimationState::Idle;
            return Some(Frame {
                value: to,
                done: true,
            });
        }

        self.state = AnimationState::Animating {
            from,
            to,
            duration,
            elapsed,
        };
        let progress = self.easing.apply(elapsed.as_secs_f64() / duration.as_secs_f64());
        Some(Frame {
            value: from + (to - from) * progress,
            done: false,
        })
    }

    /// Stop any in-flight run. Returns `true` if one was running.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.is_running();
        if was_running {
            tracing::debug!("Animation cancelled");
        }
        self.state = AnimationState::Idle;
        was_running
    }
}

impl Default for ValueAnimator {
    fn default() -> Self {
        Self::new(Easing::default())
    }
}

/// Duration for a move from `from` to `to` when `configured` is the time a
/// move of `max(min, max)` units takes.
///
/// Truncated to whole milliseconds. Degenerate inputs (zero configured time,
/// a non-positive `max(min, max)`, non-finite values) give a zero duration,
/// i.e. an instantaneous jump.
pub fn scaled_duration(configured: Duration, from: f64, to: f64, min: f64, max: f64) -> Duration {
    let span = min.max(max);
    if configured.is_zero() || !(span > 0.0) {
        return Duration::ZERO;
    }

    let ratio = (to - from).abs() / span;
    if !ratio.is_finite() {
        return Duration::ZERO;
    }

    let millis = configured.as_millis() as f64 * ratio;
    Duration::from_millis(millis as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_scaled_duration_full_and_half_range() {
        let d = ms(4000);
        assert_eq!(scaled_duration(d, 0.0, 100.0, 0.0, 100.0), ms(4000));
        assert_eq!(scaled_duration(d, 0.0, 50.0, 0.0, 100.0), ms(2000));
        assert_eq!(scaled_duration(d, 50.0, 0.0, 0.0, 100.0), ms(2000));
    }

    #[test]
    fn test_scaled_duration_degenerate() {
        assert_eq!(scaled_duration(ms(0), 0.0, 100.0, 0.0, 100.0), Duration::ZERO);
        assert_eq!(scaled_duration(ms(4000), 0.0, 0.0, 0.0, 0.0), Duration::ZERO);
        assert_eq!(scaled_duration(ms(4000), -5.0, -1.0, -10.0, -1.0), Duration::ZERO);
        assert_eq!(scaled_duration(ms(4000), f64::NAN, 1.0, 0.0, 10.0), Duration::ZERO);
    }

    #[test]
    fn test_linear_animation_runs_to_completion() {
        let mut anim = ValueAnimator::new(Easing::Linear);
        let first = anim.start(0.0, 100.0, ms(1000));
        assert_eq!(first.value, 0.0);
        assert!(!first.done);
        assert!(anim.is_running());

        let mid = anim.advance(ms(250)).unwrap();
        assert!((mid.value - 25.0).abs() < 1e-9);
        assert!(!mid.done);

        let end = anim.advance(ms(5000)).unwrap();
        assert_eq!(end.value, 100.0);
        assert!(end.done);
        assert_eq!(anim.state(), AnimationState::Idle);
        assert_eq!(anim.advance(ms(16)), None);
    }

    #[test]
    fn test_accelerate_decelerate_is_monotonic() {
        let mut anim = ValueAnimator::new(Easing::AccelerateDecelerate);
        anim.start(10.0, 20.0, ms(100));
        let mut last = 10.0;
        while let Some(frame) = anim.advance(ms(7)) {
            assert!(frame.value >= last);
            assert!(frame.value <= 20.0);
            last = frame.value;
            if frame.done {
                break;
            }
        }
        assert_eq!(last, 20.0);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let mut anim = ValueAnimator::default();
        let frame = anim.start(0.0, 42.0, Duration::ZERO);
        assert_eq!(frame, Frame { value: 42.0, done: true });
        assert!(!anim.is_running());
    }

    #[test]
    fn test_cancel() {
        let mut anim = ValueAnimator::default();
        assert!(!anim.cancel());
        anim.start(0.0, 1.0, ms(100));
        assert!(anim.cancel());
        assert!(!anim.is_running());
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::AccelerateDecelerate] {
            assert!(easing.apply(0.0).abs() < 1e-12);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12);
            assert!((easing.apply(0.5) - 0.5).abs() < 1e-12);
        }
    }
}
