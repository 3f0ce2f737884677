//! # Slide Transitions
//!
//! Time-driven animation state for slide changes and the progress bar.
//!
//! Slide changes run in two exclusive phases, like a "wait" presence
//! animation: the outgoing slide fades out while sliding left and blurring,
//! and only then does the incoming slide fade in from the right.
//!
//! ```text
//! t:      0 ─────────── d ─────────── 2d
//! shown:  outgoing ───▶ │ incoming ───▶ settled
//!         opacity 1→0   │ opacity 0→1
//!         shift  0→-1   │ shift  +1→0
//! ```
//!
//! Navigating again mid-animation never shows two slides at once:
//! - during the exit phase the pending incoming slide is simply replaced;
//! - during the enter phase the half-entered slide starts exiting instead,
//!   from the opacity it had reached.
//!
//! Every method takes `now` explicitly so tests can drive the clock.

use std::time::{Duration, Instant};

use crate::core::config::TransitionStyle;

/// `cubic-bezier(0.16, 1, 0.3, 1)`: fast start, long soft landing.
const EASE_CONTROL: (f32, f32, f32, f32) = (0.16, 1.0, 0.3, 1.0);

/// Evaluate the easing curve at `t` in [0, 1].
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let (x1, y1, x2, y2) = EASE_CONTROL;

    // x(s) is monotonic for control x in [0, 1], so bisection always converges
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    let mut s = t;
    for _ in 0..24 {
        s = (lo + hi) / 2.0;
        if bezier(x1, x2, s) < t {
            lo = s;
        } else {
            hi = s;
        }
    }
    bezier(y1, y2, s)
}

/// Inverse of [`ease`]: the input that produces `value`.
fn ease_inverse(value: f32) -> f32 {
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    for _ in 0..24 {
        let mid = (lo + hi) / 2.0;
        if ease(mid) < value {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) / 2.0
}

fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn fraction(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Exit,
    Enter,
}

/// What to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideFrame {
    pub index: usize,
    /// 0.0 = invisible, 1.0 = fully shown.
    pub opacity: f32,
    /// Horizontal displacement as a fraction of the maximum shift.
    /// Negative = left of rest position.
    pub shift: f32,
    /// 0.0 = sharp, 1.0 = fully blurred.
    pub blur: f32,
}

impl SlideFrame {
    fn settled(index: usize) -> Self {
        Self {
            index,
            opacity: 1.0,
            shift: 0.0,
            blur: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveTransition {
    outgoing: usize,
    incoming: usize,
    phase: Phase,
    phase_started: Instant,
}

pub struct SlideAnimator {
    style: TransitionStyle,
    duration: Duration,
    settled: usize,
    active: Option<ActiveTransition>,
}

impl SlideAnimator {
    pub fn new(style: TransitionStyle, duration: Duration, initial: usize) -> Self {
        Self {
            style,
            duration,
            settled: initial,
            active: None,
        }
    }

    fn instant(&self) -> bool {
        self.style == TransitionStyle::None || self.duration.is_zero()
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn phase(&self) -> Option<Phase> {
        self.active.map(|a| a.phase)
    }

    /// Begin (or redirect) a transition towards slide `to`.
    pub fn start(&mut self, from: usize, to: usize, now: Instant) {
        if self.instant() {
            self.settled = to;
            self.active = None;
            return;
        }

        self.tick(now);
        self.active = Some(match self.active {
            None => ActiveTransition {
                outgoing: from,
                incoming: to,
                phase: Phase::Exit,
                phase_started: now,
            },
            Some(active) if active.phase == Phase::Exit => ActiveTransition {
                incoming: to,
                ..active
            },
            Some(active) => {
                // Backdate the exit so it starts at the opacity the
                // half-entered slide had reached.
                let entered = ease(fraction(
                    now.saturating_duration_since(active.phase_started),
                    self.duration,
                ));
                let backdate = self.duration.mul_f32(ease_inverse(1.0 - entered));
                ActiveTransition {
                    outgoing: active.incoming,
                    incoming: to,
                    phase: Phase::Exit,
                    phase_started: now.checked_sub(backdate).unwrap_or(now),
                }
            }
        });
    }

    /// Advance phases whose time is up.
    fn tick(&mut self, now: Instant) {
        let Some(mut active) = self.active else {
            return;
        };
        if active.phase == Phase::Exit && now >= active.phase_started + self.duration {
            active.phase = Phase::Enter;
            active.phase_started += self.duration;
        }
        if active.phase == Phase::Enter && now >= active.phase_started + self.duration {
            self.settled = active.incoming;
            self.active = None;
        } else {
            self.active = Some(active);
        }
    }

    pub fn frame(&mut self, now: Instant) -> SlideFrame {
        self.tick(now);
        let Some(active) = self.active else {
            return SlideFrame::settled(self.settled);
        };

        let elapsed = now.saturating_duration_since(active.phase_started);
        let p = ease(fraction(elapsed, self.duration));
        let max_shift = if self.style == TransitionStyle::Slide { 1.0 } else { 0.0 };

        match active.phase {
            Phase::Exit => SlideFrame {
                index: active.outgoing,
                opacity: 1.0 - p,
                shift: -p * max_shift,
                blur: p,
            },
            Phase::Enter => SlideFrame {
                index: active.incoming,
                opacity: p,
                shift: (1.0 - p) * max_shift,
                blur: 1.0 - p,
            },
        }
    }
}

/// Animated progress bar width.
pub struct ProgressTween {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

impl ProgressTween {
    /// Starts at zero and grows towards `target`, like a bar on first paint.
    pub fn new(target: f64, duration: Duration, now: Instant) -> Self {
        Self {
            from: 0.0,
            to: target,
            started: now,
            duration,
        }
    }

    pub fn value(&self, now: Instant) -> f64 {
        let t = fraction(now.saturating_duration_since(self.started), self.duration);
        self.from + (self.to - self.from) * ease(t) as f64
    }

    /// Retarget from wherever the bar currently is.
    pub fn set_target(&mut self, target: f64, now: Instant) {
        self.from = self.value(now);
        self.to = target;
        self.started = now;
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        now < self.started + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: Duration = Duration::from_millis(600);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn ease_endpoints_and_shape() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert_eq!(ease(-3.0), 0.0);
        assert_eq!(ease(7.0), 1.0);
        // Strong ease-out: well past halfway at the midpoint
        assert!(ease(0.5) > 0.8, "ease(0.5) = {}", ease(0.5));
    }

    #[test]
    fn ease_inverse_round_trips() {
        for v in [0.05_f32, 0.3, 0.9] {
            assert!((ease(ease_inverse(v)) - v).abs() < 1e-3);
        }
    }

    #[test]
    fn ease_is_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = ease(i as f32 / 100.0);
            assert!(v + 1e-4 >= last, "not monotonic at {i}: {v} < {last}");
            last = v;
        }
    }

    #[test]
    fn idle_animator_shows_settled_slide() {
        let mut anim = SlideAnimator::new(TransitionStyle::Slide, D, 0);
        let frame = anim.frame(Instant::now());
        assert_eq!(frame, SlideFrame::settled(0));
        assert!(!anim.is_animating());
    }

    #[test]
    fn exit_then_enter_then_settle() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(TransitionStyle::Slide, D, 0);
        anim.start(0, 1, t0);

        let f = anim.frame(t0);
        assert_eq!(f.index, 0);
        assert_eq!(f.opacity, 1.0);
        assert_eq!(anim.phase(), Some(Phase::Exit));

        let f = anim.frame(t0 + ms(300));
        assert_eq!(f.index, 0);
        assert!(f.opacity < 1.0);
        assert!(f.shift < 0.0);
        assert!(f.blur > 0.0);

        let f = anim.frame(t0 + ms(601));
        assert_eq!(f.index, 1);
        assert_eq!(anim.phase(), Some(Phase::Enter));
        assert!(f.shift > 0.0);
        assert!(f.opacity < 0.1);

        let f = anim.frame(t0 + ms(1300));
        assert_eq!(f, SlideFrame::settled(1));
        assert!(!anim.is_animating());
    }

    #[test]
    fn only_one_slide_visible_per_frame() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(TransitionStyle::Slide, D, 3);
        anim.start(3, 4, t0);
        for step in 0..=26 {
            let f = anim.frame(t0 + ms(step * 50));
            let expected = if step * 50 < 600 { 3 } else { 4 };
            assert_eq!(f.index, expected, "at {}ms", step * 50);
        }
    }

    #[test]
    fn navigation_during_exit_retargets_incoming() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(TransitionStyle::Slide, D, 0);
        anim.start(0, 1, t0);
        anim.start(1, 2, t0 + ms(200));

        // Exit keeps its original timing and the outgoing slide
        let f = anim.frame(t0 + ms(400));
        assert_eq!(f.index, 0);
        let f = anim.frame(t0 + ms(700));
        assert_eq!(f.index, 2);
        assert_eq!(anim.frame(t0 + ms(1300)), SlideFrame::settled(2));
    }

    #[test]
    fn navigation_during_enter_supersedes() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(TransitionStyle::Slide, D, 0);
        anim.start(0, 1, t0);
        // Halfway into the enter phase of slide 1
        anim.start(1, 2, t0 + ms(900));

        let f = anim.frame(t0 + ms(900));
        assert_eq!(anim.phase(), Some(Phase::Exit));
        assert_eq!(f.index, 1);
        // Opacity carries over: slide 1 was almost fully in at its midpoint
        let entered = ease(0.5);
        assert!((f.opacity - entered).abs() < 0.01, "{} vs {}", f.opacity, entered);

        // The exit runs (nearly) a full phase from here
        assert_eq!(anim.frame(t0 + ms(1400)).index, 1);
        let f = anim.frame(t0 + ms(1510));
        assert_eq!(f.index, 2);
        assert_eq!(anim.phase(), Some(Phase::Enter));
    }

    #[test]
    fn fade_style_never_shifts() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(TransitionStyle::Fade, D, 0);
        anim.start(0, 1, t0);
        assert_eq!(anim.frame(t0 + ms(250)).shift, 0.0);
        assert_eq!(anim.frame(t0 + ms(850)).shift, 0.0);
    }

    #[test]
    fn none_style_is_instant() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(TransitionStyle::None, D, 0);
        anim.start(0, 5, t0);
        assert!(!anim.is_animating());
        assert_eq!(anim.frame(t0), SlideFrame::settled(5));
    }

    #[test]
    fn zero_duration_is_instant() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(TransitionStyle::Slide, Duration::ZERO, 0);
        anim.start(0, 1, t0);
        assert_eq!(anim.frame(t0), SlideFrame::settled(1));
    }

    #[test]
    fn progress_tween_grows_from_zero() {
        let t0 = Instant::now();
        let tween = ProgressTween::new(0.5, ms(800), t0);
        assert_eq!(tween.value(t0), 0.0);
        assert!(tween.value(t0 + ms(400)) > 0.25);
        assert!((tween.value(t0 + ms(800)) - 0.5).abs() < 1e-9);
        assert!(tween.is_animating(t0 + ms(799)));
        assert!(!tween.is_animating(t0 + ms(800)));
    }

    #[test]
    fn progress_tween_retargets_from_current_value() {
        let t0 = Instant::now();
        let mut tween = ProgressTween::new(0.5, ms(800), t0);
        tween.set_target(1.0, t0 + ms(800));
        assert!((tween.value(t0 + ms(800)) - 0.5).abs() < 1e-9);
        assert!((tween.value(t0 + ms(1600)) - 1.0).abs() < 1e-9);
    }
}
