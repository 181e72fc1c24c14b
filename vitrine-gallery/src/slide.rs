//! Strip offset animation.
//!
//! The renderer has no native transition system, so the glide between card
//! positions is an explicit time-based interpolation. Completion of a glide
//! is the signal that drives the track's boundary check: the reset may only
//! run once the previous advance has visually finished.

use std::time::{Duration, Instant};

/// Easing applied to glide progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    /// Apply the easing curve to a progress value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Animated offset of the card strip, measured in card widths.
#[derive(Debug, Clone)]
pub struct SlideTransition {
    from: f32,
    to: f32,
    started: Option<Instant>,
    duration: Duration,
    easing: Easing,
    progress: f32,
}

impl SlideTransition {
    pub fn new(initial: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from: initial,
            to: initial,
            started: None,
            duration,
            easing,
            progress: 1.0,
        }
    }

    /// Begin an animated glide toward `target`. A glide started mid-flight
    /// retargets from the current interpolated offset, so stacked advance
    /// requests stay smooth.
    pub fn glide_to(&mut self, target: f32) {
        self.from = self.current();
        self.to = target;
        self.started = Some(Instant::now());
        self.progress = 0.0;
    }

    /// Relocate instantly, with no animation frame in between. Used for the
    /// wrap-around snap while transitions are disabled.
    pub fn jump_to(&mut self, target: f32) {
        self.from = target;
        self.to = target;
        self.started = None;
        self.progress = 1.0;
    }

    /// Advance the interpolation to `now`. Returns `true` on the update that
    /// completes the glide.
    pub fn update_at(&mut self, now: Instant) -> bool {
        let Some(started) = self.started else {
            return false;
        };
        let raw = if self.duration.is_zero() {
            1.0
        } else {
            now.saturating_duration_since(started).as_secs_f32() / self.duration.as_secs_f32()
        };
        if raw >= 1.0 {
            self.progress = 1.0;
            self.started = None;
            true
        } else {
            self.progress = self.easing.apply(raw);
            false
        }
    }

    /// Advance the interpolation to the present moment.
    pub fn update(&mut self) -> bool {
        self.update_at(Instant::now())
    }

    pub fn is_transitioning(&self) -> bool {
        self.started.is_some() && self.progress < 1.0
    }

    /// Current interpolated offset in card widths.
    pub fn current(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}
