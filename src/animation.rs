//! Time-based interpolation of chart elements.
//!
//! A plot asks a [`Transition`] for the eased progress of each element at a
//! [`FrameTime`]. Whether a frame is animated at all is decided by the
//! [`AnimationSequencer`], which owns the replay policy of a mounted chart.

use std::time::{Duration, Instant};
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    CubicInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2 * t2 * t2 / 2.0
                } else {
                    let u = t2 - 2.0;
                    (u * u * u + 2.0) / 2.0
                }
            }
        }
    }
}

/// Point in time at which a frame is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameTime {
    /// Time since the animation started.
    At(Duration),
    /// Final geometry, no interpolation.
    Settled,
}

impl FrameTime {
    pub fn start() -> Self {
        Self::At(Duration::ZERO)
    }
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Duration, per-element stagger and easing of one animated property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub stagger: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            stagger: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay(&self, index: usize) -> Duration {
        self.stagger.saturating_mul(index as u32)
    }

    /// Unclamped linear progress of element `index`, before easing.
    fn raw_progress(&self, elapsed: Duration, delay: Duration) -> f32 {
        if elapsed < delay {
            return 0.0;
        }
        let local = elapsed - delay;
        if self.duration.is_zero() {
            return 1.0;
        }
        (local.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased progress in `[0, 1]` of element `index`.
    pub fn progress(&self, frame: FrameTime, index: usize) -> f32 {
        self.progress_after(frame, self.delay(index))
    }

    /// Eased progress of an element starting after an explicit delay.
    pub fn progress_after(&self, frame: FrameTime, delay: Duration) -> f32 {
        match frame {
            FrameTime::Settled => 1.0,
            FrameTime::At(elapsed) => self.easing.apply(self.raw_progress(elapsed, delay)),
        }
    }

    /// Time until the last of `count` elements has finished.
    pub fn total(&self, count: usize) -> Duration {
        self.delay(count.saturating_sub(1)) + self.duration
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    /// No data has been shown yet.
    Unanimated,
    Animating { started_at: Instant },
    Settled,
}

/// Replay policy of a mounted chart.
///
/// The draw-on animation runs once, when the first data arrives. Every later
/// redraw shows the final geometry immediately. Transitions that discard an
/// in-flight animation bump `generation`, so frame callbacks scheduled for an
/// older generation can detect that they are stale.
#[derive(Clone, Debug)]
pub struct AnimationSequencer {
    phase: AnimationPhase,
    generation: u64,
}

impl Default for AnimationSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationSequencer {
    pub fn new() -> Self {
        Self {
            phase: AnimationPhase::Unanimated,
            generation: 0,
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, AnimationPhase::Animating { .. })
    }

    /// New data has been supplied. Starts the animation on the first arrival
    /// with `animate` set. Arrivals without it show the final geometry and
    /// leave the draw-on pending.
    pub fn on_data_arrived(&mut self, now: Instant, animate: bool) {
        self.generation += 1;
        self.phase = match self.phase {
            AnimationPhase::Unanimated if animate => {
                debug!(generation = self.generation, "starting draw-on animation");
                AnimationPhase::Animating { started_at: now }
            }
            AnimationPhase::Unanimated => AnimationPhase::Unanimated,
            AnimationPhase::Animating { .. } => {
                debug!(generation = self.generation, "data replaced mid-animation, settling");
                AnimationPhase::Settled
            }
            _ => AnimationPhase::Settled,
        };
    }

    /// Hover or style change: never replays, cuts a running animation short.
    pub fn on_non_geometric_update(&mut self) {
        if self.is_animating() {
            self.cancel();
        }
    }

    /// The surface is redrawn from scratch for a new size.
    pub fn on_layout_changed(&mut self) {
        if self.is_animating() {
            debug!(generation = self.generation, "resize during animation, restarting settled");
        }
        self.cancel();
    }

    /// Completion reported by a frame scheduled for `generation`.
    ///
    /// Returns `false` when the report is stale and was ignored.
    pub fn on_animation_complete(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.is_animating() {
            trace!(generation, current = self.generation, "ignoring stale completion");
            return false;
        }
        debug!(generation, "animation complete");
        self.phase = AnimationPhase::Settled;
        true
    }

    /// Discards any in-flight animation.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if !matches!(self.phase, AnimationPhase::Unanimated) {
            self.phase = AnimationPhase::Settled;
        }
    }

    /// Frame time for `now`, completing the animation once `settle_time` has passed.
    pub fn frame(&mut self, now: Instant, settle_time: Duration) -> FrameTime {
        match self.phase {
            AnimationPhase::Animating { started_at } => {
                let elapsed = now.saturating_duration_since(started_at);
                if elapsed >= settle_time {
                    let generation = self.generation;
                    self.on_animation_complete(generation);
                    FrameTime::Settled
                } else {
                    FrameTime::At(elapsed)
                }
            }
            AnimationPhase::Unanimated | AnimationPhase::Settled => FrameTime::Settled,
        }
    }
}
