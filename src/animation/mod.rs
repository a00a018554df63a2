mod animatable;
mod countup;
mod marquee;
mod rotator;
mod state;
mod timing;

pub use animatable::Animatable;
pub use countup::{CountUp, CountUpHandle};
pub use marquee::{Direction, Marquee, MarqueeHandle};
pub use rotator::{Rotator, RotatorHandle};
pub use state::{AdvanceResult, AnimationState};
pub use timing::TimingFunction;

use std::time::Duration;

/// Fixed frame interval driving every animation: 60 updates per second.
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

/// Number of whole frames in `duration`, computed once at animation start.
pub fn frames_for(duration: Duration) -> u32 {
    (duration.as_secs_f64() / FRAME_INTERVAL.as_secs_f64()).round() as u32
}

/// Configuration for how a property should animate when it changes.
#[derive(Clone, Debug)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
    /// Delay before animation starts in milliseconds
    pub delay_ms: f32,
}

impl Transition {
    /// Create a new transition with the given duration and timing function.
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
            delay_ms: 0.0,
        }
    }

    /// Set the delay before the animation starts.
    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the duration of the animation.
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function.
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(300.0, TimingFunction::EaseOut)
    }
}
