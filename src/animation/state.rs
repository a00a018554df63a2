use std::time::Duration;

use super::{Animatable, Transition};

/// Result of advancing an animation, indicating whether the value changed.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed.
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// Retargetable interpolation between two values of an animatable type.
///
/// Driven by explicit `advance(dt)` calls from the frame clock rather than
/// wall-clock reads, so a test can step it deterministically.
pub struct AnimationState<T: Animatable> {
    /// Current interpolated value
    current: T,
    /// Target value
    target: T,
    /// Value when the animation started
    start: T,
    /// Progress from 0.0 to 1.0
    progress: f32,
    /// Time accumulated since the animation started, in milliseconds
    elapsed_ms: f32,
    /// Transition configuration
    transition: Transition,
    /// Previous value for change detection
    prev_value: Option<T>,
}

impl<T: Animatable> AnimationState<T> {
    pub fn new(initial_value: T, transition: Transition) -> Self {
        Self {
            current: initial_value.clone(),
            target: initial_value.clone(),
            start: initial_value,
            progress: 1.0, // Start completed
            elapsed_ms: 0.0,
            transition,
            prev_value: None,
        }
    }

    /// Start animating to a new target value.
    pub fn animate_to(&mut self, new_target: T) {
        // Don't restart if we're already animating to this target
        if new_target == self.target {
            return;
        }
        self.start = self.current.clone();
        self.target = new_target;
        self.progress = 0.0;
        self.elapsed_ms = 0.0;
    }

    /// Advance the animation by `dt` and report whether the value changed.
    pub fn advance(&mut self, dt: Duration) -> AdvanceResult<T> {
        if self.progress >= 1.0 {
            return AdvanceResult::NoChange;
        }

        self.elapsed_ms += dt.as_secs_f32() * 1000.0;
        let active = self.elapsed_ms - self.transition.delay_ms;
        if active <= 0.0 {
            // Still in the delay period
            return AdvanceResult::NoChange;
        }

        let t = if self.transition.duration_ms <= 0.0 {
            1.0
        } else {
            (active / self.transition.duration_ms).min(1.0)
        };
        let eased = self.transition.timing.evaluate(t);
        let new_value = T::lerp(&self.start, &self.target, eased);
        self.progress = t;

        let changed = self.prev_value.as_ref() != Some(&new_value);
        self.current = new_value.clone();
        self.prev_value = Some(new_value.clone());

        if changed {
            AdvanceResult::Changed(new_value)
        } else {
            AdvanceResult::NoChange
        }
    }

    /// Check if the animation is still running.
    pub fn is_animating(&self) -> bool {
        self.progress < 1.0
    }

    /// Get the current value.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get the target value.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Set a value immediately without animation.
    pub fn set_immediate(&mut self, value: T) {
        self.current = value.clone();
        self.target = value.clone();
        self.start = value;
        self.progress = 1.0;
    }
}
