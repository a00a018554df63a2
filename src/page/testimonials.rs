//! The testimonial wall: two columns drifting in opposite directions.

use std::time::Duration;

use crate::animation::{Direction, Marquee, MarqueeHandle};
use crate::page::content::{testimonial_columns, Testimonial};

/// One full marquee loop takes thirty seconds.
pub const LOOP_MS: u64 = 30_000;

pub struct TestimonialRail {
    up: MarqueeHandle,
    down: MarqueeHandle,
}

impl TestimonialRail {
    pub fn new() -> Self {
        Self {
            up: Marquee::start(Direction::Up, Duration::from_millis(LOOP_MS)),
            down: Marquee::start(Direction::Down, Duration::from_millis(LOOP_MS)),
        }
    }

    /// The two columns of quotes, in render order.
    pub fn columns(&self) -> (&'static [Testimonial], &'static [Testimonial]) {
        testimonial_columns()
    }

    /// Current offsets of the two columns, as fractions of column height
    /// (tracked).
    pub fn offsets(&self) -> (f32, f32) {
        (self.up.offset(), self.down.offset())
    }

    /// Stop both marquees. Idempotent.
    pub fn dispose(&self) {
        self.up.cancel();
        self.down.cancel();
    }
}

impl Default for TestimonialRail {
    fn default() -> Self {
        Self::new()
    }
}
