//! The glass cursor: a translucent disc trailing the pointer.
//!
//! The pointer position updates instantly; the disc eases toward it over
//! a tenth of a second, which is what gives it the floating-glass feel.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::animation::{AdvanceResult, AnimationState, TimingFunction, Transition, FRAME_INTERVAL};
use crate::clock::{self, Tick, TickerId};
use crate::reactive::{create_signal, Signal};
use crate::viewport::Point;

/// How long the disc takes to catch up with the pointer.
pub const TRAIL_MS: f32 = 100.0;

/// The disc parks off-screen until the pointer first moves.
pub const OFFSCREEN: Point = Point::new(-100.0, -100.0);

pub struct GlassCursor {
    trail: Rc<RefCell<AnimationState<Point>>>,
    position: Signal<Point>,
    ticker: Rc<Cell<Option<TickerId>>>,
}

impl GlassCursor {
    pub fn new() -> Self {
        Self {
            trail: Rc::new(RefCell::new(AnimationState::new(
                OFFSCREEN,
                Transition::new(TRAIL_MS, TimingFunction::EaseOut),
            ))),
            position: create_signal(OFFSCREEN),
            ticker: Rc::new(Cell::new(None)),
        }
    }

    /// Point the disc at a new pointer position. The trail animation is
    /// retargeted in place and a ticker is registered only while it runs.
    pub fn pointer_moved(&self, pointer: Point) {
        self.trail.borrow_mut().animate_to(pointer);
        if self.ticker.get().is_some() {
            return;
        }
        let trail = self.trail.clone();
        let position = self.position.clone();
        let slot = self.ticker.clone();
        let id = clock::register_ticker(Box::new(move || {
            let mut trail = trail.borrow_mut();
            if let AdvanceResult::Changed(point) = trail.advance(FRAME_INTERVAL) {
                position.set(point);
            }
            if trail.is_animating() {
                Tick::Continue
            } else {
                slot.set(None);
                Tick::Stop
            }
        }));
        self.ticker.set(Some(id));
    }

    /// Where the disc currently is (tracked).
    pub fn position(&self) -> Point {
        self.position.get()
    }

    /// Stop trailing. Idempotent.
    pub fn dispose(&self) {
        if let Some(id) = self.ticker.take() {
            clock::cancel_ticker(id);
        }
    }
}

impl Default for GlassCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::advance_frame;

    fn drive(frames: u32) {
        for _ in 0..frames {
            advance_frame();
        }
    }

    #[test]
    fn starts_off_screen() {
        let cursor = GlassCursor::new();
        assert_eq!(cursor.position(), OFFSCREEN);
    }

    #[test]
    fn trails_to_the_pointer() {
        let cursor = GlassCursor::new();
        cursor.pointer_moved(Point::new(640.0, 360.0));
        drive(3);
        let partway = cursor.position();
        assert_ne!(partway, OFFSCREEN);
        assert_ne!(partway, Point::new(640.0, 360.0));
        drive(10);
        assert_eq!(cursor.position(), Point::new(640.0, 360.0));
        // The trail ticker releases itself once settled.
        assert_eq!(clock::active_tickers(), 0);
    }

    #[test]
    fn retargets_midflight() {
        let cursor = GlassCursor::new();
        cursor.pointer_moved(Point::new(100.0, 100.0));
        drive(2);
        cursor.pointer_moved(Point::new(500.0, 500.0));
        drive(10);
        assert_eq!(cursor.position(), Point::new(500.0, 500.0));
    }

    #[test]
    fn dispose_freezes_the_disc() {
        let cursor = GlassCursor::new();
        cursor.pointer_moved(Point::new(100.0, 100.0));
        drive(2);
        cursor.dispose();
        let frozen = cursor.position();
        drive(20);
        assert_eq!(cursor.position(), frozen);
    }
}
