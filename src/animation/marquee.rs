//! Endless vertical marquee offset for the testimonial columns.
//!
//! Each column is rendered twice back to back, so sweeping the offset over
//! half the column height and wrapping produces a seamless loop. One column
//! drifts up while the other drifts down.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use super::{frames_for, AdvanceResult};
use crate::clock::{self, Tick, TickerId};
use crate::reactive::{create_signal, ReadSignal, Signal};

/// Fraction of the column height one full loop sweeps through.
pub const SWEEP: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

pub struct Marquee {
    direction: Direction,
    period_frames: u32,
    frame: u32,
    offset: Signal<f32>,
}

impl Marquee {
    pub fn new(direction: Direction, period: Duration) -> Self {
        let offset = match direction {
            Direction::Up => 0.0,
            Direction::Down => SWEEP,
        };
        Self {
            direction,
            period_frames: frames_for(period),
            frame: 0,
            offset: create_signal(offset),
        }
    }

    /// Advance by one frame, wrapping at the end of each loop.
    pub fn tick(&mut self) -> AdvanceResult<f32> {
        if self.period_frames == 0 {
            return AdvanceResult::NoChange;
        }
        self.frame = (self.frame + 1) % self.period_frames;
        let progress = self.frame as f32 / self.period_frames as f32;
        let offset = match self.direction {
            Direction::Up => SWEEP * progress,
            Direction::Down => SWEEP * (1.0 - progress),
        };
        let previous = self.offset.get_untracked();
        self.offset.set(offset);
        if offset == previous {
            AdvanceResult::NoChange
        } else {
            AdvanceResult::Changed(offset)
        }
    }

    /// Current offset as a fraction of the column height (tracked).
    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Start a marquee looping on the frame clock. It runs until cancelled.
    pub fn start(direction: Direction, period: Duration) -> MarqueeHandle {
        let state = Marquee::new(direction, period);
        let offset = state.offset.read_only();
        let loops = state.period_frames > 0;
        let state = Rc::new(RefCell::new(state));
        let ticker = Rc::new(Cell::new(None));
        if loops {
            let tick_state = state.clone();
            let id = clock::register_ticker(Box::new(move || {
                tick_state.borrow_mut().tick();
                Tick::Continue
            }));
            ticker.set(Some(id));
        }
        MarqueeHandle {
            _state: state,
            offset,
            direction,
            ticker,
        }
    }
}

/// Handle to a running marquee.
pub struct MarqueeHandle {
    _state: Rc<RefCell<Marquee>>,
    offset: ReadSignal<f32>,
    direction: Direction,
    ticker: Rc<Cell<Option<TickerId>>>,
}

impl MarqueeHandle {
    /// Current offset as a fraction of the column height (tracked).
    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Stop looping. Idempotent.
    pub fn cancel(&self) {
        if let Some(id) = self.ticker.take() {
            clock::cancel_ticker(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_marquee_sweeps_forward() {
        let mut marquee = Marquee::new(Direction::Up, Duration::from_secs(30));
        let mut last = marquee.offset();
        for _ in 0..100 {
            marquee.tick();
            let offset = marquee.offset();
            assert!(offset > last);
            last = offset;
        }
        assert!(last < SWEEP);
    }

    #[test]
    fn down_marquee_sweeps_backward() {
        let mut marquee = Marquee::new(Direction::Down, Duration::from_secs(30));
        let mut last = marquee.offset();
        for _ in 0..100 {
            marquee.tick();
            let offset = marquee.offset();
            assert!(offset < last);
            last = offset;
        }
        assert!(last > 0.0);
    }

    #[test]
    fn offset_wraps_at_the_end_of_a_loop() {
        let period = Duration::from_secs(30);
        let frames = frames_for(period);
        let mut marquee = Marquee::new(Direction::Up, period);
        for _ in 0..frames {
            marquee.tick();
        }
        assert_eq!(marquee.offset(), 0.0);
        marquee.tick();
        assert!(marquee.offset() > 0.0);
    }

    #[test]
    fn offsets_stay_within_the_sweep() {
        let mut marquee = Marquee::new(Direction::Up, Duration::from_secs(30));
        for _ in 0..4000 {
            marquee.tick();
            let offset = marquee.offset();
            assert!((0.0..=SWEEP).contains(&offset));
        }
    }

    #[test]
    fn started_handles_move_in_opposite_directions() {
        let up = Marquee::start(Direction::Up, Duration::from_secs(30));
        let down = Marquee::start(Direction::Down, Duration::from_secs(30));
        for _ in 0..10 {
            clock::advance_frame();
        }
        assert!(up.offset() > 0.0);
        assert!(down.offset() < SWEEP);
        up.cancel();
        down.cancel();
        assert_eq!(clock::active_tickers(), 0);
    }
}
