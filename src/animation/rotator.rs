//! Cycles an index through a fixed-size list on a fixed period.
//!
//! The hero headline swaps its highlighted word every couple of seconds;
//! the rotator is the timer behind it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use super::{frames_for, AdvanceResult};
use crate::clock::{self, Tick, TickerId};
use crate::reactive::{create_signal, ReadSignal, Signal};

pub struct Rotator {
    len: usize,
    period_frames: u32,
    frame: u32,
    index: Signal<usize>,
}

impl Rotator {
    pub fn new(len: usize, period: Duration) -> Self {
        Self {
            len,
            period_frames: frames_for(period),
            frame: 0,
            index: create_signal(0),
        }
    }

    /// Advance by one frame, wrapping the index at the end of each period.
    /// A list shorter than two entries never rotates.
    pub fn tick(&mut self) -> AdvanceResult<usize> {
        if self.len < 2 || self.period_frames == 0 {
            return AdvanceResult::NoChange;
        }
        self.frame += 1;
        if self.frame < self.period_frames {
            return AdvanceResult::NoChange;
        }
        self.frame = 0;
        let next = (self.index.get_untracked() + 1) % self.len;
        self.index.set(next);
        AdvanceResult::Changed(next)
    }

    /// Current index (tracked).
    pub fn index(&self) -> usize {
        self.index.get()
    }

    /// Start a rotator ticking on the frame clock. It runs until cancelled.
    pub fn start(len: usize, period: Duration) -> RotatorHandle {
        let state = Rotator::new(len, period);
        let index = state.index.read_only();
        let rotates = len >= 2 && state.period_frames > 0;
        let state = Rc::new(RefCell::new(state));
        let ticker = Rc::new(Cell::new(None));
        if rotates {
            let tick_state = state.clone();
            let id = clock::register_ticker(Box::new(move || {
                tick_state.borrow_mut().tick();
                Tick::Continue
            }));
            ticker.set(Some(id));
        }
        RotatorHandle {
            _state: state,
            index,
            ticker,
        }
    }
}

/// Handle to a running rotator.
pub struct RotatorHandle {
    _state: Rc<RefCell<Rotator>>,
    index: ReadSignal<usize>,
    ticker: Rc<Cell<Option<TickerId>>>,
}

impl RotatorHandle {
    /// Current index (tracked).
    pub fn index(&self) -> usize {
        self.index.get()
    }

    /// Read handle over the index.
    pub fn signal(&self) -> ReadSignal<usize> {
        self.index.clone()
    }

    /// Stop rotating. Idempotent.
    pub fn cancel(&self) {
        if let Some(id) = self.ticker.take() {
            clock::cancel_ticker(id);
        }
    }
}
