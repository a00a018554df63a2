//! Frame-counted count-up from zero to a target integer.
//!
//! The statistics section counts each figure up over a fixed duration.
//! The count is frame-based, not wall-clock based: `total_frames` is fixed
//! once at start, every tick advances the frame counter by exactly one,
//! and the final frame sets the displayed value to the target explicitly.
//! Rounding `target * total_frames / total_frames` is not trusted to land
//! on the target bit-for-bit, and a count that ends one off would be
//! visibly wrong.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use super::{frames_for, AdvanceResult};
use crate::clock::{self, Tick, TickerId};
use crate::reactive::{create_signal, ReadSignal, Signal};

/// The count-up state machine.
///
/// Intermediate frames display `round(target * frame / total_frames)`,
/// capped below the target so the displayed count lands on the target only
/// on the final frame. The displayed value is non-decreasing throughout.
pub struct CountUp {
    target: u64,
    total_frames: u32,
    frame: u32,
    displayed: Signal<u64>,
    finished: bool,
}

impl CountUp {
    /// A duration shorter than half a frame interval yields zero total
    /// frames and completes immediately at the target.
    pub fn new(target: u64, duration: Duration) -> Self {
        let total_frames = frames_for(duration);
        let up = Self {
            target,
            total_frames,
            frame: 0,
            displayed: create_signal(0u64),
            finished: total_frames == 0,
        };
        if up.finished {
            up.displayed.set(target);
        }
        up
    }

    /// Advance by one frame. After the final frame this is a no-op.
    pub fn tick(&mut self) -> AdvanceResult<u64> {
        if self.finished {
            return AdvanceResult::NoChange;
        }
        self.frame += 1;
        let value = if self.frame >= self.total_frames {
            self.finished = true;
            self.target
        } else {
            let projected = f64::from(self.frame) / f64::from(self.total_frames);
            let rounded = (self.target as f64 * projected).round() as u64;
            rounded.min(self.target.saturating_sub(1))
        };
        let previous = self.displayed.get_untracked();
        self.displayed.set(value);
        if value == previous {
            AdvanceResult::NoChange
        } else {
            AdvanceResult::Changed(value)
        }
    }

    /// Current displayed value (tracked).
    pub fn displayed(&self) -> u64 {
        self.displayed.get()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    /// Start a counter ticking on the frame clock.
    ///
    /// The ticker is released the instant the final frame lands; no tick is
    /// delivered past it. Restarting means calling `start` again, nothing
    /// carries over between runs.
    pub fn start(target: u64, duration: Duration) -> CountUpHandle {
        let state = CountUp::new(target, duration);
        let displayed = state.displayed.read_only();
        let state = Rc::new(RefCell::new(state));
        let ticker = Rc::new(Cell::new(None));
        let running = !state.borrow().is_finished();
        if running {
            let tick_state = state.clone();
            let slot = ticker.clone();
            let id = clock::register_ticker(Box::new(move || {
                let mut up = tick_state.borrow_mut();
                up.tick();
                if up.is_finished() {
                    slot.set(None);
                    log::debug!("count-up reached {} and released its ticker", up.target);
                    Tick::Stop
                } else {
                    Tick::Continue
                }
            }));
            ticker.set(Some(id));
        }
        CountUpHandle {
            state,
            displayed,
            ticker,
        }
    }
}

/// Handle to a running (or finished) count-up.
pub struct CountUpHandle {
    state: Rc<RefCell<CountUp>>,
    displayed: ReadSignal<u64>,
    ticker: Rc<Cell<Option<TickerId>>>,
}

impl CountUpHandle {
    /// Current displayed value (tracked).
    pub fn displayed(&self) -> u64 {
        self.displayed.get()
    }

    /// Read handle over the displayed value.
    pub fn value(&self) -> ReadSignal<u64> {
        self.displayed.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.state.borrow().is_finished()
    }

    /// Stop ticking immediately without resetting the displayed value.
    /// Safe to call repeatedly or after natural completion.
    pub fn cancel(&self) {
        if let Some(id) = self.ticker.take() {
            clock::cancel_ticker(id);
        }
    }
}
