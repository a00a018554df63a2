//! Frame scheduling for the page's animations.
//!
//! Every running animation (count-up, marquee, rotator, entrance fade,
//! cursor trail) owns exactly one ticker registration. `advance_frame()`
//! runs once per frame interval and ticks each registration in insertion
//! order, so a single instance always observes its ticks in strictly
//! increasing order. A ticker that returns [`Tick::Stop`] is released the
//! instant it does so; `cancel_ticker` releases one immediately from the
//! outside and is idempotent.

use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::OnceLock;

use bitflags::bitflags;
use calloop::ping::Ping;

bitflags! {
    /// What the next frame has to do.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// At least one ticker is registered.
        const TICKERS = 0b01;
        /// The event loop was asked to stop.
        const EXIT    = 0b10;
    }
}

/// Whether a ticker wants to keep receiving frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

/// Unique identifier for a ticker registration.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TickerId(u64);

static NEXT_TICKER_ID: AtomicU64 = AtomicU64::new(1);

impl TickerId {
    fn next() -> Self {
        TickerId(NEXT_TICKER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

type TickerFn = Box<dyn FnMut() -> Tick>;

struct Clock {
    /// Registrations in insertion order.
    tickers: Vec<(TickerId, TickerFn)>,
    /// Ids cancelled while a frame is in flight.
    cancelled: HashSet<TickerId>,
    in_frame: bool,
    flags: ChangeFlags,
}

impl Clock {
    fn new() -> Self {
        Self {
            tickers: Vec::new(),
            cancelled: HashSet::new(),
            in_frame: false,
            flags: ChangeFlags::empty(),
        }
    }
}

thread_local! {
    static CLOCK: RefCell<Clock> = RefCell::new(Clock::new());
}

/// Register a ticker to be run once per frame until it stops or is
/// cancelled. Tickers registered during a frame start on the next frame.
pub fn register_ticker(ticker: TickerFn) -> TickerId {
    let id = TickerId::next();
    CLOCK.with(|clock| {
        let mut clock = clock.borrow_mut();
        clock.tickers.push((id, ticker));
        clock.flags.insert(ChangeFlags::TICKERS);
    });
    request_frame();
    id
}

/// Release a ticker immediately. Unknown or already-released ids are a
/// no-op, so cancellation is safe to repeat or to call after natural
/// completion.
pub fn cancel_ticker(id: TickerId) {
    CLOCK.with(|clock| {
        let mut clock = clock.borrow_mut();
        if let Some(index) = clock.tickers.iter().position(|(t, _)| *t == id) {
            clock.tickers.remove(index);
            let empty = clock.tickers.is_empty();
            clock.flags.set(ChangeFlags::TICKERS, !empty);
        } else if clock.in_frame {
            // The ticker may be in the batch currently being run.
            clock.cancelled.insert(id);
        }
    });
}

/// Number of live ticker registrations.
pub fn active_tickers() -> usize {
    CLOCK.with(|clock| clock.borrow().tickers.len())
}

/// Whether any animation is still ticking.
pub fn has_tickers() -> bool {
    CLOCK.with(|clock| clock.borrow().flags.contains(ChangeFlags::TICKERS))
}

/// Run every registered ticker once, in registration order, then drop the
/// ones that stopped or were cancelled mid-frame.
pub fn advance_frame() {
    let batch = CLOCK.with(|clock| {
        let mut clock = clock.borrow_mut();
        clock.in_frame = true;
        std::mem::take(&mut clock.tickers)
    });

    let mut survivors = Vec::with_capacity(batch.len());
    for (id, mut ticker) in batch {
        let cancelled = CLOCK.with(|clock| clock.borrow().cancelled.contains(&id));
        if cancelled {
            continue;
        }
        if let Tick::Continue = ticker() {
            survivors.push((id, ticker));
        }
    }

    CLOCK.with(|clock| {
        let mut clock = clock.borrow_mut();
        let cancelled = std::mem::take(&mut clock.cancelled);
        survivors.retain(|(id, _)| !cancelled.contains(id));
        // Tickers registered while the frame ran go after the survivors.
        let registered = std::mem::take(&mut clock.tickers);
        clock.tickers = survivors;
        clock.tickers.extend(registered);
        let empty = clock.tickers.is_empty();
        clock.flags.set(ChangeFlags::TICKERS, !empty);
        clock.in_frame = false;
    });
}

/// Ask the event loop to stop at the end of the current frame.
pub fn request_exit() {
    CLOCK.with(|clock| clock.borrow_mut().flags.insert(ChangeFlags::EXIT));
    request_frame();
}

/// Check and clear a pending exit request.
pub fn take_exit_request() -> bool {
    CLOCK.with(|clock| {
        let mut clock = clock.borrow_mut();
        let exit = clock.flags.contains(ChangeFlags::EXIT);
        clock.flags.remove(ChangeFlags::EXIT);
        exit
    })
}

/// Global flag to indicate a frame is requested.
static FRAME_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Wakeup handle for the event loop.
static WAKEUP_PING: OnceLock<Ping> = OnceLock::new();

/// Install the wakeup mechanism (called from `App::run()`).
pub(crate) fn init_wakeup(ping: Ping) {
    let _ = WAKEUP_PING.set(ping);
}

/// Request that the event loop process a frame. Coalesced: only the first
/// request between frames wakes the loop.
pub fn request_frame() {
    let was_requested = FRAME_REQUESTED.swap(true, Ordering::Relaxed);
    if !was_requested {
        if let Some(ping) = WAKEUP_PING.get() {
            ping.ping();
        }
    }
}

/// Check whether a frame has been requested and clear the flag.
pub fn take_frame_request() -> bool {
    FRAME_REQUESTED.swap(false, Ordering::Relaxed)
}
