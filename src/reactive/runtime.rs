use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

thread_local! {
    static RUNTIME: RefCell<Runtime> = RefCell::new(Runtime::default());
}

pub type SignalId = usize;
pub type EffectId = usize;

type EffectFn = Rc<RefCell<Box<dyn FnMut()>>>;

/// Thread-local dependency graph between signals and effects.
///
/// The whole page model is single-threaded and cooperative: signals are
/// written from timer and scroll callbacks on the one driving thread, and
/// effect notification is synchronous at write time (or at batch end).
/// That keeps per-instance delivery order identical to write order.
#[derive(Default)]
struct Runtime {
    /// Stack of effects currently executing (innermost last).
    effect_stack: Vec<EffectId>,
    effect_callbacks: Vec<Option<EffectFn>>,
    effect_dependencies: Vec<HashSet<SignalId>>,
    signal_subscribers: Vec<HashSet<EffectId>>,
    /// Pending effects in enqueue order, deduplicated through `queued`.
    queue: VecDeque<EffectId>,
    queued: HashSet<EffectId>,
    next_signal: SignalId,
    batch_depth: usize,
    flushing: bool,
}

fn with<F, R>(f: F) -> R
where
    F: FnOnce(&mut Runtime) -> R,
{
    RUNTIME.with(|rt| f(&mut rt.borrow_mut()))
}

pub(crate) fn allocate_signal() -> SignalId {
    with(|rt| {
        let id = rt.next_signal;
        rt.next_signal += 1;
        rt.signal_subscribers.push(HashSet::new());
        id
    })
}

/// Record a read of `signal` by the currently executing effect, if any.
pub(crate) fn track_read(signal: SignalId) {
    with(|rt| {
        if let Some(&effect) = rt.effect_stack.last() {
            rt.signal_subscribers[signal].insert(effect);
            rt.effect_dependencies[effect].insert(signal);
        }
    });
}

/// Queue every subscriber of `signal` and flush unless a batch or an outer
/// flush is already in progress.
pub(crate) fn notify_write(signal: SignalId) {
    let flush = with(|rt| {
        let mut subscribers: Vec<EffectId> =
            rt.signal_subscribers[signal].iter().copied().collect();
        subscribers.sort_unstable();
        for effect in subscribers {
            if rt.queued.insert(effect) {
                rt.queue.push_back(effect);
            }
        }
        rt.batch_depth == 0 && !rt.flushing && !rt.queue.is_empty()
    });
    if flush {
        flush_queue();
    }
}

fn flush_queue() {
    with(|rt| rt.flushing = true);
    loop {
        let next = with(|rt| {
            let next = rt.queue.pop_front();
            if let Some(effect) = next {
                rt.queued.remove(&effect);
            }
            next
        });
        match next {
            Some(effect) => run_effect(effect),
            None => break,
        }
    }
    with(|rt| rt.flushing = false);
}

/// Re-run one effect with dependency tracking.
///
/// The runtime borrow is released before the callback runs, so effects are
/// free to read and write signals, register tickers, or dispose handles.
fn run_effect(effect: EffectId) {
    let callback = with(|rt| {
        let callback = rt.effect_callbacks.get(effect).cloned().flatten()?;
        let old_deps = std::mem::take(&mut rt.effect_dependencies[effect]);
        for signal in old_deps {
            rt.signal_subscribers[signal].remove(&effect);
        }
        rt.effect_stack.push(effect);
        Some(callback)
    });
    if let Some(callback) = callback {
        // A reentrant self-notification would find the callback already
        // borrowed; skip it, the outer run is still in progress.
        if let Ok(mut callback) = callback.try_borrow_mut() {
            (*callback)();
        }
        with(|rt| {
            rt.effect_stack.pop();
        });
    }
}

pub(crate) fn allocate_effect(callback: Box<dyn FnMut()>) -> EffectId {
    let id = with(|rt| {
        let id = rt.effect_callbacks.len();
        rt.effect_callbacks.push(Some(Rc::new(RefCell::new(callback))));
        rt.effect_dependencies.push(HashSet::new());
        id
    });
    // Establish the initial dependency set.
    run_effect(id);
    id
}

pub(crate) fn dispose_effect(effect: EffectId) {
    with(|rt| {
        let deps = std::mem::take(&mut rt.effect_dependencies[effect]);
        for signal in deps {
            rt.signal_subscribers[signal].remove(&effect);
        }
        rt.effect_callbacks[effect] = None;
        if rt.queued.remove(&effect) {
            rt.queue.retain(|queued| *queued != effect);
        }
    });
}

/// Defer effect notification until `f` returns, then flush once.
pub fn batch<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    with(|rt| rt.batch_depth += 1);
    let result = f();
    let flush = with(|rt| {
        rt.batch_depth -= 1;
        rt.batch_depth == 0 && !rt.flushing && !rt.queue.is_empty()
    });
    if flush {
        flush_queue();
    }
    result
}
