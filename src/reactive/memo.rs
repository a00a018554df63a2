use std::rc::Rc;

use super::effect::{create_effect, Effect};
use super::signal::{create_signal, ReadSignal, Signal};

/// Eager derived value that recomputes when a dependency changes.
///
/// Downstream subscribers are only notified when the computed result
/// actually differs (`PartialEq`). The navbar visibility threshold is the
/// canonical use: the scroll offset changes every frame, but the memo only
/// fires when the boolean flips.
pub struct Memo<T: Clone + PartialEq + 'static> {
    signal: Signal<T>,
    _effect: Rc<Effect>,
}

impl<T: Clone + PartialEq + 'static> Clone for Memo<T> {
    fn clone(&self) -> Self {
        Self {
            signal: self.signal.clone(),
            _effect: self._effect.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Memo<T> {
    /// Get the current value (tracked).
    pub fn get(&self) -> T {
        self.signal.get()
    }

    pub fn get_untracked(&self) -> T {
        self.signal.get_untracked()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.signal.with(f)
    }

    /// A read-only handle over the memoized value.
    pub fn read_only(&self) -> ReadSignal<T> {
        self.signal.read_only()
    }
}

pub fn create_memo<T, F>(f: F) -> Memo<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn() -> T + 'static,
{
    let signal = create_signal(f());
    let sink = signal.clone();
    let effect = create_effect(move || sink.set(f()));
    Memo {
        signal,
        _effect: Rc::new(effect),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::reactive::create_effect;
    use crate::reactive::create_signal;

    #[test]
    fn memo_initial_value() {
        let signal = create_signal(5);
        let source = signal.clone();
        let memo = create_memo(move || source.get() * 2);
        assert_eq!(memo.get(), 10);
    }

    #[test]
    fn memo_tracks_dependency() {
        let signal = create_signal(1);
        let source = signal.clone();
        let memo = create_memo(move || source.get() + 1);
        signal.set(9);
        assert_eq!(memo.get(), 10);
    }

    #[test]
    fn memo_only_notifies_on_result_change() {
        let scroll = create_signal(0.0f32);
        let source = scroll.clone();
        let past_fold = create_memo(move || source.get() > 100.0);
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let watched = past_fold.clone();
        let _effect = create_effect(move || {
            let _ = watched.get();
            counter.set(counter.get() + 1);
        });
        assert_eq!(runs.get(), 1);
        scroll.set(50.0);
        scroll.set(90.0);
        assert_eq!(runs.get(), 1);
        scroll.set(150.0);
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn memo_with_borrow() {
        let signal = create_signal(String::from("cut"));
        let source = signal.clone();
        let memo = create_memo(move || format!("{} scene", source.get()));
        assert_eq!(memo.with(|s| s.len()), 9);
    }
}
