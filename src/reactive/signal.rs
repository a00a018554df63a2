use std::cell::RefCell;
use std::rc::Rc;

use super::runtime::{self, SignalId};
use crate::clock::request_frame;

struct SignalInner<T> {
    id: SignalId,
    value: RefCell<T>,
}

/// A reactive value.
///
/// Signals are the notification primitive of the page model: when a
/// signal's value changes, every effect that read it is re-run
/// synchronously. Writes that leave the value unchanged (`PartialEq`)
/// notify nobody, so one-shot transitions like a reveal flipping to
/// `true` are delivered at most once.
pub struct Signal<T> {
    inner: Rc<SignalInner<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(SignalInner {
                id: runtime::allocate_signal(),
                value: RefCell::new(value),
            }),
        }
    }

    /// Split into a read handle and a write handle over the same value.
    pub fn split(self) -> (ReadSignal<T>, WriteSignal<T>) {
        (
            ReadSignal {
                inner: self.inner.clone(),
            },
            WriteSignal { inner: self.inner },
        )
    }

    /// A read-only handle sharing this signal's value.
    pub fn read_only(&self) -> ReadSignal<T> {
        ReadSignal {
            inner: self.inner.clone(),
        }
    }

    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        runtime::track_read(self.inner.id);
        f(&self.inner.value.borrow())
    }

    pub fn with_untracked<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.value.borrow())
    }
}

impl<T: Clone> Signal<T> {
    pub fn get(&self) -> T {
        runtime::track_read(self.inner.id);
        self.inner.value.borrow().clone()
    }

    pub fn get_untracked(&self) -> T {
        self.inner.value.borrow().clone()
    }
}

impl<T: PartialEq> Signal<T> {
    /// Set the value, notifying subscribers only if it actually changed.
    pub fn set(&self, value: T) {
        let changed = {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        };
        if changed {
            runtime::notify_write(self.inner.id);
            request_frame();
        }
    }
}

impl<T: PartialEq + Clone> Signal<T> {
    /// Update in place, notifying subscribers only if the value changed.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let changed = {
            let mut current = self.inner.value.borrow_mut();
            let previous = current.clone();
            f(&mut current);
            *current != previous
        };
        if changed {
            runtime::notify_write(self.inner.id);
            request_frame();
        }
    }
}

/// Read-only handle to a signal.
pub struct ReadSignal<T> {
    inner: Rc<SignalInner<T>>,
}

impl<T> Clone for ReadSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone> ReadSignal<T> {
    pub fn get(&self) -> T {
        runtime::track_read(self.inner.id);
        self.inner.value.borrow().clone()
    }

    pub fn get_untracked(&self) -> T {
        self.inner.value.borrow().clone()
    }
}

impl<T> ReadSignal<T> {
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        runtime::track_read(self.inner.id);
        f(&self.inner.value.borrow())
    }
}

/// Write-only handle to a signal.
pub struct WriteSignal<T> {
    inner: Rc<SignalInner<T>>,
}

impl<T> Clone for WriteSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq> WriteSignal<T> {
    pub fn set(&self, value: T) {
        let changed = {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        };
        if changed {
            runtime::notify_write(self.inner.id);
            request_frame();
        }
    }
}

pub fn create_signal<T>(value: T) -> Signal<T> {
    Signal::new(value)
}
