//! The scrollable viewport and region observation.
//!
//! The page is one tall document scrolled vertically behind a fixed-height
//! window. Sections are horizontal bands ([`Region`]) of that document.
//! Observations watch a region's visible fraction and are evaluated
//! synchronously, in registration order, whenever the scroll offset or the
//! window height changes.

mod observer;
mod reveal;

pub use observer::{visible_fraction, ObservationId, Observe, ObserverOptions};
pub use reveal::{Reveal, RevealHandle};

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::reactive::{create_signal, ReadSignal, Signal};

/// A position in viewport coordinates.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A horizontal band of the document.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Region {
    pub top: f32,
    pub height: f32,
}

impl Region {
    pub const fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

type ObservationFn = Box<dyn FnMut(f32) -> Observe>;

struct Observation {
    id: ObservationId,
    region: Region,
    options: ObserverOptions,
    callback: ObservationFn,
}

struct Registry {
    observations: Vec<Observation>,
    /// Ids released while an evaluation pass is in flight.
    released: HashSet<ObservationId>,
    evaluating: bool,
    next_id: u64,
}

/// The scrollable window over the page.
#[derive(Clone)]
pub struct Viewport {
    scroll: Signal<f32>,
    height: Signal<f32>,
    registry: Rc<RefCell<Registry>>,
}

impl Viewport {
    pub fn new(height: f32) -> Self {
        Self {
            scroll: create_signal(0.0),
            height: create_signal(height),
            registry: Rc::new(RefCell::new(Registry {
                observations: Vec::new(),
                released: HashSet::new(),
                evaluating: false,
                next_id: 1,
            })),
        }
    }

    /// Read handle over the scroll offset.
    pub fn scroll(&self) -> ReadSignal<f32> {
        self.scroll.read_only()
    }

    /// Read handle over the window height.
    pub fn height(&self) -> ReadSignal<f32> {
        self.height.read_only()
    }

    /// Scroll the window and re-evaluate every observation.
    pub fn set_scroll(&self, offset: f32) {
        if self.scroll.get_untracked() == offset {
            return;
        }
        self.scroll.set(offset);
        self.evaluate();
    }

    /// Resize the window and re-evaluate every observation.
    pub fn set_height(&self, height: f32) {
        if self.height.get_untracked() == height {
            return;
        }
        self.height.set(height);
        self.evaluate();
    }

    /// Watch a region. The callback receives the region's visible fraction
    /// and decides whether to keep watching; it is invoked once immediately
    /// against the current viewport, then on every scroll or resize.
    ///
    /// The registration is released at most once: by the callback returning
    /// [`Observe::Release`] or by [`Viewport::unobserve`], whichever first.
    pub fn observe(
        &self,
        region: Region,
        options: ObserverOptions,
        mut callback: ObservationFn,
    ) -> ObservationId {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = ObservationId(registry.next_id);
            registry.next_id += 1;
            id
        };
        // Initial delivery, mirroring an observer's first intersection
        // report. A region already past the threshold never registers.
        let fraction = visible_fraction(
            region,
            self.scroll.get_untracked(),
            self.height.get_untracked(),
            options.bottom_margin,
        );
        if callback(fraction) == Observe::Release {
            return id;
        }
        self.registry.borrow_mut().observations.push(Observation {
            id,
            region,
            options,
            callback,
        });
        id
    }

    /// Release an observation. Unknown or already-released ids are a no-op.
    pub fn unobserve(&self, id: ObservationId) {
        let mut registry = self.registry.borrow_mut();
        if let Some(index) = registry.observations.iter().position(|o| o.id == id) {
            registry.observations.remove(index);
        } else if registry.evaluating {
            // It may be in the batch currently being evaluated.
            registry.released.insert(id);
        }
    }

    /// Number of live observations.
    pub fn observation_count(&self) -> usize {
        self.registry.borrow().observations.len()
    }

    fn evaluate(&self) {
        let scroll = self.scroll.get_untracked();
        let height = self.height.get_untracked();
        let batch = {
            let mut registry = self.registry.borrow_mut();
            registry.evaluating = true;
            std::mem::take(&mut registry.observations)
        };

        let mut kept = Vec::with_capacity(batch.len());
        for mut observation in batch {
            let released = self
                .registry
                .borrow()
                .released
                .contains(&observation.id);
            if released {
                continue;
            }
            let fraction = visible_fraction(
                observation.region,
                scroll,
                height,
                observation.options.bottom_margin,
            );
            if (observation.callback)(fraction) == Observe::Keep {
                kept.push(observation);
            }
        }

        let mut registry = self.registry.borrow_mut();
        let released = std::mem::take(&mut registry.released);
        kept.retain(|o| !released.contains(&o.id));
        // Observations registered mid-evaluation go after the survivors.
        let registered = std::mem::take(&mut registry.observations);
        registry.observations = kept;
        registry.observations.extend(registered);
        registry.evaluating = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn observe_delivers_an_initial_fraction() {
        let viewport = Viewport::new(900.0);
        let seen = Rc::new(Cell::new(-1.0));
        let sink = seen.clone();
        viewport.observe(
            Region::new(0.0, 300.0),
            ObserverOptions::default(),
            Box::new(move |fraction| {
                sink.set(fraction);
                Observe::Keep
            }),
        );
        assert_eq!(seen.get(), 1.0);
    }

    #[test]
    fn scroll_reevaluates_observations() {
        let viewport = Viewport::new(900.0);
        let seen = Rc::new(Cell::new(0.0));
        let sink = seen.clone();
        viewport.observe(
            Region::new(1000.0, 200.0),
            ObserverOptions::default(),
            Box::new(move |fraction| {
                sink.set(fraction);
                Observe::Keep
            }),
        );
        assert_eq!(seen.get(), 0.0);
        // Zone [200, 1100): the lower half of the region is still below it.
        viewport.set_scroll(200.0);
        assert_eq!(seen.get(), 0.5);
    }

    #[test]
    fn releasing_callback_is_unregistered() {
        let viewport = Viewport::new(900.0);
        viewport.observe(
            Region::new(2000.0, 200.0),
            ObserverOptions::default(),
            Box::new(|fraction| {
                if fraction > 0.0 {
                    Observe::Release
                } else {
                    Observe::Keep
                }
            }),
        );
        assert_eq!(viewport.observation_count(), 1);
        viewport.set_scroll(1500.0);
        assert_eq!(viewport.observation_count(), 0);
    }

    #[test]
    fn already_visible_region_never_registers() {
        let viewport = Viewport::new(900.0);
        viewport.observe(
            Region::new(100.0, 200.0),
            ObserverOptions::default(),
            Box::new(|_| Observe::Release),
        );
        assert_eq!(viewport.observation_count(), 0);
    }

    #[test]
    fn unobserve_is_idempotent() {
        let viewport = Viewport::new(900.0);
        let id = viewport.observe(
            Region::new(2000.0, 200.0),
            ObserverOptions::default(),
            Box::new(|_| Observe::Keep),
        );
        viewport.unobserve(id);
        viewport.unobserve(id);
        assert_eq!(viewport.observation_count(), 0);
    }

    #[test]
    fn unchanged_scroll_does_not_reevaluate() {
        let viewport = Viewport::new(900.0);
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        viewport.observe(
            Region::new(2000.0, 200.0),
            ObserverOptions::default(),
            Box::new(move |_| {
                counter.set(counter.get() + 1);
                Observe::Keep
            }),
        );
        assert_eq!(runs.get(), 1);
        viewport.set_scroll(0.0);
        assert_eq!(runs.get(), 1);
        viewport.set_scroll(10.0);
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn resize_reevaluates_observations() {
        let viewport = Viewport::new(500.0);
        let seen = Rc::new(Cell::new(0.0));
        let sink = seen.clone();
        viewport.observe(
            Region::new(600.0, 200.0),
            ObserverOptions::default(),
            Box::new(move |fraction| {
                sink.set(fraction);
                Observe::Keep
            }),
        );
        assert_eq!(seen.get(), 0.0);
        viewport.set_height(900.0);
        assert_eq!(seen.get(), 1.0);
    }
}
