//! The achievements section: three stats that count up from zero the
//! first time the section scrolls into view.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::animation::{CountUp, CountUpHandle};
use crate::page::content::{Stat, STATS};
use crate::reactive::{create_effect, Effect};
use crate::viewport::{ObserverOptions, Region, Reveal, RevealHandle, Viewport};

/// Each stat counts up over two seconds.
pub const COUNT_UP_MS: u64 = 2000;

/// Reveal-gated stat counters.
///
/// The counters do not exist until the section is revealed; starting them
/// on the trigger is what makes the numbers roll up on screen exactly
/// when the visitor reaches them.
pub struct ExperienceSection {
    reveal: RevealHandle,
    counters: Rc<RefCell<Vec<CountUpHandle>>>,
    _effect: Effect,
}

impl ExperienceSection {
    pub fn new(viewport: &Viewport, region: Region) -> Self {
        let reveal = Reveal::observe(viewport, region, ObserverOptions::default());
        let counters = Rc::new(RefCell::new(Vec::new()));
        let triggered = reveal.signal();
        let effect = create_effect({
            let counters = counters.clone();
            move || {
                if !triggered.get() || !counters.borrow().is_empty() {
                    return;
                }
                log::debug!("experience section revealed, starting stat counters");
                let mut started = counters.borrow_mut();
                for stat in &STATS {
                    started.push(CountUp::start(stat.value, Duration::from_millis(COUNT_UP_MS)));
                }
            }
        });
        Self {
            reveal,
            counters,
            _effect: effect,
        }
    }

    pub fn stats(&self) -> &'static [Stat] {
        &STATS
    }

    /// Whether the section has been revealed (tracked).
    pub fn is_revealed(&self) -> bool {
        self.reveal.triggered()
    }

    pub fn counters_started(&self) -> bool {
        !self.counters.borrow().is_empty()
    }

    /// Currently displayed values, one per stat, zero before the reveal.
    pub fn values(&self) -> Vec<u64> {
        let counters = self.counters.borrow();
        if counters.is_empty() {
            return vec![0; STATS.len()];
        }
        counters.iter().map(|counter| counter.displayed()).collect()
    }

    /// Labels as rendered next to the figures, "150+" style.
    pub fn labels(&self) -> Vec<String> {
        self.values()
            .iter()
            .map(|value| format!("{value}+"))
            .collect()
    }

    /// Whether every counter has landed on its target.
    pub fn is_settled(&self) -> bool {
        let counters = self.counters.borrow();
        !counters.is_empty() && counters.iter().all(|counter| counter.is_finished())
    }

    /// Stop watching and counting. Idempotent.
    pub fn dispose(&self) {
        self.reveal.dispose();
        for counter in self.counters.borrow().iter() {
            counter.cancel();
        }
    }
}
