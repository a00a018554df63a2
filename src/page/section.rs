//! A page section that fades in the first time it scrolls into view.

use std::cell::Cell;
use std::rc::Rc;

use crate::animation::{AdvanceResult, AnimationState, TimingFunction, Transition, FRAME_INTERVAL};
use crate::clock::{self, Tick, TickerId};
use crate::reactive::{create_effect, create_signal, Effect, ReadSignal, Signal};
use crate::viewport::{ObserverOptions, Region, Reveal, RevealHandle, Viewport};

/// Length of the entrance fade/slide once a section is revealed.
pub const ENTRANCE_MS: f32 = 1000.0;

/// How far the trigger zone is pulled up from the bottom of the viewport,
/// so sections start their entrance slightly after their first pixels pass
/// the fold.
pub const ENTRANCE_BOTTOM_MARGIN: f32 = 50.0;

/// A reveal plus its one-way entrance animation.
///
/// `progress` stays 0.0 until the region is revealed, then runs 0.0 to 1.0
/// once, ease-out over a second. There is no exit animation.
pub struct RevealedSection {
    name: &'static str,
    reveal: RevealHandle,
    progress: Signal<f32>,
    ticker: Rc<Cell<Option<TickerId>>>,
    _effect: Effect,
}

impl RevealedSection {
    pub fn new(viewport: &Viewport, name: &'static str, region: Region) -> Self {
        let reveal = Reveal::observe(
            viewport,
            region,
            ObserverOptions::default().bottom_margin(ENTRANCE_BOTTOM_MARGIN),
        );
        let progress = create_signal(0.0f32);
        let ticker = Rc::new(Cell::new(None));
        let triggered = reveal.signal();
        let effect = create_effect({
            let progress = progress.clone();
            let ticker = ticker.clone();
            move || {
                if !triggered.get() {
                    return;
                }
                log::debug!("section {name} entering view");
                let mut entrance = AnimationState::new(
                    0.0f32,
                    Transition::new(ENTRANCE_MS, TimingFunction::EaseOut),
                );
                entrance.animate_to(1.0);
                let progress = progress.clone();
                let slot = ticker.clone();
                let id = clock::register_ticker(Box::new(move || {
                    if let AdvanceResult::Changed(value) = entrance.advance(FRAME_INTERVAL) {
                        progress.set(value);
                    }
                    if entrance.is_animating() {
                        Tick::Continue
                    } else {
                        slot.set(None);
                        Tick::Stop
                    }
                }));
                ticker.set(Some(id));
            }
        });
        Self {
            name,
            reveal,
            progress,
            ticker,
            _effect: effect,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the section has been revealed (tracked).
    pub fn is_revealed(&self) -> bool {
        self.reveal.triggered()
    }

    /// Read handle over the revealed flag.
    pub fn revealed_signal(&self) -> ReadSignal<bool> {
        self.reveal.signal()
    }

    /// Entrance progress, 0.0 (hidden) to 1.0 (at rest), tracked.
    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    /// Stop watching and animating. Idempotent.
    pub fn dispose(&self) {
        self.reveal.dispose();
        if let Some(id) = self.ticker.take() {
            clock::cancel_ticker(id);
        }
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
    fn progress_stays_at_zero_until_revealed() {
        let viewport = Viewport::new(900.0);
        let section = RevealedSection::new(&viewport, "features", Region::new(2000.0, 600.0));
        drive(120);
        assert!(!section.is_revealed());
        assert_eq!(section.progress(), 0.0);
    }

    #[test]
    fn entrance_runs_once_after_reveal() {
        let viewport = Viewport::new(900.0);
        let section = RevealedSection::new(&viewport, "features", Region::new(2000.0, 600.0));
        viewport.set_scroll(1600.0);
        assert!(section.is_revealed());
        assert_eq!(section.progress(), 0.0);
        drive(30);
        let midway = section.progress();
        assert!(midway > 0.0 && midway < 1.0);
        drive(31);
        assert_eq!(section.progress(), 1.0);
        // Ticker released once the entrance settles.
        assert_eq!(clock::active_tickers(), 0);
    }

    #[test]
    fn entrance_is_monotonic() {
        let viewport = Viewport::new(900.0);
        let section = RevealedSection::new(&viewport, "pricing", Region::new(2000.0, 600.0));
        viewport.set_scroll(1600.0);
        let mut last = 0.0;
        for _ in 0..61 {
            advance_frame();
            let progress = section.progress();
            assert!(progress >= last);
            last = progress;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn scrolling_away_does_not_rewind_the_entrance() {
        let viewport = Viewport::new(900.0);
        let section = RevealedSection::new(&viewport, "contact", Region::new(2000.0, 600.0));
        viewport.set_scroll(1600.0);
        drive(61);
        viewport.set_scroll(0.0);
        drive(10);
        assert!(section.is_revealed());
        assert_eq!(section.progress(), 1.0);
    }

    #[test]
    fn disposed_section_never_animates() {
        let viewport = Viewport::new(900.0);
        let section = RevealedSection::new(&viewport, "portfolio", Region::new(2000.0, 600.0));
        section.dispose();
        viewport.set_scroll(1600.0);
        drive(61);
        assert!(!section.is_revealed());
        assert_eq!(section.progress(), 0.0);
    }
}
