//! One-shot visibility trigger for a region.
//!
//! A reveal flips `triggered` from `false` to `true` the first time its
//! region's visible fraction crosses the threshold, then stops watching
//! for good. Scrolling the region out and back in changes nothing; there
//! is no reverse transition.

use std::cell::Cell;

use super::{ObservationId, Observe, ObserverOptions, Region, Viewport};
use crate::reactive::{create_signal, ReadSignal, Signal};

pub struct Reveal;

impl Reveal {
    /// Watch `region` and trigger once its visible fraction reaches the
    /// threshold. Evaluates once immediately, so a region already in view
    /// triggers before this returns.
    pub fn observe(viewport: &Viewport, region: Region, options: ObserverOptions) -> RevealHandle {
        let triggered = create_signal(false);
        let sink = triggered.clone();
        let threshold = options.threshold;
        let id = viewport.observe(
            region,
            options,
            Box::new(move |fraction| {
                if fraction >= threshold {
                    sink.set(true);
                    Observe::Release
                } else {
                    Observe::Keep
                }
            }),
        );
        let observation = if triggered.get_untracked() {
            None
        } else {
            Some((viewport.clone(), id))
        };
        RevealHandle {
            triggered,
            observation: Cell::new(observation),
        }
    }
}

/// Handle to a reveal.
pub struct RevealHandle {
    triggered: Signal<bool>,
    observation: Cell<Option<(Viewport, ObservationId)>>,
}

impl RevealHandle {
    /// A reveal with nothing watching it, for when region observation is
    /// unavailable: it stays untriggered forever instead of failing.
    pub fn inert() -> Self {
        Self {
            triggered: create_signal(false),
            observation: Cell::new(None),
        }
    }

    /// Whether the region has entered view (tracked).
    pub fn triggered(&self) -> bool {
        self.triggered.get()
    }

    /// Read handle over the triggered flag.
    pub fn signal(&self) -> ReadSignal<bool> {
        self.triggered.read_only()
    }

    /// Stop watching. Before the trigger this means the reveal never
    /// fires; after it, or repeated, it is a no-op.
    pub fn dispose(&self) {
        if let Some((viewport, id)) = self.observation.take() {
            viewport.unobserve(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn below_the_fold(viewport: &Viewport) -> RevealHandle {
        Reveal::observe(
            viewport,
            Region::new(2000.0, 400.0),
            ObserverOptions::default(),
        )
    }

    #[test]
    fn starts_untriggered() {
        let viewport = Viewport::new(900.0);
        let reveal = below_the_fold(&viewport);
        assert!(!reveal.triggered());
    }

    #[test]
    fn region_in_view_triggers_immediately() {
        let viewport = Viewport::new(900.0);
        let reveal = Reveal::observe(
            &viewport,
            Region::new(100.0, 400.0),
            ObserverOptions::default(),
        );
        assert!(reveal.triggered());
        assert_eq!(viewport.observation_count(), 0);
    }

    #[test]
    fn triggers_when_threshold_is_crossed() {
        let viewport = Viewport::new(900.0);
        let reveal = below_the_fold(&viewport);
        // 10% of a 400 px region is 40 px; zone bottom must pass 2040.
        viewport.set_scroll(1100.0);
        assert!(!reveal.triggered());
        viewport.set_scroll(1200.0);
        assert!(reveal.triggered());
    }

    #[test]
    fn stays_triggered_after_leaving_view() {
        let viewport = Viewport::new(900.0);
        let reveal = below_the_fold(&viewport);
        viewport.set_scroll(1800.0);
        assert!(reveal.triggered());
        viewport.set_scroll(0.0);
        assert!(reveal.triggered());
        viewport.set_scroll(1800.0);
        assert!(reveal.triggered());
    }

    #[test]
    fn observation_is_released_on_trigger() {
        let viewport = Viewport::new(900.0);
        let reveal = below_the_fold(&viewport);
        assert_eq!(viewport.observation_count(), 1);
        viewport.set_scroll(1800.0);
        assert!(reveal.triggered());
        assert_eq!(viewport.observation_count(), 0);
    }

    #[test]
    fn dispose_before_trigger_means_never() {
        let viewport = Viewport::new(900.0);
        let reveal = below_the_fold(&viewport);
        reveal.dispose();
        assert_eq!(viewport.observation_count(), 0);
        viewport.set_scroll(1800.0);
        assert!(!reveal.triggered());
    }

    #[test]
    fn dispose_is_idempotent() {
        let viewport = Viewport::new(900.0);
        let reveal = below_the_fold(&viewport);
        viewport.set_scroll(1800.0);
        reveal.dispose();
        reveal.dispose();
        assert!(reveal.triggered());
    }

    #[test]
    fn bottom_margin_delays_the_trigger() {
        let viewport = Viewport::new(900.0);
        let eager = Reveal::observe(
            &viewport,
            Region::new(2000.0, 400.0),
            ObserverOptions::default(),
        );
        let delayed = Reveal::observe(
            &viewport,
            Region::new(2000.0, 400.0),
            ObserverOptions::default().bottom_margin(50.0),
        );
        viewport.set_scroll(1150.0);
        assert!(eager.triggered());
        assert!(!delayed.triggered());
        viewport.set_scroll(1200.0);
        assert!(delayed.triggered());
    }

    #[test]
    fn inert_reveal_never_triggers() {
        let reveal = RevealHandle::inert();
        assert!(!reveal.triggered());
        reveal.dispose();
        assert!(!reveal.triggered());
    }
}
