//! The full-screen hero banner with its rotating headline word.

use std::time::Duration;

use crate::animation::{Rotator, RotatorHandle};
use crate::page::content::{HERO_BADGE, HERO_HEADLINE, HERO_TAGLINE, HERO_WORDS};

/// The highlighted word swaps every two seconds.
pub const ROTATION_MS: u64 = 2000;

pub struct Hero {
    rotator: RotatorHandle,
}

impl Hero {
    pub fn new() -> Self {
        Self {
            rotator: Rotator::start(HERO_WORDS.len(), Duration::from_millis(ROTATION_MS)),
        }
    }

    /// The currently highlighted word (tracked).
    pub fn word(&self) -> &'static str {
        HERO_WORDS[self.rotator.index() % HERO_WORDS.len()]
    }

    pub fn word_index(&self) -> usize {
        self.rotator.index()
    }

    pub fn badge(&self) -> &'static str {
        HERO_BADGE
    }

    pub fn headline(&self) -> &'static str {
        HERO_HEADLINE
    }

    pub fn tagline(&self) -> &'static str {
        HERO_TAGLINE
    }

    /// Stop rotating. Idempotent.
    pub fn dispose(&self) {
        self.rotator.cancel();
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new()
    }
}
