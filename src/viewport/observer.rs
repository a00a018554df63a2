//! Observation options and visibility math for region watching.

use super::Region;

/// How much of a region must be inside the trigger zone before an
/// observation fires, and how far the zone is pulled up from the bottom of
/// the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the region that must be visible, 0.0 to 1.0.
    pub threshold: f32,
    /// Pixels shaved off the bottom of the viewport when testing
    /// visibility, so a region has to scroll a little further in before it
    /// counts.
    pub bottom_margin: f32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 0.0,
        }
    }
}

impl ObserverOptions {
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn bottom_margin(mut self, bottom_margin: f32) -> Self {
        self.bottom_margin = bottom_margin;
        self
    }
}

/// Unique identifier for an observation registration.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ObservationId(pub(crate) u64);

/// Whether an observation wants to keep watching after a callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observe {
    Keep,
    Release,
}

/// Fraction of `region` inside the trigger zone `[scroll, scroll + height -
/// bottom_margin]`, clamped to 0.0..=1.0. A zero-height region counts as
/// fully visible when its top lies inside the zone.
pub fn visible_fraction(
    region: Region,
    scroll: f32,
    viewport_height: f32,
    bottom_margin: f32,
) -> f32 {
    let zone_top = scroll;
    let zone_bottom = scroll + (viewport_height - bottom_margin).max(0.0);
    if region.height <= 0.0 {
        return if region.top >= zone_top && region.top <= zone_bottom {
            1.0
        } else {
            0.0
        };
    }
    let overlap = region.bottom().min(zone_bottom) - region.top.max(zone_top);
    (overlap / region.height).clamp(0.0, 1.0)
}
