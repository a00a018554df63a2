//! The fixed navigation bar, shown only after scrolling most of the way
//! past the hero. Unlike the section reveals this is not one-shot: it
//! hides again when the visitor scrolls back to the top.

use crate::page::content::{NavLink, NAV_LINKS};
use crate::reactive::{create_memo, Memo};
use crate::viewport::Viewport;

/// The bar appears once the scroll offset passes this fraction of the
/// viewport height.
pub const REVEAL_RATIO: f32 = 0.9;

pub struct Navbar {
    visible: Memo<bool>,
}

impl Navbar {
    pub fn new(viewport: &Viewport) -> Self {
        let scroll = viewport.scroll();
        let height = viewport.height();
        Self {
            visible: create_memo(move || scroll.get() > height.get() * REVEAL_RATIO),
        }
    }

    /// Whether the bar is currently shown (tracked).
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// The memoized visibility flag, for effects.
    pub fn visible(&self) -> Memo<bool> {
        self.visible.clone()
    }

    pub fn links(&self) -> &'static [NavLink] {
        &NAV_LINKS
    }
}
