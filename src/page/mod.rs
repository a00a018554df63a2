//! The landing page itself: static copy plus one behavior instance per
//! animated section, assembled over a single [`Viewport`].

pub mod content;
pub mod cursor;
pub mod hero;
pub mod navbar;
pub mod section;
pub mod stats;
pub mod testimonials;

pub use cursor::GlassCursor;
pub use hero::Hero;
pub use navbar::Navbar;
pub use section::RevealedSection;
pub use stats::ExperienceSection;
pub use testimonials::TestimonialRail;

use bitflags::bitflags;

use crate::viewport::{Point, Region, Viewport};

bitflags! {
    /// Which sections have been revealed so far. Reveals are one-shot, so
    /// bits only ever get added.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SectionFlags: u8 {
        const FEATURES     = 0b000001;
        const PORTFOLIO    = 0b000010;
        const PRICING      = 0b000100;
        const EXPERIENCE   = 0b001000;
        const TESTIMONIALS = 0b010000;
        const CONTACT      = 0b100000;
    }
}

/// Vertical placement of every section band in the document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub hero: Region,
    pub features: Region,
    pub portfolio: Region,
    pub pricing: Region,
    pub experience: Region,
    pub testimonials: Region,
    pub contact: Region,
    pub footer: Region,
}

impl PageGeometry {
    /// Stack the sections top to bottom: the hero fills the first
    /// screenful, the rest use fixed heights.
    pub fn stacked(viewport_height: f32) -> Self {
        let mut top = 0.0;
        let mut band = |height: f32| {
            let region = Region::new(top, height);
            top += height;
            region
        };
        Self {
            hero: band(viewport_height),
            features: band(760.0),
            portfolio: band(520.0),
            pricing: band(880.0),
            experience: band(720.0),
            testimonials: band(860.0),
            contact: band(760.0),
            footer: band(540.0),
        }
    }

    /// Total document height.
    pub fn total_height(&self) -> f32 {
        self.footer.bottom()
    }
}

/// The assembled page.
pub struct Page {
    viewport: Viewport,
    geometry: PageGeometry,
    navbar: Navbar,
    hero: Hero,
    features: RevealedSection,
    portfolio: RevealedSection,
    pricing: RevealedSection,
    experience_intro: RevealedSection,
    experience: ExperienceSection,
    testimonials_intro: RevealedSection,
    testimonials: TestimonialRail,
    contact: RevealedSection,
    cursor: GlassCursor,
}

impl Page {
    pub fn new(viewport: Viewport) -> Self {
        let geometry = PageGeometry::stacked(viewport.height().get_untracked());
        log::info!(
            "assembling {} landing page, {:.0}px document",
            content::STUDIO_NAME,
            geometry.total_height()
        );
        Self {
            navbar: Navbar::new(&viewport),
            hero: Hero::new(),
            features: RevealedSection::new(&viewport, "features", geometry.features),
            portfolio: RevealedSection::new(&viewport, "portfolio", geometry.portfolio),
            pricing: RevealedSection::new(&viewport, "pricing", geometry.pricing),
            experience_intro: RevealedSection::new(&viewport, "experience", geometry.experience),
            experience: ExperienceSection::new(&viewport, geometry.experience),
            testimonials_intro: RevealedSection::new(
                &viewport,
                "testimonials",
                geometry.testimonials,
            ),
            testimonials: TestimonialRail::new(),
            contact: RevealedSection::new(&viewport, "contact", geometry.contact),
            cursor: GlassCursor::new(),
            geometry,
            viewport,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn geometry(&self) -> PageGeometry {
        self.geometry
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn features(&self) -> &RevealedSection {
        &self.features
    }

    pub fn portfolio(&self) -> &RevealedSection {
        &self.portfolio
    }

    pub fn pricing(&self) -> &RevealedSection {
        &self.pricing
    }

    pub fn experience(&self) -> &ExperienceSection {
        &self.experience
    }

    pub fn testimonials(&self) -> &TestimonialRail {
        &self.testimonials
    }

    pub fn contact(&self) -> &RevealedSection {
        &self.contact
    }

    pub fn cursor(&self) -> &GlassCursor {
        &self.cursor
    }

    /// Scroll the viewport, re-evaluating every observation.
    pub fn scroll_to(&self, offset: f32) {
        self.viewport.set_scroll(offset);
    }

    /// Feed a pointer position to the glass cursor.
    pub fn pointer_moved(&self, pointer: Point) {
        self.cursor.pointer_moved(pointer);
    }

    /// The furthest the page can scroll.
    pub fn max_scroll(&self) -> f32 {
        (self.geometry.total_height() - self.viewport.height().get_untracked()).max(0.0)
    }

    /// Which sections have revealed so far.
    pub fn revealed(&self) -> SectionFlags {
        let mut flags = SectionFlags::empty();
        flags.set(SectionFlags::FEATURES, self.features.is_revealed());
        flags.set(SectionFlags::PORTFOLIO, self.portfolio.is_revealed());
        flags.set(SectionFlags::PRICING, self.pricing.is_revealed());
        flags.set(SectionFlags::EXPERIENCE, self.experience.is_revealed());
        flags.set(
            SectionFlags::TESTIMONIALS,
            self.testimonials_intro.is_revealed(),
        );
        flags.set(SectionFlags::CONTACT, self.contact.is_revealed());
        flags
    }

    /// Tear down every behavior instance. Idempotent.
    pub fn dispose(&self) {
        self.features.dispose();
        self.portfolio.dispose();
        self.pricing.dispose();
        self.experience_intro.dispose();
        self.experience.dispose();
        self.testimonials_intro.dispose();
        self.testimonials.dispose();
        self.contact.dispose();
        self.hero.dispose();
        self.cursor.dispose();
    }
}
