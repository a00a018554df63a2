//! Static copy for the landing page.
//!
//! Everything here is literal content: the sections render it as-is, and
//! none of it changes at runtime.

/// Glyphs the page draws next to its copy.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Video,
    Film,
    Music,
    Zap,
    Globe,
    Briefcase,
    Award,
    FolderOpen,
    Mail,
    Phone,
    WhatsApp,
    Instagram,
    Telegram,
}

#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Plan {
    pub title: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub icon: Icon,
    pub value: u64,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub initial: &'static str,
    pub quote: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: &'static str,
}

pub const STUDIO_NAME: &str = "Visualise.Co";

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { href: "#features", label: "Features" },
    NavLink { href: "#portfolio", label: "Portfolio" },
    NavLink { href: "#pricing", label: "Pricing" },
    NavLink { href: "#experience", label: "Experience" },
    NavLink { href: "#contact", label: "Contact" },
];

pub const HERO_BADGE: &str = "Professional Video Editing Service";

pub const HERO_HEADLINE: &str = "Craft Your Cinematic";

/// Words the hero headline rotates through.
pub const HERO_WORDS: [&str; 3] = ["Masterpiece", "Video Editing", "Graphics"];

pub const HERO_TAGLINE: &str = "From raw footage to breathtaking final cuts. \
We bring your vision to life with professional editing, color grading, and sound design.";

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: Icon::Video,
        title: "4K & 8K Editing",
        description: "Crystal-clear, high-resolution editing for a stunning visual experience on any screen.",
    },
    Feature {
        icon: Icon::Film,
        title: "Cinematic Color Grading",
        description: "We set the mood and tone of your video with professional color correction and grading.",
    },
    Feature {
        icon: Icon::Music,
        title: "Sound Design",
        description: "Immersive audio experiences with custom sound design, mixing, and mastering.",
    },
    Feature {
        icon: Icon::Zap,
        title: "Motion Graphics & VFX",
        description: "Engage your audience with custom motion graphics, titles, and subtle visual effects.",
    },
];

pub const PORTFOLIO_URL: &str =
    "https://drive.google.com/drive/folders/1N9dABQhRzAaGA3oSDS-PmFL9oMqVWDLW";

pub const PLANS: [Plan; 3] = [
    Plan {
        title: "Starter",
        price: "₹15,000",
        description: "For short personal projects and social media content.",
        features: &[
            "Up to 2 min video",
            "2-day turnaround",
            "2 rounds of revisions",
            "1080p Export",
            "5 Videos",
        ],
        popular: false,
    },
    Plan {
        title: "Pro",
        price: "₹30,000",
        description: "Perfect for creators, businesses, and short films.",
        features: &[
            "Up to 15 min video",
            "4-day turnaround",
            "3 rounds of revisions",
            "4K Export",
            "Color Grading",
            "20 Videos",
        ],
        popular: true,
    },
    Plan {
        title: "Enterprise",
        price: "Custom",
        description: "For feature films, documentaries, and large-scale projects.",
        features: &[
            "Unlimited length",
            "Dedicated editor",
            "Unlimited revisions",
            "8K+ Export",
            "Advanced VFX",
        ],
        popular: false,
    },
];

pub const STATS: [Stat; 3] = [
    Stat { icon: Icon::Globe, value: 150, label: "Clients Worldwide" },
    Stat { icon: Icon::Briefcase, value: 300, label: "Projects Completed" },
    Stat { icon: Icon::Award, value: 5, label: "Years of Experience" },
];

pub const WORKING_HOURS: &str = "Monday - Friday: 9:00 AM - 6:00 PM (IST)";

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Alex Johnson",
        initial: "AJ",
        quote: "The final cut was beyond my expectations. The color grading gave my film the exact mood I was looking for. Truly cinematic!",
    },
    Testimonial {
        name: "Samantha Bee",
        initial: "SB",
        quote: "Incredible turnaround time and the quality was top-notch. They transformed my raw footage into a compelling story.",
    },
    Testimonial {
        name: "Michael Chen",
        initial: "MC",
        quote: "The motion graphics were sleek and professional. It added a layer of polish that took my corporate video to the next level.",
    },
    Testimonial {
        name: "Priya Patel",
        initial: "PP",
        quote: "I was blown away by the sound design. It completely immersed me in the film. I'll definitely be coming back for future projects.",
    },
    Testimonial {
        name: "David Rodriguez",
        initial: "DR",
        quote: "A seamless process from start to finish. Communication was excellent, and they were very receptive to my feedback.",
    },
    Testimonial {
        name: "Emily White",
        initial: "EW",
        quote: "They handled my 8K footage flawlessly. The final export was crisp, clean, and absolutely stunning on a big screen.",
    },
];

/// The two marquee columns split the testimonials in half.
pub fn testimonial_columns() -> (&'static [Testimonial], &'static [Testimonial]) {
    TESTIMONIALS.split_at(TESTIMONIALS.len() / 2)
}

pub const CONTACT_EMAIL: &str = "covisualise@gmail.com";
pub const CONTACT_PHONE: &str = "+91 8707690924";

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { icon: Icon::WhatsApp, href: "https://wa.me/+919598822384" },
    SocialLink { icon: Icon::Instagram, href: "https://www.instagram.com/visualise._co" },
    SocialLink { icon: Icon::Telegram, href: "https://t.me/Visualiseco" },
];
