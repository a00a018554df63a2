//! Scripted scroll-through of the whole landing page.
//!
//! Drives the viewport from the hero to the footer at a steady pace,
//! wiggles the pointer for the glass cursor, and logs what a renderer
//! would draw: navbar flips, section reveals, the stat counters landing.
//! Run with `RUST_LOG=debug` for the per-section detail.

use showreel::prelude::*;

/// Pixels scrolled per frame.
const SCROLL_STEP: f32 = 12.0;

/// Frames to keep ticking after the bottom, so the counters and entrance
/// fades can finish.
const SETTLE_FRAMES: u32 = 240;

fn main() {
    let viewport = Viewport::new(900.0);
    let page = Page::new(viewport.clone());
    let max_scroll = page.max_scroll();

    // Narrate state transitions as a consumer of the reactive values.
    let mut effects = Vec::new();
    let navbar = page.navbar().visible();
    effects.push(create_effect(move || {
        if navbar.get() {
            log::info!("navbar slides in");
        } else {
            log::info!("navbar hidden");
        }
    }));
    for (name, revealed) in [
        ("features", page.features().revealed_signal()),
        ("portfolio", page.portfolio().revealed_signal()),
        ("pricing", page.pricing().revealed_signal()),
        ("contact", page.contact().revealed_signal()),
    ] {
        effects.push(create_effect(move || {
            if revealed.get() {
                log::info!("{name} section revealed");
            }
        }));
    }

    let mut frame: u32 = 0;
    let mut settle: u32 = 0;
    App::new()
        .on_update(move || {
            // Keep the narration effects alive for the whole run.
            let _ = &effects;
            frame += 1;
            let offset = (frame as f32 * SCROLL_STEP).min(max_scroll);
            page.scroll_to(offset);
            page.pointer_moved(Point::new(
                640.0 + (frame % 120) as f32,
                300.0 + (frame % 80) as f32,
            ));

            if offset < max_scroll {
                return;
            }
            settle += 1;
            if settle == 1 {
                log::info!("reached the footer, revealed: {:?}", page.revealed());
            }
            if settle >= SETTLE_FRAMES {
                let labels = page.experience().labels().join(", ");
                log::info!("final stats: {labels}");
                log::info!("hero word at exit: {}", page.hero().word());
                page.dispose();
                request_exit();
            }
        })
        .run()
        .expect("frame loop failed");
}
