//! End-to-end behavior of the assembled page under a scripted scroll.

use std::time::Duration;

use showreel::clock::{active_tickers, advance_frame};
use showreel::prelude::*;

fn drive(frames: u32) {
    for _ in 0..frames {
        advance_frame();
    }
}

/// Scroll in steps, ticking one frame per step like the real loop does.
fn scroll_page(page: &Page, from: f32, to: f32, step: f32) {
    let mut offset = from;
    while offset < to {
        offset = (offset + step).min(to);
        page.scroll_to(offset);
        advance_frame();
    }
}

#[test]
fn full_scroll_reveals_every_section_once() {
    let page = Page::new(Viewport::new(900.0));
    assert_eq!(page.revealed(), SectionFlags::empty());

    scroll_page(&page, 0.0, page.max_scroll(), 120.0);
    assert_eq!(page.revealed(), SectionFlags::all());

    // Scrolling back up changes nothing; reveals are terminal.
    page.scroll_to(0.0);
    drive(10);
    assert_eq!(page.revealed(), SectionFlags::all());

    // Every reveal observation has been released.
    assert_eq!(page.viewport().observation_count(), 0);
    page.dispose();
}

#[test]
fn navbar_follows_the_scroll_both_ways() {
    let page = Page::new(Viewport::new(900.0));
    assert!(!page.navbar().is_visible());
    page.scroll_to(811.0);
    assert!(page.navbar().is_visible());
    page.scroll_to(400.0);
    assert!(!page.navbar().is_visible());
    page.scroll_to(2000.0);
    assert!(page.navbar().is_visible());
    page.dispose();
}

#[test]
fn stats_wait_for_their_section_and_land_exactly() {
    let page = Page::new(Viewport::new(900.0));
    let experience_top = page.geometry().experience.top;

    drive(60);
    assert!(!page.experience().counters_started());
    assert_eq!(page.experience().values(), vec![0, 0, 0]);

    // Scroll until the experience band crosses the threshold.
    scroll_page(&page, 0.0, experience_top, 120.0);
    assert!(page.experience().is_revealed());
    assert!(page.experience().counters_started());

    drive(120);
    assert_eq!(page.experience().values(), vec![150, 300, 5]);
    assert_eq!(page.experience().labels(), vec!["150+", "300+", "5+"]);
    assert!(page.experience().is_settled());

    // No further ticks are delivered to the finished counters.
    drive(60);
    assert_eq!(page.experience().values(), vec![150, 300, 5]);
    page.dispose();
}

#[test]
fn entrance_fades_settle_at_rest() {
    let page = Page::new(Viewport::new(900.0));
    scroll_page(&page, 0.0, page.geometry().features.top + 200.0, 120.0);
    assert!(page.features().is_revealed());
    drive(61);
    assert_eq!(page.features().progress(), 1.0);
    page.dispose();
}

#[test]
fn hero_word_rotates_while_scrolling() {
    let page = Page::new(Viewport::new(900.0));
    assert_eq!(page.hero().word(), "Masterpiece");
    drive(120);
    assert_eq!(page.hero().word(), "Video Editing");
    page.dispose();
}

#[test]
fn testimonial_columns_drift_apart() {
    let page = Page::new(Viewport::new(900.0));
    let (up_before, down_before) = page.testimonials().offsets();
    drive(30);
    let (up, down) = page.testimonials().offsets();
    assert!(up > up_before);
    assert!(down < down_before);
    page.dispose();
}

#[test]
fn glass_cursor_catches_up_with_the_pointer() {
    let page = Page::new(Viewport::new(900.0));
    page.pointer_moved(Point::new(640.0, 360.0));
    drive(10);
    assert_eq!(page.cursor().position(), Point::new(640.0, 360.0));
    page.dispose();
}

#[test]
fn disposed_page_goes_quiet() {
    let page = Page::new(Viewport::new(900.0));
    page.scroll_to(page.geometry().experience.top);
    drive(10);
    page.dispose();
    drive(10);
    let frozen = page.experience().values();
    drive(120);
    assert_eq!(page.experience().values(), frozen);
    assert_eq!(active_tickers(), 0);
    page.dispose();
}

#[test]
fn countup_concrete_scenario_from_the_stats() {
    // 150 over 2000ms at 60Hz: 120 frames, 75 at the halfway tick,
    // exactly 150 at the final tick, nothing after.
    let handle = CountUp::start(150, Duration::from_millis(2000));
    drive(60);
    assert_eq!(handle.displayed(), 75);
    drive(59);
    assert!(handle.displayed() < 150);
    drive(1);
    assert_eq!(handle.displayed(), 150);
    assert!(handle.is_finished());
    assert_eq!(active_tickers(), 0);
}

#[test]
fn countup_small_target_never_saturates_early() {
    let handle = CountUp::start(5, Duration::from_millis(2000));
    for _ in 0..119 {
        advance_frame();
        assert!(handle.displayed() < 5);
    }
    advance_frame();
    assert_eq!(handle.displayed(), 5);
}

#[test]
fn countup_cancel_stops_delivery() {
    let handle = CountUp::start(150, Duration::from_millis(2000));
    drive(45);
    let frozen = handle.displayed();
    handle.cancel();
    drive(120);
    assert_eq!(handle.displayed(), frozen);
    assert!(!handle.is_finished());
    handle.cancel();
    assert_eq!(active_tickers(), 0);
}

#[test]
fn restarting_a_cancelled_countup_is_independent() {
    let first = CountUp::start(150, Duration::from_millis(2000));
    drive(30);
    first.cancel();
    let carried = first.displayed();

    let second = CountUp::start(150, Duration::from_millis(2000));
    assert_eq!(second.displayed(), 0);
    drive(120);
    assert_eq!(second.displayed(), 150);
    // The first handle kept its frozen value all along.
    assert_eq!(first.displayed(), carried);
}

#[test]
fn reveal_disposed_before_crossing_never_triggers() {
    let viewport = Viewport::new(900.0);
    let reveal = Reveal::observe(
        &viewport,
        Region::new(3000.0, 400.0),
        ObserverOptions::default(),
    );
    reveal.dispose();
    viewport.set_scroll(2800.0);
    assert!(!reveal.triggered());
    reveal.dispose();
}
