//! Minimal count-up run: 0 to 150 over two seconds at 60 Hz.

use std::time::Duration;

use showreel::prelude::*;

fn main() {
    let counter = CountUp::start(150, Duration::from_millis(2000));
    let displayed = counter.value();
    let _narrator = create_effect(move || {
        log::info!("count: {}", displayed.get());
    });

    App::new()
        .on_update(move || {
            if counter.is_finished() && !showreel::clock::has_tickers() {
                log::info!("landed on {} exactly", counter.displayed());
                request_exit();
            }
        })
        .run()
        .expect("frame loop failed");
}
