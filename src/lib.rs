//! A reactive, scroll-driven model of a video editing studio's landing
//! page: static copy plus the timer and viewport state machines that
//! animate it (one-shot section reveals, counting stats, marquee columns,
//! a rotating headline word, a pointer-trailing glass cursor).
//!
//! There is no renderer here. The page exposes reactive values a
//! presentation layer would consume, and [`App`] drives them headlessly
//! from a calloop event loop ticking at the frame interval.

pub mod animation;
pub mod clock;
pub mod page;
pub mod reactive;
pub mod viewport;

use std::time::Duration;

use calloop::timer::{TimeoutAction, Timer};
use calloop::{EventLoop, LoopSignal};

use animation::FRAME_INTERVAL;

pub mod prelude {
    pub use crate::animation::{
        frames_for, AdvanceResult, Animatable, AnimationState, CountUp, CountUpHandle, Direction,
        Marquee, MarqueeHandle, Rotator, RotatorHandle, TimingFunction, Transition, FRAME_INTERVAL,
    };
    pub use crate::clock::{request_exit, request_frame, Tick, TickerId};
    pub use crate::page::{
        content, ExperienceSection, GlassCursor, Hero, Navbar, Page, PageGeometry,
        RevealedSection, SectionFlags, TestimonialRail,
    };
    pub use crate::reactive::{
        batch, create_effect, create_memo, create_signal, Effect, Memo, ReadSignal, Signal,
        WriteSignal,
    };
    pub use crate::viewport::{
        ObserverOptions, Point, Region, Reveal, RevealHandle, Viewport,
    };
    pub use crate::{App, AppConfig, Error};
}

/// Failures setting up or running the event loop. The page behaviors
/// themselves never fail; they degrade silently instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("event loop error: {0}")]
    EventLoop(#[from] calloop::Error),
    #[error("failed to create the wakeup channel: {0}")]
    Wakeup(#[from] std::io::Error),
}

pub struct AppConfig {
    /// Interval between frames.
    pub frame_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_interval: FRAME_INTERVAL,
        }
    }
}

/// A callback that gets called each frame before the clock advances.
/// Use this to inject external events (scroll, pointer movement) and
/// update signals.
pub type UpdateCallback = Box<dyn FnMut()>;

/// The headless runtime driver.
///
/// Owns a calloop event loop with a frame timer and a wakeup ping, and
/// advances the frame clock once per interval until an exit is requested.
pub struct App {
    config: AppConfig,
    on_update: Option<UpdateCallback>,
}

struct RunState {
    on_update: Option<UpdateCallback>,
    signal: LoopSignal,
}

impl App {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            on_update: None,
        }
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            on_update: None,
        }
    }

    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.config.frame_interval = interval;
        self
    }

    /// Set a callback that gets called once per frame, before the clock
    /// advances. The page usually lives inside this closure:
    ///
    /// ```ignore
    /// let viewport = Viewport::new(900.0);
    /// let page = Page::new(viewport.clone());
    /// App::new()
    ///     .on_update(move || {
    ///         page.scroll_to(next_scripted_offset());
    ///         if done() {
    ///             request_exit();
    ///         }
    ///     })
    ///     .run()
    /// ```
    pub fn on_update<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.on_update = Some(Box::new(callback));
        self
    }

    /// Run the frame loop until [`clock::request_exit`] is called.
    pub fn run(mut self) -> Result<(), Error> {
        env_logger::init();

        let mut event_loop: EventLoop<RunState> = EventLoop::try_new()?;
        let handle = event_loop.handle();

        let (ping, ping_source) = calloop::ping::make_ping()?;
        clock::init_wakeup(ping);
        handle
            .insert_source(ping_source, |_, _, _| {
                // Wakeup only; the frame timer does the work.
            })
            .map_err(|e| Error::EventLoop(e.error))?;

        let interval = self.config.frame_interval;
        handle
            .insert_source(Timer::from_duration(interval), move |_, _, state| {
                if let Some(callback) = state.on_update.as_mut() {
                    callback();
                }
                clock::advance_frame();
                clock::take_frame_request();
                if clock::take_exit_request() {
                    log::info!("exit requested, stopping the frame loop");
                    state.signal.stop();
                }
                TimeoutAction::ToDuration(interval)
            })
            .map_err(|e| Error::EventLoop(e.error))?;

        let mut state = RunState {
            on_update: self.on_update.take(),
            signal: event_loop.get_signal(),
        };
        log::info!(
            "frame loop running at {:.2}ms per frame",
            interval.as_secs_f64() * 1000.0
        );
        event_loop.run(None, &mut state, |_| {})?;
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
