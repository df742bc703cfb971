//! Analog watchface simulator for desktop platforms.
//!
//! Renders the watchface into an embedded-graphics-simulator window, driven
//! by the host clock, a simulated pedometer and a simulated phone.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod cli;
mod logging;
mod pedometer;
mod persist;
mod phone;
mod timing;

use std::thread;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use watchface_common::link::FrameParser;
use watchface_common::message::WeatherUpdate;
use watchface_common::{LocalTime, MemoryStorage, Watchface};

use crate::cli::Args;
use crate::pedometer::{STEP_BOOST, SimPedometer};
use crate::timing::{FRAME_TIME, MinuteClock, local_now};

/// Watch side of the simulated phone link.
struct PhoneLink {
    parser: FrameParser,
}

impl PhoneLink {
    const fn new() -> Self { Self { parser: FrameParser::new() } }

    /// Send `update` from the phone and deliver whatever arrives at the watch.
    fn push(
        &mut self,
        update: &WeatherUpdate,
        watchface: &mut Watchface,
        now: LocalTime,
    ) -> Result<()> {
        let frame = phone::encode(update)?;
        for &byte in frame.bytes() {
            match self.parser.feed(byte) {
                Ok(Some(payload)) => {
                    watchface.on_message(&payload, now);
                },
                Ok(None) => {},
                Err(e) => tracing::warn!("phone link: {e}"),
            }
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    let mut storage = if args.fresh {
        MemoryStorage::new()
    } else {
        persist::load(&args.state_file)?
    };

    let size = Size::new(args.size, args.size);
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(size);
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new("Watchface Sim", &output_settings);

    let now = local_now();
    let mut pedometer = SimPedometer::new(now);
    let mut minutes = MinuteClock::new(now);
    let mut link = PhoneLink::new();

    let mut watchface = Watchface::new(size);
    watchface.load(&storage, &mut pedometer, now);
    logging::forward(watchface.log_mut());
    watchface.render(&mut display);
    window.update(&display);
    tracing::info!(size = args.size, state_file = %args.state_file.display(), "simulator started");

    'running: loop {
        let frame_start = Instant::now();
        let now = local_now();
        pedometer.set_time(now);

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::S => {
                            pedometer.add_steps(STEP_BOOST);
                            tracing::info!("pedometer: +{STEP_BOOST} steps");
                        },
                        Keycode::U => {
                            let available = pedometer.toggle_available();
                            tracing::info!(available, "pedometer availability");
                        },
                        Keycode::T => link.push(&phone::weather(now), &mut watchface, now)?,
                        Keycode::N => {
                            let update = phone::flipped_theme(now, watchface.theme());
                            link.push(&update, &mut watchface, now)?;
                        },
                        _ => {},
                    }
                },
                _ => {},
            }
        }

        if minutes.poll(now) {
            watchface.on_minute_tick(now, &mut pedometer);
            let shown = watchface.time();
            tracing::debug!(hours = shown.hours, minutes = shown.minutes, "minute tick");
            if phone::is_push_minute(now) {
                link.push(&phone::weather(now), &mut watchface, now)?;
            }
        }

        logging::forward(watchface.log_mut());

        if watchface.needs_redraw() {
            watchface.render(&mut display);
        }
        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    if let Err(e) = watchface.unload(&mut storage) {
        tracing::error!("unload failed: {e}");
    }
    persist::save(&args.state_file, &storage)?;
    tracing::info!(steps = watchface.steps(), temperature = watchface.temperature(), "state saved");
    Ok(())
}
