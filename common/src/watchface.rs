//! Watchface application state and event handling.
//!
//! A host drives the face with four events:
//!
//! | Event | Method | Effect |
//! |-------|--------|--------|
//! | Start | [`Watchface::load`] | Restore persisted values, show the time |
//! | Minute changed | [`Watchface::on_minute_tick`] | Move hands, refresh steps every 10 minutes |
//! | Phone message | [`Watchface::on_message`] | New temperature, day/night theme |
//! | Stop | [`Watchface::unload`] | Persist steps and temperature |
//!
//! After each event the host drains [`Watchface::log_mut`] into its logger
//! and calls [`Watchface::render`] if [`Watchface::needs_redraw`].

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::clock_time::{ClockTime, LocalTime};
use crate::colors::BLACK;
use crate::health::{HealthDial, HealthSource};
use crate::layout::FaceLayout;
use crate::log::EventLog;
use crate::message::{WeatherUpdate, decode_weather};
use crate::render::RenderState;
use crate::storage::{Storage, StorageError, StorageKey};
use crate::temperature::TemperatureDial;
use crate::widgets::{Theme, draw_center_cap, draw_face, draw_hands, draw_step_dial, draw_temperature_dial};

pub struct Watchface {
    layout: FaceLayout,
    time: ClockTime,
    health: HealthDial,
    temperature: TemperatureDial,
    render: RenderState,
    log: EventLog,
}

impl Watchface {
    /// Face laid out for a display of `bounds`, showing 00:00 until loaded.
    pub fn new(bounds: Size) -> Self {
        Self {
            layout: FaceLayout::for_bounds(bounds),
            time: ClockTime::default(),
            health: HealthDial::new(),
            temperature: TemperatureDial::new(),
            render: RenderState::new(),
            log: EventLog::new(),
        }
    }

    /// Restore persisted values and show `now`.
    ///
    /// Read errors are logged and treated as a missing key.
    pub fn load<S, H>(
        &mut self,
        storage: &S,
        health: &mut H,
        now: LocalTime,
    ) where
        S: Storage + ?Sized,
        H: HealthSource + ?Sized,
    {
        let steps = self.read(storage, StorageKey::Steps);
        self.health.restore(steps, health, &mut self.log);

        let celsius = self.read(storage, StorageKey::Temperature);
        self.temperature.restore(celsius, &mut self.log);

        self.time = now.clock();
        self.render.mark_all();
    }

    fn read<S>(
        &mut self,
        storage: &S,
        key: StorageKey,
    ) -> Option<i32>
    where
        S: Storage + ?Sized,
    {
        storage.read_int(key).unwrap_or_else(|e| {
            self.log.warn(format_args!("Read {:?} failed: {e}", key));
            None
        })
    }

    /// Wall-clock minute changed.
    pub fn on_minute_tick<H>(
        &mut self,
        now: LocalTime,
        health: &mut H,
    ) where
        H: HealthSource + ?Sized,
    {
        self.time = now.clock();
        self.render.mark_clock();
        if self.health.on_minute(now.minute(), health, &mut self.log) {
            self.render.mark_steps();
        }
    }

    /// Decode and apply a phone message.
    ///
    /// Returns the decoded values so the host can act on the ones the face
    /// does not use, such as `local_time`. Malformed messages are logged and
    /// leave the face unchanged.
    pub fn on_message(
        &mut self,
        payload: &[u8],
        now: LocalTime,
    ) -> Option<WeatherUpdate> {
        match decode_weather(payload) {
            Ok(update) => {
                self.apply(&update, now);
                Some(update)
            },
            Err(e) => {
                self.log.warn(format_args!("Dropped message: {e}"));
                None
            },
        }
    }

    /// Apply already-decoded values.
    pub fn apply(
        &mut self,
        update: &WeatherUpdate,
        now: LocalTime,
    ) {
        let now = update.local_time.unwrap_or(now);
        let theme = update.theme_at(now).unwrap_or(self.temperature.theme());
        let theme_changed = theme != self.temperature.theme();

        match update.temperature {
            Some(celsius) => {
                self.temperature.update(celsius, theme, &mut self.log);
                self.render.mark_temperature();
            },
            None => {
                self.temperature.set_theme(theme);
            },
        }

        if theme_changed {
            self.log.debug(format_args!("Theme: {:?}", theme));
            self.render.mark_all();
        }
    }

    /// Persist steps and temperature.
    pub fn unload<S>(
        &mut self,
        storage: &mut S,
    ) -> Result<(), StorageError>
    where
        S: Storage + ?Sized,
    {
        storage.write_int(StorageKey::Steps, self.health.persisted())?;
        storage.write_int(StorageKey::Temperature, self.temperature.celsius())
    }

    /// Draw the whole face and end the frame.
    pub fn render<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let theme = self.temperature.theme();

        display.clear(BLACK).ok();
        draw_face(display, &self.layout);
        draw_step_dial(display, self.layout.step_dial, self.health.progress_percent(), theme);
        draw_temperature_dial(display, self.layout.temperature_dial, self.temperature.celsius(), theme);
        draw_hands(display, &self.layout, self.time);
        draw_center_cap(display, &self.layout);

        self.render.end_frame();
    }

    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.render.needs_redraw() }

    /// Pending log entries, to be drained by the host.
    #[inline]
    pub fn log_mut(&mut self) -> &mut EventLog { &mut self.log }

    #[inline]
    pub const fn time(&self) -> ClockTime { self.time }

    #[inline]
    pub const fn steps(&self) -> u32 { self.health.steps() }

    #[inline]
    pub const fn temperature(&self) -> i32 { self.temperature.celsius() }

    #[inline]
    pub const fn theme(&self) -> Theme { self.temperature.theme() }
}

// =============================================================================
// Unit Tests
// =============================================================================
