//! Analog Watchface Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Displays the watchface on the Pimoroni PIM715 Display Pack 2.8".
//!
//! # Architecture
//!
//! The main task owns the watchface and waits for whichever comes first:
//! - the next wall-clock minute boundary (embassy timer)
//! - an [`Event`] from the phone RX or button task
//!
//! After each event it drains the watchface log to defmt, redraws if needed
//! and writes changed values to flash.
//!
//! # Phone Link
//!
//! Framed dictionaries arrive on UART0 (RX=GPIO1, 115200 8N1).
//!
//! # Button Controls
//!
//! - **A**: Add demo steps (shown at the next step refresh)
//! - **B**: Toggle step data access

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
mod display;
mod flash;
mod st7789;
mod tasks;

use defmt::{debug, error, info, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::Spi;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::{Instant, Timer};
use embedded_graphics::prelude::*;
use static_cell::StaticCell;
use watchface_common::Watchface;
use watchface_common::colors::BLACK;
use watchface_common::log::{EventLog, LogLevel};
use watchface_pico2::pedometer::DemoPedometer;
use watchface_pico2::wall_clock::WallClock;
use {defmt_rtt as _, panic_probe as _};

use crate::display::{FACE_ORIGIN, FACE_SIZE, display_spi_config};
use crate::flash::FlashStore;
use crate::st7789::{FRAMEBUFFER, Framebuffer, St7789Flusher, St7789Renderer};
use crate::tasks::{EVENTS, Event, button_task, phone_rx_task};

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-watchface"),
    embassy_rp::binary_info::rp_program_description!(c"Analog watchface with step and temperature dials on PIM715"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[inline]
fn uptime_secs() -> u64 { Instant::now().as_secs() }

// =============================================================================
// Logging and Rendering
// =============================================================================

/// Forward pending watchface log entries to defmt.
fn drain_log(log: &mut EventLog) {
    let dropped = log.dropped();
    for entry in log.drain() {
        let message = entry.message.as_str();
        match entry.level {
            LogLevel::Debug => debug!("{=str}", message),
            LogLevel::Info => info!("{=str}", message),
            LogLevel::Warn => warn!("{=str}", message),
            LogLevel::Error => error!("{=str}", message),
        }
    }
    if dropped > 0 {
        debug!("{} log entries dropped so far", dropped);
    }
}

/// Render the face centered on the panel and push it out.
async fn present(
    watchface: &mut Watchface,
    framebuffer: &mut Framebuffer,
    flusher: &mut St7789Flusher<'_>,
) {
    {
        let mut renderer = St7789Renderer::new(framebuffer);
        renderer.clear(BLACK).ok();
        watchface.render(&mut renderer.translated(FACE_ORIGIN));
    }
    flusher.flush(framebuffer).await;
}

// =============================================================================
// Main
// =============================================================================

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Watchface starting...");
    let p = embassy_rp::init(Default::default());

    // PIM715 pinout: CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);

    // TX-only SPI with DMA, the display has no MISO
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, display_spi_config());
    let mut flusher = St7789Flusher::new(spi, dc, cs);
    flusher.init().await;
    let framebuffer = FRAMEBUFFER.take();
    info!("Display initialized");

    let mut store = FlashStore::new(p.FLASH, p.DMA_CH1);
    let mut storage = store.load().await;
    info!("Storage loaded");

    // Phone link on UART0 (default config is 115200 8N1)
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let uart = uart.into_buffered(Irqs, TX_BUF.init([0u8; 16]), RX_BUF.init([0u8; 256]));
    let (_tx, rx) = uart.split();
    spawner.spawn(phone_rx_task(rx)).unwrap();

    // PIM715 buttons (active-low with internal pull-up): A=12, B=13
    let btn_a = Input::new(p.PIN_12, Pull::Up);
    let btn_b = Input::new(p.PIN_13, Pull::Up);
    spawner.spawn(button_task(btn_a, btn_b)).unwrap();

    let mut clock = WallClock::new();
    let now = clock.now(uptime_secs());
    let mut pedometer = DemoPedometer::new(now);
    let mut watchface = Watchface::new(FACE_SIZE);

    watchface.load(&storage, &mut pedometer, now);
    drain_log(watchface.log_mut());
    present(&mut watchface, framebuffer, &mut flusher).await;

    info!("Main loop starting");

    loop {
        let now = clock.now(uptime_secs());
        let next_minute = Timer::after_secs(u64::from(now.secs_to_next_minute()));

        match select(EVENTS.receive(), next_minute).await {
            Either::First(Event::Message(payload)) => {
                let uptime = uptime_secs();
                let update = watchface.on_message(&payload, clock.now(uptime));
                if let Some(local) = update.and_then(|u| u.local_time)
                    && clock.sync(local, uptime)
                {
                    let now = clock.now(uptime);
                    info!("Clock set to {=u8}:{=u8}", now.hour(), now.minute());
                    pedometer.set_time(now);
                    watchface.on_minute_tick(now, &mut pedometer);
                }
            },
            Either::First(Event::AddSteps) => {
                pedometer.add_button_steps();
                info!("Demo steps added");
            },
            Either::First(Event::ToggleStepAccess) => {
                let available = pedometer.toggle_available();
                info!("Step data {}", if available { "available" } else { "unavailable" });
            },
            Either::Second(()) => {
                let now = clock.now(uptime_secs());
                pedometer.set_time(now);
                watchface.on_minute_tick(now, &mut pedometer);
            },
        }

        drain_log(watchface.log_mut());

        if watchface.needs_redraw() {
            present(&mut watchface, framebuffer, &mut flusher).await;
        }

        // No unload on hardware: persist as soon as a value changes
        if let Err(e) = watchface.unload(&mut storage) {
            error!("Unload failed: {}", e);
        }
        match store.save(&mut storage).await {
            Ok(0) => {},
            Ok(written) => debug!("Flash: {} values written", written),
            Err(e) => error!("Flash write failed: {}", e),
        }
    }
}
