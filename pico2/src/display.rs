//! Display configuration for Pimoroni PIM715 Display Pack 2.8" (ST7789).
//!
//! Pin mapping for PIM715:
//! - DC: GPIO16
//! - CS: GPIO17
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20
//! - Reset: Tied to RUN pin (resets with Pico)

use embassy_rp::spi::Config as SpiConfig;
use embedded_graphics::prelude::{Point, Size};

use crate::st7789::{HEIGHT, WIDTH};

/// The face is the largest square that fits, centered horizontally.
pub const FACE_SIZE: Size = Size::new(HEIGHT as u32, HEIGHT as u32);

/// Top-left corner of the face on the panel.
pub const FACE_ORIGIN: Point = Point::new(((WIDTH - HEIGHT) / 2) as i32, 0);

/// SPI configuration for the ST7789 display.
/// The ST7789 supports up to 62.5MHz SPI clock.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 62_500_000;
    config
}
