//! Async ST7789 display driver for embassy-rp.
//!
//! The panel is driven from one static RGB565 framebuffer (153,600 bytes for
//! 320x240) which is pushed to the display with a single async DMA transfer.
//!
//! The driver is split into two components:
//! - [`St7789Renderer`]: Implements `DrawTarget`, writes to the framebuffer
//! - [`St7789Flusher`]: Owns SPI peripheral, handles async DMA transfers
//!
//! The watchface only redraws once a minute or when a phone message arrives,
//! so frames are rendered and flushed back to back from the main task.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Spi};
use embassy_time::Timer;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use static_cell::ConstStaticCell;

/// Display dimensions (landscape mode after 90° rotation).
pub const WIDTH: usize = 320;
pub const HEIGHT: usize = 240;
const BUFFER_SIZE: usize = WIDTH * HEIGHT * 2;

pub type Framebuffer = [u8; BUFFER_SIZE];

/// The framebuffer, handed out once via [`ConstStaticCell::take`].
pub static FRAMEBUFFER: ConstStaticCell<Framebuffer> = ConstStaticCell::new([0u8; BUFFER_SIZE]);

// ST7789 Commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const INVON: u8 = 0x21;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

// MADCTL flags
const MADCTL_MX: u8 = 0x40; // Column address order
const MADCTL_MV: u8 = 0x20; // Row/column exchange

#[inline]
fn pixel_bytes(color: Rgb565) -> [u8; 2] {
    let raw: RawU16 = color.into();
    raw.into_inner().to_be_bytes()
}

/// ST7789 display flusher - owns SPI and handles async DMA transfers.
pub struct St7789Flusher<'d> {
    spi: Spi<'d, SPI0, Async>,
    dc: Output<'d>,
    cs: Output<'d>,
}

impl<'d> St7789Flusher<'d> {
    pub fn new(
        spi: Spi<'d, SPI0, Async>,
        dc: Output<'d>,
        cs: Output<'d>,
    ) -> Self {
        Self { spi, dc, cs }
    }

    /// Initialize the display hardware and set the full-screen window.
    pub async fn init(&mut self) {
        self.write_command(SWRESET).await;
        Timer::after_millis(150).await;

        self.write_command(SLPOUT).await;
        Timer::after_millis(10).await;

        // RGB565 (16-bit)
        self.write_command(COLMOD).await;
        self.write_data(&[0x55]).await;

        // Landscape: MV=1 (row/col exchange), MX=1 (mirror X)
        self.write_command(MADCTL).await;
        self.write_data(&[MADCTL_MV | MADCTL_MX]).await;

        // Inversion on (required for PIM715)
        self.write_command(INVON).await;
        Timer::after_millis(10).await;

        self.write_command(NORON).await;
        Timer::after_millis(10).await;

        self.write_command(DISPON).await;
        Timer::after_millis(10).await;

        self.set_window(0, 0, WIDTH as u16, HEIGHT as u16).await;
    }

    async fn write_command(
        &mut self,
        cmd: u8,
    ) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[cmd]).await.ok();
        self.cs.set_high();
    }

    async fn write_data(
        &mut self,
        data: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_high();
        self.spi.write(data).await.ok();
        self.cs.set_high();
    }

    async fn set_window(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        let [x0h, x0l] = x.to_be_bytes();
        let [x1h, x1l] = (x + w - 1).to_be_bytes();
        let [y0h, y0l] = y.to_be_bytes();
        let [y1h, y1l] = (y + h - 1).to_be_bytes();

        self.write_command(CASET).await;
        self.write_data(&[x0h, x0l, x1h, x1l]).await;

        self.write_command(RASET).await;
        self.write_data(&[y0h, y0l, y1h, y1l]).await;
    }

    /// Send a whole frame. The window was set to full screen by `init()`.
    pub async fn flush(
        &mut self,
        framebuffer: &Framebuffer,
    ) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.blocking_write(&[RAMWR]).ok();
        self.dc.set_high();
        self.spi.write(framebuffer).await.ok();
        self.cs.set_high();
    }
}

/// ST7789 renderer - implements DrawTarget over the framebuffer.
pub struct St7789Renderer<'a> {
    framebuffer: &'a mut Framebuffer,
}

impl<'a> St7789Renderer<'a> {
    pub fn new(framebuffer: &'a mut Framebuffer) -> Self { Self { framebuffer } }

    #[inline]
    fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: Rgb565,
    ) {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            let idx = (y as usize * WIDTH + x as usize) * 2;
            self.framebuffer[idx..idx + 2].copy_from_slice(&pixel_bytes(color));
        }
    }
}

impl OriginDimensions for St7789Renderer<'_> {
    fn size(&self) -> Size { Size::new(WIDTH as u32, HEIGHT as u32) }
}

impl DrawTarget for St7789Renderer<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size == Size::zero() {
            return Ok(());
        }

        let bytes = pixel_bytes(color);
        let x = area.top_left.x as usize;
        let width = area.size.width as usize;
        for y in area.rows() {
            let start = (y as usize * WIDTH + x) * 2;
            for pixel in self.framebuffer[start..start + width * 2].chunks_exact_mut(2) {
                pixel.copy_from_slice(&bytes);
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let bytes = pixel_bytes(color);
        for pixel in self.framebuffer.chunks_exact_mut(2) {
            pixel.copy_from_slice(&bytes);
        }
        Ok(())
    }
}
