//! Draw target that counts drawn pixels per color.

use std::collections::HashMap;
use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

pub struct ColorCounter {
    size: Size,
    pixels: HashMap<Point, Rgb565>,
    draws: HashMap<Rgb565, usize>,
}

impl ColorCounter {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: HashMap::new(),
            draws: HashMap::new(),
        }
    }

    /// Number of pixel writes in `color`, including overdraw.
    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.draws.get(&color).copied().unwrap_or(0)
    }

    /// Number of pixel writes in any color.
    pub fn total(&self) -> usize { self.draws.values().sum() }

    /// Final color at `point`, if anything was drawn there.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        self.pixels.get(&point).copied()
    }
}

impl OriginDimensions for ColorCounter {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for ColorCounter {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 || point.x >= self.size.width as i32 || point.y >= self.size.height as i32 {
                continue;
            }
            self.pixels.insert(point, color);
            *self.draws.entry(color).or_insert(0) += 1;
        }
        Ok(())
    }
}
