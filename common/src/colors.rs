//! Color constants for the watchface.
//!
//! The face uses a small fixed palette. Where a color has a direct
//! equivalent in the `RgbColor` trait constants, that constant is used;
//! the grays and accent colors are built from their 8-bit components.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Face background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Hour ticks, hand tips and the main center cap.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Bright green (0, 63, 0). Step dial hand.
pub const BRIGHT_GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Custom Colors
// =============================================================================

/// Light gray (0xAA, 0xAA, 0xAA). Major dial ticks and inner hand segments.
/// RGB565: (21, 42, 21).
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// Dark gray (0x55, 0x55, 0x55). Minor dial ticks.
/// RGB565: (10, 21, 10).
pub const DARK_GRAY: Rgb565 = Rgb565::new(10, 21, 10);

/// Vivid cerulean (0x00, 0xAA, 0xFF). Temperature hand below the warm threshold.
/// RGB565: (0, 42, 31).
pub const VIVID_CERULEAN: Rgb565 = Rgb565::new(0, 42, 31);

/// Chrome yellow (0xFF, 0xAA, 0x00). Temperature hand at or above the warm threshold.
/// RGB565: (31, 42, 0).
pub const CHROME_YELLOW: Rgb565 = Rgb565::new(31, 42, 0);
