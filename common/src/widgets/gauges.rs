//! The two sub-dials on the face: step progress and outdoor temperature.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::dial::{DialStyle, Theme, draw_dial};
use crate::colors::{BRIGHT_GREEN, CHROME_YELLOW, VIVID_CERULEAN};
use crate::config::{STEP_DIAL_MAX, TEMPERATURE_DIAL_MAX, TEMPERATURE_WARM};
use crate::layout::Circle;

/// Step dial at `percent` of the daily goal.
pub fn draw_step_dial<D>(
    display: &mut D,
    dial: Circle,
    percent: i32,
    theme: Theme,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = DialStyle {
        theme,
        hand: BRIGHT_GREEN,
    };
    draw_dial(display, dial.center, dial.radius, STEP_DIAL_MAX, percent, style);
}

/// Hand color for a temperature in degrees Celsius.
#[inline]
pub const fn temperature_hand_color(celsius: i32) -> Rgb565 {
    if celsius < TEMPERATURE_WARM {
        VIVID_CERULEAN
    } else {
        CHROME_YELLOW
    }
}

/// Temperature dial, 0-40 degrees per turn.
pub fn draw_temperature_dial<D>(
    display: &mut D,
    dial: Circle,
    celsius: i32,
    theme: Theme,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = DialStyle {
        theme,
        hand: temperature_hand_color(celsius),
    };
    draw_dial(display, dial.center, dial.radius, TEMPERATURE_DIAL_MAX, celsius, style);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::ColorCounter;

    const DIAL: Circle = Circle {
        center: Point::new(30, 30),
        radius: 25,
    };

    #[test]
    fn test_temperature_color_threshold() {
        assert_eq!(temperature_hand_color(-5), VIVID_CERULEAN);
        assert_eq!(temperature_hand_color(19), VIVID_CERULEAN);
        assert_eq!(temperature_hand_color(20), CHROME_YELLOW);
        assert_eq!(temperature_hand_color(45), CHROME_YELLOW);
    }

    #[test]
    fn test_step_dial_hand_is_green() {
        let mut display = ColorCounter::new(Size::new(60, 60));
        draw_step_dial(&mut display, DIAL, 50, Theme::Day);
        // half the goal points straight down
        assert_eq!(display.pixel(Point::new(30, 45)), Some(BRIGHT_GREEN));
    }

    #[test]
    fn test_cold_and_warm_temperature_hands() {
        let mut cold = ColorCounter::new(Size::new(60, 60));
        draw_temperature_dial(&mut cold, DIAL, 10, Theme::Day);
        assert!(cold.count(VIVID_CERULEAN) > 0);
        assert_eq!(cold.count(CHROME_YELLOW), 0);

        let mut warm = ColorCounter::new(Size::new(60, 60));
        draw_temperature_dial(&mut warm, DIAL, 30, Theme::Night);
        assert!(warm.count(CHROME_YELLOW) > 0);
        assert_eq!(warm.count(VIVID_CERULEAN), 0);
    }
}
