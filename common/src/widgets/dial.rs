//! Generic radial dial: ticks around a circle plus a single hand.
//!
//! Both sub-dials on the face are drawn by [`draw_dial`]. The geometry is
//! computed by [`ticks`] and [`hand_endpoint`] so it can be checked without
//! a display.
//!
//! # Layout
//!
//! ```text
//!            major (i % 10 == 0)
//!              |
//!        .  '  |  '  .        <- minor ticks every 2 units
//!     '        |        '
//!    |        cap        |
//!     .        \        .
//!        '  .   \   .  '      <- hand at value / max of a turn
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

use crate::colors::{DARK_GRAY, LIGHT_GRAY, WHITE};
use crate::config::{
    DIAL_CAP_RADIUS,
    DIAL_DECADE,
    DIAL_HAND_LENGTH,
    DIAL_HAND_WIDTH,
    DIAL_MAJOR_INNER,
    DIAL_MAJOR_WIDTH,
    DIAL_MINOR_INNER,
    DIAL_MINOR_WIDTH,
    DIAL_TICK_STEP,
};
use crate::trig::{angle_for, polar_point, scale};

/// Day/night color scheme for the dials.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Theme {
    #[default]
    Day,
    /// Dimmed ticks and cap between sunset and sunrise.
    Night,
}

impl Theme {
    /// Color of decade ticks.
    pub const fn major_tick(self) -> Rgb565 {
        match self {
            Self::Day => LIGHT_GRAY,
            Self::Night => DARK_GRAY,
        }
    }

    /// Color of the ticks between decades.
    pub const fn minor_tick(self) -> Rgb565 { DARK_GRAY }

    /// Color of the center cap.
    pub const fn cap(self) -> Rgb565 {
        match self {
            Self::Day => WHITE,
            Self::Night => LIGHT_GRAY,
        }
    }
}

/// Per-dial style: theme plus the hand color chosen by the dial's owner.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DialStyle {
    pub theme: Theme,
    pub hand: Rgb565,
}

/// One tick mark, from the rim inward.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tick {
    pub outer: Point,
    pub inner: Point,
    /// Decade tick (longer and thicker).
    pub major: bool,
}

/// Tick marks of a dial with `max` units per turn.
///
/// Ticks sit at every [`DIAL_TICK_STEP`] units starting at 12 o'clock. A
/// non-positive `max` has no ticks.
pub fn ticks(
    center: Point,
    radius: i32,
    max: i32,
) -> impl Iterator<Item = Tick> {
    let end = max.max(0);
    (0..end).step_by(DIAL_TICK_STEP).map(move |i| {
        let major = i % DIAL_DECADE == 0;
        let inner_radius = if major {
            scale(radius, DIAL_MAJOR_INNER)
        } else {
            scale(radius, DIAL_MINOR_INNER)
        };
        let angle = angle_for(i, max);
        Tick {
            outer: polar_point(center, radius, angle),
            inner: polar_point(center, inner_radius, angle),
            major,
        }
    })
}

/// End of the hand for `value` on a scale of `max`.
///
/// The value is not range-checked: anything past `max` keeps going round,
/// negative values sweep counter-clockwise.
pub fn hand_endpoint(
    center: Point,
    radius: i32,
    max: i32,
    value: i32,
) -> Point {
    polar_point(center, scale(radius, DIAL_HAND_LENGTH), angle_for(value, max))
}

/// Draw a complete dial: ticks, hand, then center cap.
pub fn draw_dial<D>(
    display: &mut D,
    center: Point,
    radius: i32,
    max: i32,
    value: i32,
    style: DialStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if max <= 0 {
        return;
    }

    let major_style = PrimitiveStyle::with_stroke(style.theme.major_tick(), DIAL_MAJOR_WIDTH);
    let minor_style = PrimitiveStyle::with_stroke(style.theme.minor_tick(), DIAL_MINOR_WIDTH);

    for tick in ticks(center, radius, max) {
        Line::new(tick.outer, tick.inner)
            .into_styled(if tick.major { major_style } else { minor_style })
            .draw(display)
            .ok();
    }

    Line::new(center, hand_endpoint(center, radius, max, value))
        .into_styled(PrimitiveStyle::with_stroke(style.hand, DIAL_HAND_WIDTH))
        .draw(display)
        .ok();

    Circle::with_center(center, DIAL_CAP_RADIUS * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(style.theme.cap()))
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::BRIGHT_GREEN;
    use crate::widgets::test_support::ColorCounter;

    const CENTER: Point = Point::new(32, 32);

    #[test]
    fn test_tick_count_and_decades() {
        let all: Vec<Tick> = ticks(CENTER, 25, 100).collect();
        assert_eq!(all.len(), 50);
        assert_eq!(all.iter().filter(|t| t.major).count(), 10);
        assert!(all[0].major);
        assert!(!all[1].major);
        assert!(all[5].major); // i = 10
    }

    #[test]
    fn test_temperature_scale_ticks() {
        let all: Vec<Tick> = ticks(CENTER, 22, 40).collect();
        assert_eq!(all.len(), 20);
        assert_eq!(all.iter().filter(|t| t.major).count(), 4);
    }

    #[test]
    fn test_first_tick_points_up() {
        let first = ticks(CENTER, 25, 100).next().unwrap();
        assert_eq!(first.outer, Point::new(32, 7));
        assert_eq!(first.inner, Point::new(32, 10)); // 25 * 0.9 = 22
    }

    #[test]
    fn test_minor_ticks_shorter() {
        let minor = ticks(CENTER, 25, 100).nth(1).unwrap();
        let outer_len = (minor.outer - CENTER).x.pow(2) + (minor.outer - CENTER).y.pow(2);
        let inner_len = (minor.inner - CENTER).x.pow(2) + (minor.inner - CENTER).y.pow(2);
        assert!(inner_len < outer_len);
        // 25 * 0.95 = 23: minor ticks are 2 px long
        assert!(inner_len >= 22 * 22);
    }

    #[test]
    fn test_no_ticks_for_empty_scale() {
        assert_eq!(ticks(CENTER, 25, 0).count(), 0);
        assert_eq!(ticks(CENTER, 25, -4).count(), 0);
    }

    #[test]
    fn test_hand_endpoint_quarters() {
        // 70% of 20 = 14
        assert_eq!(hand_endpoint(CENTER, 20, 100, 0), Point::new(32, 18));
        assert_eq!(hand_endpoint(CENTER, 20, 100, 25), Point::new(46, 32));
        assert_eq!(hand_endpoint(CENTER, 20, 100, 50), Point::new(32, 46));
    }

    #[test]
    fn test_hand_wraps_past_max() {
        assert_eq!(hand_endpoint(CENTER, 20, 100, 125), hand_endpoint(CENTER, 20, 100, 25));
        assert_eq!(hand_endpoint(CENTER, 20, 40, -10), hand_endpoint(CENTER, 20, 40, 30));
    }

    #[test]
    fn test_draw_dial_uses_style_colors() {
        let mut display = ColorCounter::new(Size::new(64, 64));
        let style = DialStyle {
            theme: Theme::Day,
            hand: BRIGHT_GREEN,
        };
        draw_dial(&mut display, CENTER, 25, 100, 40, style);
        assert!(display.count(LIGHT_GRAY) > 0);
        assert!(display.count(DARK_GRAY) > 0);
        assert!(display.count(BRIGHT_GREEN) > 0);
        assert!(display.count(WHITE) > 0);
    }

    #[test]
    fn test_night_theme_dims_cap() {
        let mut display = ColorCounter::new(Size::new(64, 64));
        let style = DialStyle {
            theme: Theme::Night,
            hand: BRIGHT_GREEN,
        };
        draw_dial(&mut display, CENTER, 25, 100, 40, style);
        assert_eq!(display.count(WHITE), 0);
        assert!(display.count(LIGHT_GRAY) > 0);
    }

    #[test]
    fn test_draw_dial_zero_max_draws_nothing() {
        let mut display = ColorCounter::new(Size::new(64, 64));
        let style = DialStyle {
            theme: Theme::Day,
            hand: BRIGHT_GREEN,
        };
        draw_dial(&mut display, CENTER, 25, 0, 10, style);
        assert_eq!(display.total(), 0);
    }
}
