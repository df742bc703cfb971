//! Analog clock face: background, hour ticks, two-tone hands and center cap.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

use crate::clock_time::ClockTime;
use crate::colors::{BLACK, LIGHT_GRAY, WHITE};
use crate::config::{
    CLOCK_CAP_RADIUS,
    CLOCK_HAND_WIDTH,
    HOUR_HAND_SPLIT,
    HOUR_HAND_TIP,
    HOUR_TICK_INNER,
    HOUR_TICK_WIDTH,
    HOUR_TICKS,
    MINUTE_HAND_SPLIT,
    MINUTE_HAND_TIP,
};
use crate::layout::FaceLayout;
use crate::trig::{angle_for, polar_point, scale};

/// Black face disc plus the 12 white hour ticks.
pub fn draw_face<D>(
    display: &mut D,
    layout: &FaceLayout,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center = layout.face.center;
    let radius = layout.face.radius;

    Circle::with_center(center, (radius * 2 + 1) as u32)
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(display)
        .ok();

    let tick_style = PrimitiveStyle::with_stroke(WHITE, HOUR_TICK_WIDTH);
    let inner = scale(radius, HOUR_TICK_INNER);
    for i in 0..HOUR_TICKS {
        let angle = angle_for(i, HOUR_TICKS);
        Line::new(polar_point(center, radius, angle), polar_point(center, inner, angle))
            .into_styled(tick_style)
            .draw(display)
            .ok();
    }
}

/// Hour and minute hand angles. The hour hand creeps forward through the hour.
pub fn hand_angles(time: ClockTime) -> (i32, i32) {
    let minute = angle_for(i32::from(time.minutes), 60);
    let hour = angle_for(i32::from(time.hours), 12) + minute / 12;
    (hour, minute)
}

/// Endpoints of one two-tone hand.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HandGeometry {
    /// End of the light-gray inner segment.
    pub split: Point,
    /// End of the white tip segment.
    pub tip: Point,
}

/// Hand endpoints as `(hour, minute)`.
pub fn hand_geometry(
    layout: &FaceLayout,
    time: ClockTime,
) -> (HandGeometry, HandGeometry) {
    let (hour_angle, minute_angle) = hand_angles(time);
    let center = layout.face.center;
    let radius = layout.face.radius;
    let margin = layout.hand_margin;
    let at = |tenths: i32, angle: i32| polar_point(center, radius - scale(margin, (tenths, 10)), angle);

    (
        HandGeometry {
            split: at(HOUR_HAND_SPLIT, hour_angle),
            tip: at(HOUR_HAND_TIP, hour_angle),
        },
        HandGeometry {
            split: at(MINUTE_HAND_SPLIT, minute_angle),
            tip: at(MINUTE_HAND_TIP, minute_angle),
        },
    )
}

/// Minute hand then hour hand, each as a gray inner segment with a white tip.
pub fn draw_hands<D>(
    display: &mut D,
    layout: &FaceLayout,
    time: ClockTime,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center = layout.face.center;
    let (hour, minute) = hand_geometry(layout, time);
    let inner_style = PrimitiveStyle::with_stroke(LIGHT_GRAY, CLOCK_HAND_WIDTH);
    let tip_style = PrimitiveStyle::with_stroke(WHITE, CLOCK_HAND_WIDTH);

    for hand in [minute, hour] {
        Line::new(center, hand.split).into_styled(inner_style).draw(display).ok();
        Line::new(hand.split, hand.tip).into_styled(tip_style).draw(display).ok();
    }
}

/// White cap over the hand pivots.
pub fn draw_center_cap<D>(
    display: &mut D,
    layout: &FaceLayout,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(layout.face.center, CLOCK_CAP_RADIUS * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trig::TRIG_MAX_ANGLE;
    use crate::widgets::test_support::ColorCounter;

    fn reference_layout() -> FaceLayout { FaceLayout::for_bounds(Size::new(180, 180)) }

    #[test]
    fn test_hand_angles_on_the_hour() {
        let (hour, minute) = hand_angles(ClockTime { hours: 3, minutes: 0 });
        assert_eq!(hour, TRIG_MAX_ANGLE / 4);
        assert_eq!(minute, 0);
    }

    #[test]
    fn test_hour_hand_advances_with_minutes() {
        let (hour, minute) = hand_angles(ClockTime { hours: 3, minutes: 30 });
        assert_eq!(minute, TRIG_MAX_ANGLE / 2);
        assert_eq!(hour, TRIG_MAX_ANGLE / 4 + TRIG_MAX_ANGLE / 24);
    }

    #[test]
    fn test_noon_and_midnight_point_up() {
        let up = hand_angles(ClockTime { hours: 0, minutes: 0 });
        let noon = hand_angles(ClockTime { hours: 12, minutes: 0 });
        assert_eq!(up.0 % TRIG_MAX_ANGLE, 0);
        assert_eq!(noon.0 % TRIG_MAX_ANGLE, 0);
    }

    #[test]
    fn test_hand_lengths_on_reference_face() {
        let (hour, minute) = hand_geometry(&reference_layout(), ClockTime { hours: 0, minutes: 0 });
        // R = 90, margin = 20: minute tip 70, split 60; hour tip 46, split 36
        assert_eq!(minute.tip, Point::new(90, 20));
        assert_eq!(minute.split, Point::new(90, 30));
        assert_eq!(hour.tip, Point::new(90, 44));
        assert_eq!(hour.split, Point::new(90, 54));
    }

    #[test]
    fn test_face_is_black_with_white_ticks() {
        let layout = reference_layout();
        let mut display = ColorCounter::new(Size::new(180, 180));
        draw_face(&mut display, &layout);
        assert_eq!(display.pixel(Point::new(90, 90)), Some(BLACK));
        // 12 o'clock tick spans y = 0..=7
        assert_eq!(display.pixel(Point::new(90, 3)), Some(WHITE));
    }

    #[test]
    fn test_hands_have_gray_base_and_white_tip() {
        let layout = reference_layout();
        let mut display = ColorCounter::new(Size::new(180, 180));
        draw_hands(&mut display, &layout, ClockTime { hours: 6, minutes: 0 });
        // minute hand straight up
        assert_eq!(display.pixel(Point::new(90, 50)), Some(LIGHT_GRAY));
        assert_eq!(display.pixel(Point::new(90, 24)), Some(WHITE));
        // hour hand straight down
        assert_eq!(display.pixel(Point::new(90, 120)), Some(LIGHT_GRAY));
        assert_eq!(display.pixel(Point::new(90, 131)), Some(WHITE));
    }

    #[test]
    fn test_center_cap_white() {
        let layout = reference_layout();
        let mut display = ColorCounter::new(Size::new(180, 180));
        draw_center_cap(&mut display, &layout);
        assert_eq!(display.pixel(Point::new(90, 90)), Some(WHITE));
        assert_eq!(display.pixel(Point::new(90, 84)), None);
    }
}
