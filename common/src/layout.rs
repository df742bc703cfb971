//! Face layout derived from display bounds.
//!
//! Everything is computed once from the display size, so the same code lays
//! out a 180x180 watch display and the 320x240 panel on the Pico 2. The
//! proportions come from [`crate::config`] and are expressed against the
//! face radius.

use embedded_graphics::prelude::{Point, Size};

use crate::config::{
    HAND_MARGIN,
    STEP_DIAL_HOUR,
    STEP_DIAL_RADIUS,
    SUB_DIAL_OFFSET,
    TEMPERATURE_DIAL_HOUR,
    TEMPERATURE_DIAL_RADIUS,
};
use crate::trig::{angle_for, polar_point, scale};

/// Center and radius of one circular element.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
}

/// Positions of the clock face and its two sub-dials.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FaceLayout {
    pub face: Circle,
    /// Hand margin in pixels for this face radius.
    pub hand_margin: i32,
    pub step_dial: Circle,
    pub temperature_dial: Circle,
}

impl FaceLayout {
    /// Lay out a face filling the largest centered circle of `size`.
    pub fn for_bounds(size: Size) -> Self {
        let center = Point::new((size.width / 2) as i32, (size.height / 2) as i32);
        let radius = (size.width.min(size.height) / 2) as i32;
        let offset = scale(radius, SUB_DIAL_OFFSET);

        Self {
            face: Circle { center, radius },
            hand_margin: scale(radius, HAND_MARGIN),
            step_dial: Circle {
                center: polar_point(center, offset, angle_for(STEP_DIAL_HOUR, 12)),
                radius: scale(radius, STEP_DIAL_RADIUS),
            },
            temperature_dial: Circle {
                center: polar_point(center, offset, angle_for(TEMPERATURE_DIAL_HOUR, 12)),
                radius: scale(radius, TEMPERATURE_DIAL_RADIUS),
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_face() {
        let layout = FaceLayout::for_bounds(Size::new(180, 180));
        assert_eq!(layout.face.center, Point::new(90, 90));
        assert_eq!(layout.face.radius, 90);
        assert_eq!(layout.hand_margin, 20);
    }

    #[test]
    fn test_step_dial_below_center() {
        let layout = FaceLayout::for_bounds(Size::new(180, 180));
        assert_eq!(layout.step_dial.center, Point::new(90, 135));
        assert_eq!(layout.step_dial.radius, 25);
    }

    #[test]
    fn test_temperature_dial_left_of_center() {
        let layout = FaceLayout::for_bounds(Size::new(180, 180));
        assert_eq!(layout.temperature_dial.center, Point::new(45, 90));
        assert_eq!(layout.temperature_dial.radius, 22);
    }

    #[test]
    fn test_landscape_panel_uses_short_edge() {
        let layout = FaceLayout::for_bounds(Size::new(320, 240));
        assert_eq!(layout.face.center, Point::new(160, 120));
        assert_eq!(layout.face.radius, 120);
        assert_eq!(layout.step_dial.center, Point::new(160, 180));
    }
}
