//! Fixed-point trigonometry for dial geometry.
//!
//! Angles are integers where [`TRIG_MAX_ANGLE`] is one full turn, and sine
//! and cosine return integers where [`TRIG_MAX_RATIO`] is 1.0. Values come
//! from a quarter-wave table with linear interpolation between entries, so
//! no floating-point math is needed on the target.
//!
//! Screen convention: angle 0 points straight up (12 o'clock) and angles
//! increase clockwise. With screen Y growing downward that gives
//! `x = sin(a) * r`, `y = -cos(a) * r`.

use embedded_graphics::prelude::Point;

/// One full turn in angle units.
pub const TRIG_MAX_ANGLE: i32 = 0x1_0000;

/// Fixed-point 1.0 for sine and cosine results.
pub const TRIG_MAX_RATIO: i32 = 0xFFFF;

/// Quarter turn in angle units.
const QUARTER: i32 = TRIG_MAX_ANGLE / 4;

/// Number of table intervals per quarter turn.
const TABLE_STEPS: i32 = 64;

/// Angle units covered by one table interval.
const STEP_ANGLE: i32 = QUARTER / TABLE_STEPS;

/// `round(sin(k * 90deg / 64) * 0xFFFF)` for `k = 0..=64`.
const SIN_TABLE: [i32; TABLE_STEPS as usize + 1] = [
    0, 1608, 3216, 4821, 6424, 8022, 9616, 11204, //
    12785, 14359, 15924, 17479, 19024, 20557, 22078, 23586, //
    25079, 26557, 28020, 29465, 30893, 32302, 33692, 35061, //
    36409, 37736, 39039, 40319, 41575, 42806, 44011, 45189, //
    46340, 47464, 48558, 49624, 50659, 51664, 52638, 53580, //
    54490, 55367, 56211, 57021, 57797, 58537, 59243, 59913, //
    60546, 61144, 61704, 62227, 62713, 63161, 63571, 63943, //
    64276, 64570, 64826, 65042, 65219, 65357, 65456, 65515, //
    65535,
];

// The last table entry must be exactly 1.0.
const _: () = assert!(SIN_TABLE[TABLE_STEPS as usize] == TRIG_MAX_RATIO);
const _: () = assert!(QUARTER % TABLE_STEPS == 0);

/// Sine over the first quarter, `angle` in `0..=QUARTER`.
fn quarter_sin(angle: i32) -> i32 {
    let idx = (angle / STEP_ANGLE) as usize;
    let frac = angle % STEP_ANGLE;
    if frac == 0 {
        return SIN_TABLE[idx];
    }
    let lo = SIN_TABLE[idx];
    let hi = SIN_TABLE[idx + 1];
    lo + (hi - lo) * frac / STEP_ANGLE
}

/// Fixed-point sine. Any angle is accepted; it is reduced modulo a full turn.
pub fn sin_lookup(angle: i32) -> i32 {
    let a = angle.rem_euclid(TRIG_MAX_ANGLE);
    match a / QUARTER {
        0 => quarter_sin(a),
        1 => quarter_sin(2 * QUARTER - a),
        2 => -quarter_sin(a - 2 * QUARTER),
        _ => -quarter_sin(TRIG_MAX_ANGLE - a),
    }
}

/// Fixed-point cosine, `sin(angle + quarter turn)`.
#[inline]
pub fn cos_lookup(angle: i32) -> i32 { sin_lookup(angle.wrapping_add(QUARTER)) }

/// Angle of `value` on a scale of `max` units per turn.
///
/// Truncates toward zero. A zero scale has no meaningful angle and yields 0.
pub fn angle_for(
    value: i32,
    max: i32,
) -> i32 {
    if max == 0 {
        return 0;
    }
    (i64::from(TRIG_MAX_ANGLE) * i64::from(value) / i64::from(max)) as i32
}

/// Integer `length * num / den`, truncating toward zero.
#[inline]
pub const fn scale(
    length: i32,
    ratio: (i32, i32),
) -> i32 {
    length * ratio.0 / ratio.1
}

/// Point at `radius` from `center` in the direction of `angle`.
pub fn polar_point(
    center: Point,
    radius: i32,
    angle: i32,
) -> Point {
    let dx = i64::from(sin_lookup(angle)) * i64::from(radius) / i64::from(TRIG_MAX_RATIO);
    let dy = -i64::from(cos_lookup(angle)) * i64::from(radius) / i64::from(TRIG_MAX_RATIO);
    Point::new(dx as i32 + center.x, dy as i32 + center.y)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_values() {
        assert_eq!(sin_lookup(0), 0);
        assert_eq!(sin_lookup(QUARTER), TRIG_MAX_RATIO);
        assert_eq!(sin_lookup(2 * QUARTER), 0);
        assert_eq!(sin_lookup(3 * QUARTER), -TRIG_MAX_RATIO);
        assert_eq!(cos_lookup(0), TRIG_MAX_RATIO);
        assert_eq!(cos_lookup(2 * QUARTER), -TRIG_MAX_RATIO);
    }

    #[test]
    fn test_negative_angles_wrap() {
        assert_eq!(sin_lookup(-QUARTER), -TRIG_MAX_RATIO);
        assert_eq!(sin_lookup(-1000), -sin_lookup(1000));
        assert_eq!(sin_lookup(TRIG_MAX_ANGLE + 1234), sin_lookup(1234));
    }

    #[test]
    fn test_cos_is_shifted_sin() {
        for a in (0..TRIG_MAX_ANGLE).step_by(997) {
            assert_eq!(cos_lookup(a), sin_lookup(a + QUARTER));
        }
    }

    #[test]
    fn test_interpolation_close_to_float() {
        for a in (0..TRIG_MAX_ANGLE).step_by(313) {
            let expected = (f64::from(a) / f64::from(TRIG_MAX_ANGLE) * core::f64::consts::TAU).sin()
                * f64::from(TRIG_MAX_RATIO);
            let got = f64::from(sin_lookup(a));
            assert!((got - expected).abs() < 40.0, "angle {a}: got {got}, expected {expected}");
        }
    }

    #[test]
    fn test_angle_for() {
        assert_eq!(angle_for(0, 60), 0);
        assert_eq!(angle_for(15, 60), QUARTER);
        assert_eq!(angle_for(6, 12), 2 * QUARTER);
        assert_eq!(angle_for(60, 60), TRIG_MAX_ANGLE);
        assert_eq!(angle_for(-10, 40), -QUARTER);
        assert_eq!(angle_for(5, 0), 0);
    }

    #[test]
    fn test_scale_truncates() {
        assert_eq!(scale(25, (95, 100)), 23);
        assert_eq!(scale(25, (90, 100)), 22);
        assert_eq!(scale(90, (92, 100)), 82);
    }

    #[test]
    fn test_polar_point_directions() {
        let c = Point::new(90, 90);
        assert_eq!(polar_point(c, 50, 0), Point::new(90, 40));
        assert_eq!(polar_point(c, 50, QUARTER), Point::new(140, 90));
        assert_eq!(polar_point(c, 50, 2 * QUARTER), Point::new(90, 140));
        assert_eq!(polar_point(c, 50, 3 * QUARTER), Point::new(40, 90));
    }

    #[test]
    fn test_polar_point_zero_radius() {
        let c = Point::new(10, 20);
        assert_eq!(polar_point(c, 0, 12345), c);
    }
}
