//! Centralized watchface configuration.
//!
//! All values are compile-time constants. Groups whose values depend on each
//! other carry `const` assertions so an inconsistent edit fails to compile.
//!
//! Fractional lengths (0.95 of a radius, 2.2 hand margins, ...) are written
//! as integer ratios and applied with [`crate::trig::scale`].

// =============================================================================
// Display Configuration
// =============================================================================

/// Reference face radius the proportions below were designed against.
/// A 180x180 round display gives a 90 px face.
pub const REFERENCE_RADIUS: i32 = 90;

/// Default square display edge used by the simulator.
pub const DEFAULT_DISPLAY_SIZE: u32 = 180;

// =============================================================================
// Clock Face
// =============================================================================

/// Number of hour ticks around the face.
pub const HOUR_TICKS: i32 = 12;

/// Hour tick inner end, as a fraction of the face radius (92 / 100).
pub const HOUR_TICK_INNER: (i32, i32) = (92, 100);

/// Hour tick stroke width.
pub const HOUR_TICK_WIDTH: u32 = 5;

/// Hand margin relative to the face radius (20 px on the reference face).
pub const HAND_MARGIN: (i32, i32) = (20, REFERENCE_RADIUS);

/// Minute hand tip distance from the face edge, in tenths of a hand margin.
pub const MINUTE_HAND_TIP: i32 = 10;

/// Minute hand inner segment end, in tenths of a hand margin from the edge.
pub const MINUTE_HAND_SPLIT: i32 = 15;

/// Hour hand tip distance from the face edge, in tenths of a hand margin.
pub const HOUR_HAND_TIP: i32 = 22;

/// Hour hand inner segment end, in tenths of a hand margin from the edge.
pub const HOUR_HAND_SPLIT: i32 = 27;

// The inner segment must end before the tip, so each hand keeps a white tip.
const _: () = assert!(MINUTE_HAND_TIP < MINUTE_HAND_SPLIT);
const _: () = assert!(HOUR_HAND_TIP < HOUR_HAND_SPLIT);
// Hour hand is shorter than the minute hand.
const _: () = assert!(MINUTE_HAND_TIP < HOUR_HAND_TIP);

/// Clock hand stroke width.
pub const CLOCK_HAND_WIDTH: u32 = 5;

/// Radius of the main center cap.
pub const CLOCK_CAP_RADIUS: u32 = 5;

// =============================================================================
// Radial Dial
// =============================================================================

/// Angular step between dial ticks, in scale units.
pub const DIAL_TICK_STEP: usize = 2;

/// Ticks at multiples of this value are drawn as major ticks.
pub const DIAL_DECADE: i32 = 10;

/// Major tick inner end, as a fraction of the dial radius.
pub const DIAL_MAJOR_INNER: (i32, i32) = (90, 100);

/// Minor tick inner end, as a fraction of the dial radius.
pub const DIAL_MINOR_INNER: (i32, i32) = (95, 100);

/// Dial hand length, as a fraction of the dial radius.
pub const DIAL_HAND_LENGTH: (i32, i32) = (70, 100);

// Major ticks reach further inward than minor ticks, and the hand stops short of both.
const _: () = assert!(DIAL_MAJOR_INNER.0 < DIAL_MINOR_INNER.0);
const _: () = assert!(DIAL_HAND_LENGTH.0 < DIAL_MAJOR_INNER.0);

/// Major tick stroke width.
pub const DIAL_MAJOR_WIDTH: u32 = 3;

/// Minor tick stroke width.
pub const DIAL_MINOR_WIDTH: u32 = 1;

/// Dial hand stroke width.
pub const DIAL_HAND_WIDTH: u32 = 3;

/// Radius of a dial's center cap.
pub const DIAL_CAP_RADIUS: u32 = 3;

/// Distance of sub-dial centers from the face center, as a fraction of the face radius.
pub const SUB_DIAL_OFFSET: (i32, i32) = (50, 100);

// =============================================================================
// Step Dial
// =============================================================================

/// Daily step goal. Reaching it puts the hand at 12 o'clock after one full turn.
pub const STEP_GOAL: u32 = 10_000;

/// Step dial scale (percent of goal).
pub const STEP_DIAL_MAX: i32 = 100;

/// Step dial position on the face, in hours (6 o'clock).
pub const STEP_DIAL_HOUR: i32 = 6;

/// Step dial radius relative to the face radius (25 px on the reference face).
pub const STEP_DIAL_RADIUS: (i32, i32) = (25, REFERENCE_RADIUS);

/// Steps are re-read from the health source on minutes divisible by this.
pub const STEP_REFRESH_MINUTES: u8 = 10;

// =============================================================================
// Temperature Dial
// =============================================================================

/// Temperature dial scale in degrees Celsius.
pub const TEMPERATURE_DIAL_MAX: i32 = 40;

/// Temperature dial position on the face, in hours (9 o'clock).
pub const TEMPERATURE_DIAL_HOUR: i32 = 9;

/// Temperature dial radius relative to the face radius.
pub const TEMPERATURE_DIAL_RADIUS: (i32, i32) = (1, 4);

/// Temperatures at or above this use the warm hand color.
pub const TEMPERATURE_WARM: i32 = 20;

const _: () = assert!(TEMPERATURE_WARM > 0 && TEMPERATURE_WARM < TEMPERATURE_DIAL_MAX);

// The two sub-dials sit at different hours so they never overlap.
const _: () = assert!(STEP_DIAL_HOUR != TEMPERATURE_DIAL_HOUR);

// =============================================================================
// Phone Messages
// =============================================================================

/// The simulated phone sends weather on minutes divisible by this.
pub const WEATHER_PUSH_MINUTES: u8 = 5;
