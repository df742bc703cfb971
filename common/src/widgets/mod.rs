//! Drawing components for the watchface.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod clock;
mod dial;
mod gauges;

#[cfg(test)]
pub(crate) mod test_support;

pub use clock::{HandGeometry, draw_center_cap, draw_face, draw_hands, hand_angles, hand_geometry};
pub use dial::{DialStyle, Theme, Tick, draw_dial, hand_endpoint, ticks};
pub use gauges::{draw_step_dial, draw_temperature_dial, temperature_hand_color};
