//! Simulated paired phone.
//!
//! Builds the weather dictionary the phone app would send, wraps it in a
//! serial frame and hands the bytes to the watch side, which runs them
//! through the same frame parser the firmware uses on its UART.

use watchface_common::clock_time::SECS_PER_DAY;
use watchface_common::config::WEATHER_PUSH_MINUTES;
use watchface_common::link::{MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE, encode_frame};
use watchface_common::message::{DictionaryWriter, WeatherUpdate};
use watchface_common::trig::{TRIG_MAX_RATIO, angle_for, cos_lookup};
use watchface_common::{LocalTime, Theme};

/// Sunrise reported by the simulated phone.
pub const SUNRISE: LocalTime = LocalTime::from_hms(6, 30, 0);

/// Sunset reported by the simulated phone.
pub const SUNSET: LocalTime = LocalTime::from_hms(19, 0, 0);

/// Daily mean temperature in degrees Celsius.
const MEAN_TEMPERATURE: i32 = 14;

/// Half the daily temperature swing.
const TEMPERATURE_SWING: i32 = 12;

/// Warmest time of day, in seconds.
const WARMEST_AT: u32 = 15 * 3600;

/// One encoded frame.
pub struct Frame {
    buf: [u8; MAX_FRAME_SIZE],
    len: usize,
}

impl Frame {
    pub fn bytes(&self) -> &[u8] { &self.buf[..self.len] }
}

/// Outdoor temperature following a daily curve, warmest mid-afternoon.
pub fn temperature_at(now: LocalTime) -> i32 {
    let since_peak = (now.seconds_of_day() + SECS_PER_DAY - WARMEST_AT) % SECS_PER_DAY;
    let angle = angle_for(since_peak as i32, SECS_PER_DAY as i32);
    MEAN_TEMPERATURE + TEMPERATURE_SWING * cos_lookup(angle) / TRIG_MAX_RATIO
}

/// Whether the phone pushes weather on this minute tick.
#[inline]
pub const fn is_push_minute(now: LocalTime) -> bool { now.minute() % WEATHER_PUSH_MINUTES == 0 }

/// Regular weather push.
pub fn weather(now: LocalTime) -> WeatherUpdate {
    WeatherUpdate {
        temperature: Some(temperature_at(now)),
        sunrise: Some(SUNRISE),
        sunset: Some(SUNSET),
        local_time: Some(now),
    }
}

/// Sun times chosen so the face switches away from `current`.
pub fn flipped_theme(
    now: LocalTime,
    current: Theme,
) -> WeatherUpdate {
    let t = now.seconds_of_day();
    let (sunrise, sunset) = match current {
        // Already past sunset.
        Theme::Day => (0, t),
        // Between sunrise and sunset.
        Theme::Night => (t, SECS_PER_DAY - 1),
    };
    WeatherUpdate {
        temperature: None,
        sunrise: Some(LocalTime(sunrise)),
        sunset: Some(LocalTime(sunset)),
        local_time: Some(now),
    }
}

/// Encode `update` as a dictionary inside a serial frame.
pub fn encode(update: &WeatherUpdate) -> anyhow::Result<Frame> {
    let mut payload = [0u8; MAX_PAYLOAD_SIZE];
    let mut writer = DictionaryWriter::new(&mut payload).map_err(anyhow::Error::msg)?;
    writer.weather(update).map_err(anyhow::Error::msg)?;
    let dictionary = writer.finish();

    let mut buf = [0u8; MAX_FRAME_SIZE];
    let len = encode_frame(dictionary, &mut buf).map_err(anyhow::Error::msg)?;
    Ok(Frame { buf, len })
}

#[cfg(test)]
mod tests {
    use watchface_common::link::FrameParser;
    use watchface_common::message::{decode_weather, theme_for};

    use super::*;

    #[test]
    fn test_temperature_curve() {
        assert_eq!(temperature_at(LocalTime::from_hms(15, 0, 0)), 26);
        assert_eq!(temperature_at(LocalTime::from_hms(3, 0, 0)), 2);
        let morning = temperature_at(LocalTime::from_hms(9, 0, 0));
        assert!(morning > 2 && morning < 26);
    }

    #[test]
    fn test_push_minutes() {
        assert!(is_push_minute(LocalTime::from_hms(8, 15, 0)));
        assert!(!is_push_minute(LocalTime::from_hms(8, 16, 0)));
    }

    #[test]
    fn test_frame_parses_back() {
        let now = LocalTime::from_hms(10, 5, 0);
        let frame = encode(&weather(now)).unwrap();

        let mut parser = FrameParser::new();
        let mut payload = None;
        for &b in frame.bytes() {
            if let Some(p) = parser.feed(b).unwrap() {
                payload = Some(p);
            }
        }
        let update = decode_weather(&payload.unwrap()).unwrap();
        assert_eq!(update, weather(now));
    }

    #[test]
    fn test_flipped_theme() {
        let now = LocalTime::from_hms(13, 0, 0);
        let to_night = flipped_theme(now, Theme::Day);
        assert_eq!(theme_for(now, to_night.sunrise.unwrap(), to_night.sunset.unwrap()), Theme::Night);

        let late = LocalTime::from_hms(23, 30, 0);
        let to_day = flipped_theme(late, Theme::Night);
        assert_eq!(theme_for(late, to_day.sunrise.unwrap(), to_day.sunset.unwrap()), Theme::Day);
    }
}
