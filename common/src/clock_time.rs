//! Wall-clock time as shown on the face.
//!
//! The watchface never reads a clock itself. Hosts hand it a [`LocalTime`]
//! (seconds in the local timezone, the same representation the phone uses
//! for sunrise and sunset) and it derives the 12-hour [`ClockTime`] the
//! hands are drawn from.

/// Seconds per minute.
const SECS_PER_MINUTE: u32 = 60;

/// Seconds per day.
pub const SECS_PER_DAY: u32 = 24 * 60 * SECS_PER_MINUTE;

/// Local wall-clock time in seconds.
///
/// Only the time of day is used for display; the day count matters only for
/// ordering against sunrise and sunset, which are compared by time of day.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalTime(pub u32);

impl LocalTime {
    /// Build from a 24-hour time of day on day zero.
    pub const fn from_hms(
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Self {
        Self((hour % 24) * 3600 + (minute % 60) * SECS_PER_MINUTE + second % 60)
    }

    /// Seconds since local midnight.
    #[inline]
    pub const fn seconds_of_day(self) -> u32 { self.0 % SECS_PER_DAY }

    /// Hour of day, 0-23.
    #[inline]
    pub const fn hour(self) -> u8 { (self.seconds_of_day() / 3600) as u8 }

    /// Minute of hour, 0-59.
    #[inline]
    pub const fn minute(self) -> u8 { ((self.seconds_of_day() / SECS_PER_MINUTE) % 60) as u8 }

    /// Whole minutes since the epoch of this clock. Changes exactly once per minute.
    #[inline]
    pub const fn minute_index(self) -> u32 { self.0 / SECS_PER_MINUTE }

    /// Seconds until the next minute boundary (1-60).
    #[inline]
    pub const fn secs_to_next_minute(self) -> u32 { SECS_PER_MINUTE - self.0 % SECS_PER_MINUTE }

    /// Displayed clock time.
    #[inline]
    pub const fn clock(self) -> ClockTime { ClockTime::from_24h(self.hour(), self.minute()) }
}

/// Hours and minutes as drawn by the hands.
///
/// `hours` is 0-12: afternoon hours are folded down by 12, while noon stays
/// 12 and midnight stays 0. Both point straight up.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    pub hours: u8,
    pub minutes: u8,
}

impl ClockTime {
    /// Build from a 24-hour time. Out-of-range inputs are normalized modulo 24 and 60.
    pub const fn from_24h(
        hour: u8,
        minute: u8,
    ) -> Self {
        let hour = hour % 24;
        Self {
            hours: if hour > 12 { hour - 12 } else { hour },
            minutes: minute % 60,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
