//! Local wall-clock time on a board without a battery-backed RTC.
//!
//! Time is kept as an offset from boot uptime. The clock starts at
//! [`BOOT_TIME`] and is corrected whenever the phone sends its local time.

use watchface_common::LocalTime;
use watchface_common::clock_time::SECS_PER_DAY;

/// Displayed time after power-on, until the phone syncs.
pub const BOOT_TIME: LocalTime = LocalTime::from_hms(10, 10, 0);

/// Uptime-based local clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    /// Local seconds of day at uptime zero.
    origin: u32,
}

impl WallClock {
    pub const fn new() -> Self { Self::starting_at(BOOT_TIME) }

    pub const fn starting_at(time: LocalTime) -> Self {
        Self {
            origin: time.seconds_of_day(),
        }
    }

    /// Local time after `uptime_secs` seconds since boot.
    pub fn now(
        &self,
        uptime_secs: u64,
    ) -> LocalTime {
        let secs = (u64::from(self.origin) + uptime_secs) % u64::from(SECS_PER_DAY);
        LocalTime(secs as u32)
    }

    /// Set the clock so that `now(uptime_secs) == time`.
    ///
    /// Returns true if the displayed minute changed.
    pub fn sync(
        &mut self,
        time: LocalTime,
        uptime_secs: u64,
    ) -> bool {
        let before = self.now(uptime_secs).minute_index();
        let elapsed = (uptime_secs % u64::from(SECS_PER_DAY)) as u32;
        self.origin = (time.seconds_of_day() + SECS_PER_DAY - elapsed) % SECS_PER_DAY;
        self.now(uptime_secs).minute_index() != before
    }
}

impl Default for WallClock {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
