//! Frame pacing and wall-clock sampling for the simulator.
//!
//! These use `std::time` and `chrono`, which are not available in the
//! `no_std` common crate.

use std::time::Duration;

use chrono::{Local, Timelike};
use watchface_common::LocalTime;

/// Target frame time (~20 FPS). The main loop sleeps if the frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(50);

/// Current host wall-clock time of day.
pub fn local_now() -> LocalTime {
    let now = Local::now();
    LocalTime::from_hms(now.hour(), now.minute(), now.second())
}

/// Reports each wall-clock minute change once.
pub struct MinuteClock {
    last_minute: u32,
}

impl MinuteClock {
    pub const fn new(now: LocalTime) -> Self {
        Self {
            last_minute: now.minute_index(),
        }
    }

    /// Returns true when `now` is in a different minute than the last call.
    pub fn poll(
        &mut self,
        now: LocalTime,
    ) -> bool {
        let minute = now.minute_index();
        if minute == self.last_minute {
            return false;
        }
        self.last_minute = minute;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_clock_fires_once_per_minute() {
        let mut clock = MinuteClock::new(LocalTime::from_hms(9, 14, 58));
        assert!(!clock.poll(LocalTime::from_hms(9, 14, 59)));
        assert!(clock.poll(LocalTime::from_hms(9, 15, 0)));
        assert!(!clock.poll(LocalTime::from_hms(9, 15, 30)));
    }

    #[test]
    fn test_minute_clock_across_midnight() {
        let mut clock = MinuteClock::new(LocalTime::from_hms(23, 59, 59));
        assert!(clock.poll(LocalTime::from_hms(0, 0, 0)));
    }
}
