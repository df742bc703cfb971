//! Demo step counter for a board without a motion sensor.
//!
//! Steps accumulate with the time of day at a steady walking pace that
//! reaches roughly the daily goal by midnight. Button presses add extra
//! steps, and the count starts over when the clock passes midnight.

use watchface_common::{HealthSource, LocalTime};

/// Steps credited per minute of the day.
pub const STEPS_PER_MINUTE: u32 = 7;

/// Steps added by one press of the step button.
pub const BUTTON_STEPS: u32 = 100;

#[derive(Debug, Clone, Copy)]
pub struct DemoPedometer {
    now: LocalTime,
    bonus: u32,
    available: bool,
}

impl DemoPedometer {
    pub const fn new(now: LocalTime) -> Self {
        Self {
            now,
            bonus: 0,
            available: true,
        }
    }

    /// Advance to `now`, dropping button steps if a new day started.
    pub fn set_time(
        &mut self,
        now: LocalTime,
    ) {
        if now.seconds_of_day() < self.now.seconds_of_day() {
            self.bonus = 0;
        }
        self.now = now;
    }

    pub fn add_button_steps(&mut self) { self.bonus = self.bonus.saturating_add(BUTTON_STEPS); }

    /// Flip whether the step metric can be read. Returns the new state.
    pub fn toggle_available(&mut self) -> bool {
        self.available = !self.available;
        self.available
    }
}

impl HealthSource for DemoPedometer {
    fn steps_today(&mut self) -> Option<u32> {
        if !self.available {
            return None;
        }
        let minutes = self.now.seconds_of_day() / 60;
        Some(minutes * STEPS_PER_MINUTE + self.bonus)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_follow_time_of_day() {
        let mut pedometer = DemoPedometer::new(LocalTime::from_hms(0, 0, 0));
        assert_eq!(pedometer.steps_today(), Some(0));
        pedometer.set_time(LocalTime::from_hms(10, 0, 0));
        assert_eq!(pedometer.steps_today(), Some(600 * STEPS_PER_MINUTE));
    }

    #[test]
    fn test_button_steps_accumulate() {
        let mut pedometer = DemoPedometer::new(LocalTime::from_hms(0, 1, 0));
        pedometer.add_button_steps();
        pedometer.add_button_steps();
        assert_eq!(pedometer.steps_today(), Some(STEPS_PER_MINUTE + 2 * BUTTON_STEPS));
    }

    #[test]
    fn test_midnight_resets_bonus() {
        let mut pedometer = DemoPedometer::new(LocalTime::from_hms(23, 59, 0));
        pedometer.add_button_steps();
        pedometer.set_time(LocalTime::from_hms(0, 0, 0));
        assert_eq!(pedometer.steps_today(), Some(0));
    }

    #[test]
    fn test_unavailable_metric() {
        let mut pedometer = DemoPedometer::new(LocalTime::from_hms(12, 0, 0));
        assert!(!pedometer.toggle_available());
        assert_eq!(pedometer.steps_today(), None);
        assert!(pedometer.toggle_available());
        assert!(pedometer.steps_today().is_some());
    }
}
