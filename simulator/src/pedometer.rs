//! Simulated step counter.

use watchface_common::{HealthSource, LocalTime};

/// Seconds of the day per simulated step (about 14 400 steps by midnight).
const SECS_PER_STEP: u32 = 6;

/// Steps added by the S key.
pub const STEP_BOOST: u32 = 500;

/// Steps follow the time of day plus manual boosts.
pub struct SimPedometer {
    now: LocalTime,
    bonus: u32,
    available: bool,
}

impl SimPedometer {
    pub const fn new(now: LocalTime) -> Self {
        Self {
            now,
            bonus: 0,
            available: true,
        }
    }

    /// Advance the clock the step count is derived from.
    pub fn set_time(
        &mut self,
        now: LocalTime,
    ) {
        self.now = now;
    }

    pub fn add_steps(
        &mut self,
        steps: u32,
    ) {
        self.bonus = self.bonus.saturating_add(steps);
    }

    /// Flip availability. Returns the new state.
    pub fn toggle_available(&mut self) -> bool {
        self.available = !self.available;
        self.available
    }
}

impl HealthSource for SimPedometer {
    fn steps_today(&mut self) -> Option<u32> {
        self.available
            .then(|| (self.now.seconds_of_day() / SECS_PER_STEP).saturating_add(self.bonus))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_grow_through_the_day() {
        let mut pedometer = SimPedometer::new(LocalTime::from_hms(0, 0, 0));
        assert_eq!(pedometer.steps_today(), Some(0));
        pedometer.set_time(LocalTime::from_hms(12, 0, 0));
        assert_eq!(pedometer.steps_today(), Some(7200));
    }

    #[test]
    fn test_boost_and_availability() {
        let mut pedometer = SimPedometer::new(LocalTime::from_hms(0, 1, 0));
        pedometer.add_steps(STEP_BOOST);
        assert_eq!(pedometer.steps_today(), Some(510));
        assert!(!pedometer.toggle_available());
        assert_eq!(pedometer.steps_today(), None);
        assert!(pedometer.toggle_available());
        assert_eq!(pedometer.steps_today(), Some(510));
    }
}
