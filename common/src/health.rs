//! Step-count progress dial state.
//!
//! Steps come from a [`HealthSource`] (the watch's pedometer, or a
//! simulated one). The dial shows progress toward [`STEP_GOAL`] as a
//! percentage, so one full turn of the hand is one goal. Progress past the
//! goal keeps going round.

use crate::config::{STEP_GOAL, STEP_REFRESH_MINUTES};
use crate::log::EventLog;

/// Provider of today's step count.
pub trait HealthSource {
    /// Steps since local midnight, or `None` when the metric is not accessible.
    fn steps_today(&mut self) -> Option<u32>;
}

/// Query the source, logging the outcome. Unavailable data counts as zero steps.
pub fn todays_steps<H>(
    source: &mut H,
    log: &mut EventLog,
) -> u32
where
    H: HealthSource + ?Sized,
{
    match source.steps_today() {
        Some(steps) => {
            log.info(format_args!("Steps today: {steps}"));
            steps
        },
        None => {
            log.error(format_args!("Step data unavailable"));
            0
        },
    }
}

/// Integer percent of the daily goal. Not capped at 100.
#[inline]
pub fn progress_percent(steps: u32) -> i32 {
    let percent = u64::from(steps) * 100 / u64::from(STEP_GOAL);
    i32::try_from(percent).unwrap_or(i32::MAX)
}

/// Current step count shown by the step dial.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct HealthDial {
    steps: u32,
}

impl HealthDial {
    pub const fn new() -> Self { Self { steps: 0 } }

    #[inline]
    pub const fn steps(&self) -> u32 { self.steps }

    /// Hand value for the dial.
    #[inline]
    pub fn progress_percent(&self) -> i32 { progress_percent(self.steps) }

    /// Value written to the steps storage key.
    #[inline]
    pub fn persisted(&self) -> i32 { i32::try_from(self.steps).unwrap_or(i32::MAX) }

    /// Re-read today's steps from the source.
    pub fn refresh<H>(
        &mut self,
        source: &mut H,
        log: &mut EventLog,
    ) where
        H: HealthSource + ?Sized,
    {
        self.steps = todays_steps(source, log);
    }

    /// Initial value: the persisted count if present, otherwise a fresh query.
    ///
    /// A negative persisted count is treated as zero.
    pub fn restore<H>(
        &mut self,
        stored: Option<i32>,
        source: &mut H,
        log: &mut EventLog,
    ) where
        H: HealthSource + ?Sized,
    {
        match stored {
            Some(steps) => {
                log.info(format_args!("Restored step count"));
                self.steps = u32::try_from(steps).unwrap_or(0);
            },
            None => self.refresh(source, log),
        }
    }

    /// Minute tick. Refreshes on every tenth minute and returns whether it did.
    pub fn on_minute<H>(
        &mut self,
        minute: u8,
        source: &mut H,
        log: &mut EventLog,
    ) -> bool
    where
        H: HealthSource + ?Sized,
    {
        if minute % STEP_REFRESH_MINUTES != 0 {
            return false;
        }
        self.refresh(source, log);
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::LogLevel;

    /// Source returning a fixed answer and counting queries.
    pub struct FixedSource {
        pub steps: Option<u32>,
        pub queries: u32,
    }

    impl HealthSource for FixedSource {
        fn steps_today(&mut self) -> Option<u32> {
            self.queries += 1;
            self.steps
        }
    }

    fn source(steps: Option<u32>) -> FixedSource { FixedSource { steps, queries: 0 } }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0), 0);
        assert_eq!(progress_percent(99), 0);
        assert_eq!(progress_percent(4_250), 42);
        assert_eq!(progress_percent(10_000), 100);
        assert_eq!(progress_percent(23_456), 234);
        assert_eq!(progress_percent(u32::MAX), 42_949_672);
    }

    #[test]
    fn test_todays_steps_available() {
        let mut log = EventLog::new();
        assert_eq!(todays_steps(&mut source(Some(4200)), &mut log), 4200);
        let entry = log.drain().next().unwrap();
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.message.as_str(), "Steps today: 4200");
    }

    #[test]
    fn test_todays_steps_unavailable() {
        let mut log = EventLog::new();
        assert_eq!(todays_steps(&mut source(None), &mut log), 0);
        assert_eq!(log.drain().next().unwrap().level, LogLevel::Error);
    }

    #[test]
    fn test_restore_prefers_persisted_value() {
        let mut log = EventLog::new();
        let mut src = source(Some(9000));
        let mut dial = HealthDial::new();
        dial.restore(Some(1234), &mut src, &mut log);
        assert_eq!(dial.steps(), 1234);
        assert_eq!(src.queries, 0);
        assert_eq!(log.drain().next().unwrap().message.as_str(), "Restored step count");
    }

    #[test]
    fn test_restore_without_persisted_value_queries() {
        let mut log = EventLog::new();
        let mut src = source(Some(9000));
        let mut dial = HealthDial::new();
        dial.restore(None, &mut src, &mut log);
        assert_eq!(dial.steps(), 9000);
        assert_eq!(src.queries, 1);
    }

    #[test]
    fn test_restore_negative_is_zero() {
        let mut log = EventLog::new();
        let mut dial = HealthDial::new();
        dial.restore(Some(-5), &mut source(None), &mut log);
        assert_eq!(dial.steps(), 0);
    }

    #[test]
    fn test_refresh_only_on_tenth_minutes() {
        let mut log = EventLog::new();
        let mut src = source(Some(500));
        let mut dial = HealthDial::new();

        assert!(!dial.on_minute(7, &mut src, &mut log));
        assert_eq!(dial.steps(), 0);
        assert!(dial.on_minute(0, &mut src, &mut log));
        assert!(dial.on_minute(50, &mut src, &mut log));
        assert_eq!(dial.steps(), 500);
        assert_eq!(src.queries, 2);
    }

    #[test]
    fn test_persisted_saturates() {
        let mut log = EventLog::new();
        let mut dial = HealthDial::new();
        dial.refresh(&mut source(Some(u32::MAX)), &mut log);
        assert_eq!(dial.persisted(), i32::MAX);
    }
}
