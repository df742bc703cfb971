//! Outdoor temperature dial state, updated from phone messages.

use crate::log::EventLog;
use crate::widgets::Theme;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TemperatureDial {
    celsius: i32,
    theme: Theme,
}

impl TemperatureDial {
    pub const fn new() -> Self {
        Self {
            celsius: 0,
            theme: Theme::Day,
        }
    }

    #[inline]
    pub const fn celsius(&self) -> i32 { self.celsius }

    #[inline]
    pub const fn theme(&self) -> Theme { self.theme }

    /// Store a new reading and theme.
    pub fn update(
        &mut self,
        celsius: i32,
        theme: Theme,
        log: &mut EventLog,
    ) {
        self.celsius = celsius;
        self.theme = theme;
        log.info(format_args!("Temperature: {celsius}"));
    }

    /// Change only the theme. Returns whether it changed.
    pub fn set_theme(
        &mut self,
        theme: Theme,
    ) -> bool {
        let changed = self.theme != theme;
        self.theme = theme;
        changed
    }

    /// Initial value: the persisted reading if present, otherwise zero.
    pub fn restore(
        &mut self,
        stored: Option<i32>,
        log: &mut EventLog,
    ) {
        self.celsius = match stored {
            Some(celsius) => {
                log.info(format_args!("Restored temperature"));
                celsius
            },
            None => 0,
        };
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_logs_reading() {
        let mut log = EventLog::new();
        let mut dial = TemperatureDial::new();
        dial.update(-3, Theme::Night, &mut log);
        assert_eq!(dial.celsius(), -3);
        assert_eq!(dial.theme(), Theme::Night);
        assert_eq!(log.drain().next().unwrap().message.as_str(), "Temperature: -3");
    }

    #[test]
    fn test_restore_defaults_to_zero() {
        let mut log = EventLog::new();
        let mut dial = TemperatureDial::new();
        dial.restore(None, &mut log);
        assert_eq!(dial.celsius(), 0);
        assert!(log.is_empty());

        dial.restore(Some(27), &mut log);
        assert_eq!(dial.celsius(), 27);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_set_theme_reports_change() {
        let mut dial = TemperatureDial::new();
        assert!(!dial.set_theme(Theme::Day));
        assert!(dial.set_theme(Theme::Night));
        assert!(!dial.set_theme(Theme::Night));
    }
}
