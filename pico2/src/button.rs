//! Button debounce handling for the Display Pack buttons.
//!
//! Provides time-based edge detection with debouncing to prevent
//! multiple triggers from contact bounce on physical buttons. Time is
//! passed in as milliseconds of uptime so the logic runs on the host.

/// Debounce duration in milliseconds.
pub const DEBOUNCE_MS: u64 = 50;

/// Button debounce state with time-based edge detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    was_pressed: bool,
    last_change_ms: Option<u64>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change_ms: None,
        }
    }

    /// Returns true only on the falling edge (button just pressed).
    ///
    /// Buttons are active-low, so `is_low()` means pressed. Level changes
    /// within [`DEBOUNCE_MS`] of the previous accepted change are ignored.
    pub fn just_pressed(
        &mut self,
        is_low: bool,
        now_ms: u64,
    ) -> bool {
        if is_low == self.was_pressed {
            return false;
        }

        if let Some(last) = self.last_change_ms
            && now_ms.saturating_sub(last) < DEBOUNCE_MS
        {
            return false;
        }

        self.was_pressed = is_low;
        self.last_change_ms = Some(now_ms);
        is_low
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_fires_once() {
        let mut button = ButtonState::new();
        assert!(button.just_pressed(true, 0));
        assert!(!button.just_pressed(true, 100));
        assert!(!button.just_pressed(true, 200));
    }

    #[test]
    fn test_release_does_not_fire() {
        let mut button = ButtonState::new();
        assert!(button.just_pressed(true, 0));
        assert!(!button.just_pressed(false, 100));
        assert!(button.just_pressed(true, 200));
    }

    #[test]
    fn test_bounce_is_ignored() {
        let mut button = ButtonState::new();
        assert!(button.just_pressed(true, 1_000));
        // Contact bounce: released and pressed again within the window
        assert!(!button.just_pressed(false, 1_010));
        assert!(!button.just_pressed(true, 1_020));
        // The state never changed, so a real release is still pending
        assert!(!button.just_pressed(false, 1_060));
        assert!(button.just_pressed(true, 1_200));
    }

    #[test]
    fn test_idle_button() {
        let mut button = ButtonState::default();
        assert!(!button.just_pressed(false, 0));
        assert!(!button.just_pressed(false, 10_000));
    }
}
