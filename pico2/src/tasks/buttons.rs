//! Button polling task.

use embassy_rp::gpio::Input;
use embassy_time::{Instant, Timer};
use watchface_pico2::button::ButtonState;

use super::{EVENTS, Event};

/// Poll interval, well below the debounce window.
const POLL_MS: u64 = 10;

/// Watches A and B (active-low) and forwards presses as events.
#[embassy_executor::task]
pub async fn button_task(
    btn_a: Input<'static>,
    btn_b: Input<'static>,
) {
    defmt::info!("Button task started");

    let mut a = ButtonState::new();
    let mut b = ButtonState::new();

    loop {
        let now_ms = Instant::now().as_millis();
        if a.just_pressed(btn_a.is_low(), now_ms) {
            EVENTS.send(Event::AddSteps).await;
        }
        if b.just_pressed(btn_b.is_low(), now_ms) {
            EVENTS.send(Event::ToggleStepAccess).await;
        }
        Timer::after_millis(POLL_MS).await;
    }
}
