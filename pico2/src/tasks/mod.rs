//! Embassy tasks feeding events to the main watchface loop.

mod buttons;
mod phone_rx;

pub use buttons::button_task;
pub use phone_rx::phone_rx_task;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use watchface_common::link::Payload;

/// Something the main loop has to react to, besides the minute timer.
pub enum Event {
    /// A complete frame from the phone.
    Message(Payload),
    /// Button A: credit extra demo steps.
    AddSteps,
    /// Button B: toggle whether step data can be read.
    ToggleStepAccess,
}

/// Events for the main loop.
pub static EVENTS: Channel<CriticalSectionRawMutex, Event, 4> = Channel::new();
