//! Common watchface logic shared between the simulator and the Pico 2 firmware.
//!
//! This crate contains platform-agnostic code:
//!
//! - [`trig`]: Fixed-point sine/cosine lookups and polar-to-screen conversion
//! - [`colors`]: RGB565 watchface palette
//! - [`config`]: Goals, scales, storage keys and refresh intervals
//! - [`layout`]: Face and sub-dial placement derived from display bounds
//! - [`clock_time`]: Wall-clock to displayed 12-hour time
//! - [`widgets`]: Radial dial renderer, clock face, step and temperature dials
//! - [`health`]: Step-count source and progress dial state
//! - [`temperature`]: Outdoor temperature dial state
//! - [`message`]: Inbound phone message (key/value dictionary) codec
//! - [`link`]: Serial framing for phone messages
//! - [`storage`]: The two persisted integers
//! - [`log`]: Event log ring buffer drained by each platform's logger
//! - [`render`]: Redraw tracking
//! - [`watchface`]: Application state and event handling
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests and allocates nothing. Time is
//! passed in by the caller as local seconds, so there is no dependency on a
//! platform clock.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod clock_time;
pub mod colors;
pub mod config;
pub mod health;
pub mod layout;
pub mod link;
pub mod log;
pub mod message;
pub mod render;
pub mod storage;
pub mod temperature;
pub mod trig;
pub mod watchface;
pub mod widgets;

// Re-export commonly used items
pub use clock_time::{ClockTime, LocalTime};
pub use health::HealthSource;
pub use layout::FaceLayout;
pub use storage::{MemoryStorage, Storage, StorageKey};
pub use watchface::Watchface;
pub use widgets::Theme;
