//! Event log written by the watchface and drained by the platform logger.
//!
//! The common crate has no logging backend. Events are queued here and each
//! host forwards them after handling an event: the firmware to defmt, the
//! simulator to tracing.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.info(format_args!("Steps today: {}", 4200));
//!
//! for entry in log.drain() {
//!     defmt::info!("{}", entry.message.as_str());
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

// =============================================================================
// Event Log Configuration
// =============================================================================

/// Maximum number of entries kept between drains.
pub const LOG_ENTRIES: usize = 16;

/// Maximum characters per message.
pub const LOG_MSG_LEN: usize = 48;

// =============================================================================
// Log Entries
// =============================================================================

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
}

/// A single log entry.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Message, truncated to [`LOG_MSG_LEN`] characters.
    pub message: String<LOG_MSG_LEN>,
}

impl LogEntry {
    /// Format a new entry, truncating overlong messages.
    pub fn new(
        level: LogLevel,
        args: fmt::Arguments<'_>,
    ) -> Self {
        let mut writer = Truncating(String::new());
        writer.write_fmt(args).ok();
        Self {
            level,
            message: writer.0,
        }
    }
}

/// `fmt::Write` adapter that stops at capacity instead of failing.
struct Truncating(String<LOG_MSG_LEN>);

impl Write for Truncating {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Ring buffer of pending log entries.
///
/// When full the oldest entry is dropped and counted in [`EventLog::dropped`].
pub struct EventLog {
    entries: Deque<LogEntry, LOG_ENTRIES>,
    dropped: u32,
}

impl EventLog {
    pub const fn new() -> Self {
        Self {
            entries: Deque::new(),
            dropped: 0,
        }
    }

    /// Queue an entry. If the buffer is full, the oldest entry is dropped.
    pub fn push(
        &mut self,
        entry: LogEntry,
    ) {
        if self.entries.is_full() {
            self.entries.pop_front();
            self.dropped = self.dropped.saturating_add(1);
        }
        self.entries.push_back(entry).ok();
    }

    pub fn log(
        &mut self,
        level: LogLevel,
        args: fmt::Arguments<'_>,
    ) {
        self.push(LogEntry::new(level, args));
    }

    #[inline]
    pub fn debug(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        self.log(LogLevel::Debug, args);
    }

    #[inline]
    pub fn info(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        self.log(LogLevel::Info, args);
    }

    #[inline]
    pub fn warn(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        self.log(LogLevel::Warn, args);
    }

    #[inline]
    pub fn error(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        self.log(LogLevel::Error, args);
    }

    /// Remove and yield all pending entries, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = LogEntry> + '_ { core::iter::from_fn(move || self.entries.pop_front()) }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Entries lost to overflow since creation.
    #[inline]
    pub const fn dropped(&self) -> u32 { self.dropped }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
