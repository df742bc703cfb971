//! Serial framing for phone messages.
//!
//! Hosts without a native message service receive dictionaries over a byte
//! stream (UART on the Pico 2, an in-process pipe in the simulator). Each
//! dictionary travels in one frame:
//!
//! ```text
//! +-------+-----------+-------------+----------+
//! | START | LENGTH    | PAYLOAD     | CHECKSUM |
//! | 0xAA  | u16 LE    | 0-128 bytes | 1B       |
//! +-------+-----------+-------------+----------+
//! ```
//!
//! The checksum is the XOR of both length bytes and every payload byte.

use core::fmt;

use heapless::Vec;

/// Frame synchronization byte.
pub const FRAME_START: u8 = 0xAA;

/// Maximum payload size in bytes.
pub const MAX_PAYLOAD_SIZE: usize = 128;

/// Maximum complete frame size (START + LENGTH + payload + CHECKSUM).
pub const MAX_FRAME_SIZE: usize = 1 + 2 + MAX_PAYLOAD_SIZE + 1;

/// One decoded frame payload.
pub type Payload = Vec<u8, MAX_PAYLOAD_SIZE>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Declared or supplied payload exceeds [`MAX_PAYLOAD_SIZE`].
    PayloadTooLarge,
    /// Checksum byte does not match the frame contents.
    InvalidChecksum,
    /// Output buffer cannot hold the encoded frame.
    BufferTooSmall,
}

impl fmt::Display for FrameError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::PayloadTooLarge => f.write_str("payload too large"),
            Self::InvalidChecksum => f.write_str("invalid checksum"),
            Self::BufferTooSmall => f.write_str("buffer too small"),
        }
    }
}

fn checksum(payload: &[u8]) -> u8 {
    let len = (payload.len() as u16).to_le_bytes();
    payload.iter().fold(len[0] ^ len[1], |acc, &b| acc ^ b)
}

/// Encode `payload` into `buf`, returning the number of bytes written.
pub fn encode_frame(
    payload: &[u8],
    buf: &mut [u8],
) -> Result<usize, FrameError> {
    if payload.len() > MAX_PAYLOAD_SIZE {
        return Err(FrameError::PayloadTooLarge);
    }
    let frame_len = payload.len() + 4;
    if buf.len() < frame_len {
        return Err(FrameError::BufferTooSmall);
    }

    buf[0] = FRAME_START;
    buf[1..3].copy_from_slice(&(payload.len() as u16).to_le_bytes());
    buf[3..3 + payload.len()].copy_from_slice(payload);
    buf[3 + payload.len()] = checksum(payload);
    Ok(frame_len)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    WaitingForStart,
    LengthLow,
    LengthHigh,
    ReadingPayload,
    WaitingForChecksum,
}

/// Byte-at-a-time frame decoder.
///
/// Bytes before a start marker are ignored. After an error the parser is
/// back to waiting for a start marker.
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    buffer: Payload,
    expected_length: u16,
}

impl FrameParser {
    pub const fn new() -> Self {
        Self {
            state: ParseState::WaitingForStart,
            buffer: Vec::new(),
            expected_length: 0,
        }
    }

    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForStart;
        self.buffer.clear();
        self.expected_length = 0;
    }

    /// Feed one byte. Returns the payload once a complete, valid frame arrived.
    pub fn feed(
        &mut self,
        byte: u8,
    ) -> Result<Option<Payload>, FrameError> {
        match self.state {
            ParseState::WaitingForStart => {
                if byte == FRAME_START {
                    self.buffer.clear();
                    self.state = ParseState::LengthLow;
                }
                Ok(None)
            },
            ParseState::LengthLow => {
                self.expected_length = u16::from(byte);
                self.state = ParseState::LengthHigh;
                Ok(None)
            },
            ParseState::LengthHigh => {
                self.expected_length |= u16::from(byte) << 8;
                if usize::from(self.expected_length) > MAX_PAYLOAD_SIZE {
                    self.reset();
                    return Err(FrameError::PayloadTooLarge);
                }
                self.state = if self.expected_length == 0 {
                    ParseState::WaitingForChecksum
                } else {
                    ParseState::ReadingPayload
                };
                Ok(None)
            },
            ParseState::ReadingPayload => {
                // Length was checked against capacity above.
                self.buffer.push(byte).ok();
                if self.buffer.len() == usize::from(self.expected_length) {
                    self.state = ParseState::WaitingForChecksum;
                }
                Ok(None)
            },
            ParseState::WaitingForChecksum => {
                let valid = byte == checksum(&self.buffer);
                let payload = core::mem::take(&mut self.buffer);
                self.reset();
                if valid { Ok(Some(payload)) } else { Err(FrameError::InvalidChecksum) }
            },
        }
    }
}

impl Default for FrameParser {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
