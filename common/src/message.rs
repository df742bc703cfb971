//! Inbound phone messages.
//!
//! The phone pushes a small key/value dictionary every few minutes:
//!
//! ```text
//! +-------+----------------------------------------------+-----+
//! | COUNT | TUPLE 0                                      | ... |
//! | u8    | key u32 LE | type u8 | length u16 LE | data  |     |
//! +-------+----------------------------------------------+-----+
//! ```
//!
//! Tuple types are 0 (byte array), 1 (C string), 2 (unsigned integer) and 3
//! (signed integer). Integers are 1, 2 or 4 bytes little-endian.
//!
//! [`decode_weather`] reads the keys the watchface understands into a
//! [`WeatherUpdate`]; unknown keys are skipped. [`DictionaryWriter`] builds
//! the same format for the simulated phone.

use core::fmt;

use crate::clock_time::LocalTime;
use crate::widgets::Theme;

/// Upper bound on tuples per message.
pub const MAX_TUPLES: u8 = 16;

/// Bytes before each tuple's data.
const TUPLE_HEADER: usize = 4 + 1 + 2;

// =============================================================================
// Keys and Types
// =============================================================================

/// Dictionary keys sent by the phone.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum MessageKey {
    /// Current outdoor temperature, degrees Celsius.
    Temperature = 0,
    /// Today's sunrise, local seconds.
    Sunrise = 1,
    /// Today's sunset, local seconds.
    Sunset = 2,
    /// Current local time, for hosts without a real-time clock.
    LocalTime = 3,
}

impl MessageKey {
    pub const fn from_u32(key: u32) -> Option<Self> {
        match key {
            0 => Some(Self::Temperature),
            1 => Some(Self::Sunrise),
            2 => Some(Self::Sunset),
            3 => Some(Self::LocalTime),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TupleType {
    ByteArray = 0,
    CString = 1,
    Uint = 2,
    Int = 3,
}

impl TupleType {
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::ByteArray),
            1 => Some(Self::CString),
            2 => Some(Self::Uint),
            3 => Some(Self::Int),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageError {
    /// No bytes at all.
    Empty,
    /// A tuple header or its data runs past the end of the message.
    Truncated,
    /// Unknown tuple type byte.
    InvalidType(u8),
    /// Integer tuple that is not 1, 2 or 4 bytes, or a known key with the wrong type.
    InvalidLength,
    /// More tuples than [`MAX_TUPLES`], or no room left in the writer.
    TooManyTuples,
}

impl fmt::Display for MessageError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty message"),
            Self::Truncated => f.write_str("truncated message"),
            Self::InvalidType(t) => write!(f, "invalid tuple type {t}"),
            Self::InvalidLength => f.write_str("invalid tuple length"),
            Self::TooManyTuples => f.write_str("too many tuples"),
        }
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// One dictionary entry borrowed from the message bytes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tuple<'a> {
    pub key: u32,
    pub kind: TupleType,
    pub data: &'a [u8],
}

impl Tuple<'_> {
    /// Integer value of an `Int` or `Uint` tuple.
    pub fn as_i64(&self) -> Result<i64, MessageError> {
        let d = self.data;
        match (self.kind, d.len()) {
            (TupleType::Int, 1) => Ok(i64::from(d[0] as i8)),
            (TupleType::Int, 2) => Ok(i64::from(i16::from_le_bytes([d[0], d[1]]))),
            (TupleType::Int, 4) => Ok(i64::from(i32::from_le_bytes([d[0], d[1], d[2], d[3]]))),
            (TupleType::Uint, 1) => Ok(i64::from(d[0])),
            (TupleType::Uint, 2) => Ok(i64::from(u16::from_le_bytes([d[0], d[1]]))),
            (TupleType::Uint, 4) => Ok(i64::from(u32::from_le_bytes([d[0], d[1], d[2], d[3]]))),
            _ => Err(MessageError::InvalidLength),
        }
    }
}

/// Iterator over the tuples of a message.
///
/// Yields an error at most once, then stops.
pub struct Tuples<'a> {
    bytes: &'a [u8],
    remaining: u8,
    failed: bool,
}

/// Start reading a message. Only the count byte is checked here.
pub fn tuples(bytes: &[u8]) -> Result<Tuples<'_>, MessageError> {
    let (&count, rest) = bytes.split_first().ok_or(MessageError::Empty)?;
    if count > MAX_TUPLES {
        return Err(MessageError::TooManyTuples);
    }
    Ok(Tuples {
        bytes: rest,
        remaining: count,
        failed: false,
    })
}

impl<'a> Tuples<'a> {
    fn next_tuple(&mut self) -> Result<Tuple<'a>, MessageError> {
        if self.bytes.len() < TUPLE_HEADER {
            return Err(MessageError::Truncated);
        }
        let b = self.bytes;
        let key = u32::from_le_bytes([b[0], b[1], b[2], b[3]]);
        let kind = TupleType::from_u8(b[4]).ok_or(MessageError::InvalidType(b[4]))?;
        let len = usize::from(u16::from_le_bytes([b[5], b[6]]));
        let end = TUPLE_HEADER + len;
        if b.len() < end {
            return Err(MessageError::Truncated);
        }
        self.bytes = &b[end..];
        Ok(Tuple {
            key,
            kind,
            data: &b[TUPLE_HEADER..end],
        })
    }
}

impl<'a> Iterator for Tuples<'a> {
    type Item = Result<Tuple<'a>, MessageError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.failed {
            return None;
        }
        self.remaining -= 1;
        let item = self.next_tuple();
        self.failed = item.is_err();
        Some(item)
    }
}

/// Values the watchface understands. Absent keys stay `None`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherUpdate {
    pub temperature: Option<i32>,
    pub sunrise: Option<LocalTime>,
    pub sunset: Option<LocalTime>,
    pub local_time: Option<LocalTime>,
}

impl WeatherUpdate {
    /// Theme for `now`, or `None` when sunrise or sunset is missing.
    pub fn theme_at(
        &self,
        now: LocalTime,
    ) -> Option<Theme> {
        Some(theme_for(now, self.sunrise?, self.sunset?))
    }
}

fn signed(tuple: &Tuple<'_>) -> Result<i32, MessageError> {
    let v = tuple.as_i64()?;
    i32::try_from(v).map_err(|_| MessageError::InvalidLength)
}

fn seconds(tuple: &Tuple<'_>) -> Result<LocalTime, MessageError> {
    let v = tuple.as_i64()?;
    u32::try_from(v).map(LocalTime).map_err(|_| MessageError::InvalidLength)
}

/// Decode a phone message. Unknown keys are ignored.
pub fn decode_weather(bytes: &[u8]) -> Result<WeatherUpdate, MessageError> {
    let mut update = WeatherUpdate::default();
    for tuple in tuples(bytes)? {
        let tuple = tuple?;
        match MessageKey::from_u32(tuple.key) {
            Some(MessageKey::Temperature) => update.temperature = Some(signed(&tuple)?),
            Some(MessageKey::Sunrise) => update.sunrise = Some(seconds(&tuple)?),
            Some(MessageKey::Sunset) => update.sunset = Some(seconds(&tuple)?),
            Some(MessageKey::LocalTime) => update.local_time = Some(seconds(&tuple)?),
            None => {},
        }
    }
    Ok(update)
}

/// Night before sunrise and from sunset on, compared by time of day.
pub const fn theme_for(
    now: LocalTime,
    sunrise: LocalTime,
    sunset: LocalTime,
) -> Theme {
    let t = now.seconds_of_day();
    if t < sunrise.seconds_of_day() || t >= sunset.seconds_of_day() {
        Theme::Night
    } else {
        Theme::Day
    }
}

// =============================================================================
// Encoding
// =============================================================================

/// Builds a dictionary in a caller-provided buffer.
pub struct DictionaryWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    count: u8,
}

impl<'a> DictionaryWriter<'a> {
    /// Start an empty dictionary. Fails if `buf` cannot hold the count byte.
    pub fn new(buf: &'a mut [u8]) -> Result<Self, MessageError> {
        let first = buf.first_mut().ok_or(MessageError::Truncated)?;
        *first = 0;
        Ok(Self { buf, len: 1, count: 0 })
    }

    /// Write a tuple header and return its `data_len` bytes of data space.
    fn reserve(
        &mut self,
        key: u32,
        kind: TupleType,
        data_len: usize,
    ) -> Result<&mut [u8], MessageError> {
        if self.count >= MAX_TUPLES {
            return Err(MessageError::TooManyTuples);
        }
        let len = u16::try_from(data_len).map_err(|_| MessageError::InvalidLength)?;
        let start = self.len;
        let end = start + TUPLE_HEADER + data_len;
        if end > self.buf.len() {
            return Err(MessageError::Truncated);
        }

        self.len = end;
        self.count += 1;
        self.buf[0] = self.count;

        let b = &mut self.buf[start..end];
        b[..4].copy_from_slice(&key.to_le_bytes());
        b[4] = kind as u8;
        b[5..7].copy_from_slice(&len.to_le_bytes());
        Ok(&mut b[TUPLE_HEADER..])
    }

    fn push(
        &mut self,
        key: u32,
        kind: TupleType,
        data: &[u8],
    ) -> Result<(), MessageError> {
        self.reserve(key, kind, data.len())?.copy_from_slice(data);
        Ok(())
    }

    pub fn int(
        &mut self,
        key: u32,
        value: i32,
    ) -> Result<(), MessageError> {
        self.push(key, TupleType::Int, &value.to_le_bytes())
    }

    pub fn uint(
        &mut self,
        key: u32,
        value: u32,
    ) -> Result<(), MessageError> {
        self.push(key, TupleType::Uint, &value.to_le_bytes())
    }

    /// C string tuple; a terminating NUL is appended.
    pub fn cstring(
        &mut self,
        key: u32,
        value: &str,
    ) -> Result<(), MessageError> {
        let bytes = value.as_bytes();
        let data = self.reserve(key, TupleType::CString, bytes.len() + 1)?;
        let (text, nul) = data.split_at_mut(bytes.len());
        text.copy_from_slice(bytes);
        nul[0] = 0;
        Ok(())
    }

    pub fn bytes(
        &mut self,
        key: u32,
        value: &[u8],
    ) -> Result<(), MessageError> {
        self.push(key, TupleType::ByteArray, value)
    }

    /// Write every present field of `update`.
    pub fn weather(
        &mut self,
        update: &WeatherUpdate,
    ) -> Result<(), MessageError> {
        if let Some(t) = update.temperature {
            self.int(MessageKey::Temperature as u32, t)?;
        }
        if let Some(t) = update.sunrise {
            self.uint(MessageKey::Sunrise as u32, t.0)?;
        }
        if let Some(t) = update.sunset {
            self.uint(MessageKey::Sunset as u32, t.0)?;
        }
        if let Some(t) = update.local_time {
            self.uint(MessageKey::LocalTime as u32, t.0)?;
        }
        Ok(())
    }

    /// Bytes written so far.
    pub fn finish(self) -> &'a [u8] { &self.buf[..self.len] }
}

// =============================================================================
// Unit Tests
// =============================================================================
