//! The two persisted integers: today's steps and the last temperature.
//!
//! [`Storage`] is the synchronous view the watchface reads and writes on
//! load and unload. [`MemoryStorage`] implements it in RAM; hosts copy it
//! to their medium of choice (a postcard file in the simulator, a
//! sequential-storage map in flash on the Pico 2) using the dirty set.

use core::fmt;

use heapless::Vec;
use serde::{Deserialize, Serialize};

// =============================================================================
// Keys and Errors
// =============================================================================

/// Persisted values. The numeric ids are what lands on the medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Today's step count.
    Steps = 0,
    /// Last outdoor temperature, degrees Celsius.
    Temperature = 1,
}

impl StorageKey {
    pub const ALL: [Self; 2] = [Self::Steps, Self::Temperature];

    #[inline]
    pub const fn as_u8(self) -> u8 { self as u8 }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Steps),
            1 => Some(Self::Temperature),
            _ => None,
        }
    }

    const fn bit(self) -> u8 { 1 << self.as_u8() }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// No room for another key.
    Full,
    /// Serialization into the output buffer failed.
    Encode,
    /// Persisted bytes could not be read back.
    Decode,
    /// The underlying medium reported an error.
    Backend,
}

impl fmt::Display for StorageError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Full => f.write_str("storage full"),
            Self::Encode => f.write_str("failed to encode storage"),
            Self::Decode => f.write_str("failed to decode storage"),
            Self::Backend => f.write_str("storage backend error"),
        }
    }
}

/// Integer key/value persistence.
pub trait Storage {
    /// Stored value, or `None` if the key was never written.
    fn read_int(
        &self,
        key: StorageKey,
    ) -> Result<Option<i32>, StorageError>;

    fn write_int(
        &mut self,
        key: StorageKey,
        value: i32,
    ) -> Result<(), StorageError>;
}

// =============================================================================
// In-Memory Storage
// =============================================================================

/// Number of slots in [`MemoryStorage`].
pub const STORAGE_SLOTS: usize = StorageKey::ALL.len();

/// Encoded size upper bound: length prefix plus a 1-byte key and a varint i32 per slot.
pub const MAX_ENCODED_SIZE: usize = 1 + STORAGE_SLOTS * (1 + 5);

/// Wire form of [`MemoryStorage`]. Keys are raw ids so unknown ones can be dropped on load.
#[derive(Serialize, Deserialize, Default)]
struct Persisted {
    entries: Vec<(u8, i32), STORAGE_SLOTS>,
}

/// RAM-backed [`Storage`] that remembers which keys changed.
///
/// Writing the value a key already holds does not mark it dirty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemoryStorage {
    entries: Vec<(StorageKey, i32), STORAGE_SLOTS>,
    dirty: u8,
}

impl MemoryStorage {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            dirty: 0,
        }
    }

    /// Set a value without marking it dirty, e.g. when loading from the medium.
    pub fn preload(
        &mut self,
        key: StorageKey,
        value: i32,
    ) -> Result<(), StorageError> {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
            return Ok(());
        }
        self.entries.push((key, value)).map_err(|_| StorageError::Full)
    }

    /// Stored value, or `None` if the key was never written.
    pub fn get(
        &self,
        key: StorageKey,
    ) -> Option<i32> {
        self.entries.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
    }

    /// Keys changed since the last call, with their current values.
    pub fn take_dirty(&mut self) -> impl Iterator<Item = (StorageKey, i32)> + use<> {
        let dirty = core::mem::take(&mut self.dirty);
        let snapshot = self.entries.clone();
        snapshot.into_iter().filter(move |(k, _)| dirty & k.bit() != 0)
    }

    /// Flag `key` for the next [`MemoryStorage::take_dirty`] again, e.g. after
    /// its write to the medium failed. Keys without a value are left clean.
    pub fn mark_dirty(
        &mut self,
        key: StorageKey,
    ) {
        if self.get(key).is_some() {
            self.dirty |= key.bit();
        }
    }

    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty != 0 }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Encode with postcard into `buf`, returning the used prefix.
    pub fn to_bytes<'a>(
        &self,
        buf: &'a mut [u8],
    ) -> Result<&'a mut [u8], StorageError> {
        let mut persisted = Persisted::default();
        for &(key, value) in &self.entries {
            persisted.entries.push((key.as_u8(), value)).map_err(|_| StorageError::Full)?;
        }
        postcard::to_slice(&persisted, buf).map_err(|_| StorageError::Encode)
    }

    /// Decode bytes written by [`MemoryStorage::to_bytes`]. Unknown keys are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StorageError> {
        let persisted: Persisted = postcard::from_bytes(bytes).map_err(|_| StorageError::Decode)?;
        let mut storage = Self::new();
        for (id, value) in persisted.entries {
            if let Some(key) = StorageKey::from_u8(id) {
                storage.preload(key, value)?;
            }
        }
        Ok(storage)
    }
}

impl Storage for MemoryStorage {
    fn read_int(
        &self,
        key: StorageKey,
    ) -> Result<Option<i32>, StorageError> {
        Ok(self.get(key))
    }

    fn write_int(
        &mut self,
        key: StorageKey,
        value: i32,
    ) -> Result<(), StorageError> {
        if self.get(key) == Some(value) {
            return Ok(());
        }
        self.preload(key, value)?;
        self.dirty |= key.bit();
        Ok(())
    }
}

// Lets the firmware use StorageKey directly as a flash map key.
#[cfg(feature = "sequential-storage")]
impl sequential_storage::map::Key for StorageKey {
    fn serialize_into(
        &self,
        buffer: &mut [u8],
    ) -> Result<usize, sequential_storage::map::SerializationError> {
        let slot = buffer
            .first_mut()
            .ok_or(sequential_storage::map::SerializationError::BufferTooSmall)?;
        *slot = self.as_u8();
        Ok(1)
    }

    fn deserialize_from(buffer: &[u8]) -> Result<(Self, usize), sequential_storage::map::SerializationError> {
        let &id = buffer
            .first()
            .ok_or(sequential_storage::map::SerializationError::BufferTooSmall)?;
        match Self::from_u8(id) {
            Some(key) => Ok((key, 1)),
            None => Err(sequential_storage::map::SerializationError::InvalidFormat),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ids_are_stable() {
        assert_eq!(StorageKey::Steps.as_u8(), 0);
        assert_eq!(StorageKey::Temperature.as_u8(), 1);
        assert_eq!(StorageKey::from_u8(1), Some(StorageKey::Temperature));
        assert_eq!(StorageKey::from_u8(2), None);
    }

    #[test]
    fn test_read_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read_int(StorageKey::Steps), Ok(None));
    }

    #[test]
    fn test_write_overwrites_and_marks_dirty() {
        let mut storage = MemoryStorage::new();
        storage.write_int(StorageKey::Temperature, 12).unwrap();
        storage.write_int(StorageKey::Temperature, -4).unwrap();
        assert_eq!(storage.read_int(StorageKey::Temperature), Ok(Some(-4)));
        assert!(storage.is_dirty());

        let dirty: std::vec::Vec<_> = storage.take_dirty().collect();
        assert_eq!(dirty, [(StorageKey::Temperature, -4)]);
        assert!(!storage.is_dirty());
        assert_eq!(storage.take_dirty().count(), 0);
    }

    #[test]
    fn test_rewriting_same_value_stays_clean() {
        let mut storage = MemoryStorage::new();
        storage.write_int(StorageKey::Steps, 300).unwrap();
        assert_eq!(storage.take_dirty().count(), 1);
        storage.write_int(StorageKey::Steps, 300).unwrap();
        assert!(!storage.is_dirty());
    }

    #[test]
    fn test_failed_flush_is_retried() {
        let mut storage = MemoryStorage::new();
        storage.write_int(StorageKey::Temperature, 12).unwrap();
        storage.write_int(StorageKey::Steps, 40).unwrap();

        // The medium rejected both writes
        for (key, _) in storage.take_dirty() {
            storage.mark_dirty(key);
        }
        // Unchanged values are written again by the next unload
        storage.write_int(StorageKey::Temperature, 12).unwrap();
        storage.write_int(StorageKey::Steps, 40).unwrap();

        assert!(storage.is_dirty());
        let dirty: std::vec::Vec<_> = storage.take_dirty().collect();
        assert_eq!(dirty, [(StorageKey::Temperature, 12), (StorageKey::Steps, 40)]);
    }

    #[test]
    fn test_mark_dirty_without_value() {
        let mut storage = MemoryStorage::new();
        storage.mark_dirty(StorageKey::Steps);
        assert!(!storage.is_dirty());
    }

    #[test]
    fn test_preload_is_clean() {
        let mut storage = MemoryStorage::new();
        storage.preload(StorageKey::Steps, 800).unwrap();
        assert!(!storage.is_dirty());
        assert_eq!(storage.get(StorageKey::Steps), Some(800));
    }

    #[test]
    fn test_postcard_persistence() {
        let mut storage = MemoryStorage::new();
        storage.write_int(StorageKey::Steps, 12_345).unwrap();
        storage.write_int(StorageKey::Temperature, -8).unwrap();

        let mut buf = [0u8; MAX_ENCODED_SIZE];
        let bytes = storage.to_bytes(&mut buf).unwrap();
        let restored = MemoryStorage::from_bytes(bytes).unwrap();

        assert_eq!(restored.get(StorageKey::Steps), Some(12_345));
        assert_eq!(restored.get(StorageKey::Temperature), Some(-8));
        assert!(!restored.is_dirty());
    }

    #[test]
    fn test_unknown_persisted_keys_dropped() {
        // postcard: seq len 2, (7, 1), (1, zigzag(5) = 10)
        let restored = MemoryStorage::from_bytes(&[2, 7, 2, 1, 10]).unwrap();
        assert_eq!(restored.get(StorageKey::Temperature), Some(5));
        assert_eq!(restored.get(StorageKey::Steps), None);
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        assert_eq!(MemoryStorage::from_bytes(&[]), Err(StorageError::Decode));
        assert_eq!(MemoryStorage::from_bytes(&[9, 1, 1]), Err(StorageError::Decode));
    }

    #[test]
    fn test_encode_into_small_buffer() {
        let mut storage = MemoryStorage::new();
        storage.write_int(StorageKey::Steps, 1_000_000).unwrap();
        let mut buf = [0u8; 2];
        assert_eq!(storage.to_bytes(&mut buf).err(), Some(StorageError::Encode));
    }
}
